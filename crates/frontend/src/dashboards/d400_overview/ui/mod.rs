use crate::dashboards::d400_overview::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::today_iso;
use crate::shared::number_format::{format_brl, format_number_with_decimals};
use contracts::analytics::{BreakevenResponse, PerishableAlert};
use leptos::prelude::*;

/// Daily fixed cost used until the operator types their own.
const DEFAULT_FIXED_COST: f64 = 1200.0;

/// Alert horizon in hours for the perishables panel.
const ALERT_HORIZON_HOURS: u32 = 48;

fn expiry_label(hours: f64) -> String {
    if hours < 24.0 {
        format!("{:.0}h", hours)
    } else {
        format!("{:.0} dias", hours / 24.0)
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (breakeven, set_breakeven) = signal::<Option<BreakevenResponse>>(None);
    let (alerts, set_alerts) = signal::<Vec<PerishableAlert>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (date, set_date) = signal(today_iso());
    let (fixed_cost, set_fixed_cost) = signal(DEFAULT_FIXED_COST);

    let fetch = move |_| {
        let d = date.get_untracked();
        let cost = fixed_cost.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_breakeven(&d, cost).await {
                Ok(b) => {
                    set_breakeven.set(Some(b));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load breakeven: {}", e);
                    set_error.set(Some(e));
                }
            }
            match api::get_perishable_alerts(ALERT_HORIZON_HOURS).await {
                Ok(a) => set_alerts.set(a),
                Err(e) => log::error!("failed to load perishable alerts: {}", e),
            }
        });
    };

    fetch(());

    let revenue_text = Signal::derive(move || {
        breakeven
            .get()
            .map(|b| format_brl(b.current_revenue))
            .unwrap_or_else(|| "—".to_string())
    });
    let target_text = Signal::derive(move || {
        breakeven
            .get()
            .map(|b| format_brl(b.breakeven_point))
            .unwrap_or_else(|| "—".to_string())
    });
    let remaining_text = Signal::derive(move || {
        breakeven
            .get()
            .map(|b| format_brl(b.remaining()))
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Visão Geral"}</h1>
                    <p class="header__subtitle">{"Ponto de equilíbrio do dia e alertas de perecíveis"}</p>
                </div>
                <div class="header__actions">
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        step="50"
                        min="0"
                        title="Custo fixo diário (R$)"
                        prop:value=move || fixed_cost.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_fixed_cost.set(v);
                            }
                        }
                    />
                    <button class="button button--secondary" on:click=move |_| fetch(())>
                        {"Atualizar"}
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
            }}

            <div class="stat-grid">
                <StatCard title="Faturamento do dia" value=revenue_text />
                <StatCard title="Ponto de equilíbrio" value=target_text />
                <StatCard title="Falta para o equilíbrio" value=remaining_text variant="warning".to_string() />
            </div>

            {move || {
                breakeven
                    .get()
                    .map(|b| {
                        let pct = b.attained_pct();
                        let width = pct.min(100.0);
                        let reached = pct >= 100.0;
                        view! {
                            <div class="breakeven">
                                <div class="breakeven__header">
                                    <span>{"Progresso do ponto de equilíbrio"}</span>
                                    <span class="breakeven__pct">
                                        {format!("{}%", format_number_with_decimals(pct, 1))}
                                    </span>
                                </div>
                                <div class="progress">
                                    <div
                                        class="progress__fill"
                                        class:progress__fill--reached=reached
                                        style=format!("width: {:.1}%", width)
                                    ></div>
                                </div>
                                <p class="breakeven__note">
                                    {if reached {
                                        "Ponto de equilíbrio atingido".to_string()
                                    } else {
                                        format!("Faltam {} para cobrir os custos fixos", format_brl(b.remaining()))
                                    }}
                                </p>
                            </div>
                        }
                    })
            }}

            <div class="panel">
                <h2 class="panel__title">
                    {format!("Perecíveis em risco (próximas {}h)", ALERT_HORIZON_HOURS)}
                </h2>
                {move || {
                    let list = alerts.get();
                    if list.is_empty() {
                        view! {
                            <p class="panel__empty">{"Nenhum insumo perecível em risco."}</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <ul class="alert-list">
                                {list
                                    .into_iter()
                                    .map(|a| {
                                        let at_risk = (a.stock - a.forecast_use).max(0.0);
                                        view! {
                                            <li class="alert-list__item">
                                                <span class="alert-list__name">
                                                    {a.ingredient_name.clone()}
                                                </span>
                                                <span class="alert-list__detail">
                                                    {format!(
                                                        "{} {} em estoque, consumo previsto {} {}, vence em {}",
                                                        format_number_with_decimals(a.stock, 1),
                                                        a.unit,
                                                        format_number_with_decimals(a.forecast_use, 1),
                                                        a.unit,
                                                        expiry_label(a.hours_to_expiry),
                                                    )}
                                                </span>
                                                <span class="badge badge--danger">
                                                    {format!(
                                                        "{} {} em risco",
                                                        format_number_with_decimals(at_risk, 1),
                                                        a.unit,
                                                    )}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_label_switches_to_days() {
        assert_eq!(expiry_label(10.0), "10h");
        assert_eq!(expiry_label(48.0), "2 dias");
    }
}

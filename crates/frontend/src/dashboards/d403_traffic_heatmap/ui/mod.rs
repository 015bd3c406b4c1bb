use crate::dashboards::d403_traffic_heatmap::api;
use crate::shared::date_utils::{days_ago_iso, today_iso};
use crate::shared::number_format::format_brl;
use contracts::analytics::TrafficFlowEntry;
use leptos::prelude::*;

const WEEKDAYS: &[&str] = &["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Pivot the flat weekday × hour entries into a 7×24 revenue grid.
/// Entries with an unparsable weekday or hour are skipped.
fn grid_from_entries(entries: &[TrafficFlowEntry]) -> [[f64; 24]; 7] {
    let mut grid = [[0.0; 24]; 7];
    for e in entries {
        let weekday = e.weekday.trim().parse::<usize>();
        let hour = e.hour.trim().parse::<usize>();
        if let (Ok(w), Ok(h)) = (weekday, hour) {
            if w < 7 && h < 24 {
                grid[w][h] += e.revenue;
            }
        }
    }
    grid
}

/// Cell background on a white-to-red ramp by share of the peak cell.
fn heat_style(revenue: f64, max: f64) -> String {
    if revenue <= 0.0 || max <= 0.0 {
        return "background: #f3f4f6".to_string();
    }
    let intensity = (revenue / max).clamp(0.0, 1.0);
    format!("background: rgba(220, 38, 38, {:.2})", 0.15 + 0.85 * intensity)
}

fn peak_cell(grid: &[[f64; 24]; 7]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (w, row) in grid.iter().enumerate() {
        for (h, &v) in row.iter().enumerate() {
            if v > 0.0 && best.map_or(true, |(_, _, b)| v > b) {
                best = Some((w, h, v));
            }
        }
    }
    best
}

#[component]
pub fn TrafficFlowHeatmap() -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<TrafficFlowEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (start, set_start) = signal(days_ago_iso(30));
    let (end, set_end) = signal(today_iso());

    let fetch = move |_| {
        let s = start.get_untracked();
        let e = end.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_traffic_flow(&s, &e).await {
                Ok(list) => {
                    set_entries.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load traffic flow: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    fetch(());

    view! {
        <div class="panel traffic-heatmap">
            <div class="panel__header">
                <h2 class="panel__title">{"Fluxo de Movimento (dia × hora)"}</h2>
                <div class="panel__actions">
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| set_start.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| set_end.set(event_target_value(&ev))
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

            {move || {
                let list = entries.get();
                if list.is_empty() {
                    return view! {
                        <p class="panel__empty">{"Nenhuma venda no período selecionado."}</p>
                    }
                        .into_any();
                }

                let grid = grid_from_entries(&list);
                let max = grid
                    .iter()
                    .flat_map(|row| row.iter().copied())
                    .fold(0.0, f64::max);
                let total: f64 = grid.iter().flat_map(|row| row.iter()).sum();

                let header = (0..24)
                    .map(|h| {
                        view! { <th class="heatmap__hour">{format!("{:02}", h)}</th> }
                    })
                    .collect_view();

                let body = grid
                    .iter()
                    .enumerate()
                    .map(|(w, row)| {
                        let cells = row
                            .iter()
                            .enumerate()
                            .map(|(h, &revenue)| {
                                view! {
                                    <td
                                        class="heatmap__cell"
                                        style=heat_style(revenue, max)
                                        title=format!(
                                            "{} {:02}h: {}",
                                            WEEKDAYS[w],
                                            h,
                                            format_brl(revenue),
                                        )
                                    ></td>
                                }
                            })
                            .collect_view();
                        view! {
                            <tr>
                                <th class="heatmap__weekday">{WEEKDAYS[w]}</th>
                                {cells}
                            </tr>
                        }
                    })
                    .collect_view();

                let summary = peak_cell(&grid).map(|(w, h, v)| {
                    view! {
                        <p class="heatmap__summary">
                            {format!(
                                "Faturamento total: {}. Pico: {} às {:02}h ({}).",
                                format_brl(total),
                                WEEKDAYS[w],
                                h,
                                format_brl(v),
                            )}
                        </p>
                    }
                });

                view! {
                    <div class="heatmap">
                        <table class="heatmap__table">
                            <thead>
                                <tr>
                                    <th></th>
                                    {header}
                                </tr>
                            </thead>
                            <tbody>{body}</tbody>
                        </table>
                        {summary}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(weekday: &str, hour: &str, revenue: f64) -> TrafficFlowEntry {
        TrafficFlowEntry {
            weekday: weekday.into(),
            hour: hour.into(),
            revenue,
        }
    }

    #[test]
    fn test_grid_accumulates_same_cell() {
        let grid = grid_from_entries(&[entry("5", "20", 100.0), entry("5", "20", 50.0)]);
        assert_eq!(grid[5][20], 150.0);
        assert_eq!(grid[0][0], 0.0);
    }

    #[test]
    fn test_grid_skips_malformed_entries() {
        let grid = grid_from_entries(&[entry("segunda", "20", 100.0), entry("2", "25", 80.0)]);
        assert!(grid.iter().flat_map(|r| r.iter()).all(|&v| v == 0.0));
    }

    #[test]
    fn test_peak_cell_ignores_empty_grid() {
        let grid = [[0.0; 24]; 7];
        assert_eq!(peak_cell(&grid), None);
    }

    #[test]
    fn test_peak_cell_finds_the_busiest_slot() {
        let grid = grid_from_entries(&[entry("6", "21", 900.0), entry("2", "12", 300.0)]);
        assert_eq!(peak_cell(&grid), Some((6, 21, 900.0)));
    }
}

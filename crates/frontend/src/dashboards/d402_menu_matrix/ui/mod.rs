use crate::dashboards::d402_menu_matrix::api;
use crate::shared::date_utils::{days_ago_iso, today_iso};
use crate::shared::number_format::format_brl;
use contracts::analytics::{MenuMatrixCategoriesResponse, MenuMatrixResponse};
use leptos::prelude::*;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 420.0;
const CHART_PAD: f64 = 50.0;

/// Quadrants 1..=4: star, workhorse, puzzle, dog.
const CATEGORY_COLORS: &[&str] = &["#16a34a", "#2563eb", "#d97706", "#dc2626"];

fn category_color(category: u8) -> &'static str {
    let index = category.clamp(1, 4) as usize - 1;
    CATEGORY_COLORS[index]
}

/// Scale a value into pixel space, with a small margin so points on the
/// axis maximum are not clipped.
fn scale(value: f64, max: f64, span: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    span * (value / (max * 1.1))
}

#[component]
pub fn MenuMatrixDashboard() -> impl IntoView {
    let (matrix, set_matrix) = signal::<Option<MenuMatrixResponse>>(None);
    let (categories, set_categories) = signal::<Option<MenuMatrixCategoriesResponse>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (start, set_start) = signal(days_ago_iso(30));
    let (end, set_end) = signal(today_iso());

    let fetch = move |_| {
        let s = start.get_untracked();
        let e = end.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_menu_matrix(&s, &e).await {
                Ok(m) => {
                    set_matrix.set(Some(m));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load menu matrix: {}", e);
                    set_error.set(Some(e));
                }
            }
            match api::get_matrix_categories(&s, &e).await {
                Ok(c) => set_categories.set(Some(c)),
                Err(e) => log::error!("failed to load matrix categories: {}", e),
            }
        });
    };

    fetch(());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Engenharia de Cardápio"}</h1>
                    <p class="header__subtitle">{"Popularidade × rentabilidade por prato"}</p>
                </div>
                <div class="header__actions">
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
                let Some(m) = matrix.get() else {
                    return view! { <p class="panel__empty">{"Carregando matriz..."}</p> }
                        .into_any();
                };
                if m.items.is_empty() {
                    return view! {
                        <p class="panel__empty">{"Nenhuma venda no período selecionado."}</p>
                    }
                        .into_any();
                }

                let x_span = CHART_WIDTH - 2.0 * CHART_PAD;
                let y_span = CHART_HEIGHT - 2.0 * CHART_PAD;
                let max_qty = m.items.iter().map(|i| i.qty).fold(0.0, f64::max);
                let max_profit = m
                    .items
                    .iter()
                    .map(|i| i.profit_per_dish)
                    .fold(0.0, f64::max);

                let threshold_x = CHART_PAD + scale(m.thresholds.popularity_qty, max_qty, x_span);
                let threshold_y = CHART_HEIGHT - CHART_PAD
                    - scale(m.thresholds.profitability_per_dish, max_profit, y_span);

                let points = m
                    .items
                    .iter()
                    .map(|item| {
                        let cx = CHART_PAD + scale(item.qty, max_qty, x_span);
                        let cy = CHART_HEIGHT - CHART_PAD
                            - scale(item.profit_per_dish, max_profit, y_span);
                        view! {
                            <g>
                                <circle
                                    cx=format!("{:.1}", cx)
                                    cy=format!("{:.1}", cy)
                                    r="6"
                                    fill=category_color(item.category)
                                    opacity="0.8"
                                >
                                    <title>
                                        {format!(
                                            "{}: {:.0} vendas, {} de lucro por prato",
                                            item.name,
                                            item.qty,
                                            format_brl(item.profit_per_dish),
                                        )}
                                    </title>
                                </circle>
                                <text
                                    x=format!("{:.1}", cx + 9.0)
                                    y=format!("{:.1}", cy + 4.0)
                                    class="chart__label"
                                >
                                    {item.name.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="panel">
                        <svg
                            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                            class="chart__svg"
                        >
                            <line
                                x1=format!("{}", CHART_PAD)
                                y1=format!("{}", CHART_HEIGHT - CHART_PAD)
                                x2=format!("{}", CHART_WIDTH - CHART_PAD)
                                y2=format!("{}", CHART_HEIGHT - CHART_PAD)
                                stroke="#d1d5db"
                            />
                            <line
                                x1=format!("{}", CHART_PAD)
                                y1=format!("{}", CHART_PAD)
                                x2=format!("{}", CHART_PAD)
                                y2=format!("{}", CHART_HEIGHT - CHART_PAD)
                                stroke="#d1d5db"
                            />
                            // Quadrant thresholds as classified by the server.
                            <line
                                x1=format!("{:.1}", threshold_x)
                                y1=format!("{}", CHART_PAD)
                                x2=format!("{:.1}", threshold_x)
                                y2=format!("{}", CHART_HEIGHT - CHART_PAD)
                                stroke="#9ca3af"
                                stroke-dasharray="4 4"
                            />
                            <line
                                x1=format!("{}", CHART_PAD)
                                y1=format!("{:.1}", threshold_y)
                                x2=format!("{}", CHART_WIDTH - CHART_PAD)
                                y2=format!("{:.1}", threshold_y)
                                stroke="#9ca3af"
                                stroke-dasharray="4 4"
                            />
                            {points}
                            <text
                                x=format!("{}", CHART_WIDTH / 2.0)
                                y=format!("{}", CHART_HEIGHT - 8.0)
                                text-anchor="middle"
                                class="chart__axis-label"
                            >
                                {"Popularidade (unidades vendidas)"}
                            </text>
                            <text
                                x="14"
                                y=format!("{}", CHART_HEIGHT / 2.0)
                                text-anchor="middle"
                                class="chart__axis-label"
                                transform=format!("rotate(-90 14 {})", CHART_HEIGHT / 2.0)
                            >
                                {"Lucro por prato (R$)"}
                            </text>
                        </svg>
                    </div>
                }
                    .into_any()
            }}

            {move || {
                categories
                    .get()
                    .map(|resp| {
                        view! {
                            <div class="category-grid">
                                {resp
                                    .categories
                                    .into_iter()
                                    .map(|(key, cat)| {
                                        let color = key
                                            .parse::<u8>()
                                            .map(category_color)
                                            .unwrap_or("#6b7280");
                                        let dishes = if cat.items.is_empty() {
                                            view! {
                                                <p class="category-card__empty">
                                                    {"Nenhum prato nesta categoria no período."}
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <ul class="category-card__dishes">
                                                    {cat
                                                        .items
                                                        .into_iter()
                                                        .map(|dish| {
                                                            view! {
                                                                <li class="category-card__dish">
                                                                    <span class="category-card__dish-name">
                                                                        {dish.name}
                                                                    </span>
                                                                    <span class="category-card__dish-stats">
                                                                        {format!(
                                                                            "{:.0} vendas · {} por prato",
                                                                            dish.qty,
                                                                            format_brl(dish.profit_per_dish),
                                                                        )}
                                                                    </span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            }
                                                .into_any()
                                        };
                                        view! {
                                            <div class="category-card">
                                                <span
                                                    class="legend__swatch"
                                                    style=format!("background: {}", color)
                                                ></span>
                                                <div class="category-card__body">
                                                    <h3 class="category-card__name">{cat.name}</h3>
                                                    <p class="category-card__description">
                                                        {cat.description}
                                                    </p>
                                                    {dishes}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_clamps_out_of_range() {
        assert_eq!(category_color(1), CATEGORY_COLORS[0]);
        assert_eq!(category_color(4), CATEGORY_COLORS[3]);
        assert_eq!(category_color(0), CATEGORY_COLORS[0]);
        assert_eq!(category_color(9), CATEGORY_COLORS[3]);
    }

    #[test]
    fn test_scale_handles_zero_max() {
        assert_eq!(scale(5.0, 0.0, 100.0), 0.0);
    }
}

use crate::dashboards::d401_price_trends::api;
use crate::domain::a001_ingredient::api as ingredient_api;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_brl;
use contracts::analytics::{resolve_price_series, PriceSeriesTable};
use contracts::domain::a001_ingredient::Ingredient;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 300.0;
const CHART_PAD: f64 = 40.0;

const SUPPLIER_COLORS: &[&str] = &[
    "#2563eb", "#dc2626", "#16a34a", "#d97706", "#9333ea", "#0891b2",
];

fn supplier_color(col: usize) -> &'static str {
    SUPPLIER_COLORS[col % SUPPLIER_COLORS.len()]
}

/// Plottable cells of one supplier column. A `None` cell contributes
/// no marker (a visual gap), but the line still connects the non-null
/// neighbours on either side of it.
fn series_points(table: &PriceSeriesTable, col: usize) -> Vec<(usize, f64)> {
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.values[col].map(|v| (i, v)))
        .collect()
}

/// Y-axis bounds over every plotted value, padded so a flat series does
/// not collapse onto one pixel row.
fn value_bounds(table: &PriceSeriesTable) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in &table.rows {
        for v in row.values.iter().flatten() {
            min = min.min(*v);
            max = max.max(*v);
        }
    }
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn x_pos(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * CHART_PAD;
    if count <= 1 {
        CHART_PAD + span / 2.0
    } else {
        CHART_PAD + span * index as f64 / (count - 1) as f64
    }
}

fn y_pos(value: f64, min: f64, max: f64) -> f64 {
    let span = CHART_HEIGHT - 2.0 * CHART_PAD;
    CHART_HEIGHT - CHART_PAD - span * (value - min) / (max - min)
}

#[component]
pub fn PriceTrendsChart() -> impl IntoView {
    let (ingredients, set_ingredients) = signal::<Vec<Ingredient>>(Vec::new());
    let (selected, set_selected) = signal::<Option<i64>>(None);
    let (table, set_table) = signal::<Option<PriceSeriesTable>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match ingredient_api::list(1).await {
            Ok(p) => set_ingredients.set(p.data),
            Err(e) => log::error!("failed to load ingredient options: {}", e),
        }
    });

    let load = move |ingredient_id: i64| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_price_trends(ingredient_id).await {
                Ok(points) => match resolve_price_series(&points) {
                    Ok(t) => {
                        set_table.set(Some(t));
                        set_error.set(None);
                    }
                    Err(e) => {
                        set_table.set(None);
                        set_error.set(Some(e.to_string()));
                    }
                },
                Err(e) => {
                    log::error!("failed to load price trends: {}", e);
                    set_table.set(None);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="panel price-trends">
            <div class="panel__header">
                <h2 class="panel__title">{"Evolução de Preços por Fornecedor"}</h2>
                <select on:change=move |ev| {
                    match event_target_value(&ev).parse::<i64>() {
                        Ok(id) => {
                            set_selected.set(Some(id));
                            load(id);
                        }
                        Err(_) => {
                            set_selected.set(None);
                            set_table.set(None);
                            set_error.set(None);
                        }
                    }
                }>
                    <option value="">{"-- Selecione um ingrediente --"}</option>
                    {move || {
                        ingredients
                            .get()
                            .into_iter()
                            .map(|i| {
                                view! { <option value=i.id.to_string()>{i.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
            }}

            {move || {
                let Some(t) = table.get() else {
                    return view! {
                        <p class="panel__empty">
                            {if selected.get().is_some() {
                                "Sem dados de preço para este ingrediente."
                            } else {
                                "Selecione um ingrediente para ver a evolução de preços."
                            }}
                        </p>
                    }
                        .into_any();
                };
                if t.rows.is_empty() {
                    return view! {
                        <p class="panel__empty">{"Sem dados de preço para este ingrediente."}</p>
                    }
                        .into_any();
                }

                let (min, max) = value_bounds(&t);
                let count = t.rows.len();

                let lines = (0..t.suppliers.len())
                    .map(|col| (col, series_points(&t, col)))
                    .filter(|(_, series)| !series.is_empty())
                    .map(|(col, series)| {
                        let points = series
                            .iter()
                            .map(|(i, v)| format!("{:.1},{:.1}", x_pos(*i, count), y_pos(*v, min, max)))
                            .collect::<Vec<_>>()
                            .join(" ");
                        let dots = series
                            .iter()
                            .map(|(i, v)| {
                                view! {
                                    <circle
                                        cx=format!("{:.1}", x_pos(*i, count))
                                        cy=format!("{:.1}", y_pos(*v, min, max))
                                        r="3"
                                        fill=supplier_color(col)
                                    />
                                }
                            })
                            .collect_view();
                        view! {
                            <g>
                                <polyline
                                    points=points
                                    fill="none"
                                    stroke=supplier_color(col)
                                    stroke-width="2"
                                />
                                {dots}
                            </g>
                        }
                    })
                    .collect_view();

                let x_labels = t
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        view! {
                            <text
                                x=format!("{:.1}", x_pos(i, count))
                                y=format!("{:.1}", CHART_HEIGHT - CHART_PAD / 3.0)
                                text-anchor="middle"
                                class="chart__label"
                            >
                                {format_date(&row.date.format("%Y-%m-%d").to_string())}
                            </text>
                        }
                    })
                    .collect_view();

                let legend = t
                    .suppliers
                    .iter()
                    .enumerate()
                    .map(|(col, name)| {
                        view! {
                            <span class="legend__item">
                                <span
                                    class="legend__swatch"
                                    style=format!("background: {}", supplier_color(col))
                                ></span>
                                {name.clone()}
                            </span>
                        }
                    })
                    .collect_view();

                let suppliers = t.suppliers.clone();
                let rows = t.rows.clone();

                view! {
                    <div class="chart">
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
                            {lines}
                            {x_labels}
                        </svg>
                        <div class="legend">{legend}</div>

                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Data"}</th>
                                    {suppliers
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <th class="table__header-cell">{s.clone()}</th>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    {format_date(&row.date.format("%Y-%m-%d").to_string())}
                                                </td>
                                                {row
                                                    .values
                                                    .into_iter()
                                                    .map(|v| {
                                                        view! {
                                                            <td class="table__cell">
                                                                {v
                                                                    .map(format_brl)
                                                                    .unwrap_or_else(|| "—".to_string())}
                                                            </td>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
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
    use contracts::analytics::PriceSeriesRow;
    use chrono::NaiveDate;

    fn table(values: Vec<Vec<Option<f64>>>) -> PriceSeriesTable {
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(i, values)| PriceSeriesRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                values,
            })
            .collect();
        PriceSeriesTable {
            suppliers: vec!["A".into()],
            rows,
        }
    }

    #[test]
    fn test_gap_cell_drops_its_marker_but_keeps_neighbours() {
        let t = table(vec![vec![Some(1.0)], vec![None], vec![Some(3.0)], vec![Some(4.0)]]);
        // The null row contributes no point; the line still runs from
        // index 0 straight to index 2.
        assert_eq!(series_points(&t, 0), vec![(0, 1.0), (2, 3.0), (3, 4.0)]);
    }

    #[test]
    fn test_all_gaps_yield_no_points() {
        let t = table(vec![vec![None], vec![None]]);
        assert!(series_points(&t, 0).is_empty());
    }

    #[test]
    fn test_flat_series_gets_padded_bounds() {
        let t = table(vec![vec![Some(5.0)], vec![Some(5.0)]]);
        assert_eq!(value_bounds(&t), (4.0, 6.0));
    }

    #[test]
    fn test_empty_table_gets_default_bounds() {
        let t = table(vec![vec![None]]);
        assert_eq!(value_bounds(&t), (0.0, 1.0));
    }
}

use crate::dashboards::d401_price_trends::ui::PriceTrendsChart;
use crate::dashboards::d403_traffic_heatmap::ui::TrafficFlowHeatmap;
use leptos::prelude::*;

/// Analytical reports: price evolution per supplier and the weekly
/// traffic heatmap, stacked on one page.
#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Relatórios"}</h1>
                    <p class="header__subtitle">{"Evolução de preços e fluxo de movimento"}</p>
                </div>
            </div>

            <PriceTrendsChart />
            <TrafficFlowHeatmap />
        </div>
    }
}

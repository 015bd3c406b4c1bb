use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d402_menu_matrix::ui::MenuMatrixDashboard;
use crate::dashboards::reports::ReportsPage;
use crate::domain::a001_ingredient::ui::list::IngredientList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_ingredient_price::ui::list::IngredientPriceList;
use crate::domain::a004_tech_sheet::ui::list::TechSheetList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Página não encontrada"</p> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/insumos") view=IngredientList />
                    <Route path=path!("/fornecedores") view=SupplierList />
                    <Route path=path!("/precos-ingredientes") view=IngredientPriceList />
                    <Route path=path!("/fichas-tecnicas") view=TechSheetList />
                    <Route path=path!("/engenharia-cardapio") view=MenuMatrixDashboard />
                    <Route path=path!("/relatorios") view=ReportsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

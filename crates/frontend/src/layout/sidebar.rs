use leptos::prelude::*;
use leptos_router::components::A;

struct NavItem {
    label: &'static str,
    path: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/" },
    NavItem { label: "Insumos", path: "/insumos" },
    NavItem { label: "Fornecedores", path: "/fornecedores" },
    NavItem { label: "Preços de Ingredientes", path: "/precos-ingredientes" },
    NavItem { label: "Fichas Técnicas", path: "/fichas-tecnicas" },
    NavItem { label: "Engenharia de Cardápio", path: "/engenharia-cardapio" },
    NavItem { label: "Relatórios", path: "/relatorios" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"🍽"</span>
                <span class="sidebar__title">"Menu Engineering"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <A href=item.path attr:class="sidebar__link">
                                {item.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

use crate::shared::pagination::{page_range, PageIndicator, DEFAULT_SIBLING_COUNT};
use leptos::prelude::*;

/// PaginationBar component - numbered pagination controls with elided
/// runs, driven by `shared::pagination::page_range`.
#[component]
pub fn PaginationBar(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Página anterior"
            >
                {"‹"}
            </button>

            {move || {
                let current = current_page.get();
                page_range(current, total_pages.get(), DEFAULT_SIBLING_COUNT)
                    .into_iter()
                    .map(|indicator| match indicator {
                        PageIndicator::Ellipsis => {
                            view! { <span class="pagination__ellipsis">{"…"}</span> }.into_any()
                        }
                        PageIndicator::Page(n) => view! {
                            <button
                                class="pagination__btn"
                                class:pagination__btn--active=n == current
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination__btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Próxima página"
            >
                {"›"}
            </button>
        </div>
    }
}

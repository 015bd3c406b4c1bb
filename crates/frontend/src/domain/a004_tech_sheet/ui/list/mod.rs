use crate::domain::a004_tech_sheet::api;
use crate::domain::a004_tech_sheet::ui::details::TechSheetDetails;
use crate::shared::components::pagination_bar::PaginationBar;
use crate::shared::components::search_input::SearchInput;
use crate::shared::number_format::format_brl;
use contracts::domain::a004_tech_sheet::{TechSheet, TechSheetDto, TechSheetItemDto};
use leptos::prelude::*;
use std::rc::Rc;

fn to_dto(t: &TechSheet) -> TechSheetDto {
    TechSheetDto {
        id: Some(t.id),
        name: t.name.clone(),
        yield_portions: format!("{}", t.yield_portions),
        sale_price: format!("{}", t.sale_price),
        prep_time_minutes: format!("{}", t.prep_time_minutes),
        instructions: t.instructions.clone(),
        items: t
            .items
            .iter()
            .map(|i| TechSheetItemDto {
                ingredient_id: Some(i.ingredient_id),
                quantity: format!("{}", i.quantity),
            })
            .collect(),
    }
}

#[component]
pub fn TechSheetList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<TechSheet>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(0u32);
    let (filter, set_filter) = signal(String::new());
    let (editing, set_editing) = signal::<Option<TechSheetDto>>(None);
    let (show_form, set_show_form) = signal(false);

    let fetch = move |page: u32| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::list(page).await {
                Ok(p) => {
                    set_items.set(p.data);
                    set_current_page.set(p.current_page);
                    set_total_pages.set(p.last_page);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load tech sheets: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Tem certeza que deseja excluir esta ficha técnica?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(current_page.get_untracked()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible = move || {
        let f = filter.get().trim().to_lowercase();
        let all = items.get();
        if f.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|t| t.name.to_lowercase().contains(&f))
                .collect()
        }
    };

    fetch(1);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Fichas Técnicas"}</h1>
                    <p class="header__subtitle">{"Pratos, rendimentos e composição de insumos"}</p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {"Nova Ficha Técnica"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch(current_page.get_untracked())>
                        {"Atualizar"}
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
            }}

            <SearchInput
                placeholder="Buscar prato..."
                on_search=Callback::new(move |q| set_filter.set(q))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Prato"}</th>
                            <th class="table__header-cell">{"Rendimento (porções)"}</th>
                            <th class="table__header-cell">{"Preço de Venda"}</th>
                            <th class="table__header-cell">{"Preparo (min)"}</th>
                            <th class="table__header-cell">{"Insumos"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Ações"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|row| {
                                    let dto = to_dto(&row);
                                    let id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">
                                                {format!("{:.0}", row.yield_portions)}
                                            </td>
                                            <td class="table__cell">{format_brl(row.sale_price)}</td>
                                            <td class="table__cell">
                                                {format!("{:.0}", row.prep_time_minutes)}
                                            </td>
                                            <td class="table__cell">{row.items.len()}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    on:click=move |_| {
                                                        set_editing.set(Some(dto.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                >
                                                    {"Editar"}
                                                </button>
                                                <button
                                                    class="button button--ghost button--danger"
                                                    on:click=move |_| handle_delete(id)
                                                >
                                                    {"Excluir"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || { total_pages.get() > 1 }>
                <PaginationBar
                    current_page=current_page
                    total_pages=total_pages
                    on_page_change=Callback::new(move |p| fetch(p))
                />
            </Show>

            <Show when=move || show_form.get()>
                {move || {
                    let on_saved = Rc::new(move |_| {
                        set_show_form.set(false);
                        fetch(current_page.get_untracked());
                    });
                    let on_cancel = Rc::new(move |_| set_show_form.set(false));
                    view! {
                        <div class="modal-overlay">
                            <div class="modal modal--wide">
                                <TechSheetDetails
                                    initial=editing.get()
                                    on_saved=on_saved
                                    on_cancel=on_cancel
                                />
                            </div>
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}

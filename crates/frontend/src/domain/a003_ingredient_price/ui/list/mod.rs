use crate::domain::a003_ingredient_price::api;
use crate::domain::a003_ingredient_price::ui::details::IngredientPriceDetails;
use crate::shared::components::pagination_bar::PaginationBar;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::{format_date, format_valid_to};
use crate::shared::number_format::format_brl;
use contracts::domain::a003_ingredient_price::{IngredientPrice, IngredientPriceDto};
use leptos::prelude::*;
use std::rc::Rc;

fn to_dto(p: &IngredientPrice) -> IngredientPriceDto {
    IngredientPriceDto {
        id: Some(p.id),
        ingredient_id: Some(p.ingredient_id),
        supplier_id: Some(p.supplier_id),
        price: p.price.clone(),
        purchase_unit: p.purchase_unit.clone(),
        purchase_unit_quantity: format!("{}", p.purchase_unit_quantity),
        valid_from: p.valid_from.clone(),
        valid_to: p.valid_to.clone().unwrap_or_default(),
    }
}

/// The API serializes decimals as strings; render a parse failure as the
/// raw text rather than hiding it behind a zero.
fn price_label(raw: &str) -> String {
    raw.trim()
        .parse::<f64>()
        .map(format_brl)
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn IngredientPriceList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<IngredientPrice>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(0u32);
    let (filter, set_filter) = signal(String::new());
    let (editing, set_editing) = signal::<Option<IngredientPriceDto>>(None);
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
                    log::error!("failed to load ingredient prices: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Tem certeza que deseja excluir este preço?")
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
                .filter(|p| {
                    p.ingredient.name.to_lowercase().contains(&f)
                        || p.supplier.name.to_lowercase().contains(&f)
                })
                .collect()
        }
    };

    fetch(1);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Preços de Ingredientes"}</h1>
                    <p class="header__subtitle">
                        {"Janelas de vigência de preço por fornecedor"}
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {"Novo Preço"}
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
                placeholder="Buscar por ingrediente ou fornecedor..."
                on_search=Callback::new(move |q| set_filter.set(q))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Ingrediente"}</th>
                            <th class="table__header-cell">{"Fornecedor"}</th>
                            <th class="table__header-cell">{"Preço"}</th>
                            <th class="table__header-cell">{"Unidade"}</th>
                            <th class="table__header-cell">{"Quantidade"}</th>
                            <th class="table__header-cell">{"Início Vigência"}</th>
                            <th class="table__header-cell">{"Fim Vigência"}</th>
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
                                            <td class="table__cell">{row.ingredient.name.clone()}</td>
                                            <td class="table__cell">{row.supplier.name.clone()}</td>
                                            <td class="table__cell">{price_label(&row.price)}</td>
                                            <td class="table__cell">{row.purchase_unit.clone()}</td>
                                            <td class="table__cell">
                                                {format!("{}", row.purchase_unit_quantity)}
                                            </td>
                                            <td class="table__cell">{format_date(&row.valid_from)}</td>
                                            <td class="table__cell">
                                                {format_valid_to(row.valid_to.as_deref())}
                                            </td>
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
                            <div class="modal">
                                <IngredientPriceDetails
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_formats_decimal_string() {
        assert_eq!(price_label("1234.5"), "R$ 1.234,50");
    }

    #[test]
    fn test_price_label_passes_through_garbage() {
        assert_eq!(price_label("n/a"), "n/a");
    }
}

use crate::domain::a001_ingredient::api;
use crate::domain::a001_ingredient::ui::details::IngredientDetails;
use crate::shared::components::pagination_bar::PaginationBar;
use crate::shared::components::search_input::SearchInput;
use contracts::domain::a001_ingredient::{Ingredient, IngredientDto};
use leptos::prelude::*;
use std::rc::Rc;

/// Stock badge per the kitchen's rule of thumb: under 10 is low, under
/// 30 medium, otherwise fine.
fn stock_badge(min_stock: f64) -> (&'static str, &'static str) {
    if min_stock < 10.0 {
        ("badge badge--danger", "Baixo")
    } else if min_stock < 30.0 {
        ("badge badge--warning", "Médio")
    } else {
        ("badge badge--ok", "OK")
    }
}

fn to_dto(i: &Ingredient) -> IngredientDto {
    IngredientDto {
        id: Some(i.id),
        name: i.name.clone(),
        unit: i.unit.clone(),
        min_stock: i.min_stock,
        shelf_life_days: i.shelf_life_days,
        is_perishable: i.is_perishable,
    }
}

#[component]
pub fn IngredientList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Ingredient>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(0u32);
    let (filter, set_filter) = signal(String::new());
    let (editing, set_editing) = signal::<Option<IngredientDto>>(None);
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
                    log::error!("failed to load ingredients: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Tem certeza que deseja excluir este insumo?")
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
                .filter(|i| i.name.to_lowercase().contains(&f))
                .collect()
        }
    };

    fetch(1);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Insumos"}</h1>
                    <p class="header__subtitle">{"Gerencie seu estoque de ingredientes"}</p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {"Novo Insumo"}
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
                placeholder="Buscar insumo..."
                on_search=Callback::new(move |q| set_filter.set(q))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Nome"}</th>
                            <th class="table__header-cell">{"Unidade"}</th>
                            <th class="table__header-cell">{"Estoque Mínimo"}</th>
                            <th class="table__header-cell">{"Validade (dias)"}</th>
                            <th class="table__header-cell">{"Perecível"}</th>
                            <th class="table__header-cell">{"Status"}</th>
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
                                    let (badge_class, badge_label) = stock_badge(row.min_stock);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.unit.clone()}</td>
                                            <td class="table__cell">{format!("{:.2}", row.min_stock)}</td>
                                            <td class="table__cell">
                                                {row
                                                    .shelf_life_days
                                                    .map(|d| format!("{:.0}", d))
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell">
                                                {if row.is_perishable { "Sim" } else { "Não" }}
                                            </td>
                                            <td class="table__cell">
                                                <span class=badge_class>{badge_label}</span>
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
                                <IngredientDetails
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

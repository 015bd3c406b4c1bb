use crate::domain::a002_supplier::api;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::shared::components::search_input::SearchInput;
use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use leptos::prelude::*;
use std::rc::Rc;

fn to_dto(s: &Supplier) -> SupplierDto {
    SupplierDto {
        id: Some(s.id),
        name: s.name.clone(),
        phone: s.phone.clone(),
        email: s.email.clone(),
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Supplier>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (editing, set_editing) = signal::<Option<SupplierDto>>(None);
    let (show_form, set_show_form) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::list().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load suppliers: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Tem certeza que deseja excluir este fornecedor?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
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
                .filter(|s| {
                    s.name.to_lowercase().contains(&f) || s.email.to_lowercase().contains(&f)
                })
                .collect()
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Fornecedores"}</h1>
                    <p class="header__subtitle">{"Gerencie seus fornecedores e contatos"}</p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        {"Novo Fornecedor"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
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
                placeholder="Buscar por nome ou e-mail..."
                on_search=Callback::new(move |q| set_filter.set(q))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Nome"}</th>
                            <th class="table__header-cell">{"Telefone"}</th>
                            <th class="table__header-cell">{"E-mail"}</th>
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
                                            <td class="table__cell">{row.phone.clone()}</td>
                                            <td class="table__cell">{row.email.clone()}</td>
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

            <Show when=move || show_form.get()>
                {move || {
                    let on_saved = Rc::new(move |_| {
                        set_show_form.set(false);
                        fetch();
                    });
                    let on_cancel = Rc::new(move |_| set_show_form.set(false));
                    view! {
                        <div class="modal-overlay">
                            <div class="modal">
                                <SupplierDetails
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

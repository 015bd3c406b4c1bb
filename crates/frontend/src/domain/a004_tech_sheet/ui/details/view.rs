use super::view_model::TechSheetDetailsViewModel;
use crate::domain::a001_ingredient::api as ingredient_api;
use contracts::domain::a001_ingredient::Ingredient;
use contracts::domain::a004_tech_sheet::TechSheetDto;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn TechSheetDetails(
    initial: Option<TechSheetDto>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = TechSheetDetailsViewModel::new(initial);
    let vm_clone = vm.clone();

    let (ingredients, set_ingredients) = signal::<Vec<Ingredient>>(Vec::new());

    wasm_bindgen_futures::spawn_local(async move {
        match ingredient_api::list(1).await {
            Ok(p) => set_ingredients.set(p.data),
            Err(e) => log::error!("failed to load ingredient options: {}", e),
        }
    });

    view! {
        <div class="details-container tech-sheet-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.is_edit_mode()() {
                                "Editar Ficha Técnica"
                            } else {
                                "Adicionar Nova Ficha Técnica"
                            }
                        }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Nome do prato"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        }
                        placeholder="Ex: Moqueca de Salmão"
                        maxlength="100"
                    />
                </div>

                <div class="form-group">
                    <label for="yield_portions">{"Rendimento (porções)"}</label>
                    <input
                        type="number"
                        id="yield_portions"
                        step="1"
                        min="1"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().yield_portions
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.yield_portions = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="sale_price">{"Preço de venda (R$)"}</label>
                    <input
                        type="number"
                        id="sale_price"
                        step="0.01"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().sale_price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.sale_price = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="prep_time_minutes">{"Tempo de preparo (min)"}</label>
                    <input
                        type="number"
                        id="prep_time_minutes"
                        step="1"
                        min="1"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().prep_time_minutes
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.prep_time_minutes = event_target_value(&ev))
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="instructions">{"Modo de preparo"}</label>
                    <textarea
                        id="instructions"
                        rows="4"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().instructions
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.instructions = event_target_value(&ev))
                        }
                        placeholder="Descreva o passo a passo do preparo..."
                        maxlength="1000"
                    ></textarea>
                </div>

                <div class="form-group">
                    <div class="form-group__row">
                        <label>{"Insumos"}</label>
                        <button
                            class="button button--ghost"
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.add_item()
                            }
                        >
                            {"+ Adicionar insumo"}
                        </button>
                    </div>

                    {
                        let vm = vm_clone.clone();
                        move || {
                            let vm_rows = vm.clone();
                            vm.form
                                .get()
                                .items
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let vm_select = vm_rows.clone();
                                    let vm_qty = vm_rows.clone();
                                    let vm_remove = vm_rows.clone();
                                    view! {
                                        <div class="item-row">
                                            <select
                                                prop:value=item
                                                    .ingredient_id
                                                    .map(|id| id.to_string())
                                                    .unwrap_or_default()
                                                on:change=move |ev| {
                                                    let parsed = event_target_value(&ev)
                                                        .parse::<i64>()
                                                        .ok();
                                                    vm_select
                                                        .form
                                                        .update(|f| {
                                                            if let Some(row) = f.items.get_mut(index) {
                                                                row.ingredient_id = parsed;
                                                            }
                                                        });
                                                }
                                            >
                                                <option value="">{"-- Ingrediente --"}</option>
                                                {ingredients
                                                    .get()
                                                    .into_iter()
                                                    .map(|i| {
                                                        view! {
                                                            <option value=i.id
                                                                .to_string()>{i.name.clone()}</option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <input
                                                type="number"
                                                step="0.001"
                                                min="0"
                                                prop:value=item.quantity.clone()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    vm_qty
                                                        .form
                                                        .update(|f| {
                                                            if let Some(row) = f.items.get_mut(index) {
                                                                row.quantity = value.clone();
                                                            }
                                                        });
                                                }
                                                placeholder="Qtd"
                                            />
                                            <button
                                                class="button button--ghost button--danger"
                                                on:click=move |_| vm_remove.remove_item(index)
                                            >
                                                {"Remover"}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {"Salvar"}
                </button>
                <button class="button button--secondary" on:click=move |_| (on_cancel)(())>
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

use super::view_model::IngredientPriceDetailsViewModel;
use crate::domain::a001_ingredient::api as ingredient_api;
use crate::domain::a002_supplier::api as supplier_api;
use contracts::domain::a001_ingredient::Ingredient;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a003_ingredient_price::IngredientPriceDto;
use leptos::prelude::*;
use std::rc::Rc;

const PURCHASE_UNITS: &[&str] = &["kg", "g", "l", "ml", "un", "cx", "pct"];

#[component]
pub fn IngredientPriceDetails(
    initial: Option<IngredientPriceDto>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = IngredientPriceDetailsViewModel::new(initial);
    let vm_clone = vm.clone();

    let (ingredients, set_ingredients) = signal::<Vec<Ingredient>>(Vec::new());
    let (suppliers, set_suppliers) = signal::<Vec<Supplier>>(Vec::new());

    // Option lists for the two selects.
    wasm_bindgen_futures::spawn_local(async move {
        match ingredient_api::list(1).await {
            Ok(p) => set_ingredients.set(p.data),
            Err(e) => log::error!("failed to load ingredient options: {}", e),
        }
        match supplier_api::list().await {
            Ok(s) => set_suppliers.set(s),
            Err(e) => log::error!("failed to load supplier options: {}", e),
        }
    });

    view! {
        <div class="details-container ingredient-price-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.is_edit_mode()() { "Editar Preço" } else { "Adicionar Novo Preço" }
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
                    <label for="ingredient_id">{"Ingrediente"}</label>
                    <select
                        id="ingredient_id"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.form
                                    .get()
                                    .ingredient_id
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = event_target_value(&ev).parse::<i64>().ok();
                                vm.form.update(|f| f.ingredient_id = parsed);
                            }
                        }
                    >
                        <option value="">{"-- Selecione --"}</option>
                        {move || {
                            ingredients
                                .get()
                                .into_iter()
                                .map(|i| {
                                    view! {
                                        <option value=i.id.to_string()>{i.name.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="supplier_id">{"Fornecedor"}</label>
                    <select
                        id="supplier_id"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.form
                                    .get()
                                    .supplier_id
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = event_target_value(&ev).parse::<i64>().ok();
                                vm.form.update(|f| f.supplier_id = parsed);
                            }
                        }
                    >
                        <option value="">{"-- Selecione --"}</option>
                        {move || {
                            suppliers
                                .get()
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.id.to_string()>{s.name.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="price">{"Preço (R$)"}</label>
                    <input
                        type="number"
                        id="price"
                        step="0.01"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                        }
                        placeholder="0,00"
                    />
                </div>

                <div class="form-group">
                    <label for="purchase_unit">{"Unidade de compra"}</label>
                    <select
                        id="purchase_unit"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().purchase_unit
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.purchase_unit = event_target_value(&ev))
                        }
                    >
                        <option value="">{"-- Selecione --"}</option>
                        {PURCHASE_UNITS
                            .iter()
                            .map(|u| view! { <option value=*u>{*u}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="purchase_unit_quantity">{"Quantidade por unidade"}</label>
                    <input
                        type="number"
                        id="purchase_unit_quantity"
                        step="0.01"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().purchase_unit_quantity
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form
                                    .update(|f| f.purchase_unit_quantity = event_target_value(&ev))
                            }
                        }
                        placeholder="Ex: 5"
                    />
                </div>

                <div class="form-group">
                    <label for="valid_from">{"Início da vigência"}</label>
                    <input
                        type="date"
                        id="valid_from"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().valid_from
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.valid_from = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="valid_to">{"Fim da vigência"}</label>
                    <input
                        type="date"
                        id="valid_to"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().valid_to
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.valid_to = event_target_value(&ev))
                        }
                    />
                    <span class="form-hint">{"Vazio = vigência em aberto"}</span>
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

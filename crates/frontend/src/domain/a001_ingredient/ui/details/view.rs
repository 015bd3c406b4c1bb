use super::view_model::IngredientDetailsViewModel;
use contracts::domain::a001_ingredient::IngredientDto;
use leptos::prelude::*;
use std::rc::Rc;

const UNITS: &[&str] = &["kg", "g", "l", "ml", "un", "cx", "pct"];

#[component]
pub fn IngredientDetails(
    initial: Option<IngredientDto>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = IngredientDetailsViewModel::new(initial);
    let vm_clone = vm.clone();

    view! {
        <div class="details-container ingredient-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.is_edit_mode()() { "Editar Insumo" } else { "Adicionar Novo Insumo" }
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
                    <label for="name">{"Nome"}</label>
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
                        placeholder="Ex: Tomate"
                        maxlength="100"
                    />
                </div>

                <div class="form-group">
                    <label for="unit">{"Unidade"}</label>
                    <select
                        id="unit"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().unit
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.unit = event_target_value(&ev))
                        }
                    >
                        <option value="">{"-- Selecione --"}</option>
                        {UNITS
                            .iter()
                            .map(|u| view! { <option value=*u>{*u}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="min_stock">{"Estoque mínimo"}</label>
                    <input
                        type="number"
                        id="min_stock"
                        step="0.01"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().min_stock.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.min_stock = parsed);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="shelf_life_days">{"Validade (dias)"}</label>
                    <input
                        type="number"
                        id="shelf_life_days"
                        step="1"
                        min="0"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.form
                                    .get()
                                    .shelf_life_days
                                    .map(|d| d.to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = event_target_value(&ev).parse().ok();
                                vm.form.update(|f| f.shelf_life_days = parsed);
                            }
                        }
                        placeholder="Vazio = não expira"
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label for="is_perishable">{"Perecível"}</label>
                    <input
                        type="checkbox"
                        id="is_perishable"
                        prop:checked={
                            let vm = vm_clone.clone();
                            move || vm.form.get().is_perishable
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.is_perishable = checked);
                            }
                        }
                    />
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
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

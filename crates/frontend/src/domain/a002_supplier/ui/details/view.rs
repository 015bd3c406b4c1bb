use super::view_model::SupplierDetailsViewModel;
use contracts::domain::a002_supplier::SupplierDto;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn SupplierDetails(
    initial: Option<SupplierDto>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial);
    let vm_clone = vm.clone();

    view! {
        <div class="details-container supplier-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.is_edit_mode()() {
                                "Editar Fornecedor"
                            } else {
                                "Adicionar Novo Fornecedor"
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
                        placeholder="Ex: Hortifruti Central"
                        maxlength="100"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Telefone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().phone
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                        }
                        placeholder="(11) 98765-4321"
                        maxlength="15"
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"E-mail"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        }
                        placeholder="contato@fornecedor.com.br"
                        maxlength="100"
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
                <button class="button button--secondary" on:click=move |_| (on_cancel)(())>
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

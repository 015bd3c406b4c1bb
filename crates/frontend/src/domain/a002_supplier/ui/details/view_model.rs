use crate::domain::a002_supplier::api;
use contracts::domain::a002_supplier::SupplierDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the supplier details form.
#[derive(Clone)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
}

impl SupplierDetailsViewModel {
    pub fn new(initial: Option<SupplierDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = if current.id.is_some() {
                api::update(&current).await
            } else {
                api::create(&current).await
            };
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

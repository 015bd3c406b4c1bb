use crate::domain::a001_ingredient::api;
use contracts::domain::a001_ingredient::IngredientDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the ingredient details form.
#[derive(Clone)]
pub struct IngredientDetailsViewModel {
    pub form: RwSignal<IngredientDto>,
    pub error: RwSignal<Option<String>>,
}

impl IngredientDetailsViewModel {
    /// `initial = Some(dto)` opens the form in edit mode; `None` starts
    /// a blank create form.
    pub fn new(initial: Option<IngredientDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Validate and submit; `on_saved` runs only after the server
    /// accepted the mutation, so the caller refetches explicitly.
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

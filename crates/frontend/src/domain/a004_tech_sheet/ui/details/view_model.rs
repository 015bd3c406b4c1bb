use crate::domain::a004_tech_sheet::api;
use contracts::domain::a004_tech_sheet::{TechSheetDto, TechSheetItemDto};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the tech sheet form, including its dynamic item rows.
#[derive(Clone)]
pub struct TechSheetDetailsViewModel {
    pub form: RwSignal<TechSheetDto>,
    pub error: RwSignal<Option<String>>,
}

impl TechSheetDetailsViewModel {
    pub fn new(initial: Option<TechSheetDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn add_item(&self) {
        self.form.update(|f| f.items.push(TechSheetItemDto::default()));
    }

    pub fn remove_item(&self, index: usize) {
        self.form.update(|f| {
            if index < f.items.len() {
                f.items.remove(index);
            }
        });
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_item_ignores_out_of_range_index() {
        let vm = TechSheetDetailsViewModel::new(None);
        vm.add_item();
        vm.remove_item(5);
        assert_eq!(vm.form.get_untracked().items.len(), 1);
        vm.remove_item(0);
        assert!(vm.form.get_untracked().items.is_empty());
    }
}

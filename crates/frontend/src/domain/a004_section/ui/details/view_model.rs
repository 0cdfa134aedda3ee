use crate::shared::api_utils::{fetch_aggregate, save_aggregate};
use contracts::domain::a004_section::aggregate::{Seccion, SeccionDto, SeccionId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct SeccionDetailsViewModel {
    pub form: RwSignal<SeccionDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SeccionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SeccionDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<SeccionId>) {
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match fetch_aggregate::<Seccion>(id).await {
                Ok(seccion) => form.set(SeccionDto::from(&seccion)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn set_nombre(&self, value: String) {
        self.form.update(|f| f.nombre = value);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        spawn_local(async move {
            let result = save_aggregate::<Seccion, _>(current.id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

use crate::shared::api_utils::{fetch_aggregate, save_aggregate};
use contracts::domain::a006_payment_method::aggregate::{MedioPago, MedioPagoDto, MedioPagoId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct MedioPagoDetailsViewModel {
    pub form: RwSignal<MedioPagoDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MedioPagoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MedioPagoDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<MedioPagoId>) {
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match fetch_aggregate::<MedioPago>(id).await {
                Ok(medio) => form.set(MedioPagoDto::from(&medio)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn set_nombre(&self, value: String) {
        self.form.update(|f| f.nombre = value);
    }

    pub fn set_descripcion(&self, value: String) {
        self.form.update(|f| f.descripcion = value);
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
            let result = save_aggregate::<MedioPago, _>(current.id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

use crate::shared::api_utils::{fetch_aggregate, save_aggregate};
use contracts::domain::a007_client::aggregate::{Cliente, ClienteDto, ClienteId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ClienteDetailsViewModel {
    pub form: RwSignal<ClienteDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ClienteDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClienteDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<ClienteId>) {
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match fetch_aggregate::<Cliente>(id).await {
                Ok(cliente) => form.set(ClienteDto::from(&cliente)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn field(&self, apply: fn(&mut ClienteDto, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| apply(f, value)))
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
            let result = save_aggregate::<Cliente, _>(current.id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

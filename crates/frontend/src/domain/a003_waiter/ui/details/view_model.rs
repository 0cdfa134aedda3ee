use crate::shared::api_utils::{fetch_aggregate, save_aggregate};
use crate::shared::components::parse_id;
use crate::shared::lookups::load_unpaged;
use contracts::domain::a001_sector::aggregate::{Sector, ALL_SECTORS_PATH};
use contracts::domain::a003_waiter::aggregate::{Mozo, MozoDto, MozoId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct MozoDetailsViewModel {
    pub form: RwSignal<MozoDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub sectores: RwSignal<Vec<Sector>>,
}

impl MozoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MozoDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            sectores: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<MozoId>) {
        load_unpaged::<Sector>(ALL_SECTORS_PATH, self.sectores);
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match fetch_aggregate::<Mozo>(id).await {
                Ok(mozo) => form.set(MozoDto::from(&mozo)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    /// Сеттер текстового поля формы
    pub fn field(&self, apply: fn(&mut MozoDto, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| apply(f, value)))
    }

    pub fn set_sector(&self, raw: String) {
        self.form.update(|f| f.id_sector = parse_id(&raw));
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
            let result = save_aggregate::<Mozo, _>(current.id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

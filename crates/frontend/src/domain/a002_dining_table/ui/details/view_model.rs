use crate::shared::api_utils::{fetch_aggregate, fetch_one, save_aggregate};
use crate::shared::components::parse_id;
use crate::shared::lookups::load_unpaged;
use contracts::domain::a001_sector::aggregate::{Sector, ALL_SECTORS_PATH};
use contracts::domain::a002_dining_table::aggregate::{Mesa, MesaDto, MesaId, TABLE_TYPES_PATH};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Типы столов, если сервер ещё ничего не вернул
pub const DEFAULT_TABLE_TYPES: [&str; 3] = ["interior", "exterior", "vip"];

#[derive(Clone, Copy)]
pub struct MesaDetailsViewModel {
    pub form: RwSignal<MesaDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub sectores: RwSignal<Vec<Sector>>,
    pub tipos: RwSignal<Vec<String>>,
}

impl MesaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MesaDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            sectores: RwSignal::new(Vec::new()),
            tipos: RwSignal::new(DEFAULT_TABLE_TYPES.iter().map(|t| t.to_string()).collect()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_options(&self) {
        load_unpaged::<Sector>(ALL_SECTORS_PATH, self.sectores);
        let tipos = self.tipos;
        spawn_local(async move {
            match fetch_one::<Vec<String>>(TABLE_TYPES_PATH).await {
                Ok(list) => tipos.update(|current| {
                    for t in list {
                        if !current.iter().any(|c| c.eq_ignore_ascii_case(&t)) {
                            current.push(t);
                        }
                    }
                }),
                Err(e) => log::warn!("tipos de mesa: {}", e),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<MesaId>) {
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match fetch_aggregate::<Mesa>(id).await {
                Ok(mesa) => form.set(MesaDto::from(&mesa)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn set_numero(&self, raw: String) {
        self.form.update(|f| f.numero = raw.trim().parse().ok());
    }

    pub fn set_comensales(&self, raw: String) {
        self.form.update(|f| f.cant_comensales = raw.trim().parse().ok());
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
            let result = save_aggregate::<Mesa, _>(current.id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

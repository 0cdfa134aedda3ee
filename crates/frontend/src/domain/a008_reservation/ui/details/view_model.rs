use crate::shared::api_utils::{fetch_aggregate, fetch_one, save_aggregate};
use crate::shared::components::parse_id;
use crate::shared::date_utils::{next_half_hour_input, now_local};
use crate::shared::lookups::load_options;
use contracts::domain::a002_dining_table::aggregate::{AvailableTablesQuery, Mesa};
use contracts::domain::a007_client::aggregate::Cliente;
use contracts::domain::a008_reservation::aggregate::{Reserva, ReservaDto, ReservaId};
use contracts::domain::common::Deactivatable;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ReservaDetailsViewModel {
    pub form: RwSignal<ReservaDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Бронь уже не активна: карточка только для просмотра
    pub locked: RwSignal<bool>,
    pub clientes: RwSignal<Vec<Cliente>>,
    pub mesas: RwSignal<Vec<Mesa>>,
}

impl ReservaDetailsViewModel {
    pub fn new() -> Self {
        let form = ReservaDto {
            fecha_hora: next_half_hour_input(now_local()),
            ..ReservaDto::default()
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            locked: RwSignal::new(false),
            clientes: RwSignal::new(Vec::new()),
            mesas: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<ReservaId>) {
        load_options::<Cliente>("", self.clientes);
        load_options::<Mesa>("estado=activa", self.mesas);
        let Some(id) = id else { return };
        let (form, error, locked) = (self.form, self.error, self.locked);
        spawn_local(async move {
            match fetch_aggregate::<Reserva>(id).await {
                Ok(reserva) => {
                    locked.set(!reserva.can_edit());
                    form.set(ReservaDto::from(&reserva));
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    /// Вместимость выбранного стола, если он есть в списке
    pub fn capacity(&self) -> Option<i32> {
        let id_mesa = self.form.with_untracked(|f| f.id_mesa)?;
        self.mesas.with_untracked(|mesas| {
            mesas
                .iter()
                .find(|m| m.id_mesa == id_mesa)
                .map(|m| m.cant_comensales)
        })
    }

    /// Предупреждение, если выбранный стол мал для брони
    pub fn capacity_warning(&self) -> Option<String> {
        let (id_mesa, personas) = self.form.with(|f| (f.id_mesa, f.cant_personas));
        let (id_mesa, personas) = (id_mesa?, personas?);
        self.mesas.with(|mesas| {
            mesas
                .iter()
                .find(|m| m.id_mesa == id_mesa)
                .filter(|m| !m.fits(personas))
                .map(|m| format!("La mesa {} admite hasta {} personas", m.numero, m.cant_comensales))
        })
    }

    pub fn set_numero(&self, raw: String) {
        self.form.update(|f| f.numero = raw.trim().parse().ok());
    }

    pub fn set_personas(&self, raw: String) {
        let personas: Option<i32> = raw.trim().parse().ok();
        self.form.update(|f| f.cant_personas = personas);
        if let Some(n) = personas.filter(|n| *n > 0) {
            self.load_available_tables(n);
        }
    }

    /// Свободные столы на `personas` мест. Выбранный стол, которого нет
    /// в новом списке, сбрасывается.
    fn load_available_tables(&self, personas: i32) {
        if self.locked.get_untracked() {
            return;
        }
        let (form, mesas) = (self.form, self.mesas);
        let path = AvailableTablesQuery {
            cant_comensales: Some(personas),
            sector_id: None,
        }
        .path();
        spawn_local(async move {
            let available = match fetch_one::<Vec<Mesa>>(&path).await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("mesas disponibles: {}", e);
                    return;
                }
            };
            // пока шёл запрос, число персон могло смениться
            if form.with_untracked(|f| f.cant_personas) != Some(personas) {
                return;
            }
            form.update(|f| {
                if let Some(id) = f.id_mesa {
                    if !available.iter().any(|m| m.id_mesa == id) {
                        f.id_mesa = None;
                    }
                }
            });
            mesas.set(available);
        });
    }

    pub fn set_fecha_hora(&self, raw: String) {
        self.form.update(|f| f.fecha_hora = raw);
    }

    pub fn set_cliente(&self, raw: String) {
        self.form.update(|f| f.id_cliente = parse_id(&raw));
    }

    pub fn set_mesa(&self, raw: String) {
        self.form.update(|f| f.id_mesa = parse_id(&raw));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.locked.get_untracked() {
            self.error.set(Some("La reserva ya no admite cambios".into()));
            return;
        }
        let current = self.form.get_untracked();
        let payload = match current.to_payload(now_local(), self.capacity()) {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        spawn_local(async move {
            let result = save_aggregate::<Reserva, _>(current.id, &payload).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

/// Подпись стола с вместимостью: `"Mesa 4 (6 pers.)"`
pub fn mesa_option_label(mesa: &Mesa) -> String {
    format!("Mesa {} ({} pers.)", mesa.numero, mesa.cant_comensales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_dining_table::aggregate::MesaId;

    #[test]
    fn table_option_shows_capacity() {
        let mesa = Mesa {
            id_mesa: MesaId(4),
            numero: 4,
            tipo: "interior".into(),
            cant_comensales: 6,
            id_sector: None,
            sector: None,
            baja: false,
        };
        assert_eq!(mesa_option_label(&mesa), "Mesa 4 (6 pers.)");
    }
}

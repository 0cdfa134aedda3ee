use crate::shared::api_utils::{delete, fetch_aggregate, post_json, put_json};
use crate::shared::components::parse_id;
use crate::shared::date_utils::now_local;
use crate::shared::lookups::{load_options, ACTIVE_ONLY};
use contracts::domain::a002_dining_table::aggregate::Mesa;
use contracts::domain::a003_waiter::aggregate::Mozo;
use contracts::domain::a005_product::aggregate::Producto;
use contracts::domain::a009_order::aggregate::{Comanda, ComandaId};
use contracts::domain::a009_order::{OrderDraft, OrderStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Активные столы: у mesas фильтр состояния называется `estado`
const ACTIVE_TABLES: &str = "estado=activa";

/// Редактор comanda поверх `OrderDraft`: шапка, строки, сохранение,
/// снятие. Счёт выставляется в `InvoiceModal` над тем же черновиком.
#[derive(Clone, Copy)]
pub struct ComandaEditorViewModel {
    pub draft: RwSignal<OrderDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub mesas: RwSignal<Vec<Mesa>>,
    pub mozos: RwSignal<Vec<Mozo>>,
    pub productos: RwSignal<Vec<Producto>>,
}

impl ComandaEditorViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(OrderDraft::new(now_local())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            mesas: RwSignal::new(Vec::new()),
            mozos: RwSignal::new(Vec::new()),
            productos: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.with(|d| d.id.is_some())
    }

    pub fn is_open(&self) -> bool {
        self.draft.with(|d| d.is_open())
    }

    /// Счёт выставляется только по сохранённой comanda со строками
    pub fn can_invoice(&self) -> bool {
        self.draft
            .with(|d| d.is_open() && !d.is_dirty() && !d.lines().is_empty())
    }

    pub fn status(&self) -> OrderStatus {
        self.draft.with(|d| d.status().clone())
    }

    pub fn load(&self, id: Option<ComandaId>) {
        load_options::<Mesa>(ACTIVE_TABLES, self.mesas);
        load_options::<Mozo>(ACTIVE_ONLY, self.mozos);
        load_options::<Producto>(ACTIVE_ONLY, self.productos);
        let Some(id) = id else { return };
        let (draft, error, loading) = (self.draft, self.error, self.loading);
        loading.set(true);
        spawn_local(async move {
            match fetch_aggregate::<Comanda>(id).await {
                Ok(comanda) => draft.set(OrderDraft::from_comanda(&comanda)),
                Err(e) => error.set(Some(format!("Error al cargar la comanda: {}", e))),
            }
            loading.set(false);
        });
    }

    pub fn set_mesa(&self, raw: String) {
        self.draft.update(|d| d.id_mesa = parse_id(&raw));
    }

    pub fn set_mozo(&self, raw: String) {
        self.draft.update(|d| d.id_mozo = parse_id(&raw));
    }

    pub fn set_fecha(&self, raw: String) {
        self.draft.update(|d| d.fecha = raw);
    }

    pub fn set_observaciones(&self, raw: String) {
        self.draft.update(|d| d.observaciones = raw);
    }

    /// `POST` новой или `PUT` существующей comanda. Ответ сервера
    /// заменяет черновик; id сохранённой comanda уходит в `on_saved`.
    pub fn save_command(&self, on_saved: Callback<ComandaId>) {
        let (draft, error, saving) = (self.draft, self.error, self.saving);
        let (id, payload) = match draft.with_untracked(|d| d.to_payload().map(|p| (d.id, p))) {
            Ok(pair) => pair,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => put_json::<_, Comanda>(&Comanda::item_path(id), &payload).await,
                None => post_json::<_, Comanda>(&Comanda::api_path(), &payload).await,
            };
            saving.set(false);
            match (result, id) {
                (Ok(Some(comanda)), _) => {
                    let saved_id = comanda.id_comanda;
                    draft.set(OrderDraft::from_comanda(&comanda));
                    error.set(None);
                    on_saved.run(saved_id);
                }
                (Ok(None), Some(id)) => {
                    draft.update(OrderDraft::mark_saved);
                    error.set(None);
                    on_saved.run(id);
                }
                (Ok(None), None) => {
                    error.set(Some("El servidor no devolvió la comanda creada".to_string()))
                }
                (Err(e), _) => error.set(Some(e)),
            }
        });
    }

    /// Baja: `DELETE /api/comandas/{id}`, затем `Open → Cancelled` локально
    pub fn cancel_command(&self, reason: String, on_done: Callback<()>) {
        let (draft, error) = (self.draft, self.error);
        let Some(id) = draft.with_untracked(|d| d.id) else {
            error.set(Some("La comanda aún no fue guardada".to_string()));
            return;
        };
        if let Err(e) = draft.with_untracked(|d| d.status().ensure_open()) {
            error.set(Some(e.to_string()));
            return;
        }
        spawn_local(async move {
            match delete::<serde_json::Value>(&Comanda::item_path(id)).await {
                Ok(_) => {
                    log::info!("comanda {} dada de baja", id);
                    if let Some(Err(e)) = draft.try_update(|d| d.cancel(&reason)) {
                        error.set(Some(e.to_string()));
                    }
                    on_done.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

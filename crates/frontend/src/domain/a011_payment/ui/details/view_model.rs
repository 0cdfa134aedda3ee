use crate::domain::a010_invoice::payments::resolve_payments;
use crate::shared::api_utils::post_json;
use crate::shared::components::parse_id;
use crate::shared::date_utils::now_local;
use crate::shared::lookups::{load_options, ACTIVE_ONLY};
use contracts::domain::a006_payment_method::aggregate::MedioPago;
use contracts::domain::a010_invoice::aggregate::Factura;
use contracts::domain::a011_payment::aggregate::Pago;
use contracts::domain::a011_payment::PagoForm;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Счета с остатком к оплате
const UNPAID_QUERY: &str = "solo_impagas=true";

/// Регистрация платежа. Платёж нельзя редактировать: только создание.
#[derive(Clone, Copy)]
pub struct PagoDetailsViewModel {
    pub form: RwSignal<PagoForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub facturas: RwSignal<Vec<Factura>>,
    pub medios: RwSignal<Vec<MedioPago>>,
    /// Идёт запрос платежей выбранного счёта
    pub resolving: RwSignal<bool>,
    lookup: StoredValue<u64>,
}

impl PagoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PagoForm::new(now_local())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            facturas: RwSignal::new(Vec::new()),
            medios: RwSignal::new(Vec::new()),
            resolving: RwSignal::new(false),
            lookup: StoredValue::new(0),
        }
    }

    /// Справочники; `preset` - счёт, из которого открыли форму
    pub fn load(&self, preset: Option<Factura>) {
        load_options::<MedioPago>(ACTIVE_ONLY, self.medios);
        if let Some(factura) = preset {
            self.facturas.set(vec![factura.clone()]);
            self.select(factura);
            return;
        }
        load_options::<Factura>(UNPAID_QUERY, self.facturas);
    }

    pub fn set_factura(&self, value: String) {
        let selected = parse_id(&value)
            .and_then(|id| self.facturas.with(|list| list.iter().find(|f| f.id_factura == id).cloned()));
        self.error.set(None);
        match selected {
            Some(factura) => self.select(factura),
            None => {
                self.lookup.set_value(self.lookup.get_value() + 1);
                self.resolving.set(false);
                self.form.update(PagoForm::clear_invoice);
            }
        }
    }

    /// Подставляет остаток счёта; если сервер не прислал платежи,
    /// сначала запрашивает их.
    fn select(&self, mut factura: Factura) {
        let ticket = self.lookup.get_value() + 1;
        self.lookup.set_value(ticket);
        self.form.update(|f| f.prefill(&factura));
        if factura.paid_amount().is_some() {
            self.resolving.set(false);
            return;
        }
        let vm = *self;
        vm.resolving.set(true);
        spawn_local(async move {
            let result = resolve_payments(&mut factura).await;
            if vm.lookup.get_value() != ticket {
                return;
            }
            vm.resolving.set(false);
            match result {
                Ok(_) => {
                    vm.form.update(|f| f.prefill(&factura));
                    vm.facturas.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|f| f.id_factura == factura.id_factura) {
                            *slot = factura;
                        }
                    });
                }
                Err(e) => vm
                    .error
                    .set(Some(format!("No se pudieron obtener los pagos de la factura: {}", e))),
            }
        });
    }

    pub fn set_medio(&self, value: String) {
        self.form.update(|f| f.id_medio_pago = parse_id(&value));
    }

    pub fn set_monto(&self, value: String) {
        self.form.update(|f| f.monto = value);
    }

    pub fn set_fecha(&self, value: String) {
        self.form.update(|f| f.fecha = value);
    }

    pub fn selected_factura(&self) -> Option<Factura> {
        let id = self.form.with(|f| f.id_factura)?;
        self.facturas
            .with(|list| list.iter().find(|f| f.id_factura == id).cloned())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.resolving.get_untracked() {
            return;
        }
        let payload = match self.form.with_untracked(PagoForm::to_payload) {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        spawn_local(async move {
            let result = post_json::<_, Pago>(&Pago::api_path(), &payload).await;
            saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

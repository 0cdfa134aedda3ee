use crate::shared::api_utils::{fetch_aggregate, save_aggregate};
use crate::shared::components::parse_id;
use crate::shared::lookups::{load_options, ACTIVE_ONLY};
use contracts::domain::a004_section::aggregate::Seccion;
use contracts::domain::a005_product::aggregate::{
    ProductKind, Producto, ProductoDto, ProductoId,
};
use contracts::shared::money::{format_amount, parse_money};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Карточка продукта. Цена хранится ещё и строкой, как её набрал
/// пользователь: `"1.500,5"` не должна переписываться на каждом символе.
#[derive(Clone, Copy)]
pub struct ProductoDetailsViewModel {
    pub form: RwSignal<ProductoDto>,
    pub precio_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub secciones: RwSignal<Vec<Seccion>>,
}

impl ProductoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductoDto::default()),
            precio_text: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            secciones: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_drink(&self) -> bool {
        self.form.with(|f| f.tipo == ProductKind::Bebida)
    }

    pub fn load_if_needed(&self, id: Option<ProductoId>) {
        load_options::<Seccion>(ACTIVE_ONLY, self.secciones);
        let Some(id) = id else { return };
        let (form, precio_text, error) = (self.form, self.precio_text, self.error);
        spawn_local(async move {
            match fetch_aggregate::<Producto>(id).await {
                Ok(producto) => {
                    precio_text.set(format_amount(producto.precio));
                    form.set(ProductoDto::from(&producto));
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn field(&self, apply: fn(&mut ProductoDto, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| apply(f, value)))
    }

    pub fn set_precio(&self, raw: String) {
        let parsed = parse_money(&raw).ok();
        self.precio_text.set(raw);
        self.form.update(|f| f.precio = parsed);
    }

    pub fn set_seccion(&self, raw: String) {
        self.form.update(|f| f.id_seccion = parse_id(&raw));
    }

    pub fn set_tipo(&self, raw: String) {
        if let Some(kind) = ProductKind::from_code(&raw) {
            self.form.update(|f| f.tipo = kind);
        }
    }

    pub fn set_cm3(&self, raw: String) {
        self.form.update(|f| f.cm3 = raw.trim().parse().ok());
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if !self.precio_text.with_untracked(|t| t.trim().is_empty()) && current.precio.is_none() {
            self.error.set(Some("El precio no es un número válido".into()));
            return;
        }
        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        spawn_local(async move {
            let result = save_aggregate::<Producto, _>(current.id, &current.to_payload()).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

/// Опции вида продукта для `<select>`
pub fn kind_options() -> Vec<(String, String)> {
    ProductKind::ALL
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect()
}

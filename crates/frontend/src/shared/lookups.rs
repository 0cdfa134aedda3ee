//! Данные для выпадающих списков форм: активные справочники целиком.

use crate::shared::api_utils::{fetch_all, fetch_page};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// Только активные записи
pub const ACTIVE_ONLY: &str = "activos=true";

/// Загружает справочник `A` в `target`. Ошибка не блокирует форму:
/// список останется пустым, причина уйдёт в консоль.
pub fn load_options<A>(query: &'static str, target: RwSignal<Vec<A>>)
where
    A: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match fetch_all::<A>(&A::api_path(), query).await {
            Ok(items) => target.set(items),
            Err(e) => log::warn!("options {}: {}", A::collection_name(), e),
        }
    });
}

/// То же для эндпоинтов без пагинации (`/api/sectores/todos`)
pub fn load_unpaged<T>(path: &'static str, target: RwSignal<Vec<T>>)
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match fetch_page::<T>(path, "").await {
            Ok(page) => target.set(page.items),
            Err(e) => log::warn!("options {}: {}", path, e),
        }
    });
}

/// Пары (значение, подпись) для `<select>`
pub fn to_options<A, F>(items: &[A], label: F) -> Vec<(String, String)>
where
    A: AggregateRoot,
    A::Id: std::fmt::Display,
    F: Fn(&A) -> String,
{
    items
        .iter()
        .map(|item| (item.id().to_string(), label(item)))
        .collect()
}

/// Подпись по умолчанию - `display_name()`
pub fn display_options<A>(items: &[A]) -> Vec<(String, String)>
where
    A: AggregateRoot,
    A::Id: std::fmt::Display,
{
    to_options(items, A::display_name)
}

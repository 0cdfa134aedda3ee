//! HTTP-обёртки над gloo-net для REST API ресторана.
//!
//! Все функции возвращают `Result<_, String>`: сообщение сервера из
//! `{status: "error", message}`, если оно есть, иначе общий текст.

use super::config::{CONFIG, SELECT_PAGE_SIZE};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{error_message_from_body, ApiListResponse, ApiResponse, Page};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

/// `"/api/mozos/"` → `"http://localhost:8099/api/mozos/"`
pub fn api_url(path: &str) -> String {
    format!("{}{}", CONFIG.backend_url, path)
}

/// Путь с query string: `join_query("/api/mozos/", "page=1")` → `/api/mozos/?page=1`
pub fn join_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else if path.contains('?') {
        format!("{}&{}", path, query)
    } else {
        format!("{}?{}", path, query)
    }
}

async fn error_from_response(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message_from_body(&body, &format!("Error del servidor ({})", status));
    log::warn!("HTTP {} -> {}: {}", response.url(), status, message);
    message
}

fn transport_error(method: &str, url: &str, e: gloo_net::Error) -> String {
    log::error!("{} {} failed: {}", method, url, e);
    CONNECTION_ERROR.to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::error!("decode {} failed: {}", response.url(), e);
        format!("Respuesta inválida del servidor: {}", e)
    })
}

/// Страница списка: `GET path?query`
pub async fn fetch_page<T: DeserializeOwned>(path: &str, query: &str) -> Result<Page<T>, String> {
    let url = api_url(&join_query(path, query));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| transport_error("GET", &url, e))?;
    decode::<ApiListResponse<T>>(response).await?.into_page()
}

/// Все строки для выпадающего списка (одна страница максимального размера)
pub async fn fetch_all<T: DeserializeOwned>(path: &str, query: &str) -> Result<Vec<T>, String> {
    let mut full = format!("page=1&per_page={}", SELECT_PAGE_SIZE);
    if !query.is_empty() {
        full.push('&');
        full.push_str(query);
    }
    fetch_page(path, &full).await.map(|page| page.items)
}

/// Одна запись: `GET path` → `data`
pub async fn fetch_one<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| transport_error("GET", &url, e))?;
    decode::<ApiResponse<T>>(response).await?.into_data()
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<T>, String> {
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| transport_error("POST", &url, e))?;
    decode::<ApiResponse<T>>(response).await?.into_result()
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<Option<T>, String> {
    let url = api_url(path);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| transport_error("PUT", &url, e))?;
    decode::<ApiResponse<T>>(response).await?.into_result()
}

/// `PUT` без тела (`/api/reservas/{id}/asistida`)
pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let url = api_url(path);
    let response = Request::put(&url)
        .send()
        .await
        .map_err(|e| transport_error("PUT", &url, e))?;
    decode::<ApiResponse<T>>(response).await?.into_result()
}

/// `DELETE path` - на бэкенде это "baja" (флаг), не физическое удаление
pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let url = api_url(path);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| transport_error("DELETE", &url, e))?;
    decode::<ApiResponse<T>>(response).await?.into_result()
}

/// Карточка справочника: `GET /api/{коллекция}/{id}`
pub async fn fetch_aggregate<A>(id: A::Id) -> Result<A, String>
where
    A: AggregateRoot + DeserializeOwned,
    A::Id: std::fmt::Display,
{
    fetch_one(&A::item_path(id)).await
}

/// Создание (`POST`, без id) или изменение (`PUT`, с id)
pub async fn save_aggregate<A, B>(id: Option<A::Id>, body: &B) -> Result<(), String>
where
    A: AggregateRoot,
    A::Id: std::fmt::Display,
    B: Serialize,
{
    let result = match id {
        Some(id) => put_json::<B, serde_json::Value>(&A::item_path(id), body).await,
        None => post_json::<B, serde_json::Value>(&A::api_path(), body).await,
    };
    result.map(|_| ())
}

/// Снятие с учёта ("baja")
pub async fn deactivate_aggregate<A>(id: A::Id) -> Result<(), String>
where
    A: AggregateRoot,
    A::Id: std::fmt::Display,
{
    leptos::logging::log!("baja {} {}", A::collection_name(), id);
    delete::<serde_json::Value>(&A::item_path(id)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_appended_once() {
        assert_eq!(join_query("/api/mozos/", ""), "/api/mozos/");
        assert_eq!(join_query("/api/mozos/", "page=1"), "/api/mozos/?page=1");
        assert_eq!(
            join_query("/api/reportes/medios-pago?fecha_desde=2025-03-01", "x=1"),
            "/api/reportes/medios-pago?fecha_desde=2025-03-01&x=1"
        );
    }
}

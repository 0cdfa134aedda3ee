//! Конверт ответов REST API.
//!
//! Списки: `{status, data: [...], pagination: {...}}`.
//! Мутации: `{status, message?, data?}`.

use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";

/// Блок пагинации, который сервер возвращает вместе со списком.
///
/// Часть эндпоинтов не присылает `has_next`/`has_prev`, они
/// восстанавливаются в [`Pagination::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: crate::shared::list_state::DEFAULT_PER_PAGE,
            total: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

impl Pagination {
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.per_page = self.per_page.max(1);
        self.has_next = self.has_next || self.page < self.total_pages;
        self.has_prev = self.has_prev || self.page > 1;
        self
    }

    /// Пагинация для эндпоинтов, которые отдают всё одной страницей
    /// (`/api/sectores/todos`, `/api/mesas/disponibles`).
    pub fn single_page(len: usize) -> Self {
        let total = len as u64;
        Self {
            page: 1,
            per_page: len.max(1) as u32,
            total,
            total_pages: if total == 0 { 0 } else { 1 },
            has_next: false,
            has_prev: false,
        }
    }
}

/// Страница данных после разбора конверта
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ApiListResponse<T> {
    pub fn into_page(self) -> Result<Page<T>, String> {
        if self.status != STATUS_SUCCESS {
            return Err(self
                .message
                .unwrap_or_else(|| "Error al obtener los datos".to_string()));
        }
        let pagination = self
            .pagination
            .map(Pagination::normalized)
            .unwrap_or_else(|| Pagination::single_page(self.data.len()));
        Ok(Page {
            items: self.data,
            pagination,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Успех с необязательными данными
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.status == STATUS_SUCCESS {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "La operación no pudo completarse".to_string()))
        }
    }

    /// Успех, данные обязательны
    pub fn into_data(self) -> Result<T, String> {
        self.into_result()?
            .ok_or_else(|| "Respuesta del servidor sin datos".to_string())
    }
}

/// Тело ошибки `{status: "error", message}`
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Извлекает сообщение сервера из тела ошибочного ответа.
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn list_envelope_keeps_server_pagination() {
        let json = r#"{
            "status": "success",
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {"page": 2, "per_page": 2, "total": 5, "total_pages": 3,
                           "has_next": true, "has_prev": true}
        }"#;
        let resp: ApiListResponse<Row> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.page, 2);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn missing_navigation_flags_are_derived() {
        let json = r#"{"status": "success", "data": [],
                       "pagination": {"page": 1, "per_page": 10, "total": 25, "total_pages": 3}}"#;
        let resp: ApiListResponse<Row> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert!(page.pagination.has_next);
        assert!(!page.pagination.has_prev);
    }

    #[test]
    fn list_without_pagination_is_one_page() {
        let json = r#"{"status": "success", "data": [{"id": 1}]}"#;
        let resp: ApiListResponse<Row> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn error_status_surfaces_server_message() {
        let json = r#"{"status": "error", "message": "La comanda no tiene productos para facturar"}"#;
        let resp: ApiResponse<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_data().unwrap_err(),
            "La comanda no tiene productos para facturar"
        );
    }

    #[test]
    fn error_body_falls_back_to_generic_text() {
        assert_eq!(
            error_message_from_body(r#"{"status":"error","message":"No existe"}"#, "x"),
            "No existe"
        );
        assert_eq!(error_message_from_body("<html>", "Error 500"), "Error 500");
        assert_eq!(error_message_from_body(r#"{"message":"  "}"#, "fallback"), "fallback");
    }
}

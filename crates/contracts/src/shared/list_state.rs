//! Состояние списочного экрана: страница, размер страницы, фильтры.
//!
//! Состояние неизменяемое, переходы только через [`reduce`]. Редьюсер
//! возвращает эффект [`ListEffect::Fetch`], когда нужен запрос к серверу;
//! экран исполняет запрос и передаёт ответ обратно через `ListAction::Loaded`.

use super::api::Pagination;
use std::collections::BTreeMap;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
/// Сколько номеров страниц показывать в навигации
pub const PAGE_WINDOW: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    /// Серверные фильтры: поле → значение. Пустые значения не хранятся.
    pub filters: BTreeMap<String, String>,
    /// Поиск по уже загруженной странице (на сервер не уходит)
    pub search: String,
    pub is_loading: bool,
    pub is_loaded: bool,
    /// Номер последнего выданного запроса
    pub request_seq: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
            filters: BTreeMap::new(),
            search: String::new(),
            is_loading: false,
            is_loaded: false,
            request_seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// Установить значение фильтра; пустая строка снимает фильтр
    SetFilter { key: String, value: String },
    ClearFilters,
    GoToPage(u32),
    SetPerPage(u32),
    Refresh,
    /// Ответ сервера на запрос `seq`
    Loaded { seq: u64, pagination: Pagination },
    /// Запрос `seq` завершился ошибкой; строки на экране остаются
    Failed { seq: u64 },
    SetSearch(String),
}

/// Запрос, который экран должен выполнить
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    None,
    Fetch(FetchRequest),
}

impl ListEffect {
    pub fn fetch(&self) -> Option<&FetchRequest> {
        match self {
            ListEffect::Fetch(req) => Some(req),
            ListEffect::None => None,
        }
    }
}

impl ListState {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
            ..Self::default()
        }
    }

    /// Начальные фильтры экрана (например, `activos=true`)
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.filters.insert(key.to_string(), value.trim().to_string());
        }
        self
    }

    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Query string: `page`, `per_page`, затем фильтры в алфавитном порядке.
    pub fn query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("per_page={}", self.per_page),
        ];
        for (key, value) in &self.filters {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        parts.join("&")
    }

    /// Номера страниц для навигации: не более `PAGE_WINDOW`, текущая по центру.
    pub fn visible_pages(&self) -> Vec<u32> {
        if self.total_pages == 0 {
            return Vec::new();
        }
        let half = PAGE_WINDOW / 2;
        let current = self.page.clamp(1, self.total_pages);
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + PAGE_WINDOW - 1).min(self.total_pages);
        if end + 1 - start < PAGE_WINDOW {
            start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
        }
        (start..=end).collect()
    }

    /// Первая загрузка экрана
    pub fn start(self) -> (Self, ListEffect) {
        reduce(self, ListAction::Refresh)
    }

    fn issue_fetch(mut self) -> (Self, ListEffect) {
        self.request_seq += 1;
        self.is_loading = true;
        let effect = ListEffect::Fetch(FetchRequest {
            seq: self.request_seq,
            query: self.query_string(),
        });
        (self, effect)
    }

    fn replace_filters(self, filters: BTreeMap<String, String>) -> (Self, ListEffect) {
        if filters == self.filters {
            return (self, ListEffect::None);
        }
        let mut next = self;
        next.filters = filters;
        next.page = 1;
        next.issue_fetch()
    }
}

/// Чистый переход состояния списка.
pub fn reduce(state: ListState, action: ListAction) -> (ListState, ListEffect) {
    match action {
        ListAction::SetFilter { key, value } => {
            let mut filters = state.filters.clone();
            let value = value.trim();
            if value.is_empty() {
                filters.remove(&key);
            } else {
                filters.insert(key, value.to_string());
            }
            state.replace_filters(filters)
        }
        ListAction::ClearFilters => state.replace_filters(BTreeMap::new()),
        ListAction::GoToPage(page) => {
            let last = state.total_pages.max(1);
            let page = page.clamp(1, last);
            if page == state.page {
                return (state, ListEffect::None);
            }
            let mut next = state;
            next.page = page;
            next.issue_fetch()
        }
        ListAction::SetPerPage(per_page) => {
            let per_page = per_page.max(1);
            if per_page == state.per_page {
                return (state, ListEffect::None);
            }
            let mut next = state;
            next.per_page = per_page;
            next.page = 1;
            next.issue_fetch()
        }
        ListAction::Refresh => state.issue_fetch(),
        ListAction::Loaded { seq, pagination } => {
            if seq != state.request_seq {
                return (state, ListEffect::None);
            }
            let pagination = pagination.normalized();
            let mut next = state;
            next.page = pagination.page;
            next.per_page = pagination.per_page;
            next.total = pagination.total;
            next.total_pages = pagination.total_pages;
            next.has_next = pagination.has_next;
            next.has_prev = pagination.has_prev;
            next.is_loading = false;
            next.is_loaded = true;
            (next, ListEffect::None)
        }
        ListAction::Failed { seq } => {
            let mut next = state;
            if seq == next.request_seq {
                next.is_loading = false;
            }
            (next, ListEffect::None)
        }
        ListAction::SetSearch(text) => {
            let mut next = state;
            next.search = text;
            (next, ListEffect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(state: ListState, page: u32, total: u64, total_pages: u32) -> ListState {
        let seq = state.request_seq;
        let pagination = Pagination {
            page,
            per_page: state.per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        };
        reduce(state, ListAction::Loaded { seq, pagination }).0
    }

    fn set_filter(key: &str, value: &str) -> ListAction {
        ListAction::SetFilter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn filter_change_resets_page_and_fetches_once() {
        let (state, _) = ListState::default().start();
        let state = loaded(state, 1, 95, 10);
        let (state, _) = reduce(state, ListAction::GoToPage(4));
        let state = loaded(state, 4, 95, 10);
        assert_eq!(state.page, 4);

        let (state, effect) = reduce(state, set_filter("documento", "4"));
        assert_eq!(state.page, 1);
        let req = effect.fetch().expect("filter change must fetch");
        assert_eq!(req.query, "page=1&per_page=10&documento=4");

        // same value again: nothing to do
        let (_, effect) = reduce(state, set_filter("documento", "4"));
        assert_eq!(effect, ListEffect::None);
    }

    #[test]
    fn empty_filter_value_removes_key() {
        let state = ListState::default().with_filter("activos", "true");
        let (state, effect) = reduce(state, set_filter("activos", "  "));
        assert!(state.filters.is_empty());
        assert_eq!(effect.fetch().map(|r| r.query.as_str()), Some("page=1&per_page=10"));
    }

    #[test]
    fn clearing_absent_filters_does_not_fetch() {
        let (_, effect) = reduce(ListState::default(), ListAction::ClearFilters);
        assert_eq!(effect, ListEffect::None);
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let state = ListState::default()
            .with_filter("nombre", "María José")
            .with_filter("apellido", "Gómez");
        assert_eq!(
            state.query_string(),
            "page=1&per_page=10&apellido=G%C3%B3mez&nombre=Mar%C3%ADa%20Jos%C3%A9"
        );
    }

    #[test]
    fn server_pagination_is_authoritative() {
        let (state, _) = ListState::default().start();
        let seq = state.request_seq;
        let pagination = Pagination {
            page: 3,
            per_page: 20,
            total: 41,
            total_pages: 3,
            has_next: false,
            has_prev: true,
        };
        let (state, _) = reduce(state, ListAction::Loaded { seq, pagination });
        assert_eq!(state.page, 3);
        assert_eq!(state.per_page, 20);
        assert_eq!(state.total, 41);
        assert!(state.is_loaded);
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_response_is_ignored() {
        let (state, first) = ListState::default().start();
        let first_seq = first.fetch().unwrap().seq;
        let (state, second) = reduce(state, set_filter("tipo", "interior"));
        let second_seq = second.fetch().unwrap().seq;
        assert!(second_seq > first_seq);

        let stale = Pagination {
            page: 1,
            per_page: 10,
            total: 99,
            total_pages: 10,
            has_next: true,
            has_prev: false,
        };
        let (state, _) = reduce(state, ListAction::Loaded { seq: first_seq, pagination: stale });
        assert_eq!(state.total, 0);
        assert!(state.is_loading);

        let state = loaded(state, 1, 4, 1);
        assert_eq!(state.total, 4);
    }

    #[test]
    fn go_to_page_is_clamped() {
        let (state, _) = ListState::default().start();
        let state = loaded(state, 1, 30, 3);
        let (state, effect) = reduce(state, ListAction::GoToPage(9));
        assert_eq!(state.page, 3);
        assert!(effect.fetch().is_some());
        let (_, effect) = reduce(state, ListAction::GoToPage(3));
        assert_eq!(effect, ListEffect::None);
    }

    #[test]
    fn per_page_change_goes_back_to_first_page() {
        let (state, _) = ListState::default().start();
        let state = loaded(state, 1, 30, 3);
        let (state, _) = reduce(state, ListAction::GoToPage(2));
        let (state, effect) = reduce(state, ListAction::SetPerPage(50));
        assert_eq!(state.page, 1);
        assert_eq!(effect.fetch().unwrap().query, "page=1&per_page=50");
    }

    #[test]
    fn search_never_fetches() {
        let (state, effect) = reduce(ListState::default(), ListAction::SetSearch("mila".into()));
        assert_eq!(state.search, "mila");
        assert_eq!(effect, ListEffect::None);
    }

    #[test]
    fn failed_request_keeps_rows_and_stops_spinner() {
        let (state, effect) = ListState::default().start();
        let seq = effect.fetch().unwrap().seq;
        let (state, _) = reduce(state, ListAction::Failed { seq });
        assert!(!state.is_loading);
        assert!(!state.is_loaded);
    }

    #[test]
    fn visible_pages_window() {
        let mut state = ListState::default();
        state.total_pages = 12;
        state.page = 1;
        assert_eq!(state.visible_pages(), vec![1, 2, 3, 4, 5]);
        state.page = 7;
        assert_eq!(state.visible_pages(), vec![5, 6, 7, 8, 9]);
        state.page = 12;
        assert_eq!(state.visible_pages(), vec![8, 9, 10, 11, 12]);
        state.total_pages = 2;
        state.page = 2;
        assert_eq!(state.visible_pages(), vec![1, 2]);
        state.total_pages = 0;
        assert!(state.visible_pages().is_empty());
    }
}

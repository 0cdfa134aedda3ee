//! Списочный экран: состояние `ListState` из contracts в сигналах Leptos.
//!
//! Все переходы идут через `reduce`; если редьюсер вернул `ListEffect::Fetch`,
//! контроллер делает запрос и возвращает ответ через `ListAction::Loaded`.
//! Ответ на устаревший запрос (номер меньше последнего выданного) отбрасывается.

use crate::shared::api_utils::fetch_page;
use crate::shared::list_utils::{filter_list, Searchable};
use contracts::shared::list_state::{reduce, FetchRequest, ListAction, ListEffect, ListState};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

pub struct ListController<T: 'static> {
    pub state: RwSignal<ListState>,
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    path: StoredValue<String>,
}

impl<T: 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// `path` - коллекция, например `/api/mozos/`
    pub fn new(path: impl Into<String>, initial: ListState) -> Self {
        Self {
            state: RwSignal::new(initial),
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            path: StoredValue::new(path.into()),
        }
    }

    pub fn dispatch(&self, action: ListAction) {
        let current = self.state.get_untracked();
        let (next, effect) = reduce(current, action);
        self.state.set(next);
        if let ListEffect::Fetch(request) = effect {
            self.run_fetch(request);
        }
    }

    fn run_fetch(&self, request: FetchRequest) {
        let this = *self;
        let path = self.path.get_value();
        leptos::logging::log!("list {} #{}: {}", path, request.seq, request.query);
        spawn_local(async move {
            let result = fetch_page::<T>(&path, &request.query).await;
            let latest = this.state.with_untracked(|s| s.request_seq);
            if latest != request.seq {
                leptos::logging::log!("list {} #{}: stale, newer #{}", path, request.seq, latest);
                return;
            }
            match result {
                Ok(page) => {
                    leptos::logging::log!(
                        "list {} #{}: {} rows of {}",
                        path,
                        request.seq,
                        page.items.len(),
                        page.pagination.total
                    );
                    this.items.set(page.items);
                    this.error.set(None);
                    this.dispatch(ListAction::Loaded {
                        seq: request.seq,
                        pagination: page.pagination,
                    });
                }
                Err(e) => {
                    // строки предыдущей загрузки остаются на экране
                    this.error.set(Some(e));
                    this.dispatch(ListAction::Failed { seq: request.seq });
                }
            }
        });
    }

    /// Первая загрузка
    pub fn start(&self) {
        self.dispatch(ListAction::Refresh);
    }

    pub fn refresh(&self) {
        self.dispatch(ListAction::Refresh);
    }

    pub fn set_filter(&self, key: &str, value: impl Into<String>) {
        self.dispatch(ListAction::SetFilter {
            key: key.to_string(),
            value: value.into(),
        });
    }

    pub fn clear_filters(&self) {
        self.dispatch(ListAction::ClearFilters);
    }

    pub fn go_to_page(&self, page: u32) {
        self.dispatch(ListAction::GoToPage(page));
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.dispatch(ListAction::SetPerPage(per_page));
    }

    pub fn set_search(&self, text: String) {
        self.dispatch(ListAction::SetSearch(text));
    }

    /// Текущее значение серверного фильтра
    pub fn filter(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter(key).to_string()))
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search.clone()))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    /// Идёт первая загрузка: строк ещё нет
    pub fn is_first_load(&self) -> bool {
        self.state.with(|s| s.is_loading && !s.is_loaded)
    }
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Searchable + Clone + Send + Sync + 'static,
{
    /// Строки текущей страницы после локального поиска
    pub fn visible(&self) -> Vec<T> {
        let search = self.state.with(|s| s.search.clone());
        self.items.with(|items| filter_list(items, &search))
    }
}

//! Открытые вкладки, активная вкладка и видимость меню.
//!
//! Активная вкладка отражается в адресе (`?active=a009_order`), чтобы
//! перезагрузка страницы возвращала на тот же экран.

use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Ключ вкладки из строки запроса `?active=...`
fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn search_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

/// После закрытия вкладки активной становится соседняя справа, иначе слева.
fn neighbour_of(tabs: &[Tab], key: &str) -> Option<String> {
    let pos = tabs.iter().position(|t| t.key == key)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(Vec::new()),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Открывает вкладку из адреса и дальше пишет активную вкладку в адрес
    /// через `replaceState` (без новых записей истории).
    pub fn sync_with_location(&self) {
        if let Some(key) = active_from_search(&current_search()) {
            self.open_tab(&key, &tab_label_for_key(&key));
        }

        let active = self.active;
        Effect::new(move |_| {
            let Some(key) = active.get() else { return };
            let wanted = search_for_active(&key);
            if current_search() == wanted {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if let Err(e) = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&wanted),
                ) {
                    log::warn!("replaceState {}: {:?}", wanted, e);
                }
            }
        });
    }

    /// Открывает вкладку или активирует уже открытую
    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open tab {}", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|t| t.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    /// Подменяет вкладку на месте: новая comanda после первого сохранения
    /// получает ключ со своим номером.
    pub fn replace_tab(&self, from: &str, to: &str, title: &str) {
        let already_open = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|t| t.key == to));
        if already_open {
            self.close_tab(from);
            self.activate_tab(to);
            return;
        }
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == from) {
                tab.key = to.to_string();
                tab.title = title.to_string();
            }
        });
        self.activate_tab(to);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {}", key);
        let was_active = self
            .active
            .with_untracked(|a| a.as_deref() == Some(key));
        let next = self.opened.with_untracked(|tabs| neighbour_of(tabs, key));
        self.opened.update(|tabs| tabs.retain(|t| t.key != key));
        if was_active {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn reads_active_key_from_query() {
        assert_eq!(active_from_search("?active=a009_order").as_deref(), Some("a009_order"));
        assert_eq!(active_from_search("?active="), None);
        assert_eq!(active_from_search(""), None);
        assert_eq!(search_for_active("a003_waiter"), "?active=a003_waiter");
    }

    #[test]
    fn closing_prefers_right_neighbour() {
        let open = tabs(&["a003_waiter", "a009_order", "a010_invoice"]);
        assert_eq!(neighbour_of(&open, "a009_order").as_deref(), Some("a010_invoice"));
        assert_eq!(neighbour_of(&open, "a010_invoice").as_deref(), Some("a009_order"));
        assert_eq!(neighbour_of(&tabs(&["a003_waiter"]), "a003_waiter"), None);
        assert_eq!(neighbour_of(&open, "zzz"), None);
    }
}

//! Категории страниц внутри вкладок.
//!
//! Корневой элемент каждой страницы получает `id` вида `{entity}--{category}`
//! (например `"a003_waiter--list"`) и `data-page-category`. По префиксу id
//! страница находится в `domain/a003_waiter/`.

/// Таблица с фильтрами и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка / форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Отчёты
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// Формат `{entity}--{category}` с известной категорией
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a003_waiter--list"));
        assert!(is_valid_page_id("d400_reports--dashboard"));
        assert!(!is_valid_page_id("a003_waiter"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_waiter--tree"));
    }
}

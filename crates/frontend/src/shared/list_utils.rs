/// Поиск по загруженной странице списка и связанные UI-компоненты.
///
/// Поиск работает только по строкам текущей страницы и на сервер не уходит;
/// серверные фильтры задаются отдельно через `ListState`.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Поиск включается с этой длины запроса
pub const MIN_SEARCH_CHARS: usize = 3;

/// Тип строки списка, по которой можно искать
pub trait Searchable {
    /// Текстовые поля, участвующие в поиске
    fn search_fields(&self) -> Vec<String>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn is_search_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_SEARCH_CHARS
}

/// Строки страницы, подходящие под запрос. Короткий запрос не фильтрует.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_search_active(filter) {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Байтовые диапазоны совпадений (без учёта регистра)
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if !is_search_active(filter) {
        return Vec::new();
    }
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    // lowercase может поменять длину в байтах; тогда без подсветки
    if haystack.len() != text.len() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Текст с подсвеченными совпадениями
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }
    view! { <span>{parts}</span> }.into_any()
}

/// Поле поиска с задержкой 300 мс и кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar en la página (mín. 3 caracteres)...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // drop отменяет предыдущий таймер
        pending.set_value(Some(Timeout::new(300, move || on_change.run(new_value))));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || is_search_active(&value.get())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn short_query_keeps_page() {
        let rows = vec![Row("Milanesa", "plato"), Row("Coca-Cola", "bebida")];
        assert_eq!(filter_list(&rows, "mi").len(), 2);
        assert_eq!(filter_list(&rows, "MILA"), vec![Row("Milanesa", "plato")]);
        assert_eq!(filter_list(&rows, "bebi"), vec![Row("Coca-Cola", "bebida")]);
        assert!(filter_list(&rows, "flan").is_empty());
    }

    #[test]
    fn ranges_are_case_insensitive() {
        assert_eq!(match_ranges("Pollo al pollo", "POLLO"), vec![(0, 5), (9, 14)]);
        assert!(match_ranges("Pollo", "po").is_empty());
    }
}

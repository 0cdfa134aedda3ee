//! Поля карточек: подпись + элемент ввода в разметке `form-group`.

use leptos::prelude::*;

/// Текстовое поле карточки. `input_type` - `text`, `number`, `email`,
/// `datetime-local`...
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let label = if required { format!("{} *", label) } else { label };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Выпадающий список в карточке: подпись, пустая опция-подсказка, опции
/// (значение, подпись). Пустое значение означает "не выбрано".
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Seleccione...".to_string());
    let label = if required { format!("{} *", label) } else { label };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, text)| {
                            let selected = v == current;
                            view! { <option value=v selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Значение `<select>` → id; пустая строка и мусор дают `None`
pub fn parse_id<I: contracts::domain::common::AggregateId>(value: &str) -> Option<I> {
    if value.trim().is_empty() {
        return None;
    }
    I::from_string(value).ok()
}

/// id → значение `<select>`
pub fn id_value<I: std::fmt::Display>(id: Option<I>) -> String {
    id.map(|i| i.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sector::aggregate::SectorId;

    #[test]
    fn empty_select_means_no_id() {
        assert_eq!(parse_id::<SectorId>(""), None);
        assert_eq!(parse_id::<SectorId>("x"), None);
        assert_eq!(parse_id::<SectorId>("4"), Some(SectorId(4)));
        assert_eq!(id_value(Some(SectorId(4))), "4");
        assert_eq!(id_value::<SectorId>(None), "");
    }
}

use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, FlexJustify, Spinner};

/// Строка таблицы со спиннером на время первой загрузки
#[component]
pub fn LoadingRow(colspan: u32, #[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Cargando...".to_string());
    view! {
        <tr>
            <td class="table__cell table__cell--placeholder" colspan=colspan.to_string()>
                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    {text}
                </Flex>
            </td>
        </tr>
    }
}

/// Пустая таблица
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <tr>
            <td class="table__cell table__cell--placeholder" colspan=colspan.to_string()>
                {text}
            </td>
        </tr>
    }
}

/// Спиннер вне таблицы (карточки, отчёты)
#[component]
pub fn LoadingBlock(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Cargando...".to_string());
    view! {
        <Flex
            justify=FlexJustify::Center
            align=FlexAlign::Center
            gap=FlexGap::Small
            style="padding: var(--spacing-lg);"
        >
            <Spinner />
            <span>{text}</span>
        </Flex>
    }
}

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

/// Контент вкладки создаётся один раз; неактивная вкладка только прячется,
/// фильтры и страница списка переживают переключение.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    let key_for_active = key.clone();
    let is_active = move || {
        tabs_store
            .active
            .with(|a| a.as_deref() == Some(key_for_active.as_str()))
    };

    let content = render_tab_content(&key, tabs_store);

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=key
        >
            {content}
        </section>
    }
}

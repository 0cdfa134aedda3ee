//! Полоса вкладок и их содержимое.

use super::TabPage;
use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::shared::icons::icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: Tab, ctx: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key);
    let is_active = Memo::new(move |_| {
        ctx.active
            .with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
    });

    view! {
        <div
            class="tabs__tab"
            class:tabs__tab--active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span class="tabs__title">{tab.title}</span>
            <button
                class="tabs__close"
                title="Cerrar"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    key.with_value(|k| ctx.close_tab(k));
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab ctx=ctx /> }
                />
            </div>
            <div class="tabs__content">
                <Show when=move || ctx.opened.with(Vec::is_empty)>
                    <div class="tabs__empty">"Seleccione una sección en el menú de la izquierda"</div>
                </Show>
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=ctx /> }
                />
            </div>
        </div>
    }
}

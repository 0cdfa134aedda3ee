//! Верхняя панель: название приложения, переключатель меню и адрес бэкенда.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::CONFIG;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Restaurante · Administración"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__backend" title="Servidor">
                    {icon("server")}
                    {CONFIG.backend_url.clone()}
                </span>
            </div>
        </div>
    }
}

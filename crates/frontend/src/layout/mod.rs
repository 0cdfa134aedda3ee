//! Каркас приложения.
//!
//! ```text
//! +------------------------------+
//! |          TopHeader           |
//! +------------------------------+
//! |  Sidebar  |   TabStrip       |
//! +------------------------------+
//! ```

pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::TabStrip;
use top_header::TopHeader;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    ctx.sync_with_location();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main">
                    <TabStrip />
                </main>
            </div>
        </div>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::layout::AppShell;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <AppShell />
        <ModalHost />
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Ошибка над таблицей или формой. Строки под баннером не очищаются:
/// после неудачного запроса пользователь видит последние загруженные данные.
#[component]
pub fn ErrorBanner(
    error: RwSignal<Option<String>>,
    /// Повторить последнее действие
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{message}</span>
                    {on_retry.map(|retry| view! {
                        <button class="button button--ghost button--small" on:click=move |_| retry.run(())>
                            {icon("refresh")}
                            "Reintentar"
                        </button>
                    })}
                    <button
                        class="warning-box__close"
                        title="Cerrar"
                        on:click=move |_| error.set(None)
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}

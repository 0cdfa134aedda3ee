use leptos::prelude::*;

/// Подтверждение браузера (`window.confirm`)
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Окно с полем причины: отмена брони, снятие comanda.
///
/// С `required` пустая причина не отправляется; проверка правила
/// остаётся за вызывающим кодом (`Reserva::cancel` и т.п.).
#[component]
pub fn ReasonDialog(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional)] required: bool,
    /// Ошибка сервера или правила, показывается над полем
    #[prop(optional, into)]
    error: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let error = error.unwrap_or_else(|| RwSignal::new(None));

    let submit = move |_| {
        let text = reason.get_untracked();
        if required && text.trim().is_empty() {
            error.set(Some("Debe indicar un motivo".to_string()));
            return;
        }
        on_confirm.run(text);
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{title}</h3>
            </div>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                <div class="form-group">
                    <label>{label}</label>
                    <textarea
                        rows="3"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="details-actions">
                <button class="button button--danger" on:click=submit>
                    {confirm_label}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Volver"
                </button>
            </div>
        </div>
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Оверлей и поверхность окна. Заголовок и кнопки рисует содержимое.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    #[prop(optional, into)] modal_style: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // Закрываем, только если и нажатие, и отпускание были на самом оверлее:
    // выделение текста в форме с отпусканием снаружи окно не закрывает.
    let on_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(is_direct(&ev));
    let on_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && is_direct(&ev);
        pressed_on_overlay.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=on_mouse_down
            on:click=on_click
        >
            <div
                class="modal"
                style=format!("position: relative; {modal_style}")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

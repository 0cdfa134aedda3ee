//! Стек модальных окон: карточки справочников, форма платежа, счёт,
//! подтверждения. Escape закрывает только верхнее окно.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Ширина поверхности окна
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSize {
    /// Подтверждения и короткие формы
    Narrow,
    /// Карточки справочников
    Form,
    /// Comanda, счёт
    Wide,
}

impl ModalSize {
    pub fn style(&self) -> &'static str {
        match self {
            ModalSize::Narrow => "max-width: min(480px, 95vw); width: min(480px, 95vw);",
            ModalSize::Form => "max-width: min(720px, 95vw); width: min(720px, 95vw); max-height: calc(100vh - 80px); overflow: hidden; display: flex; flex-direction: column;",
            ModalSize::Wide => "max-width: min(1100px, 95vw); width: min(1100px, 95vw); max-height: calc(100vh - 80px); overflow: hidden; display: flex; flex-direction: column;",
        }
    }
}

type Builder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Builder,
    size: ModalSize,
}

/// Позволяет окну закрыть само себя
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Открыть окно поверх текущих
    pub fn push<F>(&self, size: ModalSize, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                size,
            })
        });
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    // Закрытие откладывается на следующий тик: окно нельзя удалять из DOM
    // посреди обработки события, которое пришло из него же.
    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn pop_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| {
                s.pop();
            });
        });
    }
}

/// Рендерит стек окон. Монтируется один раз в корне приложения.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| e.key() == "Escape")
            .unwrap_or(false);
        if is_escape && svc.stack.with_untracked(|s| !s.is_empty()) {
            svc.pop_deferred();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    // обработчик живёт всё время работы приложения
    on_keydown.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || { svc.stack.get().into_iter().enumerate().collect::<Vec<_>>() }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let view = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=Callback::new(move |_| svc.close_deferred(id))
                            modal_style=entry.size.style().to_string()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

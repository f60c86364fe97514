use crate::state::{Toast, ToastKind};
use crate::util::now_ms;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const EXPIRY_TICK_MS: i32 = 250;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    /// Fired every tick with the current clock.
    pub on_tick: Callback<f64>,
}

fn kind_color(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "#3fb950",
        ToastKind::Info => "#58a6ff",
        ToastKind::Error => "#f85149",
        ToastKind::Achievement => "#d4af37",
    }
}

#[function_component]
pub fn ToastStack(props: &ToastStackProps) -> Html {
    {
        let on_tick = props.on_tick.clone();
        use_effect_with((), move |_| {
            let tick = Closure::wrap(Box::new(move || on_tick.emit(now_ms())) as Box<dyn FnMut()>);
            let handle = web_sys::window().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    EXPIRY_TICK_MS,
                )
                .ok()
            });
            if handle.is_none() {
                log::warn!("toast expiry timer unavailable");
            }
            move || {
                if let (Some(win), Some(h)) = (web_sys::window(), handle) {
                    win.clear_interval_with_handle(h);
                }
                drop(tick);
            }
        });
    }

    if props.toasts.is_empty() {
        return html! {};
    }
    html! {
        <div style="position:fixed; top:12px; right:12px; display:flex; flex-direction:column; gap:8px; z-index:60; max-width:320px;">
            { for props.toasts.iter().map(|t| {
                let cb = props.on_dismiss.clone();
                let id = t.id;
                let dismiss = Callback::from(move |_: MouseEvent| cb.emit(id));
                html! {
                    <div key={t.id} onclick={dismiss} style={format!("background:#161b22; border:1px solid {0}; border-left:4px solid {0}; border-radius:8px; padding:8px 12px; cursor:pointer; box-shadow:0 4px 12px rgba(0,0,0,0.5);", kind_color(t.kind))}>
                        <div style="font-weight:600; font-size:13px;">{ &t.title }</div>
                        <div style="font-size:12px; opacity:0.85;">{ &t.body }</div>
                    </div>
                }
            }) }
        </div>
    }
}

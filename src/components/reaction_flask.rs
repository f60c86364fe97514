use super::compound_card::category_color;
use crate::model::{Compound, CompoundId};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A submission waiting out the reaction delay.
struct PendingReaction {
    handle: i32,
    fired: Rc<Cell<bool>>,
    _tick: Closure<dyn FnMut()>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ReactionFlaskProps {
    pub contents: Vec<Compound>,
    pub capacity: usize,
    pub can_react: bool,
    pub delay_ms: u32,
    /// (report seq, success) of the latest submission.
    pub last_outcome: Option<(u64, bool)>,
    pub on_react: Callback<Vec<CompoundId>>,
    pub on_remove: Callback<usize>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn ReactionFlask(props: &ReactionFlaskProps) -> Html {
    let reacting = use_state(|| false);
    let failed = use_state(|| false);
    let pending = use_mut_ref(|| None::<PendingReaction>);
    let seen_seq = use_mut_ref(|| props.last_outcome.map(|(seq, _)| seq).unwrap_or(0));

    // Leaving the lab throws away whatever is still reacting.
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(p) = pending.borrow_mut().take() {
                    if !p.fired.get() {
                        if let Some(win) = web_sys::window() {
                            win.clear_timeout_with_handle(p.handle);
                        }
                        log::debug!("pending reaction discarded");
                    }
                }
            }
        });
    }
    // Shake on a failed report this flask submitted
    {
        let failed = failed.clone();
        let seen_seq = seen_seq.clone();
        use_effect_with(props.last_outcome, move |outcome| {
            if let Some((seq, success)) = *outcome {
                if seq > *seen_seq.borrow() {
                    *seen_seq.borrow_mut() = seq;
                    failed.set(!success);
                }
            }
            || ()
        });
    }

    let ids: Vec<CompoundId> = props.contents.iter().map(|c| c.id.clone()).collect();
    let can_react = props.can_react && !*reacting;

    let react_cb = {
        let reacting = reacting.clone();
        let failed = failed.clone();
        let pending = pending.clone();
        let on_react = props.on_react.clone();
        let delay = props.delay_ms;
        Callback::from(move |_: MouseEvent| {
            if !can_react {
                return;
            }
            failed.set(false);
            let Some(win) = web_sys::window() else {
                on_react.emit(ids.clone());
                return;
            };
            let fired = Rc::new(Cell::new(false));
            let tick = {
                let ids = ids.clone();
                let on_react = on_react.clone();
                let reacting = reacting.clone();
                let fired = fired.clone();
                Closure::wrap(Box::new(move || {
                    fired.set(true);
                    reacting.set(false);
                    on_react.emit(ids.clone());
                }) as Box<dyn FnMut()>)
            };
            match win.set_timeout_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                delay as i32,
            ) {
                Ok(handle) => {
                    reacting.set(true);
                    *pending.borrow_mut() = Some(PendingReaction {
                        handle,
                        fired,
                        _tick: tick,
                    });
                }
                Err(_) => {
                    log::warn!("could not schedule reaction delay, reacting now");
                    on_react.emit(ids.clone());
                }
            }
        })
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        let failed = failed.clone();
        Callback::from(move |_| {
            failed.set(false);
            cb.emit(());
        })
    };

    let border = if *failed {
        "#f85149"
    } else if *reacting {
        "#d29922"
    } else {
        "#30363d"
    };
    let shift = if *failed { "translateX(4px)" } else { "none" };

    html! {
        <div style="display:flex; flex-direction:column; gap:12px; min-width:260px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Reaction Flask"}</h3>
                <span style="font-size:13px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("{}/{}", props.contents.len(), props.capacity) }</span>
            </div>
            <div style={format!("background:#0d1117; border:2px solid {border}; border-radius:50% 50% 16px 16px / 20% 20% 16px 16px; min-height:180px; padding:18px; display:flex; flex-wrap:wrap; gap:6px; align-content:flex-start; justify-content:center; transform:{shift}; transition:transform 80ms, border-color 200ms;")}>
                if props.contents.is_empty() {
                    <span style="margin:auto; font-size:13px; opacity:0.6; text-align:center;">{"Tap compounds to add them to the flask"}</span>
                }
                { for props.contents.iter().enumerate().map(|(i, c)| {
                    let on_remove = props.on_remove.clone();
                    let remove = Callback::from(move |_: MouseEvent| on_remove.emit(i));
                    html! {
                        <span style={format!("display:inline-flex; align-items:center; gap:4px; padding:4px 8px; border-radius:12px; border:1px solid {}; font-size:13px;", category_color(c.category))}>
                            <span style="font-weight:600;">{ &c.symbol }</span>
                            <button onclick={remove} disabled={*reacting} title="Remove" style="padding:0 4px; font-size:11px; line-height:1;">{"×"}</button>
                        </span>
                    }
                }) }
            </div>
            if *reacting {
                <div style="font-size:13px; color:#d29922; text-align:center;">{"Reacting..."}</div>
            } else if *failed {
                <div style="font-size:13px; color:#f85149; text-align:center;">{"Nothing happened. Try another combination."}</div>
            }
            <div style="display:flex; gap:8px;">
                <button onclick={react_cb} disabled={!can_react} style="flex:1; background:#238636; border:1px solid #2ea043; color:#fff;">{"⚗️ React"}</button>
                <button onclick={clear_cb} disabled={*reacting || props.contents.is_empty()} style="flex:0 0 auto;">{"Clear"}</button>
            </div>
        </div>
    }
}

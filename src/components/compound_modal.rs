use super::compound_card::{category_color, rarity_color};
use crate::model::{Compound, Rarity};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompoundModalProps {
    pub compound: Option<Compound>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn CompoundModal(props: &CompoundModalProps) -> Html {
    let Some(c) = &props.compound else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let accent = category_color(c.category);
    let row = "display:flex; justify-content:space-between; font-size:13px;";

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <div style="display:flex; align-items:baseline; gap:10px;">
                    <span style={format!("font-size:28px; font-weight:700; color:{accent};")}>{ &c.symbol }</span>
                    <h3 style="margin:0; font-size:18px;">{ &c.name }</h3>
                </div>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; gap:6px; flex-wrap:wrap;">
                <span style={format!("font-size:11px; padding:2px 8px; border-radius:10px; border:1px solid {accent}; color:{accent};")}>{ c.category.label() }</span>
                if c.rarity != Rarity::Common {
                    <span style={format!("font-size:11px; padding:2px 8px; border-radius:10px; background:{}; color:#0d1117; font-weight:600;", rarity_color(c.rarity))}>{ c.rarity.label() }</span>
                }
            </div>
            <p style="margin:0; font-size:13px; line-height:1.4; opacity:0.9;">{ &c.description }</p>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <div style={row}><span style="opacity:0.7;">{"Molecular weight"}</span><span>{ &c.molecular_weight }</span></div>
                <div style={row}><span style="opacity:0.7;">{"Discovery points"}</span><span style="color:#d4af37;">{ c.points }</span></div>
                <div style={row}>
                    <span style="opacity:0.7;">{"Status"}</span>
                    if c.discovered {
                        <span style="color:#3fb950;">{"Discovered"}</span>
                    } else {
                        <span style="opacity:0.6;">{"Undiscovered"}</span>
                    }
                </div>
            </div>
            if !c.uses.is_empty() {
                <div>
                    <div style="font-size:12px; font-weight:600; margin-bottom:4px;">{"Uses"}</div>
                    <ul style="margin:0 0 0 18px; padding:0; font-size:12px; display:flex; flex-direction:column; gap:2px;">
                        { for c.uses.iter().map(|u| html! { <li>{ u }</li> }) }
                    </ul>
                </div>
            }
            <button onclick={close_cb} style="align-self:flex-end;">{"Done"}</button>
        </div>
    </div>}
}

use crate::model::{Recipe, SessionState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReactionGuideProps {
    pub recipes: Vec<Recipe>,
    pub session: SessionState,
}

#[function_component]
pub fn ReactionGuide(props: &ReactionGuideProps) -> Html {
    let symbol = |id: &crate::model::CompoundId| {
        props
            .session
            .compound(id)
            .map(|c| c.symbol.clone())
            .unwrap_or_else(|| id.to_string())
    };
    let completed = props
        .recipes
        .iter()
        .filter(|r| props.session.is_discovered(&r.output))
        .count();

    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Reaction Guide"}</h3>
                <span style="font-size:13px; opacity:0.8;">{ format!("{}/{} completed", completed, props.recipes.len()) }</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                { for props.recipes.iter().map(|r| {
                    let done = props.session.is_discovered(&r.output);
                    let inputs = r.inputs.iter().map(|i| symbol(i)).collect::<Vec<_>>().join(" + ");
                    let border = if done { "#3fb950" } else { "#30363d" };
                    html! {
                        <div key={r.id.to_string()} style={format!("background:#161b22; border:1px solid {border}; border-radius:8px; padding:8px 12px; display:flex; flex-direction:column; gap:2px;")}>
                            <div style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                                <span style="font-weight:600; font-size:13px;">{ &r.name }</span>
                                if done {
                                    <span style="font-size:11px; color:#3fb950;">{"✓ Completed"}</span>
                                }
                            </div>
                            <div style="font-family:monospace; font-size:13px;">{ format!("{} → {}", inputs, symbol(&r.output)) }</div>
                            <div style="font-size:11px; opacity:0.7;">{ &r.description }</div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

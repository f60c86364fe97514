use crate::model::{Category, Compound, CompoundId, Rarity};
use yew::prelude::*;

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Element => "#58a6ff",
        Category::Acid => "#f85149",
        Category::Base => "#a371f7",
        Category::Salt => "#e6edf3",
        Category::Gas => "#79c0ff",
        Category::Organic => "#3fb950",
        Category::Mineral => "#d29922",
        Category::Oxide => "#db6d28",
    }
}

pub fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "#8b949e",
        Rarity::Uncommon => "#3fb950",
        Rarity::Rare => "#58a6ff",
        Rarity::Epic => "#a371f7",
        Rarity::Legendary => "#d4af37",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CompoundCardProps {
    pub compound: Compound,
    #[prop_or(true)]
    pub show_hint: bool,
    /// Only fired for discovered compounds.
    #[prop_or_default]
    pub on_pick: Option<Callback<CompoundId>>,
}

#[function_component]
pub fn CompoundCard(props: &CompoundCardProps) -> Html {
    let c = &props.compound;
    if !c.discovered {
        let hint = match (&c.synthesis_hint, props.show_hint) {
            (Some(h), true) => h.clone(),
            _ => "Recipe unknown".to_string(),
        };
        return html! {
            <div style="background:#0d1117; border:1px dashed #30363d; border-radius:8px; padding:10px; min-height:96px; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:6px; opacity:0.6; text-align:center;">
                <span style="font-size:22px;">{"🔒"}</span>
                <span style="font-size:11px; line-height:1.3;">{ hint }</span>
            </div>
        };
    }

    let onclick = props.on_pick.clone().map(|cb| {
        let id = c.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    });
    let cursor = if onclick.is_some() { "pointer" } else { "default" };
    let accent = category_color(c.category);
    html! {
        <div onclick={onclick} title={c.description.clone()} style={format!("background:#161b22; border:1px solid {accent}; border-radius:8px; padding:10px; min-height:96px; display:flex; flex-direction:column; gap:4px; cursor:{cursor};")}>
            <div style="display:flex; justify-content:space-between; align-items:baseline;">
                <span style={format!("font-size:20px; font-weight:700; color:{accent};")}>{ &c.symbol }</span>
                <span style={format!("font-size:10px; font-weight:600; color:{};", rarity_color(c.rarity))}>{ c.rarity.label() }</span>
            </div>
            <span style="font-size:13px; font-weight:500;">{ &c.name }</span>
            <div style="display:flex; justify-content:space-between; font-size:11px; opacity:0.75; margin-top:auto;">
                <span>{ c.category.label() }</span>
                <span>{ format!("{} pts", c.points) }</span>
            </div>
        </div>
    }
}

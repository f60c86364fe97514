use super::compound_card::CompoundCard;
use crate::model::{Category, Compound, CompoundId};
use crate::state::{categories_present, DiscoveryFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DiscoveryTabProps {
    pub title: AttrValue,
    pub compounds: Vec<Compound>,
    pub show_hints: bool,
    pub on_pick: Callback<CompoundId>,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

#[function_component]
pub fn DiscoveryTab(props: &DiscoveryTabProps) -> Html {
    let filter = use_state(DiscoveryFilter::default);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut f = (*filter).clone();
            f.search = input.value();
            filter.set(f);
        })
    };
    let on_category = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut f = (*filter).clone();
            f.category = Category::from_label(&select.value());
            filter.set(f);
        })
    };
    let on_toggle_discovered = {
        let filter = filter.clone();
        Callback::from(move |_| {
            let mut f = (*filter).clone();
            f.discovered_only = !f.discovered_only;
            filter.set(f);
        })
    };

    let discovered = props.compounds.iter().filter(|c| c.discovered).count();
    let shown = filter.apply(&props.compounds);
    let empty_message = props
        .empty_message
        .clone()
        .unwrap_or_else(|| AttrValue::from("No compounds match your filters."));

    html! {
        <div style="display:flex; flex-direction:column; gap:12px; min-width:0;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{ props.title.clone() }</h3>
                <span style="font-size:13px; font-variant-numeric:tabular-nums; opacity:0.8;">{ format!("{}/{}", discovered, props.compounds.len()) }</span>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap; align-items:center;">
                <input type="text" placeholder="Search name or symbol" value={filter.search.clone()} oninput={on_search} style="flex:1; min-width:140px; padding:4px 8px;" />
                <select onchange={on_category} style="padding:4px 8px;">
                    <option value="" selected={filter.category.is_none()}>{"All categories"}</option>
                    { for categories_present(&props.compounds).into_iter().map(|c| html! {
                        <option value={c.label()} selected={filter.category == Some(c)}>{ c.label() }</option>
                    }) }
                </select>
                <label style="display:flex; align-items:center; gap:6px; cursor:pointer; font-size:13px;">
                    <input type="checkbox" checked={filter.discovered_only} onclick={on_toggle_discovered} />
                    <span>{"Discovered only"}</span>
                </label>
            </div>
            if shown.is_empty() {
                <div style="padding:24px; text-align:center; opacity:0.6; font-size:13px;">{ empty_message }</div>
            } else {
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(120px, 1fr)); gap:8px;">
                    { for shown.into_iter().map(|c| html! {
                        <CompoundCard
                            key={c.id.to_string()}
                            compound={c.clone()}
                            show_hint={props.show_hints}
                            on_pick={Some(props.on_pick.clone())}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

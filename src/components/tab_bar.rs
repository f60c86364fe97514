use crate::state::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn TabBar(props: &TabBarProps) -> Html {
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="display:flex; gap:6px; flex-wrap:wrap; align-items:center; border-bottom:1px solid #30363d; padding-bottom:8px;">
            { for Tab::ALL.into_iter().map(|tab| {
                let cb = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| cb.emit(tab));
                let style = if tab == props.active {
                    "background:#1f6feb; border:1px solid #388bfd; color:#fff;"
                } else {
                    "background:#21262d; border:1px solid #30363d;"
                };
                html! {
                    <button onclick={onclick} style={format!("{style} padding:6px 12px; border-radius:6px;")}>
                        { format!("{} {}", tab.icon(), tab.label()) }
                    </button>
                }
            }) }
            <button onclick={settings_cb} style="margin-left:auto; padding:6px 10px;">{"⚙ Settings"}</button>
        </div>
    }
}

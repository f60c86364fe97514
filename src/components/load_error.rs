use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Shown instead of the lab when the embedded data cannot be loaded.
#[function_component]
pub fn LoadError(props: &LoadErrorProps) -> Html {
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; max-width:520px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Lab unavailable"}</h2>
            <p style="margin:4px 0; font-family:monospace; font-size:13px;">{ props.message.clone() }</p>
            <p style="margin:12px 0 0 0; font-size:12px; opacity:0.7;">{"See the browser console for details."}</p>
        </div>
    }
}

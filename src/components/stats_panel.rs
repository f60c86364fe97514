use crate::progress::LabSummary;
use crate::util::format_points;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub summary: LabSummary,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let s = &props.summary;
    let cell_style = "display:flex; align-items:center; gap:6px;"; // icon | label | value
    let label_style = "font-weight:500; opacity:0.8;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 14px; display:flex; flex-wrap:wrap; gap:18px; font-size:14px;">
            <div style={format!("{} color:#d4af37;", cell_style)} title={format!("{} from compounds, {} from achievements", s.compound_points, s.achievement_points)}>
                <span>{"⭐"}</span>
                <span style={label_style}>{"Score"}</span>
                <span style={value_style}>{ format_points(s.total_score) }</span>
            </div>
            <div style={format!("{} color:#58a6ff;", cell_style)}>
                <span>{"🧪"}</span>
                <span style={label_style}>{"Compounds"}</span>
                <span style={value_style}>{ format!("{}/{}", s.discovered, s.total_compounds) }</span>
            </div>
            <div style={format!("{} color:#3fb950;", cell_style)}>
                <span>{"⚗️"}</span>
                <span style={label_style}>{"Reactions"}</span>
                <span style={value_style}>{ s.reactions }</span>
            </div>
            <div style={format!("{} color:#a371f7;", cell_style)}>
                <span>{"🏆"}</span>
                <span style={label_style}>{"Achievements"}</span>
                <span style={value_style}>{ format!("{}/{}", s.unlocked, s.total_achievements) }</span>
            </div>
        </div>
    }
}

use crate::model::Achievement;
use crate::progress::{AchievementProgress, LabSummary};
use crate::util::format_points;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AchievementsViewProps {
    pub achievements: Vec<Achievement>,
    /// Same order as `achievements`.
    pub progress: Vec<AchievementProgress>,
    pub summary: LabSummary,
}

#[function_component]
pub fn AchievementsView(props: &AchievementsViewProps) -> Html {
    let s = &props.summary;
    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Achievements"}</h3>
                <span style="font-size:13px; opacity:0.8;">
                    { format!("{}/{} unlocked · {} pts", s.unlocked, s.total_achievements, format_points(s.achievement_points)) }
                </span>
            </div>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(220px, 1fr)); gap:10px;">
                { for props.achievements.iter().zip(props.progress.iter()).map(|(a, p)| {
                    let (border, fill, opacity) = if p.unlocked {
                        ("#d4af37", "#d4af37", "1")
                    } else {
                        ("#30363d", "#58a6ff", "0.75")
                    };
                    html! {
                        <div key={a.id.to_string()} style={format!("background:#161b22; border:1px solid {border}; border-radius:8px; padding:10px 12px; display:flex; flex-direction:column; gap:6px; opacity:{opacity};")}>
                            <div style="display:flex; align-items:center; gap:8px;">
                                <span style="font-size:22px;">{ &a.icon }</span>
                                <div style="display:flex; flex-direction:column; flex:1;">
                                    <span style="font-weight:600; font-size:13px;">{ &a.name }</span>
                                    <span style="font-size:11px; opacity:0.75;">{ &a.description }</span>
                                </div>
                                <span style="font-size:12px; color:#d4af37;">{ format!("+{}", a.points) }</span>
                            </div>
                            <div style="font-size:11px; opacity:0.7;">{ &a.requirement }</div>
                            <div style="height:6px; background:#0d1117; border-radius:3px; overflow:hidden;">
                                <div style={format!("height:100%; width:{}%; background:{fill};", p.percent())}></div>
                            </div>
                            <div style="display:flex; justify-content:space-between; font-size:11px; font-variant-numeric:tabular-nums;">
                                <span>{ format!("{}/{}", p.progress, p.target) }</span>
                                if p.unlocked {
                                    <span style="color:#d4af37;">{"🏆 Unlocked"}</span>
                                } else {
                                    <span>{ format!("{}%", p.percent()) }</span>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

use super::{
    achievements_view::AchievementsView, compound_modal::CompoundModal,
    discovery_tab::DiscoveryTab, reaction_flask::ReactionFlask, reaction_guide::ReactionGuide,
    settings_modal::SettingsModal, stats_panel::StatsPanel, tab_bar::TabBar,
    toast_stack::ToastStack,
};
use crate::catalog::LabData;
use crate::config::LabConfig;
use crate::model::{Compound, CompoundId, LabAction, LabState};
use crate::progress::{self, LabSummary};
use crate::state::{
    flask_full_toast, toasts_for_report, Flask, FlaskAction, Tab, ToastAction, ToastQueue,
};
use crate::util::now_ms;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub data: Rc<LabData>,
    pub config: Rc<LabConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let lab = {
        let data = props.data.clone();
        use_reducer(move || LabState::new(data))
    };
    let flask = {
        let capacity = config.flask_capacity;
        use_reducer(move || Flask::with_capacity(capacity))
    };
    let toasts = use_reducer(ToastQueue::default);
    let tab = {
        let start = config.start_tab;
        use_state(move || start)
    };
    let selected = use_state(|| None::<CompoundId>);
    let show_settings = use_state(|| false);
    let show_hints = {
        let hints = config.show_synthesis_hints;
        use_state(move || hints)
    };

    // Narrate each new reaction report once; a success consumes the submitted slots
    {
        let lab = lab.clone();
        let flask = flask.clone();
        let toasts = toasts.clone();
        let config = config.clone();
        use_effect_with(lab.reaction_seq(), move |_| {
            if let Some(report) = &lab.last_reaction {
                if report.result.success() {
                    flask.dispatch(FlaskAction::Take(report.submitted.clone()));
                }
                toasts.dispatch(ToastAction::Push {
                    specs: toasts_for_report(report, &lab.data, &config),
                    now: now_ms(),
                });
            }
            || ()
        });
    }

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |t: Tab| tab.set(t))
    };
    let on_add = {
        let flask = flask.clone();
        let toasts = toasts.clone();
        let config = config.clone();
        Callback::from(move |id: CompoundId| {
            if flask.is_full() {
                toasts.dispatch(ToastAction::Push {
                    specs: vec![flask_full_toast(flask.capacity, &config)],
                    now: now_ms(),
                });
                return;
            }
            flask.dispatch(FlaskAction::Add(id));
        })
    };
    let on_remove = {
        let flask = flask.clone();
        Callback::from(move |idx: usize| flask.dispatch(FlaskAction::Remove(idx)))
    };
    let on_clear = {
        let flask = flask.clone();
        Callback::from(move |_| flask.dispatch(FlaskAction::Clear))
    };
    let on_react = {
        let lab = lab.clone();
        let epoch = lab.epoch;
        Callback::from(move |ids: Vec<CompoundId>| {
            lab.dispatch(LabAction::AttemptReaction { ids, epoch })
        })
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: CompoundId| selected.set(Some(id)))
    };
    let on_close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    let on_tick = {
        let toasts = toasts.clone();
        Callback::from(move |now: f64| toasts.dispatch(ToastAction::Expire { now }))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let toggle_hints = {
        let show_hints = show_hints.clone();
        Callback::from(move |_| show_hints.set(!*show_hints))
    };
    let on_reset = {
        let lab = lab.clone();
        let flask = flask.clone();
        let selected = selected.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |_| {
            lab.dispatch(LabAction::Reset);
            flask.dispatch(FlaskAction::Clear);
            selected.set(None);
            show_settings.set(false);
        })
    };

    let session = &lab.session;
    let achievements = &lab.data.achievements;
    let summary = LabSummary::compute(achievements, session);

    let content = match *tab {
        Tab::Lab => {
            let inventory: Vec<Compound> = session.discovered().cloned().collect();
            let contents: Vec<Compound> = flask
                .slots
                .iter()
                .filter_map(|id| session.compound(id).cloned())
                .collect();
            let last_outcome = lab
                .last_reaction
                .as_ref()
                .map(|r| (r.seq, r.result.success()));
            html! {
                <div style="display:grid; grid-template-columns:minmax(0, 2fr) minmax(260px, 1fr); gap:16px; align-items:start;">
                    <DiscoveryTab
                        title="Inventory"
                        compounds={inventory}
                        show_hints={*show_hints}
                        on_pick={on_add}
                        empty_message={AttrValue::from("Nothing here yet.")}
                    />
                    <ReactionFlask
                        key={lab.epoch}
                        {contents}
                        capacity={flask.capacity}
                        can_react={flask.can_react()}
                        delay_ms={config.reaction_delay_ms}
                        {last_outcome}
                        {on_react}
                        {on_remove}
                        {on_clear}
                    />
                </div>
            }
        }
        Tab::Discovery => html! {
            <DiscoveryTab
                title="Compound Discovery"
                compounds={session.compounds.clone()}
                show_hints={*show_hints}
                on_pick={on_select}
            />
        },
        Tab::Reactions => html! {
            <ReactionGuide recipes={lab.data.recipes.clone()} session={session.clone()} />
        },
        Tab::Achievements => html! {
            <AchievementsView
                achievements={achievements.clone()}
                progress={progress::snapshot(achievements, session)}
                {summary}
            />
        },
    };

    let modal_compound = (*selected).as_ref().and_then(|id| session.compound(id).cloned());

    html! {
        <div style="max-width:1100px; margin:0 auto; padding:16px; display:flex; flex-direction:column; gap:14px; color:#e6edf3; font-family:system-ui, sans-serif;">
            <div style="display:flex; justify-content:space-between; align-items:center; flex-wrap:wrap; gap:12px;">
                <h1 style="margin:0; font-size:22px; color:#58a6ff;">{"🧪 Chemistry Lab"}</h1>
                <StatsPanel {summary} />
            </div>
            <TabBar active={*tab} on_select={on_tab} on_open_settings={open_settings} />
            { content }
            <CompoundModal compound={modal_compound} on_close={on_close_modal} />
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                show_hints={*show_hints}
                on_toggle_hints={toggle_hints}
                {on_reset}
            />
            <ToastStack toasts={toasts.toasts.clone()} {on_dismiss} {on_tick} />
        </div>
    }
}

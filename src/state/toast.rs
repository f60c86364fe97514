// Notification queue and the messages a reaction report produces
use std::rc::Rc;
use yew::Reducible;

use crate::catalog::LabData;
use crate::config::LabConfig;
use crate::engine::ReactionOutcome;
use crate::model::ReactionReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
    Achievement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastSpec {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    /// Milliseconds on the same clock as the `now` passed to actions.
    pub expires_at: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

#[derive(Clone, Debug)]
pub enum ToastAction {
    Push { specs: Vec<ToastSpec>, now: f64 },
    Expire { now: f64 },
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { specs, now } => {
                if specs.is_empty() {
                    return self;
                }
                let mut new = (*self).clone();
                for spec in specs {
                    new.next_id += 1;
                    new.toasts.push(Toast {
                        id: new.next_id,
                        kind: spec.kind,
                        title: spec.title,
                        body: spec.body,
                        expires_at: now + spec.duration_ms as f64,
                    });
                }
                Rc::new(new)
            }
            ToastAction::Expire { now } => {
                if !self.toasts.iter().any(|t| t.expires_at <= now) {
                    return self;
                }
                let mut new = (*self).clone();
                new.toasts.retain(|t| t.expires_at > now);
                Rc::new(new)
            }
            ToastAction::Dismiss(id) => {
                let mut new = (*self).clone();
                new.toasts.retain(|t| t.id != id);
                Rc::new(new)
            }
        }
    }
}

/// Notifications for one reaction submission, in display order.
pub fn toasts_for_report(report: &ReactionReport, data: &LabData, config: &LabConfig) -> Vec<ToastSpec> {
    let mut out = Vec::new();
    let product = report
        .result
        .output
        .as_ref()
        .and_then(|id| data.compound(id))
        .map(|c| c.name.clone())
        .unwrap_or_default();
    match report.result.outcome {
        ReactionOutcome::Discovered => {
            out.push(ToastSpec {
                kind: ToastKind::Success,
                title: "New Compound Discovered! ✨".to_string(),
                body: format!(
                    "You discovered {} (+{} points)",
                    product, report.result.points_awarded
                ),
                duration_ms: config.toast_ms,
            });
            out.push(ToastSpec {
                kind: ToastKind::Success,
                title: "Reaction Successful! ⚗️".to_string(),
                body: format!("Created {}!", product),
                duration_ms: config.toast_ms,
            });
        }
        ReactionOutcome::Repeat => out.push(ToastSpec {
            kind: ToastKind::Info,
            title: "Reaction Complete ✅".to_string(),
            body: format!("You already know how to make {}", product),
            duration_ms: config.short_toast_ms,
        }),
        ReactionOutcome::NoMatch => out.push(ToastSpec {
            kind: ToastKind::Error,
            title: "Reaction Failed ❌".to_string(),
            body: "These compounds don't react together".to_string(),
            duration_ms: config.short_toast_ms,
        }),
        ReactionOutcome::Invalid => out.push(ToastSpec {
            kind: ToastKind::Error,
            title: "Not enough compounds".to_string(),
            body: "Add at least two compounds to the flask".to_string(),
            duration_ms: config.short_toast_ms,
        }),
    }
    for id in &report.newly_unlocked {
        if let Some(a) = data.achievements.iter().find(|a| &a.id == id) {
            out.push(ToastSpec {
                kind: ToastKind::Achievement,
                title: "Achievement Unlocked! 🏆".to_string(),
                body: format!("{} (+{} points)", a.name, a.points),
                duration_ms: config.achievement_toast_ms,
            });
        }
    }
    out
}

pub fn flask_full_toast(capacity: usize, config: &LabConfig) -> ToastSpec {
    ToastSpec {
        kind: ToastKind::Info,
        title: "Flask is full".to_string(),
        body: format!("The flask holds at most {} compounds", capacity),
        duration_ms: config.short_toast_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReactionResult;
    use crate::test_support::water_lab;

    fn report(outcome: ReactionOutcome, unlocked: &[&str]) -> ReactionReport {
        let success = matches!(outcome, ReactionOutcome::Discovered | ReactionOutcome::Repeat);
        ReactionReport {
            seq: 1,
            submitted: Vec::new(),
            result: ReactionResult {
                outcome,
                recipe: success.then(|| "water".into()),
                output: success.then(|| "h2o".into()),
                points_awarded: if outcome == ReactionOutcome::Discovered { 10 } else { 0 },
            },
            newly_unlocked: unlocked.iter().map(|s| (*s).into()).collect(),
        }
    }

    #[test]
    fn discovery_produces_discovery_and_achievement_toasts() {
        let data = water_lab();
        let config = LabConfig::default();
        let specs = toasts_for_report(&report(ReactionOutcome::Discovered, &["collector"]), &data, &config);
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].body, "You discovered H2O (+10 points)");
        assert_eq!(specs[1].body, "Created H2O!");
        assert_eq!(specs[2].kind, ToastKind::Achievement);
        assert_eq!(specs[2].body, "collector (+500 points)");
        assert_eq!(specs[2].duration_ms, config.achievement_toast_ms);
    }

    #[test]
    fn failure_kinds_are_distinct() {
        let data = water_lab();
        let config = LabConfig::default();
        let miss = toasts_for_report(&report(ReactionOutcome::NoMatch, &[]), &data, &config);
        let bad = toasts_for_report(&report(ReactionOutcome::Invalid, &[]), &data, &config);
        assert_eq!(miss.len(), 1);
        assert_eq!(bad.len(), 1);
        assert_ne!(miss[0].title, bad[0].title);
        assert_eq!(miss[0].kind, ToastKind::Error);
    }

    #[test]
    fn repeat_mentions_known_product() {
        let data = water_lab();
        let specs = toasts_for_report(&report(ReactionOutcome::Repeat, &[]), &data, &LabConfig::default());
        assert_eq!(specs[0].kind, ToastKind::Info);
        assert_eq!(specs[0].body, "You already know how to make H2O");
    }

    #[test]
    fn flask_full_names_capacity() {
        let spec = flask_full_toast(12, &LabConfig::default());
        assert_eq!(spec.body, "The flask holds at most 12 compounds");
        assert_eq!(spec.kind, ToastKind::Info);
    }

    #[test]
    fn queue_push_expire_dismiss() {
        let spec = |ms| ToastSpec {
            kind: ToastKind::Info,
            title: "t".to_string(),
            body: "b".to_string(),
            duration_ms: ms,
        };
        let q = Rc::new(ToastQueue::default());
        let q = q.reduce(ToastAction::Push {
            specs: vec![spec(1000), spec(3000)],
            now: 500.0,
        });
        assert_eq!(q.toasts.len(), 2);
        assert_eq!(q.toasts[0].id, 1);
        assert_eq!(q.toasts[1].expires_at, 3500.0);

        let unchanged = q.clone().reduce(ToastAction::Expire { now: 1000.0 });
        assert!(Rc::ptr_eq(&q, &unchanged));
        let q = unchanged.reduce(ToastAction::Expire { now: 1500.0 });
        assert_eq!(q.toasts.len(), 1);
        assert_eq!(q.toasts[0].id, 2);

        let q = q.reduce(ToastAction::Dismiss(2));
        assert!(q.toasts.is_empty());
    }
}

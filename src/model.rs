//! Core data models for the chemistry lab.
//! Static tables (compounds, recipes, achievements), the live session state,
//! and the reducer that is the only writer of that session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use crate::catalog::LabData;
use crate::engine::{attempt_reaction, ReactionResult};
use crate::progress;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementId(pub String);

impl From<&str> for CompoundId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for AchievementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Element,
    Acid,
    Base,
    Salt,
    Gas,
    Organic,
    Mineral,
    Oxide,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Element,
        Category::Acid,
        Category::Base,
        Category::Salt,
        Category::Gas,
        Category::Organic,
        Category::Mineral,
        Category::Oxide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Element => "Element",
            Category::Acid => "Acid",
            Category::Base => "Base",
            Category::Salt => "Salt",
            Category::Gas => "Gas",
            Category::Organic => "Organic",
            Category::Mineral => "Mineral",
            Category::Oxide => "Oxide",
        }
    }

    /// Inverse of [`Category::label`]; used by the category `<select>`.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Informational only; never consulted by matching or scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Uncommon => "UNCOMMON",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compound {
    pub id: CompoundId,
    pub name: String,
    pub symbol: String,
    pub category: Category,
    pub rarity: Rarity,
    pub description: String,
    /// Display string, e.g. "18.015g/mol".
    pub molecular_weight: String,
    /// Awarded once, on first discovery.
    pub points: u32,
    #[serde(default)]
    pub uses: Vec<String>,
    /// Seed elements start discovered; everything else starts locked.
    pub discovered: bool,
    #[serde(default)]
    pub synthesis_hint: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    /// Order-independent; duplicates are significant.
    pub inputs: Vec<CompoundId>,
    pub output: CompoundId,
    pub name: String,
    pub description: String,
}

impl Recipe {
    pub fn input_multiset(&self) -> Multiset {
        Multiset::from_ids(&self.inputs)
    }
}

/// Frequency-counted bag of compound ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiset(BTreeMap<CompoundId, u32>);

impl Multiset {
    pub fn from_ids(ids: &[CompoundId]) -> Self {
        let mut counts = BTreeMap::new();
        for id in ids {
            *counts.entry(id.clone()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn len(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, id: &CompoundId) -> u32 {
        self.0.get(id).copied().unwrap_or(0)
    }
}

/// Progress rule of an achievement. Targets are derived live from the
/// catalog, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum AchievementRule {
    /// `min(discovered, 1)` against a target of 1.
    FirstDiscovery,
    /// Every compound of one category.
    CategoryComplete { category: Category },
    /// Every compound in the catalog.
    AllCompounds,
    /// `min(completed_reactions, threshold)` against `threshold`.
    ReactionCount { threshold: u32 },
    /// Every other non-meta achievement.
    AllOthers,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub requirement: String,
    pub points: u32,
    pub icon: String,
    #[serde(flatten)]
    pub rule: AchievementRule,
}

/// Live, mutable part of a lab session. Written only by
/// [`attempt_reaction`]; everything else reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub compounds: Vec<Compound>,
    pub completed_reactions: u32,
}

impl SessionState {
    pub fn new(compounds: Vec<Compound>) -> Self {
        Self {
            compounds,
            completed_reactions: 0,
        }
    }

    pub fn compound(&self, id: &CompoundId) -> Option<&Compound> {
        self.compounds.iter().find(|c| &c.id == id)
    }

    pub(crate) fn compound_mut(&mut self, id: &CompoundId) -> Option<&mut Compound> {
        self.compounds.iter_mut().find(|c| &c.id == id)
    }

    pub fn is_discovered(&self, id: &CompoundId) -> bool {
        self.compound(id).is_some_and(|c| c.discovered)
    }

    pub fn discovered(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.iter().filter(|c| c.discovered)
    }

    pub fn discovered_count(&self) -> u32 {
        self.discovered().count() as u32
    }

    pub fn total_count(&self) -> u32 {
        self.compounds.len() as u32
    }

    pub fn category_count(&self, category: Category) -> u32 {
        self.compounds.iter().filter(|c| c.category == category).count() as u32
    }

    pub fn discovered_in_category(&self, category: Category) -> u32 {
        self.discovered().filter(|c| c.category == category).count() as u32
    }
}

/// What the UI needs to narrate one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionReport {
    pub seq: u64,
    /// The ids as submitted, in flask order.
    pub submitted: Vec<CompoundId>,
    pub result: ReactionResult,
    pub newly_unlocked: Vec<AchievementId>,
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum LabAction {
    /// `epoch` is the session the submission was made in; stale ones are dropped.
    AttemptReaction { ids: Vec<CompoundId>, epoch: u64 },
    /// Back to the initial catalog; nothing is kept.
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabState {
    pub data: Rc<LabData>,
    pub session: SessionState,
    /// Kept across a reset so report sequence numbers never repeat.
    pub last_reaction: Option<ReactionReport>,
    /// Bumped by every reset.
    pub epoch: u64,
}

impl LabState {
    pub fn new(data: Rc<LabData>) -> Self {
        let session = data.initial_session();
        Self {
            data,
            session,
            last_reaction: None,
            epoch: 0,
        }
    }

    pub fn reaction_seq(&self) -> u64 {
        self.last_reaction.as_ref().map(|r| r.seq).unwrap_or(0)
    }
}

impl Reducible for LabState {
    type Action = LabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LabAction::*;
        if let AttemptReaction { epoch, .. } = &action {
            if *epoch != self.epoch {
                log::debug!("dropping submission from session {} (now {})", epoch, self.epoch);
                return self;
            }
        }
        let mut new = (*self).clone();
        match action {
            AttemptReaction { ids, .. } => {
                let achievements = &new.data.achievements;
                let before = progress::unlocked_ids(achievements, &new.session);
                let result = attempt_reaction(&mut new.session, &new.data.recipes, &ids);
                let after = progress::unlocked_ids(achievements, &new.session);
                let newly_unlocked = progress::newly_unlocked(&before, &after);
                log::debug!(
                    "reaction {:?} -> {:?} (+{} pts, {} unlocked)",
                    ids,
                    result.outcome,
                    result.points_awarded,
                    newly_unlocked.len()
                );
                new.last_reaction = Some(ReactionReport {
                    seq: self.reaction_seq() + 1,
                    submitted: ids,
                    result,
                    newly_unlocked,
                });
            }
            Reset => {
                new.session = new.data.initial_session();
                new.epoch = new.epoch.wrapping_add(1);
                log::info!("lab reset to initial catalog");
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReactionOutcome;
    use crate::test_support::{compound, water_lab};

    #[test]
    fn multiset_counts_duplicates() {
        let ids: Vec<CompoundId> = ["h", "o", "h"].into_iter().map(CompoundId::from).collect();
        let m = Multiset::from_ids(&ids);
        assert_eq!(m.len(), 3);
        assert_eq!(m.count(&"h".into()), 2);
        assert_eq!(m.count(&"o".into()), 1);
        assert_eq!(m.count(&"c".into()), 0);
        assert!(!m.is_empty());
    }

    #[test]
    fn category_counts_follow_catalog() {
        let session = SessionState::new(vec![
            compound("h", Category::Element, 0, true),
            compound("o", Category::Element, 0, true),
            compound("h2o", Category::Mineral, 10, false),
        ]);
        assert_eq!(session.category_count(Category::Element), 2);
        assert_eq!(session.discovered_in_category(Category::Mineral), 0);
        assert_eq!(session.discovered_count(), 2);
        assert_eq!(session.total_count(), 3);
    }

    #[test]
    fn category_label_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("Plasma"), None);
    }

    #[test]
    fn rule_parses_from_tagged_json() {
        let raw = r#"{"id":"gas_master","name":"Gas Master","description":"d","requirement":"r",
            "points":100,"icon":"g","rule":"category_complete","category":"Gas"}"#;
        let a: Achievement = serde_json::from_str(raw).unwrap();
        assert_eq!(
            a.rule,
            AchievementRule::CategoryComplete {
                category: Category::Gas
            }
        );
    }

    #[test]
    fn reducer_records_numbered_report() {
        let state = Rc::new(LabState::new(Rc::new(water_lab())));
        let ids = vec!["h".into(), "h".into(), "o".into()];
        let state = state.reduce(LabAction::AttemptReaction { ids, epoch: 0 });
        let report = state.last_reaction.clone().unwrap();
        assert_eq!(report.seq, 1);
        assert_eq!(report.result.outcome, ReactionOutcome::Discovered);
        assert!(state.session.is_discovered(&"h2o".into()));
    }

    #[test]
    fn reducer_reports_newly_unlocked_achievements() {
        let state = Rc::new(LabState::new(Rc::new(water_lab())));
        let ids = vec!["h".into(), "h".into(), "o".into()];
        let state = state.reduce(LabAction::AttemptReaction { ids: ids.clone(), epoch: 0 });
        let first = state.last_reaction.clone().unwrap();
        assert!(first.newly_unlocked.contains(&"collector".into()));

        let state = state.reduce(LabAction::AttemptReaction { ids, epoch: 0 });
        let second = state.last_reaction.clone().unwrap();
        assert_eq!(second.seq, 2);
        assert_eq!(second.result.outcome, ReactionOutcome::Repeat);
        assert!(!second.newly_unlocked.contains(&"collector".into()));
    }

    #[test]
    fn reset_restores_initial_catalog() {
        let state = Rc::new(LabState::new(Rc::new(water_lab())));
        let ids = vec!["h".into(), "h".into(), "o".into()];
        let state = state.reduce(LabAction::AttemptReaction { ids, epoch: 0 });
        let state = state.reduce(LabAction::Reset);
        assert!(!state.session.is_discovered(&"h2o".into()));
        assert_eq!(state.session.completed_reactions, 0);
        assert_eq!(state.reaction_seq(), 1);
    }

    #[test]
    fn submission_from_before_reset_is_dropped() {
        let state = Rc::new(LabState::new(Rc::new(water_lab())));
        let stale = LabAction::AttemptReaction {
            ids: vec!["h".into(), "h".into(), "o".into()],
            epoch: state.epoch,
        };
        let state = state.reduce(LabAction::Reset);
        assert_eq!(state.epoch, 1);

        let after = state.clone().reduce(stale);
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.session.is_discovered(&"h2o".into()));
        assert_eq!(after.session.completed_reactions, 0);
        assert_eq!(after.reaction_seq(), 0);

        let fresh = after.reduce(LabAction::AttemptReaction {
            ids: vec!["h".into(), "h".into(), "o".into()],
            epoch: 1,
        });
        assert!(fresh.session.is_discovered(&"h2o".into()));
    }
}

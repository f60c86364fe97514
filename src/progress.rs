//! Progression tracker. Everything here is a pure function of the session and
//! the static tables; nothing is cached between calls.

use crate::model::{Achievement, AchievementId, AchievementRule, SessionState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementProgress {
    pub id: AchievementId,
    pub progress: u32,
    pub target: u32,
    pub unlocked: bool,
}

impl AchievementProgress {
    /// Fill ratio for a progress bar, 0..=100. Nothing to earn reads as full.
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 100;
        }
        (self.progress.min(self.target) as u64 * 100 / self.target as u64) as u32
    }
}

fn is_meta(a: &Achievement) -> bool {
    matches!(a.rule, AchievementRule::AllOthers)
}

/// Achievements a meta rule counts: everything except itself and other meta
/// rules, so evaluation never recurses.
fn counted_by_meta<'a>(
    meta: &'a Achievement,
    achievements: &'a [Achievement],
) -> impl Iterator<Item = &'a Achievement> {
    achievements
        .iter()
        .filter(move |a| a.id != meta.id && !is_meta(a))
}

pub fn progress_for(
    achievement: &Achievement,
    achievements: &[Achievement],
    session: &SessionState,
) -> u32 {
    match &achievement.rule {
        AchievementRule::FirstDiscovery => session.discovered_count().min(1),
        AchievementRule::CategoryComplete { category } => {
            session.discovered_in_category(*category)
        }
        AchievementRule::AllCompounds => session.discovered_count(),
        AchievementRule::ReactionCount { threshold } => {
            session.completed_reactions.min(*threshold)
        }
        AchievementRule::AllOthers => counted_by_meta(achievement, achievements)
            .filter(|a| is_unlocked(a, achievements, session))
            .count() as u32,
    }
}

pub fn target_for(
    achievement: &Achievement,
    achievements: &[Achievement],
    session: &SessionState,
) -> u32 {
    match &achievement.rule {
        AchievementRule::FirstDiscovery => 1,
        AchievementRule::CategoryComplete { category } => session.category_count(*category),
        AchievementRule::AllCompounds => session.total_count(),
        AchievementRule::ReactionCount { threshold } => *threshold,
        AchievementRule::AllOthers => counted_by_meta(achievement, achievements).count() as u32,
    }
}

/// `progress >= target`, so a rule with nothing to earn (target 0) is
/// already met.
pub fn is_unlocked(
    achievement: &Achievement,
    achievements: &[Achievement],
    session: &SessionState,
) -> bool {
    progress_for(achievement, achievements, session) >= target_for(achievement, achievements, session)
}

pub fn snapshot(achievements: &[Achievement], session: &SessionState) -> Vec<AchievementProgress> {
    achievements
        .iter()
        .map(|a| {
            let progress = progress_for(a, achievements, session);
            let target = target_for(a, achievements, session);
            AchievementProgress {
                id: a.id.clone(),
                progress,
                target,
                unlocked: progress >= target,
            }
        })
        .collect()
}

/// Unlocked achievement ids, in table order.
pub fn unlocked_ids(achievements: &[Achievement], session: &SessionState) -> Vec<AchievementId> {
    achievements
        .iter()
        .filter(|a| is_unlocked(a, achievements, session))
        .map(|a| a.id.clone())
        .collect()
}

/// Ids present in `after` but not in `before`, keeping `after`'s order.
pub fn newly_unlocked(before: &[AchievementId], after: &[AchievementId]) -> Vec<AchievementId> {
    after
        .iter()
        .filter(|id| !before.contains(id))
        .cloned()
        .collect()
}

pub fn compound_points(session: &SessionState) -> u64 {
    session.discovered().map(|c| c.points as u64).sum()
}

pub fn achievement_points(achievements: &[Achievement], session: &SessionState) -> u64 {
    achievements
        .iter()
        .filter(|a| is_unlocked(a, achievements, session))
        .map(|a| a.points as u64)
        .sum()
}

pub fn total_score(achievements: &[Achievement], session: &SessionState) -> u64 {
    compound_points(session) + achievement_points(achievements, session)
}

/// Header numbers for the lab view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabSummary {
    pub total_score: u64,
    pub compound_points: u64,
    pub achievement_points: u64,
    pub discovered: u32,
    pub total_compounds: u32,
    pub reactions: u32,
    pub unlocked: u32,
    pub total_achievements: u32,
}

impl LabSummary {
    pub fn compute(achievements: &[Achievement], session: &SessionState) -> Self {
        let compound_points = compound_points(session);
        let achievement_points = achievement_points(achievements, session);
        Self {
            total_score: compound_points + achievement_points,
            compound_points,
            achievement_points,
            discovered: session.discovered_count(),
            total_compounds: session.total_count(),
            reactions: session.completed_reactions,
            unlocked: unlocked_ids(achievements, session).len() as u32,
            total_achievements: achievements.len() as u32,
        }
    }
}

//! Reaction engine: resolves a submitted set of compounds against the recipe
//! table and applies the resulting discovery.

use crate::model::{CompoundId, Multiset, Recipe, RecipeId, SessionState};

/// Smallest submission the engine will try to match.
pub const MIN_REACTANTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Too few compounds; rejected before matching.
    Invalid,
    /// Well-formed submission that matches no recipe.
    NoMatch,
    /// Matched, and the product was new.
    Discovered,
    /// Matched a product that was already known.
    Repeat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionResult {
    pub outcome: ReactionOutcome,
    pub recipe: Option<RecipeId>,
    pub output: Option<CompoundId>,
    pub points_awarded: u32,
}

impl ReactionResult {
    fn failed(outcome: ReactionOutcome) -> Self {
        Self {
            outcome,
            recipe: None,
            output: None,
            points_awarded: 0,
        }
    }

    pub fn success(&self) -> bool {
        matches!(
            self.outcome,
            ReactionOutcome::Discovered | ReactionOutcome::Repeat
        )
    }

    pub fn newly_discovered(&self) -> bool {
        self.outcome == ReactionOutcome::Discovered
    }
}

/// First recipe (table order) whose input multiset equals `submitted`.
pub fn find_recipe<'a>(recipes: &'a [Recipe], submitted: &Multiset) -> Option<&'a Recipe> {
    recipes.iter().find(|r| &r.input_multiset() == submitted)
}

/// Try to react `submitted` in the flask.
///
/// Never fails: bad input comes back as [`ReactionOutcome::Invalid`] and
/// anything that does not resolve (unknown or still-locked compounds, a recipe
/// whose product is missing from the catalog) as [`ReactionOutcome::NoMatch`].
/// Only a successful match mutates `session`.
pub fn attempt_reaction(
    session: &mut SessionState,
    recipes: &[Recipe],
    submitted: &[CompoundId],
) -> ReactionResult {
    if submitted.len() < MIN_REACTANTS {
        return ReactionResult::failed(ReactionOutcome::Invalid);
    }
    if !submitted.iter().all(|id| session.is_discovered(id)) {
        return ReactionResult::failed(ReactionOutcome::NoMatch);
    }

    let bag = Multiset::from_ids(submitted);
    let Some(recipe) = find_recipe(recipes, &bag) else {
        return ReactionResult::failed(ReactionOutcome::NoMatch);
    };
    let Some(product) = session.compound_mut(&recipe.output) else {
        log::warn!(
            "recipe {} produces unknown compound {}",
            recipe.id,
            recipe.output
        );
        return ReactionResult::failed(ReactionOutcome::NoMatch);
    };

    let (outcome, points_awarded) = if product.discovered {
        (ReactionOutcome::Repeat, 0)
    } else {
        product.discovered = true;
        (ReactionOutcome::Discovered, product.points)
    };
    session.completed_reactions = session.completed_reactions.saturating_add(1);

    ReactionResult {
        outcome,
        recipe: Some(recipe.id.clone()),
        output: Some(recipe.output.clone()),
        points_awarded,
    }
}

//! Static lab tables loaded from the embedded `lab_data.json`.
//!
//! Parsing failures are hard errors; data-integrity problems (duplicate
//! recipes, dangling ids) are only reported, since the engine already treats
//! them as "first match wins" or "no match".

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Achievement, Compound, CompoundId, Multiset, Recipe, RecipeId, SessionState};

pub const BUILTIN_LAB_DATA: &str = include_str!("data/lab_data.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse lab data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lab data has no compounds")]
    EmptyCatalog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataIssue {
    DuplicateCompound(CompoundId),
    EmptyRecipe(RecipeId),
    UnknownInput { recipe: RecipeId, compound: CompoundId },
    UnknownOutput { recipe: RecipeId, compound: CompoundId },
    /// `shadowed` can never match; `by` comes first with the same inputs.
    DuplicateInputs { shadowed: RecipeId, by: RecipeId },
}

impl std::fmt::Display for DataIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataIssue::DuplicateCompound(id) => write!(f, "compound {id} is defined twice"),
            DataIssue::EmptyRecipe(id) => write!(f, "recipe {id} has no inputs"),
            DataIssue::UnknownInput { recipe, compound } => {
                write!(f, "recipe {recipe} uses unknown compound {compound}")
            }
            DataIssue::UnknownOutput { recipe, compound } => {
                write!(f, "recipe {recipe} produces unknown compound {compound}")
            }
            DataIssue::DuplicateInputs { shadowed, by } => {
                write!(f, "recipe {shadowed} is shadowed by {by} (same inputs)")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LabData {
    pub compounds: Vec<Compound>,
    pub recipes: Vec<Recipe>,
    pub achievements: Vec<Achievement>,
}

impl LabData {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_LAB_DATA)
    }

    /// Parse and sanity-check a lab data document. Integrity issues are
    /// logged, not returned as errors.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let data: LabData = serde_json::from_str(raw)?;
        if data.compounds.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for issue in data.integrity_issues() {
            log::warn!("lab data: {issue}");
        }
        for id in data.unreachable_compounds() {
            log::warn!("lab data: compound {id} cannot be reached from the seed set");
        }
        log::info!(
            "lab data loaded: {} compounds, {} recipes, {} achievements",
            data.compounds.len(),
            data.recipes.len(),
            data.achievements.len()
        );
        Ok(data)
    }

    /// A fresh session on the initial catalog.
    pub fn initial_session(&self) -> SessionState {
        SessionState::new(self.compounds.clone())
    }

    pub fn compound(&self, id: &CompoundId) -> Option<&Compound> {
        self.compounds.iter().find(|c| &c.id == id)
    }

    pub fn integrity_issues(&self) -> Vec<DataIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for c in &self.compounds {
            if !seen.insert(&c.id) {
                issues.push(DataIssue::DuplicateCompound(c.id.clone()));
            }
        }

        let mut bags: Vec<(&RecipeId, Multiset)> = Vec::with_capacity(self.recipes.len());
        for r in &self.recipes {
            if r.inputs.is_empty() {
                issues.push(DataIssue::EmptyRecipe(r.id.clone()));
            }
            for input in r.inputs.iter().collect::<HashSet<_>>() {
                if !seen.contains(input) {
                    issues.push(DataIssue::UnknownInput {
                        recipe: r.id.clone(),
                        compound: input.clone(),
                    });
                }
            }
            if !seen.contains(&r.output) {
                issues.push(DataIssue::UnknownOutput {
                    recipe: r.id.clone(),
                    compound: r.output.clone(),
                });
            }
            let bag = r.input_multiset();
            if let Some((by, _)) = bags.iter().find(|(_, other)| *other == bag) {
                issues.push(DataIssue::DuplicateInputs {
                    shadowed: r.id.clone(),
                    by: (*by).clone(),
                });
            }
            bags.push((&r.id, bag));
        }
        issues
    }

    /// Compounds that can never be discovered from the seed set with the
    /// current recipes.
    pub fn unreachable_compounds(&self) -> Vec<CompoundId> {
        let mut known: HashSet<&CompoundId> = self
            .compounds
            .iter()
            .filter(|c| c.discovered)
            .map(|c| &c.id)
            .collect();
        loop {
            let before = known.len();
            for r in &self.recipes {
                if r.inputs.iter().all(|i| known.contains(i)) {
                    known.insert(&r.output);
                }
            }
            if known.len() == before {
                break;
            }
        }
        self.compounds
            .iter()
            .filter(|c| !known.contains(&c.id))
            .map(|c| c.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{attempt_reaction, ReactionOutcome};
    use crate::model::{AchievementRule, Category};
    use crate::progress;
    use crate::test_support::{compound, ids, recipe};

    #[test]
    fn builtin_data_is_clean() {
        let data = LabData::builtin().unwrap();
        assert_eq!(data.compounds.len(), 40);
        assert_eq!(data.recipes.len(), 29);
        assert_eq!(data.achievements.len(), 12);
        assert_eq!(data.integrity_issues(), Vec::new());
        assert!(data.unreachable_compounds().is_empty());
    }

    #[test]
    fn builtin_seed_is_the_elements() {
        let data = LabData::builtin().unwrap();
        for c in &data.compounds {
            assert_eq!(c.discovered, c.category == Category::Element, "{}", c.id);
            if !c.discovered {
                assert!(c.synthesis_hint.is_some(), "{} has no hint", c.id);
            }
        }
    }

    #[test]
    fn builtin_has_one_meta_achievement() {
        let data = LabData::builtin().unwrap();
        let metas: Vec<_> = data
            .achievements
            .iter()
            .filter(|a| a.rule == AchievementRule::AllOthers)
            .collect();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].id, "chemistry_legend".into());
    }

    #[test]
    fn builtin_glucose_needs_twelve_inputs() {
        let data = LabData::builtin().unwrap();
        let mut session = data.initial_session();
        for step in [
            ids(&["h", "h", "o"]),
            ids(&["c", "o", "o"]),
        ] {
            assert!(attempt_reaction(&mut session, &data.recipes, &step).success());
        }
        let mut glucose = ids(&["co2"; 6]);
        glucose.extend(ids(&["h2o"; 6]));
        let result = attempt_reaction(&mut session, &data.recipes, &glucose);
        assert_eq!(result.outcome, ReactionOutcome::Discovered);
        assert_eq!(result.points_awarded, 100);
    }

    #[test]
    fn builtin_starting_score() {
        let data = LabData::builtin().unwrap();
        let session = data.initial_session();
        let unlocked = progress::unlocked_ids(&data.achievements, &session);
        // Seed elements already satisfy both of these.
        assert_eq!(
            unlocked,
            vec!["first_discovery".into(), "element_master".into()]
        );
        assert_eq!(progress::total_score(&data.achievements, &session), 60);
    }

    #[test]
    fn integrity_issues_are_reported() {
        let data = LabData {
            compounds: vec![
                compound("na", Category::Element, 0, true),
                compound("na", Category::Element, 0, true),
                compound("cl", Category::Element, 0, true),
                compound("nacl", Category::Salt, 20, false),
            ],
            recipes: vec![
                recipe("salt", &["na", "cl"], "nacl"),
                recipe("salt_again", &["cl", "na"], "nacl"),
                recipe("ghost", &["na", "xe"], "naxe"),
                recipe("nothing", &[], "nacl"),
            ],
            achievements: Vec::new(),
        };
        let issues = data.integrity_issues();
        assert!(issues.contains(&DataIssue::DuplicateCompound("na".into())));
        assert!(issues.contains(&DataIssue::DuplicateInputs {
            shadowed: "salt_again".into(),
            by: "salt".into(),
        }));
        assert!(issues.contains(&DataIssue::UnknownInput {
            recipe: "ghost".into(),
            compound: "xe".into(),
        }));
        assert!(issues.contains(&DataIssue::UnknownOutput {
            recipe: "ghost".into(),
            compound: "naxe".into(),
        }));
        assert!(issues.contains(&DataIssue::EmptyRecipe("nothing".into())));
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(matches!(
            LabData::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            LabData::from_json(r#"{"compounds":[],"recipes":[],"achievements":[]}"#),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn unreachable_compounds_are_found() {
        let data = LabData {
            compounds: vec![
                compound("h", Category::Element, 0, true),
                compound("h2", Category::Gas, 5, false),
                compound("orphan", Category::Gas, 5, false),
            ],
            recipes: vec![recipe("h2", &["h", "h"], "h2")],
            achievements: Vec::new(),
        };
        assert_eq!(data.unreachable_compounds(), vec![CompoundId::from("orphan")]);
    }
}

//! Fixture builders shared by the unit tests.

use crate::catalog::LabData;
use crate::model::{
    Achievement, AchievementRule, Category, Compound, CompoundId, Rarity, Recipe,
};

pub fn ids(raw: &[&str]) -> Vec<CompoundId> {
    raw.iter().map(|s| CompoundId::from(*s)).collect()
}

pub fn compound(id: &str, category: Category, points: u32, discovered: bool) -> Compound {
    Compound {
        id: id.into(),
        name: id.to_uppercase(),
        symbol: id.to_uppercase(),
        category,
        rarity: Rarity::Common,
        description: String::new(),
        molecular_weight: "1.0g/mol".to_string(),
        points,
        uses: Vec::new(),
        discovered,
        synthesis_hint: None,
    }
}

pub fn recipe(id: &str, inputs: &[&str], output: &str) -> Recipe {
    Recipe {
        id: id.into(),
        inputs: ids(inputs),
        output: output.into(),
        name: id.to_string(),
        description: String::new(),
    }
}

pub fn achievement(id: &str, points: u32, rule: AchievementRule) -> Achievement {
    Achievement {
        id: id.into(),
        name: id.to_string(),
        description: String::new(),
        requirement: String::new(),
        points,
        icon: "*".to_string(),
        rule,
    }
}

/// `h` and `o` known, `h2o` (10 pts) locked, one recipe `h + h + o -> h2o`.
pub fn water_lab() -> LabData {
    LabData {
        compounds: vec![
            compound("h", Category::Element, 0, true),
            compound("o", Category::Element, 0, true),
            compound("h2o", Category::Mineral, 10, false),
        ],
        recipes: vec![recipe("water", &["h", "h", "o"], "h2o")],
        achievements: vec![
            achievement("first", 10, AchievementRule::FirstDiscovery),
            achievement("collector", 500, AchievementRule::AllCompounds),
            achievement("double", 50, AchievementRule::ReactionCount { threshold: 2 }),
            achievement("legend", 1000, AchievementRule::AllOthers),
        ],
    }
}

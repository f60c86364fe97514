// Top-level views of the lab
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Lab,
    Discovery,
    Reactions,
    Achievements,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Lab, Tab::Discovery, Tab::Reactions, Tab::Achievements];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Lab => "Lab",
            Tab::Discovery => "Discovery",
            Tab::Reactions => "Reactions",
            Tab::Achievements => "Achievements",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Lab => "⚗",
            Tab::Discovery => "⚛",
            Tab::Reactions => "📖",
            Tab::Achievements => "🏆",
        }
    }
}

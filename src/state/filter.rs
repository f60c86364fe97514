// Search / category / discovered-only filter for the compound grid
use crate::model::{Category, Compound};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscoveryFilter {
    pub search: String,
    /// None = all categories.
    pub category: Option<Category>,
    pub discovered_only: bool,
}

impl DiscoveryFilter {
    pub fn matches(&self, c: &Compound) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || c.name.to_lowercase().contains(&needle)
            || c.symbol.to_lowercase().contains(&needle);
        let category_ok = self.category.is_none_or(|cat| c.category == cat);
        text_ok && category_ok && (!self.discovered_only || c.discovered)
    }

    pub fn apply<'a>(&self, compounds: &'a [Compound]) -> Vec<&'a Compound> {
        compounds.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Categories present in `compounds`, in first-seen order.
pub fn categories_present(compounds: &[Compound]) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for c in compounds {
        if !out.contains(&c.category) {
            out.push(c.category);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::compound;

    fn sample() -> Vec<Compound> {
        let mut water = compound("h2o", Category::Mineral, 10, false);
        water.name = "Water".to_string();
        water.symbol = "H₂O".to_string();
        let mut salt = compound("nacl", Category::Salt, 20, true);
        salt.name = "Sodium Chloride".to_string();
        salt.symbol = "NaCl".to_string();
        let mut sodium = compound("na", Category::Element, 0, true);
        sodium.name = "Sodium".to_string();
        sodium.symbol = "Na".to_string();
        vec![sodium, water, salt]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let all = sample();
        assert_eq!(DiscoveryFilter::default().apply(&all).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_symbol() {
        let all = sample();
        let f = DiscoveryFilter {
            search: "SODIUM".to_string(),
            ..Default::default()
        };
        assert_eq!(f.apply(&all).len(), 2);
        let f = DiscoveryFilter {
            search: " h₂o ".to_string(),
            ..Default::default()
        };
        let hits = f.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "h2o".into());
    }

    #[test]
    fn category_and_discovered_only_combine() {
        let all = sample();
        let f = DiscoveryFilter {
            category: Some(Category::Mineral),
            discovered_only: true,
            ..Default::default()
        };
        assert!(f.apply(&all).is_empty());
        let f = DiscoveryFilter {
            discovered_only: true,
            ..Default::default()
        };
        assert_eq!(f.apply(&all).len(), 2);
    }

    #[test]
    fn categories_in_first_seen_order() {
        let mut all = sample();
        all.push(compound("k", Category::Element, 0, true));
        assert_eq!(
            categories_present(&all),
            vec![Category::Element, Category::Mineral, Category::Salt]
        );
    }
}

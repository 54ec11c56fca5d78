/// Trait for outer-totalistic Life-like rules
/// Rules must not birth on 0 neighbours: only cells near live cells are evaluated.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Next state of a cell given its current state and live neighbour count
    fn evolve(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2 | 3) | (false, 3 | 6))
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(ConwayRule), Box::new(HighLifeRule)]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

/// Case-insensitive lookup by rule name
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    let name = name.trim();
    all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert!(!rule.evolve(true, 0));
        assert!(!rule.evolve(true, 1));

        // Survival
        assert!(rule.evolve(true, 2));
        assert!(rule.evolve(true, 3));

        // Overpopulation
        assert!(!rule.evolve(true, 4));
        assert!(!rule.evolve(true, 8));

        // Reproduction
        assert!(rule.evolve(false, 3));
        assert!(!rule.evolve(false, 2));
        assert!(!rule.evolve(false, 6));
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = HighLifeRule;
        assert!(rule.evolve(false, 6));
        assert!(rule.evolve(false, 3));
        assert!(!rule.evolve(true, 6));
    }

    #[test]
    fn test_no_rule_births_from_nothing() {
        for rule in all_rules() {
            assert!(!rule.evolve(false, 0), "{} births on B0", rule.name());
        }
    }

    #[test]
    fn test_rule_by_name() {
        assert_eq!(rule_by_name("highlife").map(|r| r.name()), Some("HighLife"));
        assert_eq!(rule_by_name(" Conway ").map(|r| r.name()), Some("Conway"));
        assert!(rule_by_name("seeds").is_none());
        assert_eq!(default_rule().name(), "Conway");
    }
}

//! Canned complaints and the fault rules they are diagnosed against.

use rand::{seq::SliceRandom, Rng};

use crate::logging::targets;

pub const LEGEND: &str = "VARIABLES: A: Powers on | B: Video | C: Beeps | D: Freezes | F: System";

pub struct Scenario {
    pub message: &'static str,
    pub observation: &'static [&'static str],
}

pub struct FaultRule {
    /// Fault-indexed symbol, see [`crate::symbols::FAULTS`].
    pub symbol: &'static str,
    /// Name shown in the verdict.
    pub name: &'static str,
    pub observation: &'static [&'static str],
}

pub static SCENARIOS: [Scenario; 6] = [
    Scenario {
        message: "The computer turns on, shows no picture and beeps.",
        observation: &["A", "-B", "C"],
    },
    Scenario {
        message: "The computer turns on, shows no picture, does not beep and freezes.",
        observation: &["A", "-B", "-C", "D"],
    },
    Scenario {
        message: "The computer turns on, shows no picture, does not beep, does not freeze and the system does not respond.",
        observation: &["A", "-B", "-C", "-D", "-F"],
    },
    Scenario {
        message: "The computer turns on, shows a picture, does not beep, freezes and the system responds.",
        observation: &["A", "B", "-C", "D", "F"],
    },
    Scenario {
        message: "The computer does not turn on at all.",
        observation: &["-F"],
    },
    // no rule covers this one
    Scenario {
        message: "The computer turns on, shows a picture but freezes immediately.",
        observation: &["A", "B", "D"],
    },
];

pub static RULES: [FaultRule; 5] = [
    FaultRule {
        symbol: "ram",
        name: "RAM",
        observation: &["A", "-B", "C"],
    },
    FaultRule {
        symbol: "psu",
        name: "POWER SUPPLY",
        observation: &["A", "-B", "-C", "D"],
    },
    FaultRule {
        symbol: "board",
        name: "MOTHERBOARD",
        observation: &["A", "-B", "-C", "-D", "-F"],
    },
    FaultRule {
        symbol: "disk",
        name: "DISK",
        observation: &["A", "B", "-C", "D", "F"],
    },
    FaultRule {
        symbol: "system",
        name: "SYSTEM",
        observation: &["-F"],
    },
];

/// Uniformly random scenario.
pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> &'static Scenario {
    // SCENARIOS is non-empty
    SCENARIOS.choose(rng).unwrap_or(&SCENARIOS[0])
}

pub fn scenario(index: usize) -> Option<&'static Scenario> {
    SCENARIOS.get(index)
}

/// First rule whose observation is equal, order included, to `observation`.
pub fn rule_for<S: AsRef<str>>(observation: &[S]) -> Option<&'static FaultRule> {
    let rule = RULES.iter().find(|rule| {
        rule.observation.len() == observation.len()
            && rule
                .observation
                .iter()
                .zip(observation)
                .all(|(a, b)| *a == b.as_ref())
    });

    match rule {
        Some(rule) => log::debug!(target: targets::CATALOG, "{:?} matches rule {}", rule.observation, rule.symbol),
        None => log::debug!(target: targets::CATALOG, "no rule for {} literals", observation.len()),
    }

    rule
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::symbols;

    use super::{choose, rule_for, scenario, RULES, SCENARIOS};

    #[test]
    fn scenarios_to_rules() {
        let matched: Vec<Option<&str>> = SCENARIOS
            .iter()
            .map(|s| rule_for(s.observation).map(|rule| rule.symbol))
            .collect();

        assert_eq!(
            matched,
            vec![
                Some("ram"),
                Some("psu"),
                Some("board"),
                Some("disk"),
                Some("system"),
                None
            ]
        );
    }

    #[test]
    fn rules_to_scenarios() {
        for rule in &RULES {
            let count = SCENARIOS
                .iter()
                .filter(|s| s.observation == rule.observation)
                .count();
            assert_eq!(count, 1, "rule {}", rule.symbol);
        }
    }

    #[test]
    fn no_power() {
        let scenario = SCENARIOS
            .iter()
            .find(|s| s.observation == ["-F"])
            .unwrap();
        assert_eq!(rule_for(scenario.observation).unwrap().symbol, "system");
    }

    #[test]
    fn order_matters() {
        assert!(rule_for(&["-B", "A", "C"]).is_none());
        assert!(rule_for(&["A", "-B"]).is_none());
        assert!(rule_for(&["A", "-B", "C", "C"]).is_none());
        assert!(rule_for::<&str>(&[]).is_none());
    }

    #[test]
    fn rule_symbols_are_known() {
        for rule in &RULES {
            assert!(symbols::code(rule.symbol).is_ok());
            assert!(symbols::unit_clauses(rule.observation).is_ok());
        }
    }

    #[test]
    fn choice_is_seeded() {
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16).map(|_| choose(&mut rng).message).collect::<Vec<_>>()
        };
        assert_eq!(picks(7), picks(7));

        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = vec![false; SCENARIOS.len()];
        for _ in 0..600 {
            let chosen = choose(&mut rng);
            let i = SCENARIOS
                .iter()
                .position(|s| s.message == chosen.message)
                .unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn by_index() {
        assert_eq!(scenario(4).unwrap().observation, ["-F"]);
        assert!(scenario(SCENARIOS.len()).is_none());
    }
}

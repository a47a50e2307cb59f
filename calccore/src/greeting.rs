//! Emoticon shown on the main line until the first input.

use rand::seq::SliceRandom;

pub const GREETINGS: [&str; 12] = [
    "(¬‿¬)",
    ":>",
    "(≧◡≦)",
    "(^_^)",
    "(｡♥‿♥｡)",
    "(≧ω≦)",
    "(≧∇≦)/",
    ":3",
    "(˘︶˘).｡.:*♡",
    "(✧ω✧)",
    "(,,>﹏<,,)",
    "(˶ᵔ ᵕ ᵔ˶)",
];

/// Pick one greeting at random.
pub fn pick_greeting() -> &'static str {
    GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0])
}

pub fn is_greeting(s: &str) -> bool {
    GREETINGS.iter().any(|g| *g == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_from_list() {
        for _ in 0..50 {
            assert!(is_greeting(pick_greeting()));
        }
    }

    #[test]
    fn test_greetings_are_not_numbers() {
        for g in GREETINGS {
            assert!(g.parse::<f64>().is_err(), "{g}");
            assert!(crate::expr::evaluate(g).is_err(), "{g}");
        }
    }

    #[test]
    fn test_is_greeting() {
        assert!(is_greeting(":3"));
        assert!(!is_greeting("0"));
        assert!(!is_greeting(""));
    }
}

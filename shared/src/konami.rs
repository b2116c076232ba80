use std::collections::VecDeque;

/// Key names as reported by the keyboard layer (logical keys).
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent key presses.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    /// Record a key. Returns true when the last ten keys spell the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_string());
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|k| detector.push(k)).collect()
    }

    #[test]
    fn full_sequence_triggers_on_last_key() {
        let mut d = KonamiDetector::default();
        let hits = feed(&mut d, &KONAMI_SEQUENCE);
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
    }

    #[test]
    fn noise_before_sequence_is_ignored() {
        let mut d = KonamiDetector::default();
        feed(&mut d, &["x", "ArrowUp", "Enter"]);
        let hits = feed(&mut d, &KONAMI_SEQUENCE);
        assert!(hits[9]);
    }

    #[test]
    fn wrong_key_breaks_sequence() {
        let mut d = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[5] = "ArrowUp";
        assert!(!feed(&mut d, &keys).iter().any(|h| *h));
    }

    #[test]
    fn uppercase_letters_do_not_match() {
        let mut d = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[8] = "B";
        keys[9] = "A";
        assert!(!feed(&mut d, &keys).iter().any(|h| *h));
    }

    #[test]
    fn does_not_retrigger_on_next_key() {
        let mut d = KonamiDetector::default();
        feed(&mut d, &KONAMI_SEQUENCE);
        assert!(!d.push("a"));
    }
}

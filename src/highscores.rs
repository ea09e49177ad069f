//! Persisted best score
//!
//! A single best score survives across sessions, stored in LocalStorage on
//! the web. `-1` stands for "never set"; a missing or corrupt payload
//! degrades to that sentinel rather than erroring.

use serde::{Deserialize, Serialize};

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Best recorded score, or [`HighScore::ABSENT`] if none yet
    pub best: i64,
}

impl Default for HighScore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScore {
    /// Sentinel for "no high score recorded"
    pub const ABSENT: i64 = -1;

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "stripe_chase_highscore";

    pub fn new() -> Self {
        Self { best: Self::ABSENT }
    }

    /// True if no score has ever been recorded
    pub fn is_absent(&self) -> bool {
        self.best < 0
    }

    /// Would `score` become the new best?
    pub fn qualifies(&self, score: u64) -> bool {
        score as i64 > self.best
    }

    /// Merge a finished session's score; returns true if it became the best.
    pub fn record(&mut self, score: u64) -> bool {
        if self.qualifies(score) {
            self.best = score as i64;
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<i64>(&json) {
                    log::info!("Loaded high score {}", best);
                    return Self { best };
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&self.best) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let hs = HighScore::new();
        assert!(hs.is_absent());
        assert_eq!(hs.best, HighScore::ABSENT);
    }

    #[test]
    fn first_score_always_qualifies() {
        // A finished session with score 540 against an absent best
        let mut hs = HighScore::new();
        assert!(hs.qualifies(540));
        assert!(hs.record(540));
        assert_eq!(hs.best, 540);
        assert!(!hs.is_absent());
    }

    #[test]
    fn zero_beats_absent() {
        let mut hs = HighScore::new();
        assert!(hs.record(0));
        assert_eq!(hs.best, 0);
    }

    #[test]
    fn lower_or_equal_scores_do_not_replace() {
        let mut hs = HighScore { best: 540 };
        assert!(!hs.record(540));
        assert!(!hs.record(120));
        assert_eq!(hs.best, 540);
    }

    #[test]
    fn higher_score_replaces() {
        let mut hs = HighScore { best: 540 };
        assert!(hs.record(600));
        assert_eq!(hs.best, 600);
    }
}

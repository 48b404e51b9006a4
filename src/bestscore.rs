//! Best-score persistence
//!
//! A single scalar persisted to LocalStorage. Missing or malformed stored
//! data is treated as zero, never as an error.

use serde::{Deserialize, Serialize};

/// The persisted best score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestScore {
    pub best: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "retro_flappy_best";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Fold a finished run's score into the best. Returns true (and persists
    /// the new value via `save`) only when the score beats the stored best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            self.save();
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
                if let Ok(score) = serde_json::from_str::<BestScore>(&json) {
                    log::info!("Loaded best score: {}", score.best);
                    return score;
                }
            }
        }

        log::info!("No stored best score, starting at 0");
        Self::default()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

//! One-time entrance animation for roadmap cards
//!
//! A card animates the first time it scrolls into view. Filter changes replay
//! the animation for the cards they bring back.

use std::collections::{HashMap, HashSet};

/// Ticks an entrance animation lasts
pub const ENTRANCE_FRAMES: u8 = 3;

#[derive(Debug, Default)]
pub struct CardAnimations {
    seen: HashSet<String>,
    active: HashMap<String, u8>,
}

impl CardAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cards currently inside the viewport, starting the animation
    /// for any that have never been seen
    pub fn observe<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            if self.seen.insert(id.to_string()) {
                self.active.insert(id.to_string(), ENTRANCE_FRAMES);
            }
        }
    }

    /// Restart the animation for cards that were just shown again
    pub fn replay<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.seen.insert(id.to_string());
            self.active.insert(id.to_string(), ENTRANCE_FRAMES);
        }
    }

    pub fn tick(&mut self) {
        self.active.retain(|_, frames| {
            *frames -= 1;
            *frames > 0
        });
    }

    /// Frames left for a card; 0 once it has settled
    pub fn remaining(&self, id: &str) -> u8 {
        self.active.get(id).copied().unwrap_or(0)
    }

    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }
}

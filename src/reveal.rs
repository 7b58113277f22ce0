//! Reveal Controller
//!
//! Panels animate in the first time they scroll into view and then stay
//! revealed. Each panel has its own [`RevealState`]; the only transition is
//! `Unrevealed -> Revealed`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    /// Terminal
    Revealed,
}

impl RevealState {
    /// Feed one viewport observation, returning `true` if this call revealed the panel
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            RevealState::Unrevealed if intersecting => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Reveal states for a set of panels
#[derive(Debug, Clone)]
pub struct RevealController<K> {
    states: HashMap<K, RevealState>,
}

impl<K> Default for RevealController<K> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealController<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a viewport observation for `panel`
    pub fn observe(&mut self, panel: &K, intersecting: bool) -> bool {
        if !intersecting {
            // Leaving (or never entering) the viewport changes nothing
            return false;
        }

        let revealed = self.states.entry(panel.clone()).or_default().observe(true);
        if revealed {
            tracing::trace!("Panel revealed");
        }
        revealed
    }

    pub fn state(&self, panel: &K) -> RevealState {
        self.states.get(panel).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, panel: &K) -> bool {
        self.state(panel).is_revealed()
    }

    pub fn revealed_count(&self) -> usize {
        self.states.values().filter(|s| s.is_revealed()).count()
    }
}

//! Per-tick input snapshots
//!
//! The physics step never talks to an event listener. The host samples its
//! input device once per frame into an [`InputSnapshot`], and the loop only
//! ever asks the snapshot "is this key currently held".

/// The fixed key set the match loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Right paddle up
    Up,
    /// Right paddle down
    Down,
    /// Left paddle up
    W,
    /// Left paddle down
    S,
    /// Start / restart the match
    Confirm,
}

impl Key {
    pub const COUNT: usize = 5;
}

/// Which keys are held for the duration of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: [bool; Key::COUNT],
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    pub fn press(&mut self, key: Key) {
        self.held[key as usize] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    /// Builder form, handy for scripted inputs
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }
}

//! The single "pressing" flag shared between device callbacks and the sim
//!
//! Writes from the input side are last-wins; the sim reads once per tick and
//! may clear it when an orb eats the press.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle to the shared pressing flag
#[derive(Debug, Clone, Default)]
pub struct InputCell(Arc<AtomicBool>);

impl InputCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device went down
    pub fn press(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Device came up
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_pressing(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag from the sim side. The press must be released and
    /// pressed again before it reads true.
    pub fn consume(&self) {
        self.0.store(false, Ordering::Release);
    }
}

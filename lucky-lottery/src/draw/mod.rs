pub mod source;

pub use source::{FixedDraws, SeededDraws};

use crate::LuckyNumber;

/// Source of lucky numbers for both the per-player draws and the winning draw
pub trait LuckySource {
    /// Draw a number uniformly in `[1, max]`. `max` is at least 1.
    fn draw(&mut self, max: u32) -> LuckyNumber;
}

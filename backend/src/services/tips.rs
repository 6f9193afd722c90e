//! Fitness tip service
//!
//! Wraps the pure tip selection from the shared crate and adds the random
//! draw, which is the only non-deterministic piece of the application.

use bmi_companion_shared::tips::{select_tips, TipCategory};
use rand::seq::IndexedRandom;

/// Service for tip selection
pub struct TipsService;

impl TipsService {
    /// Get the daily tip list for a category
    pub fn daily_tips(category: TipCategory) -> Vec<&'static str> {
        select_tips(category)
    }

    /// Pick one tip uniformly at random from the category's daily list.
    ///
    /// Returns `None` only if the selected list is empty, which the static
    /// catalog never produces.
    pub fn random_tip(category: TipCategory) -> Option<&'static str> {
        let tips = select_tips(category);
        tips.choose(&mut rand::rng()).copied()
    }
}

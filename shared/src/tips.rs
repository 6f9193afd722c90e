//! Fitness tip catalog and selection
//!
//! The catalog is static: seven exercise tips and seven diet tips in fixed
//! declaration order. Selection is a pure function of the chosen category;
//! the random draw happens in the caller so this module stays deterministic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of tips shown at a time (one per day of the week)
pub const DAILY_TIP_COUNT: usize = 7;

/// Exercise tips, in display order
pub const EXERCISE_TIPS: [&str; 7] = [
    "Try a 30-minute walk today!",
    "Incorporate squats into your routine for better leg strength.",
    "Stretch before and after your workout to avoid injuries.",
    "Stay active during the day by walking around every hour.",
    "Engage in 15-minute high-intensity interval training (HIIT).",
    "Add resistance training to improve muscle strength.",
    "Focus on breathing while doing your exercises.",
];

/// Diet tips, in display order
pub const DIET_TIPS: [&str; 7] = [
    "Drink plenty of water throughout the day.",
    "Avoid processed sugars and focus on whole foods.",
    "Have a balanced meal with protein, carbs, and healthy fats.",
    "Eat more vegetables for better digestion.",
    "Choose whole grains over refined grains.",
    "Don't skip breakfast to maintain energy levels.",
    "Opt for smaller meals throughout the day to keep your metabolism active.",
];

/// Tip category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    #[default]
    Both,
    Exercise,
    Diet,
}

impl TipCategory {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Both => "Both Exercise & Diet Tips",
            TipCategory::Exercise => "Exercise Tips",
            TipCategory::Diet => "Diet Tips",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipCategory::Both => "both",
            TipCategory::Exercise => "exercise",
            TipCategory::Diet => "diet",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" => Ok(TipCategory::Both),
            "exercise" => Ok(TipCategory::Exercise),
            "diet" => Ok(TipCategory::Diet),
            _ => Err(format!("Unknown tip category: {}", s)),
        }
    }
}

/// Select the tips for a category: exercise tips first, then diet tips,
/// truncated to the first [`DAILY_TIP_COUNT`] entries.
pub fn select_tips(category: TipCategory) -> Vec<&'static str> {
    let mut tips = Vec::with_capacity(EXERCISE_TIPS.len() + DIET_TIPS.len());

    if matches!(category, TipCategory::Exercise | TipCategory::Both) {
        tips.extend_from_slice(&EXERCISE_TIPS);
    }
    if matches!(category, TipCategory::Diet | TipCategory::Both) {
        tips.extend_from_slice(&DIET_TIPS);
    }

    tips.truncate(DAILY_TIP_COUNT);
    tips
}

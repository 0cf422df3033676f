//! Point extraction from free-text quest rewards.
//!
//! Rewards are stored as prose ("50 points", "[25] Bronze badge", "Tier 2: 40"). The amount
//! is recovered by trying a fixed list of patterns in priority order.

use regex::Regex;
use std::sync::LazyLock;

/// Points awarded when no usable number is found in the reward text.
pub const DEFAULT_REWARD_POINTS: i32 = 10;

/// Largest amount a single reward may grant.
pub const MAX_REWARD_POINTS: i32 = 10_000;

static REWARD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // leading number followed by a separator: "50 points", "50-gold"
        r"^(\d+)\s*[-–—\s]",
        // bracketed number: "Badge (25)"
        r"[\[\(](\d+)[\]\)]",
        // number followed by a colon: "40: bonus"
        r"(\d+)\s*:",
        // any number
        r"(\d+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("reward pattern must compile"))
    .collect()
});

/// Extracts the number of points a reward text grants.
///
/// Patterns are tried in order; the first one whose first match parses into
/// `1..=MAX_REWARD_POINTS` wins.
///
/// # Arguments
/// - `reward` - Free-text reward stored on the quest
///
/// # Returns
/// - Extracted amount, or `DEFAULT_REWARD_POINTS` if nothing usable was found
pub fn extract_points(reward: &str) -> i32 {
    let reward = reward.trim();
    if reward.is_empty() {
        return DEFAULT_REWARD_POINTS;
    }

    REWARD_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(reward))
        .filter_map(|captures| captures.get(1)?.as_str().parse::<i32>().ok())
        .find(|points| (1..=MAX_REWARD_POINTS).contains(points))
        .unwrap_or(DEFAULT_REWARD_POINTS)
}

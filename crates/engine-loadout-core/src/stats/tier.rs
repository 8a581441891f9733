//! Component tier table

/// Multiplier for tier 1 (low quality) components
pub const TIER_1_VALUE: f32 = 0.6;

/// Multiplier for tier 2 (medium quality) components
pub const TIER_2_VALUE: f32 = 0.8;

/// Multiplier for tier 3 and every unknown tier
pub const TIER_MAX_VALUE: f32 = 1.0;

/// Convert a component quality tier to its value multiplier
///
/// Tiers outside the table (including 0 and anything above 3) count as full value.
pub fn tier_value(tier: u32) -> f32 {
    match tier {
        1 => TIER_1_VALUE,
        2 => TIER_2_VALUE,
        _ => TIER_MAX_VALUE,
    }
}

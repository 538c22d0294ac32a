//! Sustainability scoring
//!
//! The 0.5/0.3/0.2 weighting is a domain decision carried over unchanged
//! from the trained system; do not re-derive it.

/// Combine emissions, recyclability and durability into one bounded score
///
/// score = (1 / (1 + co2)) * 0.5 + recyclable * 0.3 + (durability / 10) * 0.2
///
/// Decreasing in co2, strictly higher when recyclable, increasing in
/// durability. Pure; the caller guarantees a numeric, non-negative co2.
pub fn environment_score(co2: f64, recyclable: bool, durability: f64) -> f64 {
    let recyclable = if recyclable { 1.0 } else { 0.0 };
    let score = (1.0 / (1.0 + co2)) * 0.5 + recyclable * 0.3 + (durability / 10.0) * 0.2;
    round_dp(score, 3)
}

/// Round to a fixed number of decimal places (wire contract rounding)
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

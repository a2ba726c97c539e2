/// Business ceiling on any effective POS rate.
pub(crate) const POS_RATE_CEILING: f64 = 0.50;

/// Effective POS commission rate from a base rate, a performance
/// multiplier, and a volume bonus. Clamped at the ceiling only; callers
/// supply sane low bounds.
pub(crate) fn adjusted_pos_rate(
    base_rate: f64,
    performance_multiplier: f64,
    volume_bonus: f64,
) -> f64 {
    (base_rate * performance_multiplier + volume_bonus).min(POS_RATE_CEILING)
}

/// Result of splitting one document's price (or a portfolio of prices)
/// between the three stakeholders. Amounts are whole CLP.
///
/// Invariant: `pos + certifier + admin == total`, exactly. The split
/// calculator guarantees this by letting administration absorb the rounding
/// remainder; the aggregator preserves it by elementwise summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionBreakdown {
    pub pos: i64,
    pub certifier: i64,
    pub admin: i64,
    /// Echoes the input price verbatim (never a recomputed sum).
    pub total: i64,
}

impl CommissionBreakdown {
    pub const ZERO: CommissionBreakdown = CommissionBreakdown {
        pos: 0,
        certifier: 0,
        admin: 0,
        total: 0,
    };
}

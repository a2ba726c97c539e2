/// One stakeholder's commission totals for one calendar month.
///
/// `total_pending` is derived as `total_earned - total_paid`, so the
/// identity `earned == paid + pending` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySummary {
    pub total_earned: f64,
    pub total_paid: f64,
    pub total_pending: f64,
    pub document_count: usize,
    /// 0 when no documents fell in the month.
    pub average_per_document: f64,
}

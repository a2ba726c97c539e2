use crate::entities::{CommissionBreakdown, ValidationReport};

/// Post-hoc check of a computed split against its source price. Used
/// defensively by callers and as a building block for tests. Accumulates
/// every violated invariant instead of stopping at the first; never fails.
pub(crate) fn validate(price: u64, breakdown: &CommissionBreakdown) -> ValidationReport {
    let mut errors = Vec::new();

    if breakdown.total != price as i64 {
        errors.push(format!(
            "Total commission ({}) doesn't match document price ({})",
            breakdown.total, price
        ));
    }
    if breakdown.pos + breakdown.certifier + breakdown.admin != breakdown.total {
        errors.push("Individual commission amounts don't add up to total".to_string());
    }
    if breakdown.pos < 0 || breakdown.certifier < 0 || breakdown.admin < 0 {
        errors.push("Commission amounts cannot be negative".to_string());
    }

    ValidationReport::from_errors(errors)
}

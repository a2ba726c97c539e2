use std::collections::HashMap;

use crate::entities::{CommissionRecord, PaymentInstruction, RecordId, SettlementPlan};

/// Groups unpaid commission records into per-payee payment instructions.
///
/// A record contributes to a payee's instruction only when both the
/// identifier and the amount are present; the POS and certifier groupings
/// are independent, so one record can feed both. Records already marked
/// paid never appear anywhere in the plan.
pub(crate) struct SettlementPlanner;

fn accumulate(
    payments: &mut HashMap<String, PaymentInstruction>,
    payee_id: &str,
    amount: f64,
    record_id: RecordId,
) {
    let instruction = payments.entry(payee_id.to_string()).or_default();
    instruction.amount += amount;
    instruction.record_ids.push(record_id);
}

impl SettlementPlanner {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn plan(&self, records: &[CommissionRecord]) -> SettlementPlan {
        let mut plan = SettlementPlan::default();

        for record in records.iter().filter(|r| !r.is_paid) {
            if let (Some(pos_id), Some(amount)) = (&record.pos_id, record.pos_amount) {
                accumulate(&mut plan.pos_payments, pos_id, amount, record.id);
            }
            if let (Some(certifier_id), Some(amount)) =
                (&record.certifier_id, record.certifier_amount)
            {
                accumulate(&mut plan.certifier_payments, certifier_id, amount, record.id);
            }
            if let Some(amount) = record.admin_amount {
                plan.admin_total += amount;
                plan.admin_record_ids.push(record.id);
            }
        }

        plan
    }
}

use std::collections::HashMap;

use super::commission_record::RecordId;

/// Accumulated amount owed to one payee, with the ledger rows that back it.
/// Handed to the (external) payment-execution system and discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentInstruction {
    pub amount: f64,
    pub record_ids: Vec<RecordId>,
}

/// Output of the batch settlement planner: per-payee payment instructions
/// plus the administration total. Instructions only; no transfer is
/// executed here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettlementPlan {
    pub pos_payments: HashMap<String, PaymentInstruction>,
    pub certifier_payments: HashMap<String, PaymentInstruction>,
    pub admin_total: f64,
    pub admin_record_ids: Vec<RecordId>,
}

use chrono::NaiveDateTime;

/// Identifier of a commission row in the backend ledger.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct RecordId(pub u64);

/// One certified document's commission row, as snapshotted from the backend
/// ledger. The engine only ever reads these; the ledger owns them.
///
/// Identifier and per-role amount fields are optional on the wire (a record
/// may predate a stakeholder assignment, or a share may not apply); an
/// absent field is an absent contribution, not an error. A present zero
/// amount still counts as a contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionRecord {
    pub id: RecordId,
    pub created_at: NaiveDateTime,
    pub pos_id: Option<String>,
    pub certifier_id: Option<String>,
    pub pos_amount: Option<f64>,
    pub certifier_amount: Option<f64>,
    pub admin_amount: Option<f64>,
    pub total_amount: f64,
    pub is_paid: bool,
}

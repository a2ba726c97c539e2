use chrono::{Datelike, Local, NaiveDate};

use crate::entities::{CommissionRecord, MonthlySummary, StakeholderRole};

/// Filters a stakeholder's commission history to one calendar month and
/// totals it. Pending is derived as earned minus paid, so the identity
/// `earned == paid + pending` holds for any input.
pub(crate) struct PeriodReporter;

impl PeriodReporter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// `month` defaults to the current local month. Only its year and month
    /// components matter.
    pub(crate) fn monthly_summary(
        &self,
        records: &[CommissionRecord],
        role: StakeholderRole,
        month: Option<NaiveDate>,
    ) -> MonthlySummary {
        let target = month.unwrap_or_else(|| Local::now().date_naive());

        let amounts: Vec<(f64, bool)> = records
            .iter()
            .filter(|r| {
                r.created_at.month() == target.month() && r.created_at.year() == target.year()
            })
            .map(|r| {
                let amount = match role {
                    StakeholderRole::Pos => r.pos_amount,
                    StakeholderRole::Certifier => r.certifier_amount,
                    StakeholderRole::Admin => r.admin_amount,
                }
                .unwrap_or(0.0);
                (amount, r.is_paid)
            })
            .collect();

        let total_earned: f64 = amounts.iter().map(|(amount, _)| amount).sum();
        let total_paid: f64 = amounts
            .iter()
            .filter(|(_, is_paid)| *is_paid)
            .map(|(amount, _)| amount)
            .sum();
        let document_count = amounts.len();

        MonthlySummary {
            total_earned,
            total_paid,
            total_pending: total_earned - total_paid,
            document_count,
            average_per_document: if document_count > 0 {
                total_earned / document_count as f64
            } else {
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RecordId;
    use chrono::NaiveDate;

    fn record(
        id: u64,
        date: (i32, u32, u32),
        pos_amount: Option<f64>,
        is_paid: bool,
    ) -> CommissionRecord {
        CommissionRecord {
            id: RecordId(id),
            created_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            pos_id: Some("V-001".into()),
            certifier_id: None,
            pos_amount,
            certifier_amount: None,
            admin_amount: None,
            total_amount: pos_amount.unwrap_or(0.0),
            is_paid,
        }
    }

    fn march() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 15)
    }

    #[test]
    fn filters_to_the_target_calendar_month() {
        let records = vec![
            record(1, (2025, 3, 1), Some(1000.0), false),
            record(2, (2025, 3, 31), Some(500.0), true),
            record(3, (2025, 2, 28), Some(9999.0), false),
            record(4, (2024, 3, 10), Some(9999.0), false),
        ];
        let summary =
            PeriodReporter::new().monthly_summary(&records, StakeholderRole::Pos, march());
        assert_eq!(summary.total_earned, 1500.0);
        assert_eq!(summary.document_count, 2);
    }

    #[test]
    fn earned_is_paid_plus_pending() {
        let records = vec![
            record(1, (2025, 3, 1), Some(1000.0), false),
            record(2, (2025, 3, 5), Some(500.0), true),
            record(3, (2025, 3, 9), Some(250.0), true),
        ];
        let summary =
            PeriodReporter::new().monthly_summary(&records, StakeholderRole::Pos, march());
        assert_eq!(summary.total_paid, 750.0);
        assert_eq!(summary.total_pending, 1000.0);
        assert_eq!(
            summary.total_earned,
            summary.total_paid + summary.total_pending
        );
    }

    #[test]
    fn missing_amounts_count_as_zero_but_still_count_documents() {
        let records = vec![
            record(1, (2025, 3, 1), None, false),
            record(2, (2025, 3, 2), Some(600.0), false),
        ];
        let summary =
            PeriodReporter::new().monthly_summary(&records, StakeholderRole::Pos, march());
        assert_eq!(summary.total_earned, 600.0);
        assert_eq!(summary.document_count, 2);
        assert_eq!(summary.average_per_document, 300.0);
    }

    #[test]
    fn empty_month_has_zero_average() {
        let summary = PeriodReporter::new().monthly_summary(&[], StakeholderRole::Admin, march());
        assert_eq!(summary.document_count, 0);
        assert_eq!(summary.average_per_document, 0.0);
        assert_eq!(summary.total_earned, 0.0);
    }

    #[test]
    fn role_selects_the_matching_amount_column() {
        let mut r = record(1, (2025, 3, 1), Some(1000.0), false);
        r.certifier_amount = Some(875.0);
        r.admin_amount = Some(625.0);
        let reporter = PeriodReporter::new();
        let records = vec![r];
        assert_eq!(
            reporter
                .monthly_summary(&records, StakeholderRole::Certifier, march())
                .total_earned,
            875.0
        );
        assert_eq!(
            reporter
                .monthly_summary(&records, StakeholderRole::Admin, march())
                .total_earned,
            625.0
        );
    }
}

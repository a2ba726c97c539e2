use std::collections::HashMap;

use crate::entities::{MonthlySummary, PaymentInstruction, SettlementPlan};

use super::clp_fmt::format_clp;

pub(crate) struct SettlementPrinter;

impl SettlementPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Render a settlement plan as a plain-text report for the operations
    /// team. Payees are sorted so the output is deterministic regardless of
    /// map iteration order.
    pub(crate) fn print_plan(&self, plan: &SettlementPlan) -> String {
        let mut report_output = String::new();

        report_output.push_str(
            "; --- POS payments -------------------------------------------------------------\n\n",
        );
        self.print_payments(&mut report_output, &plan.pos_payments);
        report_output.push('\n');

        report_output.push_str(
            "; --- Certifier payments -------------------------------------------------------\n\n",
        );
        self.print_payments(&mut report_output, &plan.certifier_payments);
        report_output.push('\n');

        report_output.push_str(
            "; --- Administration -----------------------------------------------------------\n\n",
        );
        report_output.push_str(&format!(
            "    {:45} {:>20}\n",
            "Administration",
            format_clp(plan.admin_total)
        ));
        let ids: Vec<String> = plan.admin_record_ids.iter().map(|id| id.0.to_string()).collect();
        self.print_record_trail(&mut report_output, &ids);

        report_output
    }

    pub(crate) fn print_monthly_summary(&self, summary: &MonthlySummary) -> String {
        let mut report_output = String::new();
        report_output.push_str(
            "; --- Monthly summary ----------------------------------------------------------\n\n",
        );
        for (label, amount) in [
            ("Earned", summary.total_earned),
            ("Paid", summary.total_paid),
            ("Pending", summary.total_pending),
            ("Average per document", summary.average_per_document),
        ] {
            report_output.push_str(&format!("    {:45} {:>20}\n", label, format_clp(amount)));
        }
        report_output.push_str(&format!(
            "    {:45} {:>20}\n",
            "Documents", summary.document_count
        ));
        report_output
    }

    fn print_payments(
        &self,
        report_output: &mut String,
        payments: &HashMap<String, PaymentInstruction>,
    ) {
        let sorted_payments = {
            let mut v: Vec<(&String, &PaymentInstruction)> = payments.iter().collect();
            v.sort_by_key(|(payee, _)| *payee);
            v
        };
        for (payee, instruction) in sorted_payments {
            report_output.push_str(&format!(
                "    {:45} {:>20}\n",
                payee,
                format_clp(instruction.amount)
            ));
            let ids: Vec<String> = instruction.record_ids.iter().map(|id| id.0.to_string()).collect();
            self.print_record_trail(report_output, &ids);
        }
    }

    fn print_record_trail(&self, report_output: &mut String, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        let trail = format!("records: {}", ids.join(", "));
        for line in textwrap::wrap(&trail, 74) {
            report_output.push_str(&format!("    ; {}\n", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RecordId;

    #[test]
    fn plan_report_lists_sorted_payees_with_record_trails() {
        let mut plan = SettlementPlan::default();
        plan.pos_payments.insert(
            "V-002".to_string(),
            PaymentInstruction {
                amount: 400.0,
                record_ids: vec![RecordId(2)],
            },
        );
        plan.pos_payments.insert(
            "V-001".to_string(),
            PaymentInstruction {
                amount: 1600.0,
                record_ids: vec![RecordId(1), RecordId(3)],
            },
        );
        plan.admin_total = 500.0;
        plan.admin_record_ids = vec![RecordId(1), RecordId(2), RecordId(3)];

        let report = SettlementPrinter::new().print_plan(&plan);
        let v1 = report.find("V-001").unwrap();
        let v2 = report.find("V-002").unwrap();
        assert!(v1 < v2);
        assert!(report.contains("records: 1, 3"));
        assert!(report.contains("1,600 "));
        assert!(report.contains("; --- Administration"));
        assert!(report.contains("records: 1, 2, 3"));
    }

    #[test]
    fn monthly_report_shows_all_totals() {
        let summary = MonthlySummary {
            total_earned: 1500.0,
            total_paid: 500.0,
            total_pending: 1000.0,
            document_count: 3,
            average_per_document: 500.0,
        };
        let report = SettlementPrinter::new().print_monthly_summary(&summary);
        assert!(report.contains("Earned"));
        assert!(report.contains("Pending"));
        assert!(report.contains("1,500 "));
    }
}

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::{
        logic::{
            aggregator::Aggregator,
            earnings_projector::{self, DEFAULT_WORKING_DAYS_PER_MONTH},
            period_reporter::PeriodReporter,
            rate_adjuster,
            settlement_planner::SettlementPlanner,
            split_calculator::SplitCalculator,
            validator,
        },
        repositories::ledger_repository::LedgerRepository as _,
        usecases::settlement_usecase::{SettlementUsecase as _, SettlementUsecaseImpl},
    },
    entities::{
        CommissionBreakdown, CommissionRates, CommissionRecord, DocumentSale, EarningsProjection,
        MonthlySummary, RateOverrides, SettlementPlan, StakeholderRole, ValidationReport,
    },
    ext::standard_rates::STANDARD_RATES,
    presentation::settlement_printer::SettlementPrinter,
};

pub type SettlementReport = String;

/// Facade over the commission engine: split/aggregate arithmetic, monthly
/// reporting, batch settlement planning, and the what-if estimators, all
/// sharing one injected default rate table.
///
/// Stateless between calls; safe to share across request handlers.
pub struct CommissionEngine {
    default_rates: CommissionRates,
    split_calculator: SplitCalculator,
    period_reporter: PeriodReporter,
    settlement_usecase: SettlementUsecaseImpl,
    ledger_repository: LedgerRepositoryImpl,
    printer: SettlementPrinter,
}

impl CommissionEngine {
    pub fn new(default_rates: CommissionRates) -> Self {
        Self {
            default_rates,
            split_calculator: SplitCalculator::new(default_rates),
            period_reporter: PeriodReporter::new(),
            settlement_usecase: SettlementUsecaseImpl::new(),
            ledger_repository: LedgerRepositoryImpl::new(),
            printer: SettlementPrinter::new(),
        }
    }

    pub fn with_standard_rates() -> Self {
        Self::new(STANDARD_RATES)
    }

    /// Build an engine from a RON rate-table file.
    pub async fn from_rates_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let rates = LedgerRepositoryImpl::new().rates_from_file(path).await?;
        Ok(Self::new(rates))
    }

    /// Build an engine and load a ledger snapshot in one go, reading the
    /// rate table and the snapshot concurrently.
    pub async fn load_from_files<P>(
        records_path: P,
        rates_path: P,
    ) -> Result<(Self, Vec<CommissionRecord>), ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let repository = LedgerRepositoryImpl::new();
        let (records, rates) = futures::try_join!(
            repository.records_from_file(records_path),
            repository.rates_from_file(rates_path),
        )?;
        Ok((Self::new(rates), records))
    }

    pub fn default_rates(&self) -> CommissionRates {
        self.default_rates
    }

    /// Parse a JSON ledger snapshot into records, e.g. for monthly
    /// reporting.
    pub fn load_records_from_json(
        &self,
        records_json: &str,
    ) -> Result<Vec<CommissionRecord>, ServerError> {
        self.ledger_repository.records_from_json(records_json)
    }

    /// Same as [`Self::load_records_from_json`] for a CSV export.
    pub fn load_records_from_csv(
        &self,
        records_csv: &str,
    ) -> Result<Vec<CommissionRecord>, ServerError> {
        self.ledger_repository.records_from_csv(records_csv)
    }

    /// Read a snapshot file (.json or .csv) into records.
    pub async fn load_records_from_file<P>(
        &self,
        path: P,
    ) -> Result<Vec<CommissionRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.ledger_repository.records_from_file(path).await
    }

    /// Split one document's price between the three stakeholders.
    pub fn calculate_commissions(
        &self,
        price: u64,
        custom_rates: Option<&RateOverrides>,
    ) -> Result<CommissionBreakdown, ServerError> {
        self.split_calculator.split(price, custom_rates)
    }

    /// Portfolio totals across a batch of sales.
    pub fn calculate_total_commissions(
        &self,
        sales: &[DocumentSale],
    ) -> Result<CommissionBreakdown, ServerError> {
        Aggregator::new(&self.split_calculator).aggregate(sales)
    }

    /// One stakeholder's totals for a calendar month (current month when
    /// `month` is None).
    pub fn calculate_monthly_commissions(
        &self,
        records: &[CommissionRecord],
        role: StakeholderRole,
        month: Option<NaiveDate>,
    ) -> MonthlySummary {
        self.period_reporter.monthly_summary(records, role, month)
    }

    /// Group unpaid records into per-payee payment instructions.
    pub fn calculate_batch_payments(&self, records: &[CommissionRecord]) -> SettlementPlan {
        SettlementPlanner::new().plan(records)
    }

    /// Plan a batch settlement straight from a JSON ledger snapshot, plus a
    /// printable report.
    pub fn batch_payments_from_json(
        &self,
        records_json: &str,
    ) -> Result<(SettlementPlan, SettlementReport), ServerError> {
        let plan = self.settlement_usecase.plan_from_json(records_json)?;
        let report = self.printer.print_plan(&plan);
        Ok((plan, report))
    }

    /// Same as [`Self::batch_payments_from_json`] for a CSV export.
    pub fn batch_payments_from_csv(
        &self,
        records_csv: &str,
    ) -> Result<(SettlementPlan, SettlementReport), ServerError> {
        let plan = self.settlement_usecase.plan_from_csv(records_csv)?;
        let report = self.printer.print_plan(&plan);
        Ok((plan, report))
    }

    /// Plan a batch settlement from a snapshot file (.json or .csv).
    pub async fn batch_payments_from_file<P>(
        &self,
        path: P,
    ) -> Result<(SettlementPlan, SettlementReport), ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let plan = self.settlement_usecase.plan_from_file(path).await?;
        let report = self.printer.print_plan(&plan);
        Ok((plan, report))
    }

    pub fn render_monthly_summary(&self, summary: &MonthlySummary) -> SettlementReport {
        self.printer.print_monthly_summary(summary)
    }

    /// Effective POS rate from a base rate, performance multiplier, and
    /// volume bonus, capped at the 50% business ceiling.
    pub fn pos_commission_rate(
        &self,
        base_rate: f64,
        performance_multiplier: f64,
        volume_bonus: f64,
    ) -> f64 {
        rate_adjuster::adjusted_pos_rate(base_rate, performance_multiplier, volume_bonus)
    }

    /// What-if earnings projection for a point of sale. `commission_rate`
    /// defaults to the engine's POS rate, `working_days_per_month` to 22.
    pub fn estimate_monthly_earnings(
        &self,
        avg_docs_per_day: f64,
        avg_doc_price: f64,
        commission_rate: Option<f64>,
        working_days_per_month: Option<f64>,
    ) -> EarningsProjection {
        earnings_projector::project(
            avg_docs_per_day,
            avg_doc_price,
            commission_rate.unwrap_or(self.default_rates.pos_rate),
            working_days_per_month.unwrap_or(DEFAULT_WORKING_DAYS_PER_MONTH),
        )
    }

    /// Defensive post-hoc check of a computed split.
    pub fn validate_commission_calculation(
        &self,
        price: u64,
        breakdown: &CommissionBreakdown,
    ) -> ValidationReport {
        validator::validate(price, breakdown)
    }
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self::with_standard_rates()
    }
}

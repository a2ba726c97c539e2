use chrono::NaiveDate;
use notarypro_commission::{
    entities::{DocumentSale, RecordId, StakeholderRole},
    util::CommissionEngine,
};

const SNAPSHOT_JSON: &str = r#"[
    {
        "id": 1,
        "createdAt": "2025-03-04T12:30:00.000Z",
        "vecinoId": "V-001",
        "certificadorId": "C-001",
        "vecinoAmount": "1000.00",
        "certificadorAmount": "875.00",
        "adminAmount": "625.00",
        "totalAmount": "2500.00",
        "isPaid": false
    },
    {
        "id": 2,
        "createdAt": "2025-03-10T09:00:00.000Z",
        "vecinoId": "V-001",
        "vecinoAmount": "400.00",
        "adminAmount": "250.00",
        "totalAmount": "1000.00",
        "isPaid": false
    },
    {
        "id": 3,
        "createdAt": "2025-03-12T16:45:00.000Z",
        "vecinoId": "V-002",
        "vecinoAmount": "9999.00",
        "adminAmount": "9999.00",
        "totalAmount": "9999.00",
        "isPaid": true
    }
]"#;

#[test]
fn split_and_validate_round_trip() {
    let engine = CommissionEngine::with_standard_rates();
    let breakdown = engine.calculate_commissions(2500, None).expect("split");
    assert_eq!(breakdown.pos, 1000);
    assert_eq!(breakdown.certifier, 875);
    assert_eq!(breakdown.admin, 625);
    let report = engine.validate_commission_calculation(2500, &breakdown);
    assert!(report.is_valid, "unexpected violations: {:?}", report.errors);
}

#[test]
fn portfolio_totals_match_individual_splits() {
    let engine = CommissionEngine::with_standard_rates();
    let sales = [
        DocumentSale::new(2500),
        DocumentSale::new(1000),
        DocumentSale::new(100),
    ];
    let totals = engine.calculate_total_commissions(&sales).expect("aggregate");
    assert_eq!(totals.total, 3600);
    assert_eq!(totals.pos + totals.certifier + totals.admin, totals.total);
}

#[test]
fn snapshot_to_settlement_plan_and_report() {
    let engine = CommissionEngine::with_standard_rates();
    let (plan, report) = engine
        .batch_payments_from_json(SNAPSHOT_JSON)
        .expect("plan from snapshot");

    // Record 3 is paid and must not appear anywhere.
    let v1 = &plan.pos_payments["V-001"];
    assert_eq!(v1.amount, 1400.0);
    assert_eq!(v1.record_ids, vec![RecordId(1), RecordId(2)]);
    assert!(!plan.pos_payments.contains_key("V-002"));
    assert_eq!(plan.certifier_payments["C-001"].amount, 875.0);
    assert_eq!(plan.admin_total, 875.0);
    assert_eq!(plan.admin_record_ids, vec![RecordId(1), RecordId(2)]);

    assert!(report.contains("V-001"));
    assert!(report.contains("1,400 "));
    assert!(report.contains("; --- Certifier payments"));
}

#[test]
fn monthly_summary_from_snapshot() {
    let engine = CommissionEngine::with_standard_rates();
    let records = engine
        .load_records_from_json(SNAPSHOT_JSON)
        .expect("parse snapshot");

    let march = NaiveDate::from_ymd_opt(2025, 3, 15);
    let summary = engine.calculate_monthly_commissions(&records, StakeholderRole::Pos, march);
    assert_eq!(summary.total_earned, 1000.0 + 400.0 + 9999.0);
    assert_eq!(summary.total_paid, 9999.0);
    assert_eq!(summary.total_pending, 1400.0);
    assert_eq!(summary.document_count, 3);
    assert_eq!(
        summary.total_earned,
        summary.total_paid + summary.total_pending
    );

    // A different month sees none of these records.
    let april = NaiveDate::from_ymd_opt(2025, 4, 1);
    let empty = engine.calculate_monthly_commissions(&records, StakeholderRole::Pos, april);
    assert_eq!(empty.document_count, 0);
    assert_eq!(empty.average_per_document, 0.0);
}

#[tokio::test]
async fn settlement_from_snapshot_file() {
    let dir = std::env::temp_dir().join("notarypro-commission-smoke");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let snapshot_path = dir.join("snapshot.json");
    std::fs::write(&snapshot_path, SNAPSHOT_JSON).expect("write snapshot");

    let engine = CommissionEngine::with_standard_rates();
    let (plan, report) = engine
        .batch_payments_from_file(&snapshot_path)
        .await
        .expect("plan from file");
    assert_eq!(plan.pos_payments["V-001"].amount, 1400.0);
    assert!(report.contains("Administration"));
}

#[tokio::test]
async fn engine_and_snapshot_load_concurrently() {
    let dir = std::env::temp_dir().join("notarypro-commission-smoke");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let snapshot_path = dir.join("ledger.csv");
    let rates_path = dir.join("rates.ron");
    std::fs::write(
        &snapshot_path,
        "id,createdAt,vecinoId,certificadorId,vecinoAmount,certificadorAmount,adminAmount,totalAmount,isPaid\n\
         1,2025-03-04T12:30:00,V-001,C-001,1000.00,875.00,625.00,2500.00,false\n",
    )
    .expect("write csv snapshot");
    std::fs::write(
        &rates_path,
        "(pos_rate: 0.45, certifier_rate: 0.35, admin_rate: 0.20)",
    )
    .expect("write rates");

    let (engine, records) = CommissionEngine::load_from_files(&snapshot_path, &rates_path)
        .await
        .expect("load engine and snapshot");
    assert_eq!(records.len(), 1);
    assert_eq!(engine.default_rates().pos_rate, 0.45);

    let breakdown = engine.calculate_commissions(1000, None).expect("split");
    assert_eq!(breakdown.pos, 450);
    assert_eq!(breakdown.admin, 1000 - 450 - 350);
}

#[test]
fn estimator_helpers_respect_engine_defaults() {
    let engine = CommissionEngine::with_standard_rates();

    let rate = engine.pos_commission_rate(0.40, 1.5, 0.05);
    assert_eq!(rate, 0.50);

    let projection = engine.estimate_monthly_earnings(5.0, 2500.0, None, None);
    assert_eq!(projection.daily_earnings, 5.0 * 2500.0 * 0.40);
    assert_eq!(projection.documents_per_month, 110.0);
}

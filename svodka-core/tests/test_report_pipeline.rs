//! End-to-end properties of the analytic pipeline: window → aggregate →
//! rank, and the spending report, over one shared fixture.

use chrono::NaiveDate;
use svodka_core::{
    CashbackRates, Outcome, Transaction, analyze_cashback_categories, spending_report,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture() -> Vec<Transaction> {
    vec![
        Transaction::new(date(2025, 1, 15), -100.0, "Еда"),
        Transaction::new(date(2025, 2, 20), -200.0, "Транспорт"),
        Transaction::new(date(2025, 3, 10), -150.0, "Еда"),
        Transaction::new(date(2025, 4, 1), -50.0, "Еда"),
        Transaction::new(date(2025, 4, 15), -200.0, "Транспорт"),
        Transaction::new(date(2025, 4, 20), 30000.0, "Зарплата"),
    ]
}

#[test]
fn test_cashback_ranking_over_fixture() {
    let txns = fixture();
    let ranked =
        analyze_cashback_categories(&txns, 2025, 4, CashbackRates::default()).into_rows();

    // Income subtracts, so the salary category ranks last with a
    // negative benefit; the two expense categories rank by magnitude.
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0], ("Транспорт".to_string(), 8.0));
    assert_eq!(ranked[1], ("Еда".to_string(), 2.0));
    assert_eq!(ranked[2].0, "Зарплата");
    assert!(ranked[2].1 < 0.0);
}

#[test]
fn test_spending_report_matches_known_totals() {
    let txns = fixture();
    let rows = spending_report(&txns, "Еда", Some("2025-04-02")).into_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|t| t.amount).sum::<f64>(), -300.0);
}

#[test]
fn test_analytics_never_error_past_the_boundary() {
    let txns = fixture();

    // Bad period, bad reference date, empty month: all come back as
    // typed empties, none panic or propagate.
    assert!(analyze_cashback_categories(&txns, 2025, 0, CashbackRates::default()).is_empty());
    assert!(spending_report(&txns, "Еда", Some("02.04.2025")).is_empty());
    assert!(matches!(
        analyze_cashback_categories(&txns, 2019, 7, CashbackRates::default()),
        Outcome::Empty(_)
    ));
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let txns = fixture();

    let a = analyze_cashback_categories(&txns, 2025, 4, CashbackRates::default());
    let b = analyze_cashback_categories(&txns, 2025, 4, CashbackRates::default());
    assert_eq!(a, b);

    let a = spending_report(&txns, "Транспорт", Some("2025-04-02"));
    let b = spending_report(&txns, "Транспорт", Some("2025-04-02"));
    assert_eq!(a, b);
}

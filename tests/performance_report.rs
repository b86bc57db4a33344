use chrono::{NaiveDate, Utc};
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use uuid::Uuid;

use shop_ledger::models::{record::TransactionRecord, shop::Shop};
use shop_ledger::performance::{
    CallerScope, RandomColors, ReportSettings, ShopColors, ShopSeries, align_and_merge,
    build_report, monthly_series, summarize,
};

fn shop(name: &str) -> Shop {
    Shop {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: "Town".to_string(),
    }
}

fn record(shop: &Shop, date: &str, amounts: [i64; 4]) -> TransactionRecord {
    TransactionRecord {
        id: Uuid::new_v4(),
        shop_id: shop.id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        cash_in: Decimal::from(amounts[0]),
        cash_out: Decimal::from(amounts[1]),
        till_in: Decimal::from(amounts[2]),
        till_out: Decimal::from(amounts[3]),
        image_url: None,
        created_at: Utc::now(),
    }
}

fn settings() -> ReportSettings {
    ReportSettings {
        target_amount: Decimal::from(30_000),
        currency_symbol: "KSH".to_string(),
    }
}

fn colors(seed: u64) -> ShopColors<RandomColors<StdRng>> {
    ShopColors::new(RandomColors::new(StdRng::seed_from_u64(seed)))
}

#[test]
fn test_shop_a_exceeds_target() {
    let a = shop("A");
    let records = vec![
        record(&a, "2025-01-10", [25_000, 0, 0, 0]),
        record(&a, "2025-01-11", [25_000, 0, 0, 0]),
    ];

    let report = build_report(
        &CallerScope::AllShops,
        &[a],
        records,
        &settings(),
        &mut colors(1),
    );
    let summary = &report.shop_summaries[0].summary;

    assert_eq!(summary.net_cash, Decimal::from(50_000));
    assert_eq!(summary.average_per_day, Decimal::from(25_000));
    assert_eq!(summary.target_ratio.to_string(), "166.67");
    assert_eq!(summary.profit_margin, Decimal::from(100));
    assert!(!summary.below_target);
    assert!(report.alerts.is_empty());
}

#[test]
fn test_shop_b_without_records_triggers_alert() {
    let b = shop("B");

    let report = build_report(
        &CallerScope::AllShops,
        &[b],
        Vec::new(),
        &settings(),
        &mut colors(2),
    );
    let summary = &report.shop_summaries[0].summary;

    assert!(summary.below_target);
    assert_eq!(summary.average_per_day, Decimal::ZERO);
    assert_eq!(summary.active_days, 0);
    assert_eq!(summary.target_ratio.to_string(), "0.00");
    assert_eq!(report.alerts, vec!["B: Sales are below the target of KSH 30000."]);
}

#[test]
fn test_monthly_totals_add_up_to_summary_cash_in() {
    let a = shop("A");
    let records = vec![
        record(&a, "2024-11-30", [1_250, 10, 20, 30]),
        record(&a, "2024-12-01", [3_000, 0, 0, 0]),
        record(&a, "2024-12-24", [499, 0, 100, 0]),
        record(&a, "2025-01-02", [7_777, 5, 0, 0]),
    ];

    let summary = summarize(&a, &records, Decimal::from(30_000));
    let series = monthly_series(&records);

    let total: Decimal = series.values().copied().sum();
    assert_eq!(total, summary.cash_in);
}

#[test]
fn test_december_precedes_january_of_next_year() {
    let a = shop("A");
    let b = shop("B");
    let series = vec![
        ShopSeries::new(&a, &[record(&a, "2025-01-05", [10, 0, 0, 0])]),
        ShopSeries::new(&b, &[record(&b, "2024-12-05", [20, 0, 0, 0])]),
    ];

    let chart = align_and_merge(&series, &mut colors(3));

    assert_eq!(chart.labels, vec!["Dec 2024", "Jan 2025"]);
    for line in &chart.series {
        assert_eq!(line.values.len(), chart.labels.len());
    }
}

#[test]
fn test_single_shop_report_json_shape() {
    let own = shop("Retail Shop");
    let records = vec![
        record(&own, "2025-02-01", [1_000, 200, 0, 0]),
        record(&own, "2025-03-01", [2_000, 0, 0, 300]),
    ];

    let report = build_report(
        &CallerScope::SingleShop(own.clone()),
        &[own],
        records,
        &settings(),
        &mut colors(4),
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["currency_symbol"], "KSH");
    assert_eq!(json["shop_summaries"][0]["target_ratio"], "10.00");
    assert_eq!(json["monthly_chart"]["labels"], serde_json::json!(["Feb 2025", "Mar 2025"]));
    assert_eq!(
        json["monthly_chart"]["series"][0]["values"],
        serde_json::json!([1000.0, 2000.0])
    );
    assert_eq!(
        json["shop_summaries"][0]["color"],
        json["monthly_chart"]["series"][0]["color"]
    );
    assert_eq!(
        json["alerts"],
        serde_json::json!(["Sales for your shop are below the target of KSH 30000."])
    );
}

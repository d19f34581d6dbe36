//! End-to-end pipeline test: JSON files in, output documents out.

use etf_tracker_core::{AnalyticsConfig, AnalyticsService, Error, FundSpec};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn write_fund_file(dir: &TempDir, file_name: &str, document: &Value) {
    fs::write(
        dir.path().join(file_name),
        serde_json::to_string_pretty(document).unwrap(),
    )
    .unwrap();
}

fn sample_config(dir: &TempDir) -> AnalyticsConfig {
    AnalyticsConfig::new(
        dir.path(),
        vec![
            FundSpec::new("00980A", "Fund A"),
            FundSpec::new("00981A", "Fund B"),
        ],
    )
}

/// Fund A: 2330 builds up a position, 2317 gets closed out.
fn fund_a_document() -> Value {
    json!([
        {
            "data_date": "2025-11-05",
            "holdings": {
                "2330": { "count": 500, "weight": 0.1, "name": "台積電" },
                "2317": { "count": 80000, "weight": 2.0, "name": "鴻海" }
            }
        },
        {
            "data_date": "2025-11-06",
            "holdings": {
                "2330": { "count": 2000, "weight": 0.4, "name": "台積電" }
            },
            "price_info": { "price": 25.3, "change_value": 0.5, "change_percent": 2.0 }
        }
    ])
}

fn fund_b_document() -> Value {
    json!([
        {
            "data_date": "2025-11-05",
            "holdings": { "2330": { "count": 3000, "weight": 0.9 } }
        },
        {
            "data_date": "2025-11-06",
            "holdings": { "2330": { "count": 3000, "weight": 0.9 } }
        }
    ])
}

#[test]
fn pipeline_produces_both_documents() {
    let dir = TempDir::new().unwrap();
    write_fund_file(&dir, "00980A_holdings.json", &fund_a_document());
    write_fund_file(&dir, "00981A_holdings.json", &fund_b_document());

    let service = AnalyticsService::load(sample_config(&dir)).unwrap();

    let reports_path = service.write_processed_reports().unwrap();
    let index_path = service.write_stock_index().unwrap();

    let reports: Value =
        serde_json::from_str(&fs::read_to_string(reports_path).unwrap()).unwrap();
    let fund_a = &reports["00980A"];
    assert_eq!(fund_a["name"], "Fund A");
    assert_eq!(fund_a["latest_date"], "2025-11-06");
    assert_eq!(fund_a["previous_date"], "2025-11-05");
    assert_eq!(fund_a["price"], 25.3);

    // 2330 grew 1500 raw shares (1 lot) and 0.3 weight; the weight
    // branch admits it to the card list. 2317 was closed out.
    let changes = fund_a["daily_changes"].as_array().unwrap();
    let codes: Vec<&str> = changes
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"2330"));
    assert!(codes.contains(&"2317"));
    let closed = changes.iter().find(|c| c["code"] == "2317").unwrap();
    assert_eq!(closed["type"], "closed");

    assert_eq!(fund_a["summary"]["closed_count"], 1);
    assert_eq!(fund_a["summary"]["increased_count"], 1);
    assert_eq!(fund_a["ranks"]["closed_positions"][0]["code"], "2317");
    assert_eq!(fund_a["strategy_params"]["entry_threshold_shares"], 1000);

    // Fund B changed nothing day-over-day.
    let fund_b = &reports["00981A"];
    assert_eq!(fund_b["summary"]["new_count"], 0);
    assert_eq!(fund_b["summary"]["net_count_change"], 0);
    assert_eq!(fund_b["ranks"]["top_count_up"], json!([]));

    let index: Value = serde_json::from_str(&fs::read_to_string(index_path).unwrap()).unwrap();
    let tsmc = &index["2330"];
    assert_eq!(tsmc["name"], "台積電");
    // Held above threshold by both funds.
    assert!(tsmc["etf_holdings"]["00980A"].is_object());
    assert!(tsmc["etf_holdings"]["00981A"].is_object());
    assert_eq!(tsmc["etf_holdings"]["00981A"]["current_count"], 3);
    assert_eq!(
        tsmc["etf_holdings"]["00980A"]["history"][0]["status"],
        "first_appearance"
    );

    // 2317 was held above threshold by fund A, so it is indexed there.
    assert_eq!(index["2317"]["etf_holdings"]["00980A"]["max_count"], 80);
}

#[test]
fn missing_fund_file_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_fund_file(&dir, "00980A_holdings.json", &fund_a_document());
    // 00981A_holdings.json intentionally absent.

    match AnalyticsService::load(sample_config(&dir)) {
        Err(Error::MissingInputFile { path }) => {
            assert!(path.ends_with("00981A_holdings.json"));
        }
        other => panic!("expected MissingInputFile, got {:?}", other.err()),
    }
}

#[test]
fn malformed_record_is_propagated_not_defaulted() {
    let dir = TempDir::new().unwrap();
    // Snapshot missing the required holdings mapping.
    write_fund_file(
        &dir,
        "00980A_holdings.json",
        &json!([{ "data_date": "2025-11-05" }]),
    );
    write_fund_file(&dir, "00981A_holdings.json", &fund_b_document());

    assert!(matches!(
        AnalyticsService::load(sample_config(&dir)),
        Err(Error::MalformedRecord { .. })
    ));
}

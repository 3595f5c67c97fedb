//! Integration tests for the salary engine HTTP API.
//!
//! This test suite covers:
//! - Gross-to-net breakdowns for every category
//! - Net-to-gross recovery through the solver
//! - Standard deduction toggling
//! - Caps and floors
//! - Warnings surfaced to the display layer
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/kz").expect("Failed to load config");
    AppState::from_config(&config, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .expect("No rate table for 2026")
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(amount: &str, direction: &str, deduction: bool, category: &str) -> Value {
    json!({
        "amount": amount,
        "direction": direction,
        "include_standard_deduction": deduction,
        "category": category
    })
}

fn field(result: &Value, name: &str) -> Decimal {
    let raw = result["result"][name]
        .as_str()
        .unwrap_or_else(|| panic!("missing result field {}", name));
    decimal(raw)
}

fn assert_field(result: &Value, name: &str, expected: &str) {
    let actual = field(result, name);
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} {}, got {}",
        name,
        expected,
        actual.normalize()
    );
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Gross to net
// =============================================================================

#[tokio::test]
async fn test_standard_gross_300k_with_deduction() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("300000", "gross", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "gross", "300000");
    assert_field(&result, "employee_pension", "30000");
    assert_field(&result, "employee_health", "6000");
    assert_field(&result, "income_tax", "13425");
    assert_field(&result, "net", "250575");
    assert_field(&result, "employer_social_deduction", "13500");
    assert_field(&result, "employer_social_tax", "2700");
    assert_field(&result, "employer_health", "9000");
    assert_field(&result, "employer_pension", "10500");
    assert_field(&result, "total_employer_cost", "335700");
}

#[tokio::test]
async fn test_standard_gross_300k_without_deduction() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", false, "standard")).await;

    assert_field(&result, "income_tax", "26400");
    assert_field(&result, "net", "237600");
}

#[tokio::test]
async fn test_pensioner_gross_300k() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", true, "pensioner")).await;

    assert_field(&result, "employee_pension", "0");
    assert_field(&result, "employee_health", "0");
    assert_field(&result, "income_tax", "17025");
    assert_field(&result, "employer_social_tax", "18000");
    assert_field(&result, "employer_pension", "0");
    assert_field(&result, "net", "282975");
}

#[tokio::test]
async fn test_student_gross_300k() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", true, "student")).await;

    assert_field(&result, "employee_health", "0");
    assert_field(&result, "employer_health", "0");
    assert_field(&result, "income_tax", "14025");
    assert_field(&result, "net", "255975");
}

#[tokio::test]
async fn test_disabled_1_2_gross_300k() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", true, "disabled_1_2")).await;

    assert_field(&result, "net", "300000");
    assert_field(&result, "income_tax", "0");
    assert_field(&result, "employer_social_tax", "0");
    assert_field(&result, "employer_pension", "10500");
    assert_field(&result, "total_employer_cost", "310500");
}

#[tokio::test]
async fn test_disabled_3_gross_300k() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", true, "disabled_3")).await;

    assert_field(&result, "employee_pension", "30000");
    assert_field(&result, "income_tax", "0");
    assert_field(&result, "net", "270000");
    assert_field(&result, "employer_health", "0");
    assert_field(&result, "total_employer_cost", "326700");
}

#[tokio::test]
async fn test_high_salary_hits_caps() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("5000000", "gross", true, "standard")).await;

    assert_field(&result, "employee_pension", "425000");
    assert_field(&result, "employee_health", "34000");
    assert_field(&result, "employer_social_deduction", "29750");
    assert_field(&result, "employer_health", "102000");
    assert_field(&result, "employer_pension", "148750");
}

#[tokio::test]
async fn test_zero_amount_yields_zero_breakdown() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("0", "gross", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    for name in [
        "net",
        "employee_pension",
        "employee_health",
        "income_tax",
        "employer_social_deduction",
        "employer_social_tax",
        "employer_health",
        "employer_pension",
        "total_employer_cost",
    ] {
        assert_field(&result, name, "0");
    }
    assert!(warning_codes(&result).is_empty());
}

// =============================================================================
// Net to gross
// =============================================================================

#[tokio::test]
async fn test_net_target_recovers_gross() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("250575", "net", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert!((field(&result, "net") - decimal("250575")).abs() < decimal("0.5"));
    assert!((field(&result, "gross") - decimal("300000")).abs() < Decimal::ONE);
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_net_target_for_each_category() {
    for category in ["standard", "pensioner", "student", "disabled_1_2", "disabled_3"] {
        let router = create_router_for_test();
        let (status, result) =
            post_calculate(router, create_request("400000", "net", true, category)).await;

        assert_eq!(status, StatusCode::OK, "category {}", category);
        assert!(
            (field(&result, "net") - decimal("400000")).abs() < decimal("0.5"),
            "category {} net {}",
            category,
            field(&result, "net")
        );
    }
}

#[tokio::test]
async fn test_net_direction_echoes_normalized_input() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("150000", "net", false, "student")).await;

    assert_eq!(result["input"]["direction"], "net");
    assert_eq!(result["input"]["category"], "student");
    assert_eq!(result["input"]["include_standard_deduction"], false);
}

// =============================================================================
// Warnings
// =============================================================================

#[tokio::test]
async fn test_below_minimum_wage_warning() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("60000", "gross", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(warning_codes(&result), vec!["BELOW_MINIMUM_WAGE"]);
    // Floor still applies to the social deduction
    assert_field(&result, "employer_social_deduction", "4250");
}

#[tokio::test]
async fn test_net_target_below_minimum_wage_warns() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("80000", "net", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(warning_codes(&result), vec!["BELOW_MINIMUM_WAGE"]);
    assert!(field(&result, "gross") > decimal("85000"));
}

#[tokio::test]
async fn test_negative_amount_is_coerced_to_zero() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("-5000", "gross", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(warning_codes(&result), vec!["AMOUNT_COERCED"]);
    assert_eq!(decimal(result["input"]["amount"].as_str().unwrap()), Decimal::ZERO);
    assert_field(&result, "gross", "0");
}

// =============================================================================
// Response shape
// =============================================================================

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let (_, result) =
        post_calculate(router, create_request("300000", "gross", true, "standard")).await;

    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());
    assert_eq!(result["regime_code"], "KZ");
    assert_eq!(result["rates_effective_date"], "2026-01-01");

    let breakdown = result["result"].as_object().unwrap();
    assert_eq!(breakdown.len(), 10);
}

#[tokio::test]
async fn test_defaults_apply_when_optional_fields_missing() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, json!({ "amount": 300000, "direction": "gross" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["input"]["category"], "standard");
    assert_eq!(result["input"]["include_standard_deduction"], true);
    assert_field(&result, "net", "250575");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"amount\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .body(Body::from(
                    create_request("1000", "gross", true, "standard").to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_error_invalid_direction() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("1000", "sideways", true, "standard")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_missing_amount() {
    let router = create_router_for_test();
    let (status, result) = post_calculate(router, json!({ "direction": "gross" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("amount"));
}

#[tokio::test]
async fn test_error_unknown_category() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("1000", "gross", true, "disabled")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["details"].as_str().unwrap().contains("disabled_1_2"));
}

#[tokio::test]
async fn test_error_amount_above_maximum() {
    for direction in ["gross", "net"] {
        let router = create_router_for_test();
        let (status, result) = post_calculate(
            router,
            create_request("50000000000000000000000000000", direction, true, "standard"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "direction {}", direction);
        assert_eq!(result["code"], "VALIDATION_ERROR");
        assert!(result["message"].as_str().unwrap().contains("out of range"));
    }
}

#[tokio::test]
async fn test_maximum_amount_is_accepted() {
    let router = create_router_for_test();
    let (status, result) =
        post_calculate(router, create_request("1000000000000000", "net", true, "standard")).await;

    assert_eq!(status, StatusCode::OK);
    assert!((field(&result, "net") - decimal("1000000000000000")).abs() < Decimal::ONE);
}

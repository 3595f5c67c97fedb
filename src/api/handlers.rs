//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::Evaluation;
use crate::models::CalculationInput;

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, CalculationWarning, RatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the salary breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let raw_input = match CalculationInput::try_from(request) {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid calculation input"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let mut warnings = Vec::new();
    let input = raw_input.normalized();
    if input.amount != raw_input.amount {
        warnings.push(CalculationWarning::new(
            "AMOUNT_COERCED",
            format!("Negative amount {} was treated as 0", raw_input.amount),
        ));
    }

    let start_time = Instant::now();
    let calculator = state.calculator();
    let evaluation = calculator.evaluate(&input);
    let duration = start_time.elapsed();

    warnings.extend(evaluation_warnings(
        &evaluation,
        input.amount,
        calculator.rate_table().minimum_wage,
    ));

    info!(
        correlation_id = %correlation_id,
        direction = ?input.direction,
        category = %input.category,
        gross = %evaluation.result.gross,
        net = %evaluation.result.net,
        warnings = warnings.len(),
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regime_code: state.regime().code.clone(),
        rates_effective_date: calculator.rate_table().effective_date,
        input,
        result: evaluation.result,
        warnings,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /rates endpoint.
///
/// Returns the rate table used by `/calculate`.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(RatesResponse {
        regime: state.regime().clone(),
        rate_table: state.calculator().rate_table().clone(),
    })
}

/// Collects the warnings implied by a finished calculation.
///
/// The minimum wage check applies to the amount as entered, whichever
/// direction it was given in.
fn evaluation_warnings(
    evaluation: &Evaluation,
    amount: Decimal,
    minimum_wage: Decimal,
) -> Vec<CalculationWarning> {
    let mut warnings = Vec::new();

    if amount > Decimal::ZERO && amount < minimum_wage {
        warnings.push(CalculationWarning::new(
            "BELOW_MINIMUM_WAGE",
            format!(
                "Entered amount {} is below the minimum wage of {}",
                amount.normalize(),
                minimum_wage
            ),
        ));
    }

    if let Some(report) = &evaluation.solver {
        if report.bracket_capped {
            warnings.push(CalculationWarning::new(
                "BRACKET_CAPPED",
                "The gross salary search hit its upper safety bound",
            ));
        }
        if !report.converged {
            warnings.push(CalculationWarning::new(
                "SOLVER_NOT_CONVERGED",
                format!(
                    "Closest reachable net is {} after {} iterations",
                    report.result.net.normalize(),
                    report.iterations
                ),
            ));
        }
    }

    warnings
}

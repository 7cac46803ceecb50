//! `POST /sumar`: add two operands from a JSON body.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use serde_json::Value;
use std::time::Instant;

use crate::calc::{self, AdditionRequest, AdditionResult, CalcError};
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const ROUTE: &str = "/sumar";

pub async fn sum_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AdditionResult>, ApiError> {
    let start = Instant::now();
    let verbose = state.config.load().debug;

    let outcome = compute(payload, verbose);

    let status = match &outcome {
        Ok(result) => {
            tracing::debug!(
                request_id = %request_id(&headers),
                a = result.a,
                b = result.b,
                resultado = result.sum,
                "Sum computed"
            );
            200
        }
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request(ROUTE, status, start);

    outcome.map(Json)
}

fn compute(
    payload: Result<Json<Value>, JsonRejection>,
    verbose: bool,
) -> Result<AdditionResult, ApiError> {
    let Json(value) = payload.map_err(|rejection| {
        let err = CalcError::NotStructured {
            reason: rejection.body_text(),
        };
        ApiError::from_calc(err, verbose)
    })?;

    let request = AdditionRequest::from_payload(value).map_err(|e| ApiError::from_calc(e, verbose))?;
    calc::add(&request).map_err(|e| ApiError::from_calc(e, verbose))
}

//! HTTP request handlers for the shift board API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::SchedulingError;
use crate::models::{Employee, Shift};
use crate::scheduling::ShiftFilter;

use super::request::{
    CreateEmployeeRequest, CreateShiftRequest, ListShiftsParams, UpdateEmployeeRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/shifts",
            get(list_shifts_handler).post(create_shift_handler),
        )
        .route(
            "/api/shifts/:id",
            get(get_shift_handler).delete(delete_shift_handler),
        )
        .route(
            "/api/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/api/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /api/shifts.
///
/// Validates and stores a shift, returning it with its assigned id.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create shift request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let shift = state
        .shifts()
        .create_shift(request.into())
        .map_err(|err| rejected(err, correlation_id, "Shift creation rejected"))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = shift.id,
        employee_id = shift.employee_id,
        "Shift created successfully"
    );
    Ok((StatusCode::CREATED, Json(shift)))
}

/// Handler for GET /api/shifts.
///
/// Accepts optional `employee` and `date` query parameters.
async fn list_shifts_handler(
    State(state): State<AppState>,
    params: Result<Query<ListShiftsParams>, QueryRejection>,
) -> HandlerResult<Json<Vec<Shift>>> {
    let correlation_id = Uuid::new_v4();

    let Query(params) = params.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query parameters");
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })?;

    let filter: ShiftFilter = params.into();
    let shifts = state
        .shifts()
        .list_shifts(filter)
        .map_err(|err| rejected(err, correlation_id, "Shift listing failed"))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = ?filter.employee_id,
        date = ?filter.date,
        count = shifts.len(),
        "Shifts listed"
    );
    Ok(Json(shifts))
}

/// Handler for GET /api/shifts/:id.
async fn get_shift_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|rejection| path_rejection(rejection, correlation_id))?;

    let shift = state
        .shifts()
        .get_shift(id)
        .map_err(|err| rejected(err, correlation_id, "Shift lookup failed"))?;
    Ok(Json(shift))
}

/// Handler for DELETE /api/shifts/:id.
///
/// Always answers 204 for a well-formed id, whether or not it existed.
async fn delete_shift_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|rejection| path_rejection(rejection, correlation_id))?;

    state
        .shifts()
        .delete_shift(id)
        .map_err(|err| rejected(err, correlation_id, "Shift deletion failed"))?;

    info!(correlation_id = %correlation_id, shift_id = id, "Shift delete processed");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/employees.
async fn list_employees_handler(State(state): State<AppState>) -> HandlerResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();
    let employees = state
        .employees()
        .list()
        .map_err(|err| rejected(err, correlation_id, "Employee listing failed"))?;
    Ok(Json(employees))
}

/// Handler for POST /api/employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let employee = state
        .employees()
        .create(request.into())
        .map_err(|err| rejected(err, correlation_id, "Employee creation rejected"))?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /api/employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|rejection| path_rejection(rejection, correlation_id))?;

    match state.employees().get(id) {
        Ok(employee) => Ok(Json(employee)),
        // A direct lookup of a missing employee is a 404 rather than bad input
        Err(SchedulingError::EmployeeNotFound { employee_id }) => Err(ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::new(
                "EMPLOYEE_NOT_FOUND",
                format!("Employee with ID {} not found", employee_id),
            ),
        }),
        Err(err) => Err(rejected(err, correlation_id, "Employee lookup failed")),
    }
}

/// Handler for PUT /api/employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> HandlerResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|rejection| path_rejection(rejection, correlation_id))?;
    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let employee = state
        .employees()
        .update(id, request.into())
        .map_err(|err| rejected(err, correlation_id, "Employee update rejected"))?;
    Ok(Json(employee))
}

/// Handler for DELETE /api/employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|rejection| path_rejection(rejection, correlation_id))?;

    state
        .employees()
        .delete(id)
        .map_err(|err| rejected(err, correlation_id, "Employee deletion failed"))?;
    Ok(StatusCode::NO_CONTENT)
}

fn rejected(err: SchedulingError, correlation_id: Uuid, context: &'static str) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    err.into()
}

fn path_rejection(rejection: PathRejection, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path parameter");
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
}

fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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
    ApiErrorResponse::bad_request(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::in_memory(&StorageConfig::default())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, json_request("POST", "/api/shifts", "{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"date": "2024-01-10", "start_time": "09:00", "end_time": "17:00"}"#;

        let (status, body) = send(router, json_request("POST", "/api/shifts", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("employee_id"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/api/shifts")
            .body(Body::from("{}"))
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_non_numeric_id_returns_400() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/shifts/abc")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bad_date_query_returns_400() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/api/shifts?date=10-01-2024")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_employee_lookup_returns_404() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/api/employees/77")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }
}

use std::sync::MutexGuard;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::{
    AppState,
    auth::verify_token,
    error::ApiError,
    models::{ClassOverview, Member},
    registry::{DomainError, Registry},
};

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    #[schema(example = "M001")]
    pub member_id: String,
}

fn lock_registry(state: &AppState) -> Result<MutexGuard<'_, Registry>, ApiError> {
    state
        .registry
        .lock()
        .map_err(|_| ApiError::Internal("Registry lock poisoned".into()))
}

#[utoipa::path(get, path = "/", tag = "gym")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Cardinal Fitness Check-In API",
        "endpoints": {
            "/members": "Register a new member",
            "/members/{member_id}": "Look up a member",
            "/members/{member_id}/check-in": "Check a member in",
            "/members/{member_id}/check-out": "Check a member out",
            "/classes": "List classes with enrolled members",
            "/classes/{class_name}/enrollments": "Sign a member up for a class"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "gym")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "gym")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/members",
    request_body = RegisterRequest,
    params(
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 201, description = "Member registered", body = Member),
        (status = 400, description = "Invalid email address"),
        (status = 401, description = "Invalid authentication token"),
        (status = 409, description = "Email already in use")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn register_member(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<AuthQuery>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let member = lock_registry(&state)?.register(&body.name, &body.email)?;
    state
        .notifier
        .notify(&member, &state.settings.notification_message);
    info!(member_id = %member.member_id, "registered new member");

    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/members/{member_id}",
    params(
        ("member_id" = String, Path, description = "Member id, e.g. M001"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Member not found")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn get_member(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(member_id): Path<String>,
    Query(query): Query<AuthQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let registry = lock_registry(&state)?;
    let member = registry
        .find_member(&member_id)
        .cloned()
        .ok_or(DomainError::MemberNotFound)?;
    Ok(Json(member))
}

#[utoipa::path(
    post,
    path = "/members/{member_id}/check-in",
    params(
        ("member_id" = String, Path, description = "Member id, e.g. M001"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member checked in"),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member already checked in")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn check_in_member(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(member_id): Path<String>,
    Query(query): Query<AuthQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let member = lock_registry(&state)?.check_in(&member_id)?;
    Ok(Json(serde_json::json!({
        "message": format!("{} has successfully checked in.", member.name)
    })))
}

#[utoipa::path(
    post,
    path = "/members/{member_id}/check-out",
    params(
        ("member_id" = String, Path, description = "Member id, e.g. M001"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member checked out"),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member already checked out")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn check_out_member(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(member_id): Path<String>,
    Query(query): Query<AuthQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let member = lock_registry(&state)?.check_out(&member_id)?;
    Ok(Json(serde_json::json!({
        "message": format!("{} has successfully checked out.", member.name)
    })))
}

#[utoipa::path(
    get,
    path = "/classes",
    params(
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "All classes with enrolled member names", body = [ClassOverview]),
        (status = 401, description = "Invalid authentication token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn list_classes(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<AuthQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let classes = lock_registry(&state)?.list_classes();
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/classes/{class_name}/enrollments",
    request_body = EnrollRequest,
    params(
        ("class_name" = String, Path, description = "Class name, e.g. Yoga"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member signed up"),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Member or class not found"),
        (status = 409, description = "Already signed up, or class is full")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn enroll_in_class(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(class_name): Path<String>,
    Query(query): Query<AuthQuery>,
    Json(body): Json<EnrollRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let member = lock_registry(&state)?.enroll(&class_name, &body.member_id)?;
    info!(member_id = %member.member_id, class = %class_name, "member signed up");
    Ok(Json(serde_json::json!({
        "message": format!("{} has successfully signed up for {class_name}.", member.name)
    })))
}

#[utoipa::path(
    delete,
    path = "/classes/{class_name}/enrollments/{member_id}",
    params(
        ("class_name" = String, Path, description = "Class name, e.g. Yoga"),
        ("member_id" = String, Path, description = "Member id, e.g. M001"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member withdrawn"),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Member or class not found"),
        (status = 409, description = "Member is not enrolled in this class")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "gym"
)]
pub async fn withdraw_from_class(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path((class_name, member_id)): Path<(String, String)>,
    Query(query): Query<AuthQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let member = lock_registry(&state)?.withdraw(&class_name, &member_id)?;
    info!(member_id = %member.member_id, class = %class_name, "member withdrawn");
    Ok(Json(serde_json::json!({
        "message": format!("{} has successfully withdrawn from {class_name}.", member.name)
    })))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shareit_api::{
    ApiError, ApprovalQuery, AuthenticatedActor, BookingResponse, CreateBookingRequest,
    CreateItemRequest, CreateUserRequest, ItemResponse, ListBookingsQuery, ListItemsQuery,
    USER_ID_HEADER, UpdateItemRequest, UpdateUserRequest, UserResponse, authenticate,
};
use shareit_domain::BookingRole;
use shareit_persistence::Persistence;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

/// `ShareIt` Server - HTTP server for the `ShareIt` booking backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 9090)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Every request holds the lock for the duration of its transaction.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { message } => {
                error!(error = %message, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Identifies the caller from the user id header.
fn actor_from_headers(headers: &HeaderMap) -> Result<AuthenticatedActor, HttpError> {
    let value: Option<&str> = match headers.get(USER_ID_HEADER) {
        Some(raw) => Some(raw.to_str().map_err(|_| {
            HttpError::from(ApiError::AuthenticationFailed {
                reason: format!("{USER_ID_HEADER} header is not valid text"),
            })
        })?),
        None => None,
    };
    authenticate(value).map_err(|err| HttpError::from(ApiError::from(err)))
}

/// Handler for POST `/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        user_id = actor.user_id.value(),
        item_id = req.item_id,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = shareit_api::create_booking(&mut persistence, &actor, req)?;

    Ok(Json(response))
}

/// Handler for PATCH `/bookings/{booking_id}?approved=`.
async fn handle_set_approval(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
    Query(query): Query<ApprovalQuery>,
) -> Result<Json<BookingResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        user_id = actor.user_id.value(),
        booking_id,
        approved = query.approved,
        "Handling set_approval request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        shareit_api::set_approval(&mut persistence, &actor, booking_id, query.approved)?;

    Ok(Json(response))
}

/// Handler for PATCH `/bookings/{booking_id}/cancel`.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        user_id = actor.user_id.value(),
        booking_id,
        "Handling cancel_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        shareit_api::cancel_booking(&mut persistence, &actor, booking_id)?;

    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        shareit_api::get_booking(&mut persistence, &actor, booking_id)?;

    Ok(Json(response))
}

async fn list_for_role(
    app_state: &AppState,
    headers: &HeaderMap,
    role: BookingRole,
    query: &ListBookingsQuery,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(headers)?;
    info!(
        user_id = actor.user_id.value(),
        role = %role,
        state = query.state.as_deref().unwrap_or("ALL"),
        "Handling list_bookings request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<BookingResponse> = shareit_api::list_bookings(
        &mut persistence,
        &actor,
        role,
        query,
        OffsetDateTime::now_utc(),
    )?;

    Ok(Json(response))
}

/// Handler for GET `/bookings`.
async fn handle_list_booker_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    list_for_role(&app_state, &headers, BookingRole::Booker, &query).await
}

/// Handler for GET `/bookings/owner`.
async fn handle_list_owner_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    list_for_role(&app_state, &headers, BookingRole::Owner, &query).await
}

/// Handler for POST `/users`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!("Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UserResponse = shareit_api::create_user(&mut persistence, &req)?;

    Ok(Json(response))
}

/// Handler for POST `/items`.
async fn handle_create_item(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ItemResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(user_id = actor.user_id.value(), "Handling create_item request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ItemResponse = shareit_api::create_item(&mut persistence, &actor, &req)?;

    Ok(Json(response))
}

/// Handler for GET `/users`.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<UserResponse> = shareit_api::list_users(&mut persistence)?;

    Ok(Json(response))
}

/// Handler for GET `/users/{user_id}`.
async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UserResponse = shareit_api::get_user(&mut persistence, user_id)?;

    Ok(Json(response))
}

/// Handler for PATCH `/users/{user_id}`.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!(user_id, "Handling update_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UserResponse = shareit_api::update_user(&mut persistence, user_id, &req)?;

    Ok(Json(response))
}

/// Handler for DELETE `/users/{user_id}`.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(user_id, "Handling delete_user request");

    let mut persistence = app_state.persistence.lock().await;
    shareit_api::delete_user(&mut persistence, user_id)?;

    Ok(StatusCode::OK)
}

/// Handler for GET `/items`.
async fn handle_list_items(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<ItemResponse> = shareit_api::list_items(&mut persistence, &actor, query)?;

    Ok(Json(response))
}

/// Handler for GET `/items/{item_id}`.
async fn handle_get_item(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ItemResponse = shareit_api::get_item(&mut persistence, &actor, item_id)?;

    Ok(Json(response))
}

/// Handler for PATCH `/items/{item_id}`.
async fn handle_update_item(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, HttpError> {
    let actor: AuthenticatedActor = actor_from_headers(&headers)?;
    info!(
        user_id = actor.user_id.value(),
        item_id,
        "Handling update_item request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ItemResponse =
        shareit_api::update_item(&mut persistence, &actor, item_id, &req)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_booker_bookings))
        .route("/bookings/owner", get(handle_list_owner_bookings))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}", patch(handle_set_approval))
        .route("/bookings/{booking_id}/cancel", patch(handle_cancel_booking))
        .route("/users", post(handle_create_user))
        .route("/users", get(handle_list_users))
        .route("/users/{user_id}", get(handle_get_user))
        .route("/users/{user_id}", patch(handle_update_user))
        .route("/users/{user_id}", delete(handle_delete_user))
        .route("/items", post(handle_create_item))
        .route("/items", get(handle_list_items))
        .route("/items/{item_id}", get(handle_get_item))
        .route("/items/{item_id}", patch(handle_update_item))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ShareIt Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

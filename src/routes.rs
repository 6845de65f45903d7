use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::api::dto::{LoginRequest, LoginResponse, TakeClassRequest, TakeClassResponse};
use crate::error::PortalError;
use crate::models::{Lesson, Tutor};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(login))
        .route("/api/lessons", get(list_lessons))
        .route("/api/lessons/take", post(take_class))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Demo login: accepts any non-empty credential pair and issues a fresh
/// opaque token.
async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, PortalError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(PortalError::Auth("Invalid credentials".to_string()));
    }

    Ok(Json(LoginResponse {
        tutor: Tutor {
            name: "Sarah Tan".to_string(),
            email: request.email,
        },
        token: format!("tok-{}", Uuid::new_v4()),
    }))
}

async fn list_lessons(State(state): State<AppState>) -> Json<Vec<Lesson>> {
    Json(state.lessons.read().await.clone())
}

async fn take_class(
    State(state): State<AppState>,
    Json(request): Json<TakeClassRequest>,
) -> Result<Json<TakeClassResponse>, PortalError> {
    let mut lessons = state.lessons.write().await;

    let lesson = lessons
        .iter_mut()
        .find(|l| l.id == request.lesson_id)
        .ok_or(PortalError::NotFound)?;

    if !lesson.is_claimable() {
        return Err(PortalError::Conflict("Lesson is not available".to_string()));
    }

    lesson.claim_for(&request.tutor_name);

    Ok(Json(TakeClassResponse {
        lesson: lesson.clone(),
    }))
}

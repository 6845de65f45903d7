pub mod dto;
pub mod mock;

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::error::{ErrorResponse, PortalError};
use crate::models::Lesson;

use self::dto::{LoginRequest, LoginResponse, TakeClassRequest, TakeClassResponse};
use self::mock::MockLessonService;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub offline: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let offline = env::var("PORTAL_OFFLINE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self { base_url, offline }
    }
}

/// Contract every lesson service implementation satisfies: the live HTTP
/// backend, the offline in-memory dataset, and the fallback wrapper that
/// callers actually hold.
#[async_trait]
pub trait LessonService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PortalError>;
    async fn list_lessons(&self) -> Result<Vec<Lesson>, PortalError>;
    async fn take_lesson(
        &self,
        lesson_id: &str,
        tutor_name: &str,
    ) -> Result<Lesson, PortalError>;
}

pub struct HttpLessonService {
    client: Client,
    base_url: String,
}

impl HttpLessonService {
    pub fn new(base_url: &str) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PortalError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a failed response onto the error taxonomy. Only reached when a
    /// response *was* received, so nothing here ever becomes `Network`.
    async fn error_from_response(response: reqwest::Response) -> PortalError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => PortalError::Auth(message),
            StatusCode::NOT_FOUND => PortalError::NotFound,
            StatusCode::CONFLICT => PortalError::Conflict(message),
            _ => PortalError::Remote {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// A send error means no response was received (connection refused, timeout,
/// DNS failure). Errors the backend responds with never come through here.
fn no_response(err: reqwest::Error) -> PortalError {
    PortalError::Network(err.to_string())
}

fn bad_body(status: StatusCode, err: reqwest::Error) -> PortalError {
    PortalError::Remote {
        status: status.as_u16(),
        message: format!("invalid response body: {}", err),
    }
}

#[async_trait]
impl LessonService for HttpLessonService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PortalError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/login"))
            .json(&request)
            .send()
            .await
            .map_err(no_response)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let status = response.status();
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| bad_body(status, e))
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, PortalError> {
        let response = self
            .client
            .get(self.url("/api/lessons"))
            .send()
            .await
            .map_err(no_response)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let status = response.status();
        response
            .json::<Vec<Lesson>>()
            .await
            .map_err(|e| bad_body(status, e))
    }

    async fn take_lesson(
        &self,
        lesson_id: &str,
        tutor_name: &str,
    ) -> Result<Lesson, PortalError> {
        let request = TakeClassRequest {
            lesson_id: lesson_id.to_string(),
            tutor_name: tutor_name.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/lessons/take"))
            .json(&request)
            .send()
            .await
            .map_err(no_response)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let status = response.status();
        let body = response
            .json::<TakeClassResponse>()
            .await
            .map_err(|e| bad_body(status, e))?;
        Ok(body.lesson)
    }
}

/// Two-mode transport selected at construction. Offline mode serves every
/// call from the in-memory dataset. Live mode calls the HTTP backend and
/// retries against the offline dataset only when no response was received;
/// errors the backend responded with are surfaced unchanged. Callers never
/// learn which side served a given result.
pub struct LessonApi {
    http: Option<HttpLessonService>,
    offline: MockLessonService,
}

impl LessonApi {
    pub fn new(config: &ApiConfig) -> Result<Self, PortalError> {
        // Pure offline mode simulates latency; the live-mode fallback does
        // not, since the caller already waited out the failed request.
        let (http, offline) = if config.offline {
            (None, MockLessonService::new())
        } else {
            (
                Some(HttpLessonService::new(&config.base_url)?),
                MockLessonService::with_latency(Duration::ZERO),
            )
        };

        Ok(Self { http, offline })
    }

    pub fn from_env() -> Result<Self, PortalError> {
        Self::new(&ApiConfig::from_env())
    }
}

#[async_trait]
impl LessonService for LessonApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PortalError> {
        let Some(http) = &self.http else {
            return self.offline.login(email, password).await;
        };

        match http.login(email, password).await {
            Err(err) if err.is_network() => {
                warn!("login got no response, serving offline data: {}", err);
                self.offline.login(email, password).await
            }
            other => other,
        }
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, PortalError> {
        let Some(http) = &self.http else {
            return self.offline.list_lessons().await;
        };

        match http.list_lessons().await {
            Err(err) if err.is_network() => {
                warn!("lesson list got no response, serving offline data: {}", err);
                self.offline.list_lessons().await
            }
            other => other,
        }
    }

    async fn take_lesson(
        &self,
        lesson_id: &str,
        tutor_name: &str,
    ) -> Result<Lesson, PortalError> {
        let Some(http) = &self.http else {
            return self.offline.take_lesson(lesson_id, tutor_name).await;
        };

        match http.take_lesson(lesson_id, tutor_name).await {
            Err(err) if err.is_network() => {
                warn!("take lesson got no response, serving offline data: {}", err);
                self.offline.take_lesson(lesson_id, tutor_name).await
            }
            other => other,
        }
    }
}

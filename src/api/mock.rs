//! In-memory lesson service used in offline mode and as the fallback target
//! when the live backend is unreachable. Mirrors the real backend's state
//! machine: claiming checks the lesson is Available before flipping it to
//! Upcoming.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::PortalError;
use crate::models::{Lesson, Tutor};
use crate::seed::seed_lessons;

use super::LessonService;
use super::dto::LoginResponse;

const SIMULATED_LATENCY: Duration = Duration::from_millis(300);
const MOCK_TUTOR_NAME: &str = "Sarah Tan";
const MOCK_TOKEN: &str = "mock_jwt_token_12345";

pub struct MockLessonService {
    lessons: Mutex<Vec<Lesson>>,
    latency: Duration,
}

impl MockLessonService {
    pub fn new() -> Self {
        Self::with_latency(SIMULATED_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            lessons: Mutex::new(seed_lessons()),
            latency,
        }
    }
}

impl Default for MockLessonService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LessonService for MockLessonService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PortalError> {
        sleep(self.latency).await;

        if email.is_empty() || password.is_empty() {
            return Err(PortalError::Auth("Invalid credentials".to_string()));
        }

        Ok(LoginResponse {
            tutor: Tutor {
                name: MOCK_TUTOR_NAME.to_string(),
                email: email.to_string(),
            },
            token: MOCK_TOKEN.to_string(),
        })
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, PortalError> {
        sleep(self.latency).await;
        Ok(self.lessons.lock().await.clone())
    }

    async fn take_lesson(
        &self,
        lesson_id: &str,
        tutor_name: &str,
    ) -> Result<Lesson, PortalError> {
        sleep(self.latency).await;

        let mut lessons = self.lessons.lock().await;
        let lesson = lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
            .ok_or(PortalError::NotFound)?;

        if !lesson.is_claimable() {
            return Err(PortalError::Conflict("Lesson is not available".to_string()));
        }

        lesson.claim_for(tutor_name);
        Ok(lesson.clone())
    }
}

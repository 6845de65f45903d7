//! Lesson collection state holder: the fetched lesson sequence plus
//! loading/error status, mutated by fetch and take-class operations.

use std::sync::Arc;

use tracing::warn;

use crate::api::LessonService;
use crate::error::PortalError;
use crate::models::Lesson;

pub struct LessonStore {
    service: Arc<dyn LessonService>,
    lessons: Vec<Lesson>,
    loading: bool,
    error: Option<String>,
}

impl LessonStore {
    pub fn new(service: Arc<dyn LessonService>) -> Self {
        Self {
            service,
            lessons: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the stored sequence on success, records a display-ready
    /// message on failure. Overlapping calls are not coordinated; the last
    /// write wins.
    pub async fn fetch_lessons(&mut self) {
        self.loading = true;
        self.error = None;

        match self.service.list_lessons().await {
            Ok(lessons) => {
                self.lessons = lessons;
            }
            Err(err) => {
                warn!("failed to fetch lessons: {}", err);
                self.error = Some(err.to_string());
            }
        }

        self.loading = false;
    }

    /// Claims a lesson. On success the matching lesson is replaced in place,
    /// order preserved and all others untouched. On failure the error is
    /// recorded *and* re-raised so the caller can refuse to advance.
    pub async fn take_class(
        &mut self,
        lesson_id: &str,
        tutor_name: &str,
    ) -> Result<(), PortalError> {
        match self.service.take_lesson(lesson_id, tutor_name).await {
            Ok(updated) => {
                if let Some(slot) = self.lessons.iter_mut().find(|l| l.id == lesson_id) {
                    *slot = updated;
                }
                Ok(())
            }
            Err(err) => {
                warn!("failed to take class {}: {}", lesson_id, err);
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

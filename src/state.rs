use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Lesson;
use crate::seed::seed_lessons;

/// Shared state of the demo lesson service: the in-memory lesson set the
/// HTTP handlers read and claim against.
#[derive(Clone)]
pub struct AppState {
    pub lessons: Arc<RwLock<Vec<Lesson>>>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            lessons: Arc::new(RwLock::new(seed_lessons())),
        }
    }
}

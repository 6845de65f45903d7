use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutually exclusive lifecycle category of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonType {
    Historic,
    Upcoming,
    Available,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: LessonType,
    pub subject: String,
    pub students: Vec<String>,
    pub tutor: Option<String>,
    pub status: String,
}

impl Lesson {
    pub fn is_claimable(&self) -> bool {
        self.kind == LessonType::Available
    }

    /// The one transition the client may trigger: Available -> Upcoming,
    /// acquiring a tutor and a "Confirmed" status. Callers must check
    /// `is_claimable` first.
    pub fn claim_for(&mut self, tutor_name: &str) {
        self.kind = LessonType::Upcoming;
        self.tutor = Some(tutor_name.to_string());
        self.status = "Confirmed".to_string();
    }
}

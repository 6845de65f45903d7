use serde::{Deserialize, Serialize};

use crate::models::{Lesson, Tutor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub tutor: Tutor,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeClassRequest {
    pub lesson_id: String,
    pub tutor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeClassResponse {
    pub lesson: Lesson,
}

use serde::{Deserialize, Serialize};

/// The signed-in actor claiming and teaching lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,
    pub email: String,
}

/// A tutor paired with an opaque session token. This is the record
/// persisted to the settings store and restored at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub tutor: Tutor,
    pub token: String,
}

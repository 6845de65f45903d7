//! Authentication state holder. The current session is persisted to the
//! settings store under a fixed key and restored at startup.

use sqlx::SqlitePool;
use tracing::debug;

use crate::db;
use crate::error::PortalError;
use crate::models::{Session, Tutor};

const AUTH_KEY: &str = "auth";

pub struct AuthStore {
    db: SqlitePool,
    session: Option<Session>,
}

impl AuthStore {
    /// Restores a previously persisted session. A malformed record is
    /// discarded and the store starts logged out; the parse failure is not
    /// surfaced to the caller.
    pub async fn restore(db: SqlitePool) -> Result<Self, PortalError> {
        let session = match db::get_value(&db, AUTH_KEY).await? {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    debug!("discarding unreadable session record: {}", err);
                    None
                }
            },
            None => None,
        };

        Ok(Self { db, session })
    }

    pub fn tutor(&self) -> Option<&Tutor> {
        self.session.as_ref().map(|s| &s.tutor)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub async fn login(&mut self, tutor: Tutor, token: String) -> Result<(), PortalError> {
        let session = Session { tutor, token };
        let raw = serde_json::to_string(&session)
            .map_err(|e| PortalError::Config(format!("failed to encode session: {}", e)))?;
        db::put_value(&self.db, AUTH_KEY, &raw).await?;
        self.session = Some(session);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), PortalError> {
        db::delete_value(&self.db, AUTH_KEY).await?;
        self.session = None;
        Ok(())
    }
}

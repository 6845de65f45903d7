//! Color theme preference, persisted independently of the session.

use sqlx::SqlitePool;

use crate::db;
use crate::error::PortalError;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct ThemeStore {
    db: SqlitePool,
    theme: Theme,
}

impl ThemeStore {
    /// Restores the persisted preference; absent or unrecognized values fall
    /// back to the default.
    pub async fn restore(db: SqlitePool) -> Result<Self, PortalError> {
        let theme = db::get_value(&db, THEME_KEY)
            .await?
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();

        Ok(Self { db, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub async fn set(&mut self, theme: Theme) -> Result<(), PortalError> {
        db::put_value(&self.db, THEME_KEY, theme.as_str()).await?;
        self.theme = theme;
        Ok(())
    }

    pub async fn toggle(&mut self) -> Result<Theme, PortalError> {
        let next = self.theme.toggled();
        self.set(next).await?;
        Ok(next)
    }
}

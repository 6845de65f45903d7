pub mod auth;
pub mod lessons;
pub mod theme;

pub use auth::AuthStore;
pub use lessons::LessonStore;
pub use theme::{Theme, ThemeStore};

pub mod lesson;
pub mod tutor;

pub use lesson::{Lesson, LessonType};
pub use tutor::{Session, Tutor};

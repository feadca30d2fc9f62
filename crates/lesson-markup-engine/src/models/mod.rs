pub mod explanation;
pub mod lesson;

pub use explanation::{ExplanationContent, ExplanationEntry, Section, UnknownSection};
pub use lesson::{Lesson, LessonSections, RenderedLesson, RenderedSection};

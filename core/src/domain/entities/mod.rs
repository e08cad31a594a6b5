//! Backend-owned domain entities

pub mod course;
pub mod review;
pub mod user;

pub use course::{
    Category, Course, CourseModule, CourseTeacher, Lesson, LessonCount, LessonKind, Meta,
    Progress,
};
pub use review::{Review, ReviewAuthor};
pub use user::{Gender, User};

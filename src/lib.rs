//! Mark which metrics of one CSV table are present in another.
//!
//! [`data::annotate::annotate`] does the comparison; [`job::AnnotationJob`]
//! wraps it with file I/O and [`shell`] adapts it to dialogs or a console.

pub mod data;
pub mod error;
pub mod job;
pub mod shell;
pub mod state;

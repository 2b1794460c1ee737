//! Decorative animation loading.
//!
//! Animations are Lottie JSON documents used by the presentation layer for
//! loading and success effects. Failures here are never fatal: the
//! `*_optional` helpers log a warning and return `None` so the caller skips
//! the decorative step.

mod animation;
mod loader;

pub use animation::{Animation, AnimationKind, AnimationSet};
pub use loader::{load_file, load_file_optional, load_url, load_url_optional};

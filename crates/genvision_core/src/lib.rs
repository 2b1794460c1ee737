//! Core data types for the GenVision multimodal assistant.
//!
//! These types are transient: each one is created and discarded within a
//! single request/response cycle.

mod input;
mod media;
mod observability;
mod part;
mod request;
mod response;

pub use input::UserInput;
pub use media::{ImageFormat, ImageInput, MediaSource};
pub use observability::init_tracing;
pub use part::Part;
pub use request::ModelRequest;
pub use response::{ModelResponse, SanitizedResponse};

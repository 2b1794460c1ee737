//! The GenVision request/response pipeline.
//!
//! One user submission runs through three stateless steps:
//!
//! 1. [`build_request`] turns prompt text and an optional image into a
//!    [`ModelRequest`](genvision_core::ModelRequest).
//! 2. [`invoke`] hands the request to an injected
//!    [`ModelClient`](genvision_interface::ModelClient).
//! 3. [`sanitize`] trims the model's text and strips a trailing closing
//!    `</div>` so the text can be embedded in a caller's container.
//!
//! [`Pipeline`] chains the three for a given client.

mod pipeline;
mod request;
mod sanitize;

pub use pipeline::{Pipeline, invoke};
pub use request::{build_request, build_request_from_input};
pub use sanitize::{sanitize, sanitize_text};

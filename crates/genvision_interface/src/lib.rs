//! Trait definitions for GenVision collaborators.

mod client;

pub use client::ModelClient;

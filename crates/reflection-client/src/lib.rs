//! Client for the optional reflection analysis service.
//!
//! The service takes a mood label plus free text and answers with a
//! sentiment score and an opaque analysis id. It is advisory: nothing it
//! returns is written to the local record, and an unreachable or failing
//! service never blocks a local save.

mod client;
mod error;

pub use client::{MoodAnalysis, ReflectionClient, ReflectionRequest};
pub use error::{ReflectionError, ReflectionResult};

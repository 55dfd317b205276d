//! Core domain models for the deploy pipeline
//!
//! This module defines step outcomes, the step abstraction, the pipeline
//! orchestrator, the notification policy, and pipeline configuration.

pub mod config;
pub mod notification;
pub mod outcome;
pub mod pipeline;
pub mod state;
pub mod step;

pub use notification::*;
pub use outcome::*;
pub use pipeline::*;
pub use state::*;
pub use step::*;

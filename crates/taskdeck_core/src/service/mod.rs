//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, persistence and view derivation into the single API
//!   the presentation layer calls.
//! - Keep UI layers decoupled from storage details.

pub mod task_service;

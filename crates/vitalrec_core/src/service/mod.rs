//! Report use-case services.
//!
//! # Responsibility
//! - Orchestrate the locator and report primitives into the per-request
//!   view models the page controllers hand to templates.
//! - Keep the template layer decoupled from the arithmetic underneath.

pub mod stats_service;

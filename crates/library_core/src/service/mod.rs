//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate entity construction and repository calls.
//! - Keep callers decoupled from storage details and counter state.

pub mod catalog_service;

//! Shared utilities for the Tablebook backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field-level validation helpers for request payloads
//! - Phone-number normalization used by both validation and search

pub mod validation;

//! End-to-end tests
//!
//! Tests that run whole sentences through the analysis pipeline.

mod persistence;
mod providers;
mod scenarios;

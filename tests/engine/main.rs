//! Integration tests for Layer 3: Engine
//!
//! Tests for the dependency rules, saturation, and anaphora resolution.

mod anaphora;
mod rules;

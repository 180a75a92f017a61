//! Integration tests for Layer 1: Storage
//!
//! Tests for node identity, relation uniqueness, and traversal.

mod properties;

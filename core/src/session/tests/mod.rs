//! Tests for session state

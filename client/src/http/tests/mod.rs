//! Tests for the authenticated HTTP client

//! Tests for typed endpoint wrappers

#[cfg(test)]
mod api_tests;

//! Tests for token storage

#[cfg(test)]
mod memory_tests;

//! Shared helpers for prreview integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_platform;
pub mod mock_runner;

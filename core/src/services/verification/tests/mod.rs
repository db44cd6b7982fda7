//! Tests for verification service

pub(crate) mod mocks;
mod service_tests;

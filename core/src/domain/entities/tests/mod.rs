//! Tests for domain entities

mod health_id_tests;
mod verification_code_tests;

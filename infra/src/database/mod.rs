//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations for accounts, sequences and credentials

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics, MIGRATOR};
pub use mysql::{MySqlAccountRepository, MySqlCredentialRepository, MySqlSequenceRepository};

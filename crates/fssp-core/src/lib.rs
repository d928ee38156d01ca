//! Core types and trait definitions for the FSSP tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and the external integrations are described here as traits;
//! `fssp-store-sqlite` and `fssp-api` provide the implementations.

pub mod debtor;
pub mod error;
pub mod services;
pub mod status;
pub mod store;

pub use error::{Error, Result};

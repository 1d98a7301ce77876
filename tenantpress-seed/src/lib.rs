//! # Tenantpress Seeder Library
//!
//! Fills a pre-existing tenantpress database with demonstration data.
//!
//! ## Modules
//!
//! - `app`: Pool lifecycle around a seed run
//! - `config`: Configuration management
//! - `error`: Seed error type
//! - `seed`: Data set, cleanup, seeder and report

pub mod app;
pub mod config;
pub mod error;
pub mod seed;

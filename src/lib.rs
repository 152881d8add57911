//! chilecompra-sync library
//!
//! This crate provides the core functionality for the `chilecompra-sync` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different stages of the tender sync job:
//!
//! - [`config`] - Resolves the ticket, API endpoint, and date window from environment, CLI, or TOML
//! - [`fetcher`] - Enumerates the window's calendar days and fetches one daily listing per day
//! - [`normalizer`] - Maps raw marketplace records onto the canonical tender schema
//! - [`publisher`] - Writes the tender list and run metadata artifacts
//! - [`cli`] - Command-line interface orchestrating the sync workflow
//! - [`models`] - Data structures for normalized tenders and the deduplicating collection
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow resolves configuration, fetches and normalizes every day
//! in the window, deduplicates by tender id, and publishes the artifacts:
//!
//! ```no_run
//! use chilecompra_sync::{cli, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! // Parse CLI arguments and run the full sync workflow
//! cli::cli().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod normalizer;
pub mod publisher;
pub mod utils;

//! taskmock-api: HTTP layer for the mock task backend
//!
//! This crate provides the HTTP surface the UI test harness talks to:
//! - REST endpoints via Axum
//! - Configuration loading (YAML file + environment overrides)
//! - Structured logging setup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                taskmock-api                  │
//! ├─────────────────────────────────────────────┤
//! │  http/     - REST endpoints and app state   │
//! │  config.rs - Configuration management       │
//! │  logging.rs- Structured logging setup       │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod logging;

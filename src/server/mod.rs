//! Backend implementation: ingestion, storage, and the query API.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - command execution and read-side aggregation
//! - **Data Layer** (`data/`) - the storage contract and its two backends
//! - **Model Layer** (`model/`) - domain models and operation parameter types
//! - **Error Layer** (`error/`) - application error types and HTTP response mapping
//!
//! Supporting infrastructure:
//!
//! - **Configuration** (`config`) - environment-based application configuration
//! - **State** (`state`) - shared application state for request handlers
//! - **Startup** (`startup`) - database connection and storage backend selection
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - the hourly retention sweep
//! - **Bot** (`bot/`) - the Discord gateway connection and its event handlers

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

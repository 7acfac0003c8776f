//! # Voyage Planner Backend
//!
//! Voyage planning and fleet maintenance engine.
//!
//! This crate plans voyages, compares what was planned with what actually
//! happened, turns that comparison into advisories, and keeps an overview of
//! scheduled maintenance. An optional external optimization service can be
//! placed in front of the deterministic computations, which remain the
//! always-available fallback. A REST API is exposed via Axum.
//!
//! ## Features
//!
//! - **Voyage Planning**: basic plan from engine type and endpoints, or an external optimizer
//! - **Variance Reports**: fuel, speed and duration deviations with status labels
//! - **Insights**: human-readable advisories from the same comparison
//! - **Maintenance Alerts**: overdue / critical / upcoming buckets plus recommendations
//! - **HTTP API**: RESTful endpoints under `/api/v1`
//!
//! ## Architecture
//!
//! - [`models`]: Domain records and typed identifiers
//! - [`api`]: Serializable types crossing the HTTP boundary
//! - [`services`]: Pure computations and the orchestration built on them
//! - [`optimizer`]: Optional external optimization service and fallback chain
//! - [`db`]: Repository pattern and in-memory storage
//! - [`config`]: Application configuration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod optimizer;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

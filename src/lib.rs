//! AWS Report - Multi-Region AWS Resource Inventory
//!
//! AWS Report sweeps a configured list of AWS regions with caller-supplied
//! credentials, counts the resources provisioned for each registered service,
//! and renders the aggregated counts as a landscape PDF report served over a
//! small web form.
//!
//! # Architecture Overview
//!
//! - **Scan Orchestrator** ([`app::scanner::sweep`]): sequential sweep of the
//!   region x probe matrix with per-region failure isolation
//! - **Probe Registry** ([`app::scanner::registry`]): declarative, ordered
//!   list of resource probes, one per (service, resource kind) pair
//! - **Report Renderer** ([`app::report`]): deterministic PDF table output
//!   plus the HTML surfaces for the web form
//! - **HTTP Front End** ([`app::server`]): axum router accepting credentials
//!   and delivering the generated report
//!
//! The main application entry point is [`app::server::router`], wired up by
//! the `awsreport` binary after loading [`app::config::AppConfig`].

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;

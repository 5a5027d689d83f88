//! Multi-region resource scanning.
//!
//! The scanner is organized around three pieces:
//!
//! - [`credentials::ScanCredentials`] - caller-supplied keys, validated
//!   before any remote call and converted into a per-region SDK config
//! - [`registry::default_registry`] - the ordered list of [`probe::ResourceProbe`]
//!   implementations, one per (service, resource kind) pair
//! - [`sweep::ScanOrchestrator`] - drives every probe across every region,
//!   aggregating rows and isolating failures per region
//!
//! Adding a resource kind means implementing one probe in [`aws_services`]
//! and appending it to the registry; the orchestrator never changes.

pub mod aws_services;
pub mod credentials;
pub mod probe;
pub mod registry;
pub mod sdk_errors;
pub mod sweep;

pub use credentials::ScanCredentials;
pub use probe::{ProbeContext, ResourceProbe};
pub use registry::default_registry;
pub use sweep::{FailurePolicy, ScanOrchestrator, ScanPhase, ScanProgress, ScanRow, SweepReport};

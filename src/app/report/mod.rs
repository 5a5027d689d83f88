//! Report output.
//!
//! - [`pdf`] - the downloadable artifact: a landscape, paginated table of
//!   (region, service, count) rows, rendered deterministically
//! - [`html`] - the browser surfaces: credential form and message pages
//!
//! All cell and message content originates from user input or remote APIs
//! and is escaped by the respective renderer before embedding.

pub mod html;
pub mod pdf;

/// Filename used for the report in both delivery modes.
pub const REPORT_FILENAME: &str = "aws_services_report.pdf";

//! Batch resolution over a CSV of organizations
//!
//! Streams the input table to the output with one appended logo column,
//! resolving each row's website in input order. A previous, partial output
//! can be replayed as a prefix so an interrupted run picks up where it
//! left off.

mod runner;

pub use runner::{run_batch, LOGO_URL_COLUMN, WEBSITE_COLUMN};

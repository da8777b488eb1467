//! # Zeitkonto - work-time account summaries
//!
//! Reads time entries and overtime bookings from a hosted table store (or a
//! local SQLite file) and derives the figures an employee's time view shows.
//!
//! ## Features
//!
//! - **Week Overview**: Monday to Friday hours, first start and last end per day, target check
//! - **Overtime Balance**: running balance, year-to-date accrued and reduced hours
//! - **Project Distribution**: hours and share per project
//! - **Check-in History**: entries with their location classified
//! - **Dashboard**: all of the above loaded concurrently, each section on its own
//! - **Data Export**: summaries as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zeitkonto::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

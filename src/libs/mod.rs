//! Core library modules for the zeitkonto application.
//!
//! The summaries are pure functions over record snapshots and live in their
//! own modules: `week`, `overtime`, `projects` and `location`. Everything
//! around them (configuration, messaging, formatting, rendering, export)
//! sits next to them.
//!
//! ```rust
//! use zeitkonto::libs::entry::TimeEntry;
//! use zeitkonto::libs::week::week_overview;
//! use chrono::NaiveDate;
//!
//! let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let entry = TimeEntry::closed(
//!     monday.and_hms_opt(9, 0, 0).unwrap(),
//!     monday.and_hms_opt(17, 30, 0).unwrap(),
//!     30,
//! );
//! let week = week_overview(&[entry], monday, 8.0);
//! assert!(week.days[0].complete);
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod entry;
pub mod export;
pub mod formatter;
pub mod location;
pub mod messages;
pub mod overtime;
pub mod projects;
pub mod status;
pub mod timestamp;
pub mod view;
pub mod week;

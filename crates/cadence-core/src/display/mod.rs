//! Display formatting for schedules and run outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly as markdown for the
//! terminal renderer. Wrapper types cover the other contexts: the plain-text
//! export file, a loaded record with its save time, and per-operation status
//! lines.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Schedule, ...) │───▶│ & Report Types  │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/File) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`models`]: markdown for [`Schedule`](crate::models::Schedule) and
//!   [`SubTask`](crate::models::SubTask)
//! - [`export`]: the plain-text companion file ([`ScheduleText`])
//! - [`results`]: dispatch reports and loaded records
//! - [`status`]: success/failure lines ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Schedule saved");
//! assert_eq!(status.to_string(), "Success: Schedule saved\n");
//! ```

pub mod datetime;
pub mod export;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::{LocalDateTime, MinuteDateTime};
pub use export::ScheduleText;
pub use results::LoadedRecord;
pub use status::OperationStatus;

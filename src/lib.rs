//! Timeline layout engine for work-order schedules.
//!
//! Converts calendar date ranges into pixel geometry for a Gantt-style
//! view: per-work-center lane packing, day/week/month header segments, a
//! current-day marker, and overlap validation for the write path. All
//! computation is pure and synchronous; derived geometry is rebuilt
//! wholesale from the current collections on every change.
//!
//! # Modules
//!
//! - **`model`**: `WorkCenter`, `WorkOrder`, `TimescaleMode`, `TimeWindow`,
//!   and the persisted document envelopes
//! - **`layout`**: calendar arithmetic, date-to-pixel mapping, header
//!   segment building, greedy lane packing
//! - **`schedule`**: the stateful facade — CRUD with validation plus the
//!   derived geometry accessors
//! - **`io`**: the keyed-blob store contract, its JSON file implementation,
//!   and seed data
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use work_order_schedule::io::seed;
//! use work_order_schedule::{Schedule, TimescaleMode};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
//! let mut schedule = Schedule::new(
//!     seed::sample_work_centers(),
//!     seed::sample_work_orders(today),
//!     TimescaleMode::Month,
//!     today,
//! );
//!
//! assert!(!schedule.header_segments().is_empty());
//! schedule.change_timescale(TimescaleMode::Week, today);
//! assert_eq!(schedule.px_per_day(), 10.0);
//! ```

pub mod io;
pub mod layout;
pub mod model;
pub mod schedule;

pub use layout::{CenterLayout, HeaderSegment, OrderLayout};
pub use model::{TimeWindow, TimescaleMode, WorkCenter, WorkOrder, WorkOrderStatus};
pub use schedule::{has_overlap, OrderDraft, Schedule, ValidationError};

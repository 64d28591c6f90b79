//! Seasonal sales context for agribusiness leads.
//!
//! The core is [`calendar`]: a pure, total classifier from
//! `(state code, segment text, reference date)` to a [`SeasonalContext`].
//! The remaining modules are the thin pieces the lead dossier needs around it.

pub mod calendar;
pub mod error;
pub mod estimator;
pub mod lead;
pub mod masking;

pub use calendar::{resolve_seasonal_context, AlertLevel, SeasonalCalendar, SeasonalContext};
pub use error::CalendarError;

//! Seasonal context for agribusiness accounts.
//!
//! Given a state code, a free-text business segment and a reference date,
//! tells the sales operator which phase of the agricultural/industrial
//! calendar the account is in (planting, harvest, collections, off-season
//! maintenance). Rules are data: an ordered list of segment families, each
//! with month windows, evaluated first-match-wins.

pub mod embedded;
pub mod engine;
pub mod loader;
pub mod rules;
pub mod schema;

use std::sync::OnceLock;

use chrono::NaiveDate;

pub use engine::is_center_west;
pub use loader::{available_calendars, load_calendar, load_custom_calendar, validate_calendar};
pub use rules::{BUILTIN_CALENDAR_ID, CENTER_WEST_STATES};
pub use schema::{
    AlertLevel, KeywordMatch, MatchPolicy, MonthRule, SeasonalCalendar, SeasonalContext,
    SegmentFamily,
};

static BUILTIN: OnceLock<SeasonalCalendar> = OnceLock::new();

/// Shared instance of the built-in calendar.
pub fn builtin_calendar() -> &'static SeasonalCalendar {
    BUILTIN.get_or_init(SeasonalCalendar::builtin)
}

/// Resolve against the built-in calendar. The caller supplies the date.
pub fn resolve_seasonal_context(
    state_code: &str,
    segment: &str,
    reference_date: NaiveDate,
) -> SeasonalContext {
    builtin_calendar().resolve(state_code, segment, reference_date)
}

//! Ordered rule evaluation over a `SeasonalCalendar`.
//!
//! Families are scanned in order. Under `MatchPolicy::FirstFamily` the first
//! family whose keywords match is the only one consulted; if none of its
//! month rules cover the reference month the calendar fallback is returned.

use chrono::Datelike;

use super::rules::CENTER_WEST_STATES;
use super::schema::{MatchPolicy, SeasonalCalendar, SeasonalContext, SegmentFamily};

/// Exact, case-insensitive membership in the Center-West set. Surrounding
/// whitespace is not stripped.
pub fn is_center_west(state_code: &str) -> bool {
    let uf = state_code.to_uppercase();
    CENTER_WEST_STATES.contains(&uf.as_str())
}

/// Normalized inputs for one evaluation.
#[derive(Debug, Clone)]
struct Probe {
    segment: String,
    month: u32,
    center_west: bool,
}

impl SeasonalCalendar {
    /// Resolve the seasonal context for a state, a free-text segment and a
    /// reference date. Total: unknown states, empty segments and uncovered
    /// months all land on the fallback.
    pub fn resolve<D: Datelike>(
        &self,
        state_code: &str,
        segment: &str,
        reference_date: D,
    ) -> SeasonalContext {
        let probe = Probe {
            segment: segment.to_lowercase(),
            month: reference_date.month(),
            center_west: is_center_west(state_code),
        };

        for family in self.families.iter() {
            if !family.keywords.matches(&probe.segment) {
                continue;
            }
            if let Some(ctx) = first_applicable(family, &probe) {
                log::debug!(
                    "seasonal: '{}' month={} matched {} -> {}",
                    probe.segment,
                    probe.month,
                    family.id,
                    ctx.status
                );
                return ctx.clone();
            }
            match self.policy {
                MatchPolicy::FirstFamily => {
                    log::debug!(
                        "seasonal: {} has no rule for month {}, using fallback",
                        family.id,
                        probe.month
                    );
                    return self.fallback.clone();
                }
                MatchPolicy::FirstRule => continue,
            }
        }

        self.fallback.clone()
    }

    /// The family that decides for this segment under `FirstFamily`.
    pub fn classify_segment(&self, segment: &str) -> Option<&SegmentFamily> {
        let segment = segment.to_lowercase();
        self.families.iter().find(|f| f.keywords.matches(&segment))
    }
}

fn first_applicable<'a>(family: &'a SegmentFamily, probe: &Probe) -> Option<&'a SeasonalContext> {
    family
        .rules
        .iter()
        .find(|r| r.applies(probe.month, probe.center_west))
        .map(|r| &r.context)
}

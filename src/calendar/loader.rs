use std::path::Path;

use super::embedded;
use super::rules::BUILTIN_CALENDAR_ID;
use super::schema::SeasonalCalendar;
use crate::error::CalendarError;

/// Load a calendar by id: the built-in one or an embedded JSON calendar.
pub fn load_calendar(id: &str) -> Result<SeasonalCalendar, CalendarError> {
    if id == BUILTIN_CALENDAR_ID {
        return Ok(SeasonalCalendar::builtin());
    }
    if let Some(json) = embedded::get_embedded(id) {
        let calendar: SeasonalCalendar = serde_json::from_str(json)?;
        validate_calendar(&calendar)?;
        return Ok(calendar);
    }
    Err(CalendarError::UnknownCalendar(id.to_string()))
}

/// Load a custom calendar from a JSON file.
pub fn load_custom_calendar(path: &Path) -> Result<SeasonalCalendar, CalendarError> {
    let content = std::fs::read_to_string(path).map_err(|source| CalendarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let calendar: SeasonalCalendar = serde_json::from_str(&content)?;
    validate_calendar(&calendar)?;
    log::info!(
        "Loaded calendar '{}' with {} families from {}",
        calendar.id,
        calendar.families.len(),
        path.display()
    );
    Ok(calendar)
}

/// Validate a calendar has required fields and sane month ranges.
pub fn validate_calendar(calendar: &SeasonalCalendar) -> Result<(), CalendarError> {
    if calendar.id.trim().is_empty() {
        return Err(CalendarError::Invalid("Calendar id is required".into()));
    }
    if calendar.name.trim().is_empty() {
        return Err(CalendarError::Invalid("Calendar name is required".into()));
    }
    if calendar.fallback.status.trim().is_empty() {
        return Err(CalendarError::Invalid("Fallback status is required".into()));
    }
    for family in &calendar.families {
        if family.keywords.is_empty() {
            return Err(CalendarError::Invalid(format!(
                "Family '{}' has no keywords",
                family.id
            )));
        }
        if family.rules.is_empty() {
            return Err(CalendarError::Invalid(format!(
                "Family '{}' has no month rules",
                family.id
            )));
        }
        for rule in &family.rules {
            if rule.from < 1 || rule.from > rule.to || rule.to > 12 {
                return Err(CalendarError::Invalid(format!(
                    "Family '{}' has invalid month range {}..={}",
                    family.id, rule.from, rule.to
                )));
            }
        }
    }
    Ok(())
}

/// List all available calendars as (id, name).
pub fn available_calendars() -> Vec<(String, String)> {
    embedded::list_embedded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::schema::MatchPolicy;
    use std::io::Write;

    #[test]
    fn test_load_builtin() {
        let cal = load_calendar("agro-br").expect("builtin should load");
        assert_eq!(cal, SeasonalCalendar::builtin());
    }

    #[test]
    fn test_load_cascade_matches_builtin_rules() {
        let cascade = load_calendar("agro-br-cascade").expect("cascade should load");
        let builtin = SeasonalCalendar::builtin();
        assert_eq!(cascade.policy, MatchPolicy::FirstRule);
        assert_eq!(cascade.families, builtin.families);
        assert_eq!(cascade.fallback, builtin.fallback);
    }

    #[test]
    fn test_load_unknown() {
        let err = load_calendar("nonexistent").unwrap_err();
        assert!(matches!(err, CalendarError::UnknownCalendar(_)));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_validate_builtin() {
        assert!(validate_calendar(&SeasonalCalendar::builtin()).is_ok());
    }

    #[test]
    fn test_validate_empty_id() {
        let mut cal = SeasonalCalendar::builtin();
        cal.id = String::new();
        assert!(validate_calendar(&cal).is_err());
    }

    #[test]
    fn test_validate_bad_month_range() {
        let mut cal = SeasonalCalendar::builtin();
        cal.families[0].rules[0].to = 13;
        let err = validate_calendar(&cal).unwrap_err();
        assert!(err.to_string().contains("cotton_grower"));

        let mut cal = SeasonalCalendar::builtin();
        cal.families[1].rules[1].from = 7;
        assert!(validate_calendar(&cal).is_err());

        let mut cal = SeasonalCalendar::builtin();
        cal.families[2].rules[0].from = 0;
        assert!(validate_calendar(&cal).is_err());
    }

    #[test]
    fn test_validate_family_without_keywords() {
        let mut cal = SeasonalCalendar::builtin();
        cal.families[3].keywords.any_of.clear();
        assert!(validate_calendar(&cal).is_err());
    }

    #[test]
    fn test_validate_family_without_rules() {
        let mut cal = SeasonalCalendar::builtin();
        cal.families[3].rules.clear();
        assert!(validate_calendar(&cal).is_err());
    }

    #[test]
    fn test_load_custom_calendar_roundtrip() {
        let mut cal = SeasonalCalendar::builtin();
        cal.id = "custom".to_string();
        cal.families.truncate(1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&cal).unwrap().as_bytes())
            .unwrap();

        let loaded = load_custom_calendar(file.path()).expect("should load");
        assert_eq!(loaded, cal);
    }

    #[test]
    fn test_load_custom_calendar_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = load_custom_calendar(file.path()).unwrap_err();
        assert!(matches!(err, CalendarError::Parse(_)));
    }

    #[test]
    fn test_load_custom_calendar_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_custom_calendar(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CalendarError::Io { .. }));
    }

    #[test]
    fn test_available_calendars() {
        let ids: Vec<String> = available_calendars().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["agro-br".to_string(), "agro-br-cascade".to_string()]);
    }
}

use super::rules::BUILTIN_CALENDAR_ID;
use super::schema::SeasonalCalendar;

const CASCADE_CALENDAR: &str = include_str!("../../calendars/agro-br-cascade.json");

/// JSON calendars shipped with the binary, in display order. The built-in
/// calendar is constructed in code and is not listed here.
const ALL_CALENDARS: &[(&str, &str)] = &[("agro-br-cascade", CASCADE_CALENDAR)];

/// Look up an embedded JSON calendar by id.
pub fn get_embedded(id: &str) -> Option<&'static str> {
    ALL_CALENDARS
        .iter()
        .find(|(cal_id, _)| *cal_id == id)
        .map(|(_, json)| *json)
}

/// List all calendars as (id, name), built-in first.
pub fn list_embedded() -> Vec<(String, String)> {
    let builtin = SeasonalCalendar::builtin();
    let mut result = vec![(BUILTIN_CALENDAR_ID.to_string(), builtin.name)];
    for (id, json) in ALL_CALENDARS {
        match serde_json::from_str::<SeasonalCalendar>(json) {
            Ok(cal) => result.push((cal.id, cal.name)),
            Err(_) => result.push((id.to_string(), id.to_string())),
        }
    }
    result
}

// Event module
// Event records as delivered by the events backend

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Label shown for events that start on a date without a time component
pub const ALL_DAY_LABEL: &str = "All Day";

/// Label shown when an event's start cannot be parsed
pub const UNKNOWN_TIME_LABEL: &str = "--:--";

/// Separator between the date and time portions of an ISO-8601 value
const TIME_SEPARATOR: char = 'T';

/// Raised when an event's `start` value is not a recognizable date or date-time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse event start '{value}'")]
pub struct EventFormatError {
    pub value: String,
}

/// A single event for the displayed month.
///
/// Every field is optional on the wire: the backend is trusted to send an
/// array of objects, but individual records are not validated, so a record
/// with a missing or garbled `start` simply never lands in a day cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarEvent {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub summary: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl CalendarEvent {
    /// Create an event starting at `start` with the given summary
    ///
    /// # Examples
    /// ```
    /// use seasonal_calendar::models::event::CalendarEvent;
    ///
    /// let event = CalendarEvent::new("Standup", "2024-03-15T09:00:00");
    /// assert_eq!(event.start_date_key(), Some("2024-03-15"));
    /// ```
    pub fn new(summary: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::default()
    }

    /// The `YYYY-MM-DD` portion of `start`, if there is one
    pub fn start_date_key(&self) -> Option<&str> {
        self.start
            .as_deref()
            .and_then(|start| start.split(TIME_SEPARATOR).next())
    }

    pub fn has_time_component(&self) -> bool {
        self.start
            .as_deref()
            .is_some_and(|start| start.contains(TIME_SEPARATOR))
    }

    /// Parse `start` into a wall-clock instant.
    ///
    /// Date-only values resolve to midnight. Values carrying an offset or `Z`
    /// are converted to local time.
    pub fn start_instant(&self) -> Result<NaiveDateTime, EventFormatError> {
        let raw = self.start.as_deref().ok_or_else(|| EventFormatError {
            value: String::new(),
        })?;
        parse_instant(raw.trim()).ok_or_else(|| EventFormatError {
            value: raw.to_string(),
        })
    }

    /// Time label for the event, e.g. `2:30 PM` or `All Day`
    pub fn display_time(&self) -> String {
        if !self.has_time_component() {
            return ALL_DAY_LABEL.to_string();
        }

        match self.start_instant() {
            Ok(instant) => instant.format("%-I:%M %p").to_string(),
            Err(err) => {
                log::warn!("Could not parse time for event '{}': {}", self.summary, err);
                UNKNOWN_TIME_LABEL.to_string()
            }
        }
    }

    /// Hover text: summary and time, then location and description lines when present
    pub fn tooltip(&self, display_time: &str) -> String {
        let mut tooltip = format!("{} ({})", self.summary, display_time);
        if let Some(location) = non_empty(&self.location) {
            tooltip.push_str("\nLocation: ");
            tooltip.push_str(location);
        }
        if let Some(description) = non_empty(&self.description) {
            tooltip.push_str("\nDescription: ");
            tooltip.push_str(description);
        }
        tooltip
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    if !raw.contains(TIME_SEPARATOR) {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Builder for [`CalendarEvent`]
#[derive(Debug, Default)]
pub struct CalendarEventBuilder {
    event: CalendarEvent,
}

impl CalendarEventBuilder {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.event.summary = summary.into();
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.event.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.event.end = Some(end.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.event.location = Some(location.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.event.description = Some(description.into());
        self
    }

    pub fn build(self) -> CalendarEvent {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2024-03-15T14:30:00", "2:30 PM"; "afternoon")]
    #[test_case("2024-03-15T09:05:00", "9:05 AM"; "morning")]
    #[test_case("2024-03-15T00:00:00", "12:00 AM"; "midnight")]
    #[test_case("2024-03-15T12:15", "12:15 PM"; "noon without seconds")]
    #[test_case("2024-03-15T18:45:00.250", "6:45 PM"; "fractional seconds")]
    #[test_case("2024-03-15", "All Day"; "date only")]
    #[test_case("2024-03-15Tnonsense", "--:--"; "garbled time")]
    fn test_display_time(start: &str, expected: &str) {
        let event = CalendarEvent::new("Event", start);
        assert_eq!(event.display_time(), expected);
    }

    #[test]
    fn test_start_date_key_strips_time() {
        let event = CalendarEvent::new("Lunch", "2024-03-15T12:00:00");
        assert_eq!(event.start_date_key(), Some("2024-03-15"));
        assert!(event.has_time_component());
    }

    #[test]
    fn test_missing_start_has_no_date_key() {
        let event = CalendarEvent::default();
        assert_eq!(event.start_date_key(), None);
        assert!(!event.has_time_component());
        assert!(event.start_instant().is_err());
    }

    #[test]
    fn test_start_instant_date_only_is_midnight() {
        let event = CalendarEvent::new("Holiday", "2024-07-01");
        let instant = event.start_instant().unwrap();
        assert_eq!(instant, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_instant_accepts_offsets() {
        let event = CalendarEvent::new("Call", "2024-03-15T14:30:00+00:00");
        assert!(event.start_instant().is_ok());

        let zulu = CalendarEvent::new("Call", "2024-03-15T14:30:00Z");
        assert!(zulu.start_instant().is_ok());
    }

    #[test]
    fn test_start_instant_reports_bad_value() {
        let event = CalendarEvent::new("Broken", "not-a-date");
        let err = event.start_instant().unwrap_err();
        assert_eq!(err.value, "not-a-date");
    }

    #[test]
    fn test_tooltip_includes_optional_lines() {
        let event = CalendarEvent::builder()
            .summary("Dentist")
            .start("2024-03-15T14:30:00")
            .location("Main St")
            .description("Bring forms")
            .build();

        assert_eq!(
            event.tooltip("2:30 PM"),
            "Dentist (2:30 PM)\nLocation: Main St\nDescription: Bring forms"
        );
    }

    #[test]
    fn test_tooltip_skips_empty_fields() {
        let event = CalendarEvent::builder()
            .summary("Walk")
            .start("2024-03-15")
            .location("")
            .description("")
            .build();

        assert_eq!(event.tooltip("All Day"), "Walk (All Day)");
    }

    #[test]
    fn test_tooltip_keeps_whitespace_only_fields() {
        let event = CalendarEvent::builder()
            .summary("Walk")
            .start("2024-03-15")
            .location("   ")
            .build();

        assert_eq!(event.tooltip("All Day"), "Walk (All Day)\nLocation:    ");
    }

    #[test]
    fn test_deserialize_lenient_record() {
        let json = r#"[
            {"start": "2024-03-15T14:30:00", "end": "2024-03-15T15:30:00", "summary": "Review",
             "location": "", "description": "", "organizer": "ignored"},
            {"start": null, "summary": "No start"},
            {},
            {"start": "2024-03-16T09:00:00", "summary": null, "location": null}
        ]"#;

        let events: Vec<CalendarEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].end.as_deref(), Some("2024-03-15T15:30:00"));
        assert_eq!(events[1].start, None);
        assert_eq!(events[2].summary, "");
        assert_eq!(events[3].summary, "");
        assert_eq!(events[3].location, None);
    }

    #[test]
    fn test_deserialize_rejects_non_string_start() {
        let json = r#"{"start": 20240316, "summary": "Numeric"}"#;
        assert!(serde_json::from_str::<CalendarEvent>(json).is_err());
    }
}

//! Month grid construction.
//!
//! Turns a [`ViewState`] and the events fetched for it into a flat list of
//! cells: leading blanks, one cell per day, trailing blanks. The UI paints
//! the result row by row; nothing here touches egui so the grid can be
//! built on a worker thread and compared in tests.

mod layout;

pub use layout::{row_count, MonthLayout, WEEKDAY_HEADERS};

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::models::view_state::ViewState;
use crate::utils::date::iso_date_key;

/// One event as shown inside a day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub display_time: String,
    pub summary: String,
    pub tooltip: String,
}

impl EventEntry {
    pub fn from_event(event: &CalendarEvent) -> Self {
        let display_time = event.display_time();
        let tooltip = event.tooltip(&display_time);
        Self {
            display_time,
            summary: event.summary.clone(),
            tooltip,
        }
    }

    /// Text shown in the cell, e.g. "2:30 PM Dentist"
    pub fn label(&self) -> String {
        format!("{} {}", self.display_time, self.summary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub events: Vec<EventEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding outside the displayed month
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        }
    }
}

/// A fully laid out month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub view: ViewState,
    pub title: String,
    pub weekday_headers: [&'static str; 7],
    pub layout: MonthLayout,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn num_rows(&self) -> u32 {
        self.layout.num_rows
    }

    /// Cells grouped into weeks of seven
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.day == day)
    }

    pub fn event_count(&self) -> usize {
        self.day_cells().map(|cell| cell.events.len()).sum()
    }
}

/// Lay out `view` and place `events` under their start dates.
///
/// The grid is rebuilt from nothing on every call, so equal inputs always
/// produce equal grids.
pub fn build_month_grid(view: ViewState, events: &[CalendarEvent]) -> MonthGrid {
    let layout = MonthLayout::for_month(view.year(), view.month_one_based());
    let mut cells = Vec::with_capacity(layout.total_cells() as usize);

    cells.extend((0..layout.leading_blanks).map(|_| GridCell::Blank));

    for (offset, date) in view
        .first_day()
        .iter_days()
        .take(layout.days_in_month as usize)
        .enumerate()
    {
        let day_events = sort_by_start(events_for_day(events, date));
        cells.push(GridCell::Day(DayCell {
            day: offset as u32 + 1,
            date,
            events: day_events.into_iter().map(EventEntry::from_event).collect(),
        }));
    }

    cells.extend((0..layout.trailing_blanks()).map(|_| GridCell::Blank));

    MonthGrid {
        view,
        title: view.title(),
        weekday_headers: WEEKDAY_HEADERS,
        layout,
        cells,
    }
}

/// Events whose start date portion is `date`. Events without a start are skipped
/// and spans are not expanded: an event only shows on the day it starts.
pub fn events_for_day(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    let key = iso_date_key(date);
    events
        .iter()
        .filter(|event| event.start_date_key() == Some(key.as_str()))
        .collect()
}

/// Order events by start instant.
///
/// Events whose start does not parse keep their original slots; only the
/// parseable ones are reordered among the positions they already occupy.
pub fn sort_by_start<'a>(mut events: Vec<&'a CalendarEvent>) -> Vec<&'a CalendarEvent> {
    let mut comparable: Vec<(usize, chrono::NaiveDateTime)> = events
        .iter()
        .enumerate()
        .filter_map(|(idx, event)| event.start_instant().ok().map(|instant| (idx, instant)))
        .collect();

    let slots: Vec<usize> = comparable.iter().map(|(idx, _)| *idx).collect();
    comparable.sort_by_key(|(_, instant)| *instant);

    let originals = events.clone();
    for (slot, (source, _)) in slots.into_iter().zip(comparable) {
        events[slot] = originals[source];
    }
    events
}

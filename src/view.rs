//! The upcoming-events view: one load per mount, three mutually exclusive
//! renderings (loading, populated table, empty message).

use reqwest::StatusCode;

use crate::booking::{self, Booking, Schedule};
use crate::feed::{Feed, FeedError};

pub const EMPTY_MESSAGE: &str = "No Upcoming Events.";

const HEADER: [&str; 6] = [
    "Event Name",
    "Venue",
    "Organizing Club",
    "Date",
    "Time",
    "Coordinator",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(Vec<Booking>),
}

#[derive(Debug)]
pub struct EventsView {
    state: ViewState,
}

impl Default for EventsView {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetches the booking list once and applies it sorted ascending by
    /// effective date. The status code is only checked after the list has
    /// been applied: a non-200 answer with a readable body still populates
    /// the view, and the returned error is merely diagnostic. Failures
    /// before that point leave the view loading.
    pub async fn load(&mut self, feed: &Feed) -> Result<(), FeedError> {
        let response = feed.events().await?;
        let mut bookings = response.payload.into_bookings()?;
        booking::sort_by_effective_date(&mut bookings);

        self.state = ViewState::Loaded(bookings);

        if response.status != StatusCode::OK {
            return Err(FeedError::Status(response.status));
        }

        Ok(())
    }
}

pub fn loading_indicator() -> String {
    "Loading upcoming events...".to_string()
}

/// Pure function of the view state, no side effects.
pub fn render(view: &EventsView) -> String {
    match view.state() {
        ViewState::Loading => loading_indicator(),
        ViewState::Loaded(bookings) if bookings.is_empty() => EMPTY_MESSAGE.to_string(),
        ViewState::Loaded(bookings) => {
            let mut lines = vec![header_row()];
            lines.extend(bookings.iter().map(booking_row));
            lines.join("\n")
        }
    }
}

pub fn date_cell(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Multiple { start, end } => format!(
            "{} to {}",
            start.format("%d-%m-%Y"),
            end.format("%d-%m-%Y")
        ),
        Schedule::Single { date } | Schedule::Half { date, .. } => {
            date.format("%d-%m-%Y").to_string()
        }
    }
}

pub fn time_cell(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Half { start, end, .. } => format!(
            "{} - {}",
            start.format("%I:%M %P"),
            end.format("%I:%M %P")
        ),
        _ => "-".to_string(),
    }
}

fn header_row() -> String {
    row(HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5])
}

fn booking_row(booking: &Booking) -> String {
    row(
        &booking.event_name,
        &booking.hall_name,
        &booking.organizing_club,
        &date_cell(&booking.schedule),
        &time_cell(&booking.schedule),
        &booking.coordinator,
    )
}

// "to"-ranges make the date column the widest one.
fn row(name: &str, venue: &str, club: &str, date: &str, time: &str, coordinator: &str) -> String {
    format!("{name:<24}  {venue:<20}  {club:<20}  {date:<24}  {time:<19}  {coordinator}")
}

//! Wire payload and domain model for venue bookings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("booking {id} is missing `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("booking {id} has an unreadable date `{value}`")]
    InvalidDate { id: String, value: String },
    #[error("booking {id} has an unreadable time `{value}`")]
    InvalidTime { id: String, value: String },
}

/// Response body of `GET {base}/events`, exactly as the backend sends it.
#[derive(Debug, Deserialize)]
pub struct EventsPayload {
    pub bookings: Vec<RawBooking>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBooking {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_name: String,
    pub booked_hall_name: String,
    pub organizing_club: String,
    pub event_manager: String,
    #[serde(default)]
    pub event_date_type: String,
    pub event_date: Option<String>,
    pub event_start_date: Option<String>,
    pub event_end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub event_name: String,
    pub hall_name: String,
    pub organizing_club: String,
    pub coordinator: String,
    pub schedule: Schedule,
}

/// How a booking occupies its hall. Every variant carries exactly the
/// fields its rendering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Single {
        date: NaiveDate,
    },
    Multiple {
        start: NaiveDate,
        end: NaiveDate,
    },
    Half {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
}

impl Booking {
    /// Date a booking sorts under: the start date for multi-day events,
    /// the event date otherwise.
    pub fn effective_date(&self) -> NaiveDate {
        match self.schedule {
            Schedule::Multiple { start, .. } => start,
            Schedule::Single { date } | Schedule::Half { date, .. } => date,
        }
    }
}

/// Stable ascending sort; bookings on the same day keep their arrival order.
pub fn sort_by_effective_date(bookings: &mut [Booking]) {
    bookings.sort_by_key(Booking::effective_date);
}

impl EventsPayload {
    pub fn into_bookings(self) -> Result<Vec<Booking>, PayloadError> {
        self.bookings
            .into_iter()
            .map(RawBooking::into_booking)
            .collect()
    }
}

impl RawBooking {
    fn into_booking(self) -> Result<Booking, PayloadError> {
        let schedule = self.schedule()?;

        Ok(Booking {
            id: self.id,
            event_name: self.event_name,
            hall_name: self.booked_hall_name,
            organizing_club: self.organizing_club,
            coordinator: self.event_manager,
            schedule,
        })
    }

    fn schedule(&self) -> Result<Schedule, PayloadError> {
        match self.event_date_type.as_str() {
            "multiple" => Ok(Schedule::Multiple {
                start: self.date("eventStartDate", self.event_start_date.as_deref())?,
                end: self.date("eventEndDate", self.event_end_date.as_deref())?,
            }),
            "half" => Ok(Schedule::Half {
                date: self.date("eventDate", self.event_date.as_deref())?,
                start: self.time("startTime", self.start_time.as_deref())?,
                end: self.time("endTime", self.end_time.as_deref())?,
            }),
            // Unknown tags render like single-day events.
            _ => Ok(Schedule::Single {
                date: self.date("eventDate", self.event_date.as_deref())?,
            }),
        }
    }

    fn date(&self, field: &'static str, value: Option<&str>) -> Result<NaiveDate, PayloadError> {
        let raw = value.ok_or_else(|| PayloadError::MissingField {
            id: self.id.clone(),
            field,
        })?;

        parse_date(raw).ok_or_else(|| PayloadError::InvalidDate {
            id: self.id.clone(),
            value: raw.to_string(),
        })
    }

    fn time(&self, field: &'static str, value: Option<&str>) -> Result<NaiveTime, PayloadError> {
        let raw = value.ok_or_else(|| PayloadError::MissingField {
            id: self.id.clone(),
            field,
        })?;

        parse_time(raw).ok_or_else(|| PayloadError::InvalidTime {
            id: self.id.clone(),
            value: raw.to_string(),
        })
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

// The backend appends a zone marker the original UI threw away, so the last
// character is stripped and the rest is read as a local time.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    let mut trimmed = raw.to_string();
    trimmed.pop()?;

    if let Ok(stamp) = NaiveDateTime::parse_from_str(&trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(stamp.time());
    }

    NaiveTime::parse_from_str(&trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&trimmed, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str) -> RawBooking {
        RawBooking {
            id: id.to_string(),
            event_name: "Tech Fest".to_string(),
            booked_hall_name: "Main Auditorium".to_string(),
            organizing_club: "Coding Club".to_string(),
            event_manager: "A. Rao".to_string(),
            event_date_type: "single".to_string(),
            event_date: Some("2024-03-05".to_string()),
            event_start_date: None,
            event_end_date: None,
            start_time: None,
            end_time: None,
        }
    }

    #[test]
    fn decodes_backend_payload() {
        let body = r#"{
            "bookings": [{
                "_id": "65a1",
                "eventName": "Tech Fest",
                "bookedHallName": "Main Auditorium",
                "organizingClub": "Coding Club",
                "eventManager": "A. Rao",
                "eventDateType": "multiple",
                "eventStartDate": "2024-01-10T00:00:00.000Z",
                "eventEndDate": "2024-01-12T00:00:00.000Z"
            }]
        }"#;

        let payload: EventsPayload = serde_json::from_str(body).unwrap();
        let bookings = payload.into_bookings().unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(
            bookings[0].schedule,
            Schedule::Multiple {
                start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            }
        );
    }

    #[test]
    fn unknown_date_type_falls_through_to_single() {
        let mut record = raw("1");
        record.event_date_type = "quarterly".to_string();

        let booking = record.into_booking().unwrap();
        assert_eq!(
            booking.schedule,
            Schedule::Single {
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            }
        );
    }

    #[test]
    fn half_day_times_strip_the_trailing_marker() {
        let mut record = raw("1");
        record.event_date_type = "half".to_string();
        record.start_time = Some("09:00:00Z".to_string());
        record.end_time = Some("11:30:00Z".to_string());

        let booking = record.into_booking().unwrap();
        assert_eq!(
            booking.schedule,
            Schedule::Half {
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            }
        );
    }

    #[test]
    fn full_timestamp_times_parse_too() {
        let mut record = raw("1");
        record.event_date_type = "half".to_string();
        record.start_time = Some("2024-03-05T14:00:00.000Z".to_string());
        record.end_time = Some("2024-03-05T17:00:00.000Z".to_string());

        let booking = record.into_booking().unwrap();
        match booking.schedule {
            Schedule::Half { start, end, .. } => {
                assert_eq!(start, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
                assert_eq!(end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
            }
            other => panic!("expected half-day schedule, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut record = raw("65b2");
        record.event_date_type = "multiple".to_string();
        record.event_start_date = Some("2024-01-10".to_string());
        record.event_end_date = None;

        let err = record.into_booking().unwrap_err();
        assert!(matches!(
            err,
            PayloadError::MissingField {
                field: "eventEndDate",
                ..
            }
        ));
    }

    #[test]
    fn sorts_ascending_by_effective_date() {
        let mut first = raw("a").into_booking().unwrap();
        first.schedule = Schedule::Multiple {
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        };

        let mut second = raw("b").into_booking().unwrap();
        second.schedule = Schedule::Single {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };

        let mut third = raw("c").into_booking().unwrap();
        third.schedule = Schedule::Single {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };

        let mut bookings = vec![second.clone(), third.clone(), first.clone()];
        sort_by_effective_date(&mut bookings);

        let ids: Vec<&str> = bookings.iter().map(|b| b.id.as_str()).collect();
        // Multi-day sorts under its start date; the tie keeps arrival order.
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}

pub mod booking;
pub mod feed;
pub mod view;

pub use booking::{Booking, EventsPayload, Schedule};
pub use feed::{Feed, FeedError};
pub use view::{render, EventsView, ViewState};

//! Booking intake workflow: field validation, fleet resolution,
//! persistence and back-office notification.

pub mod intake;
pub mod models;
pub mod notify;
pub mod repository;
pub mod submission;
pub mod validate;

pub use intake::{BookingError, BookingService};
pub use models::{BookingDetails, BookingRequest, BookingStatus};
pub use notify::{EmailMessage, NotificationSender};
pub use repository::{BookingFilter, BookingRepository, PageRequest};
pub use submission::{BookingSubmission, ContactMessage, ContactSubmission, NormalizedBooking};
pub use validate::{validate_contact, validate_submission};

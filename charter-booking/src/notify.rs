//! Back-office notification documents and the transport they go out on.

use async_trait::async_trait;

use crate::submission::{ContactMessage, NormalizedBooking};

/// A rendered notification ready for delivery.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

/// Delivery transport for notification documents. Implementations decide
/// what "sending" means; the intake workflow only logs a failure and moves
/// on, so a slow or broken transport can never undo a booking.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Renders the back-office document for a fresh booking submission.
pub fn booking_notification(booking: &NormalizedBooking, admin_email: &str) -> EmailMessage {
    let service = booking.transport_mode.display_name();

    let mut rows = String::new();
    push_row(&mut rows, "Service Type", service);
    push_row(
        &mut rows,
        "Trip Type",
        if booking.is_round_trip { "Round Trip" } else { "One Way" },
    );
    push_row(&mut rows, "Pickup Location", &booking.pickup_location);
    push_row(&mut rows, "Drop-off Location", &booking.dropoff_location);
    push_row(
        &mut rows,
        "Pickup Date & Time",
        &format!(
            "{} at {}",
            booking.pickup_date.format("%Y-%m-%d"),
            booking.pickup_time.format("%H:%M")
        ),
    );
    if booking.is_round_trip {
        push_row(
            &mut rows,
            "Return Date & Time",
            &format!(
                "{} at {}",
                booking.return_date.as_deref().unwrap_or(""),
                booking.return_time.as_deref().unwrap_or("")
            ),
        );
    }
    push_row(&mut rows, "Passengers", &booking.passengers.to_string());

    let mut customer = String::new();
    push_row(
        &mut customer,
        "Name",
        &format!("{} {}", booking.first_name, booking.last_name),
    );
    push_row(&mut customer, "Email", &booking.email.0);
    push_row(&mut customer, "Phone", &booking.phone.0);
    if let Some(requests) = &booking.special_requests {
        push_row(&mut customer, "Special Requests", requests);
    }

    let html_body = format!(
        "{DOCUMENT_HEAD}\
         <div class=\"header\"><h1>New Booking Request</h1></div>\
         <div class=\"content\">\
         <h2>Booking Details</h2>\
         <table class=\"details\">{rows}</table>\
         <h3>Customer Information</h3>\
         <table class=\"details\">{customer}</table>\
         <p><strong>Next Steps:</strong></p>\
         <ul>\
         <li>Review the booking details above</li>\
         <li>Contact the customer within 2 hours</li>\
         <li>Provide a detailed quote</li>\
         <li>Confirm availability and finalize booking</li>\
         </ul>\
         </div>{DOCUMENT_TAIL}"
    );

    EmailMessage {
        to: vec![admin_email.to_string()],
        subject: format!(
            "New {} Booking Request - {} {}",
            service, booking.first_name, booking.last_name
        ),
        html_body,
        text_body: None,
    }
}

/// Renders the back-office document for a contact-form message.
pub fn contact_notification(contact: &ContactMessage, admin_email: &str) -> EmailMessage {
    let mut rows = String::new();
    push_row(&mut rows, "Name", &contact.full_name);
    push_row(&mut rows, "Email", &contact.email.0);
    push_row(&mut rows, "Phone", &contact.phone.0);

    let message = escape_html(&contact.message).replace('\n', "<br>");

    let html_body = format!(
        "{DOCUMENT_HEAD}\
         <div class=\"header\"><h1>New Contact Message</h1></div>\
         <div class=\"content\">\
         <h2>Contact Details</h2>\
         <table class=\"details\">{rows}</table>\
         <h3>Message</h3>\
         <div class=\"message\">{message}</div>\
         <p><strong>Action Required:</strong> Please respond to this inquiry \
         within 24 hours.</p>\
         </div>{DOCUMENT_TAIL}"
    );

    EmailMessage {
        to: vec![admin_email.to_string()],
        subject: format!("New Contact Message from {}", contact.full_name),
        html_body,
        text_body: None,
    }
}

const DOCUMENT_HEAD: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>\
    body{font-family:Arial,sans-serif;line-height:1.6;color:#333}\
    .header{background:#1e293b;color:#fff;padding:20px;text-align:center}\
    .content{background:#f8f9fa;padding:20px}\
    .details{background:#fff;border-radius:8px;padding:12px;width:100%}\
    .details td{padding:8px;border-bottom:1px solid #eee}\
    .details td:first-child{font-weight:bold;color:#1e293b}\
    .message{background:#fff;border-radius:5px;padding:15px}\
    </style></head><body><div style=\"max-width:600px;margin:0 auto\">";

const DOCUMENT_TAIL: &str = "</div></body></html>";

fn push_row(rows: &mut String, label: &str, value: &str) {
    rows.push_str("<tr><td>");
    rows.push_str(&escape_html(label));
    rows.push_str("</td><td>");
    rows.push_str(&escape_html(value));
    rows.push_str("</td></tr>");
}

/// Form fields end up inside markup, so angle brackets and friends must not
/// survive as-is.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use charter_fleet::TransportMode;
    use charter_shared::Masked;
    use chrono::{NaiveDate, NaiveTime};

    fn round_trip_booking() -> NormalizedBooking {
        NormalizedBooking {
            city: "london".into(),
            transport_mode: TransportMode::Helicopter,
            vehicle_id: None,
            pickup_location: "Battersea Heliport".into(),
            dropoff_location: "Ascot Racecourse".into(),
            pickup_date: NaiveDate::from_ymd_opt(2031, 6, 1).unwrap(),
            pickup_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            passengers: 4,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: Masked("jane@example.com".to_string()),
            phone: Masked("+447911123456".to_string()),
            special_requests: Some("Champagne & strawberries".to_string()),
            is_round_trip: true,
            return_date: Some("2031-06-01".to_string()),
            return_time: Some("18:30".to_string()),
        }
    }

    #[test]
    fn booking_document_carries_journey_and_customer() {
        let message = booking_notification(&round_trip_booking(), "ops@example.com");

        assert_eq!(message.to, ["ops@example.com"]);
        assert_eq!(
            message.subject,
            "New Helicopter Charter Booking Request - Jane Doe"
        );
        assert!(message.html_body.contains("Round Trip"));
        assert!(message.html_body.contains("Return Date &amp; Time"));
        assert!(message.html_body.contains("2031-06-01 at 09:05"));
        assert!(message.html_body.contains("jane@example.com"));
        assert!(message.html_body.contains("Champagne &amp; strawberries"));
        assert!(message.html_body.contains("Contact the customer within 2 hours"));
    }

    #[test]
    fn one_way_document_omits_optional_rows() {
        let mut booking = round_trip_booking();
        booking.is_round_trip = false;
        booking.special_requests = None;

        let message = booking_notification(&booking, "ops@example.com");
        assert!(message.html_body.contains("One Way"));
        assert!(!message.html_body.contains("Return Date"));
        assert!(!message.html_body.contains("Special Requests"));
    }

    #[test]
    fn markup_in_form_fields_is_neutralized() {
        let mut booking = round_trip_booking();
        booking.special_requests = Some("<script>alert(1)</script>".to_string());

        let message = booking_notification(&booking, "ops@example.com");
        assert!(!message.html_body.contains("<script>"));
        assert!(message.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn contact_document_renders_message_lines() {
        let contact = ContactMessage {
            full_name: "Jane Doe".into(),
            email: Masked("jane@example.com".to_string()),
            phone: Masked("+447911123456".to_string()),
            message: "First line\nSecond line".into(),
        };

        let message = contact_notification(&contact, "ops@example.com");
        assert_eq!(message.subject, "New Contact Message from Jane Doe");
        assert!(message.html_body.contains("First line<br>Second line"));
        assert!(message.html_body.contains("respond to this inquiry"));
    }
}

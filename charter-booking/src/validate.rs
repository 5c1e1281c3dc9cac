//! Field-level validation for the public intake forms.
//!
//! Every rule is checked, never short-circuited, so a careless submission
//! comes back with the complete list of problems in form order.

use crate::submission::{BookingSubmission, ContactMessage, ContactSubmission, NormalizedBooking};
use charter_fleet::TransportMode;
use charter_shared::Masked;
use chrono::{NaiveDate, NaiveTime};

/// Checks every field rule against the raw form and either hands back a
/// [`NormalizedBooking`] or the full list of violation messages.
pub fn validate_submission(
    submission: &BookingSubmission,
) -> Result<NormalizedBooking, Vec<String>> {
    let mut errors = Vec::new();

    let city = text(submission.city.as_deref());
    if city.is_none() {
        errors.push("City is required".to_string());
    }

    let transport_mode = text(submission.transport_mode.as_deref())
        .and_then(|raw| TransportMode::parse(&raw));
    if transport_mode.is_none() {
        errors.push(format!(
            "Transport mode must be one of: {}",
            TransportMode::ALL.map(|mode| mode.as_str()).join(", ")
        ));
    }

    // An empty vehicle selection widget posts "", which means no preference.
    let vehicle_id = text(submission.vehicle_id.as_deref());

    let pickup_location = text(submission.pickup_location.as_deref());
    if pickup_location.is_none() {
        errors.push("Pickup location is required".to_string());
    }

    let dropoff_location = text(submission.dropoff_location.as_deref());
    if dropoff_location.is_none() {
        errors.push("Drop-off location is required".to_string());
    }

    let pickup_date = text(submission.pickup_date.as_deref())
        .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok());
    if pickup_date.is_none() {
        errors.push("Invalid pickup date format".to_string());
    }

    let pickup_time =
        text(submission.pickup_time.as_deref()).and_then(|raw| parse_clock_time(&raw));
    if pickup_time.is_none() {
        errors.push("Invalid pickup time format".to_string());
    }

    let passengers = match text(submission.passengers.as_deref()) {
        None => {
            errors.push("Number of passengers is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<i32>() {
            Ok(count) if (1..=50).contains(&count) => Some(count),
            _ => {
                errors.push(
                    "Number of passengers must be a valid number between 1 and 50".to_string(),
                );
                None
            }
        },
    };

    let first_name = text(submission.first_name.as_deref())
        .filter(|name| length_between(name, 2, 50));
    if first_name.is_none() {
        errors.push("First name must be between 2 and 50 characters".to_string());
    }

    let last_name = text(submission.last_name.as_deref())
        .filter(|name| length_between(name, 2, 50));
    if last_name.is_none() {
        errors.push("Last name must be between 2 and 50 characters".to_string());
    }

    let email = text(submission.email.as_deref())
        .filter(|value| email_ok(value))
        .map(|value| value.to_lowercase());
    if email.is_none() {
        errors.push("Invalid email address".to_string());
    }

    let phone = text(submission.phone.as_deref()).filter(|value| phone_ok(value));
    if phone.is_none() {
        errors.push("Invalid phone number".to_string());
    }

    let special_requests = text(submission.special_requests.as_deref());
    if let Some(requests) = &special_requests {
        if requests.chars().count() > 1000 {
            errors.push("Special requests must be less than 1000 characters".to_string());
        }
    }

    let normalized = (|| {
        Some(NormalizedBooking {
            city: city?,
            transport_mode: transport_mode?,
            vehicle_id,
            pickup_location: pickup_location?,
            dropoff_location: dropoff_location?,
            pickup_date: pickup_date?,
            pickup_time: pickup_time?,
            passengers: passengers?,
            first_name: first_name?,
            last_name: last_name?,
            email: Masked(email?),
            phone: Masked(phone?),
            special_requests,
            is_round_trip: submission.is_round_trip.unwrap_or(false),
            return_date: text(submission.return_date.as_deref()),
            return_time: text(submission.return_time.as_deref()),
        })
    })();

    match normalized {
        Some(booking) if errors.is_empty() => Ok(booking),
        _ => Err(errors),
    }
}

/// Contact form rules; same collect-everything behaviour as the booking form.
pub fn validate_contact(submission: &ContactSubmission) -> Result<ContactMessage, Vec<String>> {
    let mut errors = Vec::new();

    let full_name =
        text(submission.full_name.as_deref()).filter(|name| length_between(name, 2, 100));
    if full_name.is_none() {
        errors.push("Full name must be between 2 and 100 characters".to_string());
    }

    let email = text(submission.email.as_deref())
        .filter(|value| email_ok(value))
        .map(|value| value.to_lowercase());
    if email.is_none() {
        errors.push("Invalid email address".to_string());
    }

    let phone = text(submission.phone.as_deref()).filter(|value| phone_ok(value));
    if phone.is_none() {
        errors.push("Invalid phone number".to_string());
    }

    let message =
        text(submission.message.as_deref()).filter(|body| length_between(body, 10, 2000));
    if message.is_none() {
        errors.push("Message must be between 10 and 2000 characters".to_string());
    }

    match (full_name, email, phone, message) {
        (Some(full_name), Some(email), Some(phone), Some(message)) if errors.is_empty() => {
            Ok(ContactMessage {
                full_name,
                email: Masked(email),
                phone: Masked(phone),
                message,
            })
        }
        _ => Err(errors),
    }
}

/// Trims a field and treats whitespace-only input the same as a missing one.
fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

fn length_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// 24-hour clock with an optional leading zero, seconds not accepted.
fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}

/// Light-weight mailbox check: one `@`, a dotted domain, no whitespace.
pub fn email_ok(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// International phone shape: separators stripped, optional `+`, then up to
/// sixteen digits that do not start with zero.
pub fn phone_ok(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    !digits.is_empty()
        && digits.len() <= 16
        && !digits.starts_with('0')
        && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BookingSubmission {
        serde_json::from_value(serde_json::json!({
            "city": "london",
            "transportMode": "PRIVATE_CAR",
            "pickupLocation": "Heathrow Terminal 5",
            "dropoffLocation": "The Ritz",
            "pickupDate": "2031-06-01",
            "pickupTime": "14:30",
            "passengers": "2",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "Jane.Doe@Example.COM",
            "phone": "+44 7911 123456"
        }))
        .unwrap()
    }

    #[test]
    fn empty_form_reports_every_required_rule() {
        let errors = validate_submission(&BookingSubmission::default()).unwrap_err();

        let expected = [
            "City is required",
            "Transport mode must be one of: HELICOPTER, PRIVATE_JET, BUS, PRIVATE_CAR",
            "Pickup location is required",
            "Drop-off location is required",
            "Invalid pickup date format",
            "Invalid pickup time format",
            "Number of passengers is required",
            "First name must be between 2 and 50 characters",
            "Last name must be between 2 and 50 characters",
            "Invalid email address",
            "Invalid phone number",
        ];
        assert_eq!(errors, expected);
    }

    #[test]
    fn valid_form_is_normalized() {
        let booking = validate_submission(&complete_form()).unwrap();

        assert_eq!(booking.city, "london");
        assert_eq!(booking.transport_mode, TransportMode::PrivateCar);
        assert_eq!(booking.vehicle_id, None);
        assert_eq!(booking.passengers, 2);
        assert_eq!(booking.email.0, "jane.doe@example.com");
        assert_eq!(booking.phone.0, "+44 7911 123456");
        assert_eq!(booking.pickup_datetime().to_string(), "2031-06-01 14:30:00");
        assert!(!booking.is_round_trip);
    }

    #[test]
    fn blank_vehicle_selection_means_no_preference() {
        let mut form = complete_form();
        form.vehicle_id = Some("   ".to_string());
        assert_eq!(validate_submission(&form).unwrap().vehicle_id, None);

        form.vehicle_id = Some("3b4c1c1e-94e6-4ed5-9f0a-47a6a740b9cd".to_string());
        assert_eq!(
            validate_submission(&form).unwrap().vehicle_id.as_deref(),
            Some("3b4c1c1e-94e6-4ed5-9f0a-47a6a740b9cd")
        );
    }

    #[test]
    fn passenger_count_must_be_numeric_and_in_range() {
        for bad in ["0", "51", "two", "12 people", "-3"] {
            let mut form = complete_form();
            form.passengers = Some(bad.to_string());
            let errors = validate_submission(&form).unwrap_err();
            assert_eq!(
                errors,
                ["Number of passengers must be a valid number between 1 and 50"],
                "passengers = {bad:?}"
            );
        }

        let mut form = complete_form();
        form.passengers = Some("  ".to_string());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ["Number of passengers is required"]
        );
    }

    #[test]
    fn clock_times_allow_single_digit_hours() {
        assert_eq!(
            parse_clock_time("9:05"),
            NaiveTime::from_hms_opt(9, 5, 0)
        );
        assert_eq!(
            parse_clock_time("23:59"),
            NaiveTime::from_hms_opt(23, 59, 0)
        );
        for bad in ["24:00", "12:60", "9:5", "09:30:00", "930", "nine:30", ""] {
            assert_eq!(parse_clock_time(bad), None, "time = {bad:?}");
        }
    }

    #[test]
    fn date_must_be_a_real_calendar_day() {
        let mut form = complete_form();
        form.pickup_date = Some("2031-02-30".to_string());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ["Invalid pickup date format"]
        );

        form.pickup_date = Some("01/06/2031".to_string());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ["Invalid pickup date format"]
        );
    }

    #[test]
    fn mailbox_shapes() {
        assert!(email_ok("jane@example.com"));
        assert!(email_ok("j.doe+vip@mail.example.co.uk"));
        for bad in [
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@.example.com",
            "jane@example..com",
            "jane doe@example.com",
            "jane@exa mple.com",
        ] {
            assert!(!email_ok(bad), "email = {bad:?}");
        }
    }

    #[test]
    fn phone_shapes() {
        assert!(phone_ok("+447911123456"));
        assert!(phone_ok("+44 (0)7911-123456"));
        assert!(phone_ok("36 1 234 5678"));
        assert!(phone_ok("(44) 7911 123456"));
        for bad in ["", "0447911123456", "+07911123456", "+44 7911 watch", "12345678901234567"] {
            assert!(!phone_ok(bad), "phone = {bad:?}");
        }
    }

    #[test]
    fn special_requests_capped_at_a_thousand_characters() {
        let mut form = complete_form();
        form.special_requests = Some("x".repeat(1000));
        assert!(validate_submission(&form).is_ok());

        form.special_requests = Some("x".repeat(1001));
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ["Special requests must be less than 1000 characters"]
        );
    }

    #[test]
    fn contact_form_collects_all_violations() {
        let errors = validate_contact(&ContactSubmission::default()).unwrap_err();
        assert_eq!(
            errors,
            [
                "Full name must be between 2 and 100 characters",
                "Invalid email address",
                "Invalid phone number",
                "Message must be between 10 and 2000 characters",
            ]
        );
    }

    #[test]
    fn contact_form_normalizes_email() {
        let form: ContactSubmission = serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "JANE@example.com",
            "phone": "+36 1 234 5678",
            "message": "Looking for a quote on a Budapest coach."
        }))
        .unwrap();
        let contact = validate_contact(&form).unwrap();
        assert_eq!(contact.email.0, "jane@example.com");
        assert_eq!(contact.phone.0, "+36 1 234 5678");

        let mut garbled = form.clone();
        garbled.phone = Some("not-a-number".to_string());
        assert_eq!(validate_contact(&garbled).unwrap_err(), ["Invalid phone number"]);
    }
}

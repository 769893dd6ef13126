//! Format validation for Pakistani registration data.
//!
//! Pure, total functions: every validator returns a bool or a formatted
//! string and never panics, so all error reporting stays with the caller
//! via [`validation_message`].

use chrono::{Datelike, Local, NaiveDate};

/// Validate a Pakistani CNIC (13 digits, dashes optional).
pub fn validate_cnic(raw: &str) -> bool {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    cleaned.len() == 13 && cleaned.chars().all(|c| c.is_ascii_digit())
}

/// Format a CNIC with dashes (XXXXX-XXXXXXX-X), progressively for partial
/// input and truncating past 13 digits.
pub fn format_cnic(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(13).collect();
    match digits.len() {
        0..=5 => digits,
        6..=12 => format!("{}-{}", &digits[..5], &digits[5..]),
        _ => format!("{}-{}-{}", &digits[..5], &digits[5..12], &digits[12..]),
    }
}

/// Validate a Pakistani phone number.
///
/// Accepted cleaned forms: `+92` + 10 digits, `92` + 10 digits,
/// `0` + 10 digits, and the mobile-specific `03` + 9 digits.
pub fn validate_phone(raw: &str) -> bool {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
    }

    if let Some(rest) = cleaned.strip_prefix("+92") {
        return rest.len() == 10 && all_digits(rest);
    }
    if let Some(rest) = cleaned.strip_prefix("92") {
        return rest.len() == 10 && all_digits(rest);
    }
    if let Some(rest) = cleaned.strip_prefix("03") {
        if rest.len() == 9 && all_digits(rest) {
            return true;
        }
    }
    if let Some(rest) = cleaned.strip_prefix('0') {
        return rest.len() == 10 && all_digits(rest);
    }
    false
}

/// Format a Pakistani phone number, re-inserting a single dash after the
/// country/trunk prefix (`+92-XXX-XXXXXXX` or `0XXX-XXXXXXX`), progressively
/// as digits accrue. A bare `92` prefix is normalized to `+92`.
pub fn format_phone(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    fn digits_of(s: &str) -> String {
        s.chars().filter(char::is_ascii_digit).collect()
    }

    if let Some(rest) = cleaned.strip_prefix("+92") {
        let digits = digits_of(rest);
        if digits.len() <= 3 {
            format!("+92-{}", digits)
        } else {
            format!("+92-{}-{}", &digits[..3], &digits[3..])
        }
    } else if let Some(rest) = cleaned.strip_prefix("92") {
        let digits = digits_of(rest);
        if digits.len() <= 3 {
            format!("+92-{}", digits)
        } else {
            format!("+92-{}-{}", &digits[..3], &digits[3..])
        }
    } else if cleaned.starts_with('0') {
        let digits = digits_of(&cleaned);
        if digits.len() <= 4 {
            digits
        } else {
            format!("{}-{}", &digits[..4], &digits[4..])
        }
    } else {
        cleaned
    }
}

/// Validate an email address against the permissive `local@domain.tld`
/// shape: no whitespace, one `@`, a dot strictly inside the domain.
pub fn validate_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a name: trimmed length >= 2, Latin letters, whitespace, or
/// Arabic-script characters (the block used for Urdu) only.
pub fn validate_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.chars().count() >= 2
        && trimmed.chars().all(|c| {
            c.is_ascii_alphabetic() || c.is_whitespace() || ('\u{0600}'..='\u{06FF}').contains(&c)
        })
}

/// Calculate age in whole years as of `today`, decrementing when the
/// birthday has not yet been reached this year. Unparseable input yields 0.
pub fn calculate_age_on(date_of_birth: &str, today: NaiveDate) -> i32 {
    let Ok(birth) = NaiveDate::parse_from_str(date_of_birth.trim(), "%Y-%m-%d") else {
        return 0;
    };
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Calculate age in whole years as of the current local date.
pub fn calculate_age(date_of_birth: &str) -> i32 {
    calculate_age_on(date_of_birth, Local::now().date_naive())
}

/// Minimum volunteer age in years.
pub const MINIMUM_AGE: i32 = 18;

pub fn validate_minimum_age_on(date_of_birth: &str, today: NaiveDate) -> bool {
    calculate_age_on(date_of_birth, today) >= MINIMUM_AGE
}

/// True iff the date of birth is at least [`MINIMUM_AGE`] years ago.
pub fn validate_minimum_age(date_of_birth: &str) -> bool {
    calculate_age(date_of_birth) >= MINIMUM_AGE
}

/// True iff the value contains something other than whitespace.
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Map a validation kind to its human-readable message. Unknown kinds fall
/// back to a generic "<field> is invalid".
pub fn validation_message(field: &str, kind: &str) -> String {
    match kind {
        "required" => format!("{} is required", field),
        "cnic" => "Please enter a valid 13-digit CNIC".to_string(),
        "phone" => "Please enter a valid Pakistani phone number".to_string(),
        "email" => "Please enter a valid email address".to_string(),
        "age" => "You must be at least 18 years old to register".to_string(),
        "name" => "Please enter a valid name (letters only)".to_string(),
        _ => format!("{} is invalid", field),
    }
}

use crate::error::{Error, Result};
use crate::profile::Profile;

/// Validate internal consistency of a profile record.
///
/// This checks:
/// - required string fields are non-empty
/// - birth day/month are in calendar range and the year has four digits
/// - the email is syntactically plausible
///
/// Optional fields are not checked here; normalization already collapsed
/// empty values to the no-value state.
pub fn validate_profile(profile: &Profile) -> Result<()> {
    let required = [
        ("first_name", profile.first_name.as_str()),
        ("last_name", profile.last_name.as_str()),
        ("birthplace", profile.birthplace.as_str()),
        ("residence", profile.residence.as_str()),
        ("phone_number", profile.phone_number.as_str()),
        ("email", profile.email.as_str()),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(Error::InvalidProfile(format!(
                "required field '{name}' is empty"
            )));
        }
    }

    if !(1..=31).contains(&profile.birth_day) {
        return Err(Error::InvalidProfile(format!(
            "birth_day {} out of range 1-31",
            profile.birth_day
        )));
    }
    if !(1..=12).contains(&profile.birth_month) {
        return Err(Error::InvalidProfile(format!(
            "birth_month {} out of range 1-12",
            profile.birth_month
        )));
    }
    if !(1000..=9999).contains(&profile.birth_year) {
        return Err(Error::InvalidProfile(format!(
            "birth_year {} is not a four-digit year",
            profile.birth_year
        )));
    }

    validate_email(&profile.email)?;

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = || Error::InvalidProfile(format!("invalid email address: {email}"));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    if domain.contains('@') || !domain.contains('.') {
        return Err(invalid());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(())
}

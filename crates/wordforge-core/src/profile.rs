use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version tag for the profile document format.
pub const PROFILE_VERSION: &str = "1";

/// Validated personal-fact record driving candidate generation.
///
/// Required fields are always present and non-empty after
/// [`normalize_profile`](crate::normalize_profile) +
/// [`validate_profile`](crate::validate_profile). Optional fields use `None`
/// as the documented no-value state; an empty string never survives
/// normalization. The engine never mutates a profile once it is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    /// Day of month, 1-31.
    pub birth_day: u8,
    /// Month, 1-12.
    pub birth_month: u8,
    /// Four-digit year.
    pub birth_year: u16,
    pub birthplace: String,
    pub residence: String,
    pub phone_number: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ex_partner_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_song: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_celebrity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamer_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_number: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reddit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapchat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinterest_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
}

impl Profile {
    /// Display name used in run manifests.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Normalize a raw profile into its canonical form.
///
/// Trims whitespace on every string field, maps empty optional strings to
/// `None`, and drops empty device entries. Required fields keep their trimmed
/// value; emptiness there is caught by validation, not here.
pub fn normalize_profile(profile: Profile) -> Profile {
    let trim = |value: String| value.trim().to_string();
    let trim_opt = |value: Option<String>| {
        value.and_then(|value| {
            let value = value.trim().to_string();
            if value.is_empty() { None } else { Some(value) }
        })
    };

    Profile {
        first_name: trim(profile.first_name),
        last_name: trim(profile.last_name),
        birth_day: profile.birth_day,
        birth_month: profile.birth_month,
        birth_year: profile.birth_year,
        birthplace: trim(profile.birthplace),
        residence: trim(profile.residence),
        phone_number: trim(profile.phone_number),
        email: trim(profile.email),
        nickname: trim_opt(profile.nickname),
        father_name: trim_opt(profile.father_name),
        mother_name: trim_opt(profile.mother_name),
        spouse_name: trim_opt(profile.spouse_name),
        child_name: trim_opt(profile.child_name),
        pet_name: trim_opt(profile.pet_name),
        company_name: trim_opt(profile.company_name),
        ex_partner_name: trim_opt(profile.ex_partner_name),
        school_name: trim_opt(profile.school_name),
        college_name: trim_opt(profile.college_name),
        favorite_movie: trim_opt(profile.favorite_movie),
        favorite_song: trim_opt(profile.favorite_song),
        favorite_band: trim_opt(profile.favorite_band),
        favorite_sport: trim_opt(profile.favorite_sport),
        favorite_book: trim_opt(profile.favorite_book),
        favorite_celebrity: trim_opt(profile.favorite_celebrity),
        gamer_tag: trim_opt(profile.gamer_tag),
        device_names: profile
            .device_names
            .into_iter()
            .map(|device| device.trim().to_string())
            .filter(|device| !device.is_empty())
            .collect(),
        favorite_number: profile.favorite_number,
        facebook_id: trim_opt(profile.facebook_id),
        twitter_id: trim_opt(profile.twitter_id),
        instagram_id: trim_opt(profile.instagram_id),
        linkedin_id: trim_opt(profile.linkedin_id),
        github_id: trim_opt(profile.github_id),
        reddit_id: trim_opt(profile.reddit_id),
        tiktok_id: trim_opt(profile.tiktok_id),
        snapchat_id: trim_opt(profile.snapchat_id),
        pinterest_id: trim_opt(profile.pinterest_id),
        youtube_id: trim_opt(profile.youtube_id),
    }
}

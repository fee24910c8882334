use crate::fields::{FieldSet, FieldValue};

/// Why a template produced no candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The pattern references a field name the deriver never produces.
    /// A catalog error, not a data-absence case.
    UnknownField(String),
    /// The pattern references an optional fact the profile does not carry.
    AbsentField(String),
    /// A zero-padded placeholder is bound to a non-numeric field.
    NonNumeric(String),
    /// Unbalanced braces or an unsupported format spec in the pattern.
    Malformed,
    /// Substitution produced the empty string.
    Empty,
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::UnknownField(_) => "unknown_field",
            SkipReason::AbsentField(_) => "absent_field",
            SkipReason::NonNumeric(_) => "non_numeric_pad",
            SkipReason::Malformed => "malformed_template",
            SkipReason::Empty => "empty_result",
        }
    }
}

/// Outcome of rendering one catalog pattern against a field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    Skipped(SkipReason),
}

/// Substitute field values into one pattern.
///
/// Placeholders are `{field}` for plain substitution and `{field:0N}` for
/// zero-padded numeric substitution. Any defect (unknown field, absent
/// optional, non-numeric pad target, unbalanced braces, empty result) skips
/// the pattern without failing the batch.
pub fn render(pattern: &str, fields: &FieldSet) -> Rendered {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch == '}' {
            return Rendered::Skipped(SkipReason::Malformed);
        }
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for ch in chars.by_ref() {
            if ch == '}' {
                closed = true;
                break;
            }
            name.push(ch);
        }
        if !closed {
            return Rendered::Skipped(SkipReason::Malformed);
        }

        let (field, pad) = match name.split_once(':') {
            Some((field, spec)) => match parse_pad(spec) {
                Some(width) => (field, Some(width)),
                None => return Rendered::Skipped(SkipReason::Malformed),
            },
            None => (name.as_str(), None),
        };

        match fields.get(field) {
            None => return Rendered::Skipped(SkipReason::UnknownField(field.to_string())),
            Some(FieldValue::Absent) => {
                return Rendered::Skipped(SkipReason::AbsentField(field.to_string()));
            }
            Some(FieldValue::Int(value)) => match pad {
                Some(width) => out.push_str(&format!("{value:0width$}")),
                None => out.push_str(&value.to_string()),
            },
            Some(FieldValue::Text(value)) => match pad {
                Some(_) => return Rendered::Skipped(SkipReason::NonNumeric(field.to_string())),
                None => out.push_str(value),
            },
        }
    }

    if out.is_empty() {
        Rendered::Skipped(SkipReason::Empty)
    } else {
        Rendered::Text(out)
    }
}

fn parse_pad(spec: &str) -> Option<usize> {
    // Only `0N` zero-pad specs appear in the catalog.
    let width = spec.strip_prefix('0')?;
    width.parse().ok().filter(|width| (1..=8).contains(width))
}

/// The ordered template catalog. Order is significant: it fixes the
/// first-discovery order of every base candidate.
pub static CATALOG: &[&str] = &[
    // Bare name combinations and case variants.
    "{first_name}{last_name}",
    "{last_name}{first_name}",
    "{first_name}",
    "{last_name}",
    "{first_name_lower}{last_name_lower}",
    "{first_name_upper}{last_name_upper}",
    "{first_name_cap}{last_name_cap}",
    "{first_name_lower}",
    "{last_name_lower}",
    "{first_name_upper}",
    "{last_name_upper}",
    "{first_name}.{last_name}",
    "{first_name}_{last_name}",
    "{first_name}-{last_name}",
    "{first_name_lower}.{last_name_lower}",
    "{first_name_lower}_{last_name_lower}",
    "{nickname}",
    "{nickname}{last_name}",
    "{first_name}{nickname}",
    // Name and year.
    "{first_name}{birth_year}",
    "{last_name}{birth_year}",
    "{nickname}{birth_year}",
    "{first_name}{last_name}{birth_year}",
    "{last_name}{first_name}{birth_year}",
    "{first_name_lower}{birth_year}",
    "{last_name_lower}{birth_year}",
    "{first_name}{birth_year_short}",
    "{last_name}{birth_year_short}",
    "{nickname}{birth_year_short}",
    "{first_name}{last_name}{birth_year_short}",
    "{birth_year}{first_name}",
    "{birth_year}{last_name}",
    "{birth_year_short}{first_name_lower}",
    // Name and full date pieces.
    "{first_name}{birth_month:02}{birth_year}",
    "{last_name}{birth_month:02}{birth_year}",
    "{first_name}{birth_day:02}{birth_year}",
    "{last_name}{birth_day:02}{birth_year}",
    "{first_name}{birth_day_str}{birth_month_str}",
    "{last_name}{birth_day_str}{birth_month_str}",
    "{first_name}{last_name}{birth_day_str}{birth_month_str}",
    "{last_name}{first_name}{birth_day_str}{birth_month_str}",
    "{first_name}{birth_month_str}{birth_day_str}",
    "{last_name}{birth_month_str}{birth_day_str}",
    "{first_name}{birth_day_str}{birth_month_str}{birth_year_short}",
    "{last_name}{birth_day_str}{birth_month_str}{birth_year_short}",
    "{first_name}{birth_day}{birth_month}",
    "{first_name}{birth_month_str}/{birth_day_str}",
    "{last_name}{birth_year}-{birth_month_str}",
    "{birth_month_str}/{birth_day_str}/{birth_year}",
    "{birth_day_str}-{birth_month_str}-{birth_year}",
    "{birth_day_str}{birth_month_str}{birth_year}",
    "{birth_day_str}{birth_month_str}{birth_year_short}",
    "{birth_year}{first_name}{last_name}",
    // Short names and initials with dates.
    "{first_name_short_3}{last_name_short_3}{birth_year}",
    "{first_name_short_2}{last_name_short_2}{birth_year}",
    "{first_name_short_4}{birth_year}",
    "{last_name_short_4}{birth_year}",
    "{first_name_short_3}{birth_year_short}",
    "{first_name_initial}{last_name_initial}{birth_year}",
    "{first_name_initial}{last_name_initial}{birth_year_short}",
    "{first_name_initial}{last_name}{birth_day_str}{birth_month_str}",
    "{last_name_initial}{first_name}{birth_day_str}{birth_month_str}",
    "{first_name}{last_name_initial}{birth_day_str}{birth_month_str}",
    "{last_name}{first_name_initial}{birth_day_str}{birth_month_str}",
    "{first_name_initial}{last_name}{birth_year}",
    "{last_name_initial}{first_name}{birth_year}",
    "{first_name_initial}{last_name_initial}{birth_day_str}{birth_month_str}",
    // Name and date with special characters.
    "{last_name}@{birth_year}",
    "{first_name}@{birth_year}",
    "{first_name}{last_name}@{birth_year}",
    "{birth_year}@{first_name}",
    "{first_name}{last_name_initial}@{birth_year}",
    "{last_name}{first_name_initial}@{birth_year}",
    "{first_name_initial}{last_name}@{birth_year}",
    "{last_name_initial}{first_name}@{birth_year}",
    "{first_name}{birth_year}!",
    "{last_name}{birth_year}?",
    "{first_name}{last_name}#",
    "{first_name}#{birth_year}",
    "{last_name}${birth_year}",
    "{first_name}&{last_name}",
    "{first_name}*{birth_year_short}",
    "{birth_day_str}{birth_month_str}{birth_year}@",
    "{pet_name}{birth_year}$",
    // Personal relationships.
    "{father_name}{birth_year}",
    "{mother_name}{birth_year}",
    "{pet_name}{birth_year}",
    "{pet_name}",
    "{first_name}{pet_name}",
    "{last_name}{pet_name}",
    "{first_name}{father_name}{birth_year}",
    "{last_name}{mother_name}{birth_year}",
    "{pet_name}{first_name}{birth_year}",
    "{spouse_name}{birth_year}",
    "{first_name}{spouse_name}",
    "{first_name}{spouse_name}{birth_year}",
    "{last_name}{spouse_name}{birth_year}",
    "{child_name}{birth_year}",
    "{first_name}{child_name}{birth_year}",
    "{last_name}{child_name}{birth_year}",
    "{father_name_initial}{mother_name_initial}{birth_year}",
    "{pet_name}{first_name_initial}{last_name_initial}{birth_year}",
    "{spouse_name}{child_name}{birth_year}",
    "{spouse_name_initial}{first_name}{birth_year_short}",
    "{child_name_initial}{pet_name_initial}{birth_year}",
    "{mother_name}{father_name}",
    "{ex_partner_name}{birth_year}",
    "{first_name}{ex_partner_name}",
    "{first_name}{mother_name}{pet_name}",
    "{last_name}{father_name}{spouse_name}",
    "{first_name}{mother_name}{birth_year}",
    "{last_name}{father_name}{birth_year}",
    "{pet_name}{first_name}{birth_day_str}{birth_month_str}",
    "{spouse_name}{last_name}{birth_year}",
    "{child_name}{first_name}{birth_year}",
    "{first_name}{last_name}{pet_name}{birth_year}",
    // Work and education.
    "{company_name}{birth_year}",
    "{first_name}{company_name}",
    "{company_name}{first_name}",
    "{school_name}{birth_year}",
    "{first_name}{school_name}",
    "{college_name}{birth_year}",
    "{first_name}{college_name}",
    "{college_name}{birth_year_short}",
    "{company_name}123",
    // Favorites.
    "{first_name}{favorite_movie}",
    "{last_name}{favorite_movie}",
    "{favorite_movie}{birth_year}",
    "{first_name}{favorite_song}",
    "{last_name}{favorite_song}",
    "{favorite_song}{birth_year_short}",
    "{first_name}{favorite_band}",
    "{last_name}{favorite_band}",
    "{favorite_band}{birth_year}",
    "{first_name}{favorite_sport}",
    "{last_name}{favorite_sport}",
    "{favorite_sport}{birth_year}",
    "{favorite_sport}{birth_day_str}",
    "{first_name}{favorite_book}",
    "{last_name}{favorite_book}",
    "{first_name}{favorite_celebrity}",
    "{last_name}{favorite_celebrity}",
    "{favorite_celebrity}{birth_year_short}",
    "{first_name}{gamer_tag}",
    "{last_name}{gamer_tag}",
    "{gamer_tag}",
    "{gamer_tag}{birth_year}",
    "{gamer_tag}{birth_year_short}",
    "{first_name}{favorite_number}",
    "{last_name}{favorite_number}",
    "{favorite_number}{first_name}",
    "{first_name}{last_name}{favorite_number}",
    "{pet_name}{favorite_number}",
    // Sequences and filler words.
    "{first_name}123456",
    "123456{last_name}",
    "{first_name}123",
    "{last_name}123",
    "{birth_year}abcdef",
    "abcdef{birth_year}",
    "{first_name}password",
    "password{last_name}",
    "{first_name}abc",
    "{last_name}xyz",
    // Phone-derived combinations.
    "{first_name}{phone_last_4}",
    "{last_name}{phone_last_4}",
    "{phone_last_4}{first_name}",
    "{first_name_initial}{last_name_initial}{phone_last_4}",
    "{first_name}{phone_first_3}",
    "{phone_first_3}{birth_year}",
    "{phone_mid_3}{first_name}",
    "{phone_last_4}{birth_year_short}",
    "{phone_number}",
    // Location-derived combinations.
    "{first_name}{birthplace}",
    "{last_name}{birthplace}",
    "{birthplace}{birth_year}",
    "{birthplace_short_3}{birth_year}",
    "{birthplace_short_4}{first_name}",
    "{first_name}{residence}",
    "{last_name}{residence}",
    "{residence}{birth_year}",
    "{residence_short_3}{birth_year_short}",
    "{residence_short_4}{phone_last_4}",
    "{first_name}{birthplace_short_3}{birth_year_short}",
    // Social handles and devices.
    "{social_handle}",
    "{social_handle}{birth_year}",
    "{social_handle}{birth_year_short}",
    "{first_name}{social_handle}",
    "{social_handle}{phone_last_4}",
    "{social_handle}123",
    "{device_name}",
    "{device_name}{birth_year}",
    "{first_name}{device_name}",
    "{device_name}{phone_last_4}",
    // Reversed strings.
    "{first_name_rev}{birth_year}",
    "{last_name_rev}{birth_year}",
    "{first_name}{last_name_rev}{birth_year}",
    "{first_name_rev}{last_name}{birth_year}",
    "{birth_year_rev}{first_name}",
    "{birth_year_rev}{last_name}",
    "{first_name}{birth_year_rev}{last_name}",
    "{first_name_rev}",
    "{last_name_rev}",
    "{first_name_rev}{last_name_rev}",
    // Year-digit games.
    "{first_name}{birth_year_digit_3}{birth_year_digit_4}",
    "{last_name}{birth_year_digit_1}{birth_year_digit_2}",
    "{first_name_initial}{birth_year_digit_1}{birth_year_digit_2}{birth_year_digit_3}{birth_year_digit_4}",
    "{birth_year_digit_4}{birth_year_digit_3}{first_name}",
    // Special characters mid-string.
    "{first_name}!{last_name}{birth_year}",
    "{last_name}@{first_name}{birth_year}",
    "{birth_year}#{first_name}{last_name}",
    "{first_name}{last_name}${birth_day_str}{birth_month_str}",
    "{birth_day_str}{birth_month_str}%{first_name}{last_name}",
    "{first_name}.{birth_year}",
    "{last_name}_{birth_year}",
    "{first_name}-{birth_year_short}",
    "{pet_name}!{birth_year}",
    "{nickname}@{birth_year_short}",
    "{first_name}*{last_name}",
    "{first_name}_{pet_name}",
    "{gamer_tag}#{birth_year_short}",
    // High-frequency leaked passwords (profile-independent).
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "password",
    "password1",
    "password123",
    "qwerty",
    "qwerty123",
    "abc123",
    "111111",
    "123123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "master",
    "shadow",
    "superman",
    "batman",
    "trustno1",
    "hello123",
    "freedom",
    "whatever",
    "qazwsx",
    "654321",
    "7777777",
    "123321",
    "1q2w3e4r",
    "000000",
    "zaq12wsx",
    "michael",
    "charlie",
    "asdfgh",
    "passw0rd",
    "p@ssw0rd",
    "secret",
    "starwars",
];

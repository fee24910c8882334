use std::collections::BTreeMap;

use wordforge_core::Profile;

/// Value of one derived field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Renderable text.
    Text(String),
    /// Renderable number; the only kind accepted by zero-padded placeholders.
    Int(i64),
    /// Optional fact the profile does not carry. Templates referencing an
    /// absent field are skipped instead of rendering a marker literal.
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    fn from_opt(value: Option<&str>) -> FieldValue {
        match value {
            Some(value) if !value.is_empty() => FieldValue::Text(value.to_string()),
            _ => FieldValue::Absent,
        }
    }
}

/// Closed set of named fields the template catalog may reference.
///
/// Derivation inserts a value for every known name, so a missing name at
/// render time is a catalog error, not a data-absence case.
#[derive(Debug, Clone)]
pub struct FieldSet {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FieldSet {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }
}

/// Social platforms in handle-priority order; the first non-empty handle wins.
const SOCIAL_PRIORITY: usize = 10;

/// Expand a profile into the full derived field set.
///
/// Pure and total: every derivation degrades to the full available string or
/// `Absent` instead of failing, and day/month always render as two digits.
pub fn derive(profile: &Profile) -> FieldSet {
    let mut fields = FieldSet {
        values: BTreeMap::new(),
    };

    let first = profile.first_name.as_str();
    let last = profile.last_name.as_str();

    fields.insert("first_name", FieldValue::Text(first.to_string()));
    fields.insert("last_name", FieldValue::Text(last.to_string()));
    fields.insert("first_name_lower", FieldValue::Text(first.to_lowercase()));
    fields.insert("first_name_upper", FieldValue::Text(first.to_uppercase()));
    fields.insert("first_name_cap", FieldValue::Text(capitalize(first)));
    fields.insert("last_name_lower", FieldValue::Text(last.to_lowercase()));
    fields.insert("last_name_upper", FieldValue::Text(last.to_uppercase()));
    fields.insert("last_name_cap", FieldValue::Text(capitalize(last)));

    fields.insert("first_name_short_2", FieldValue::Text(prefix(first, 2)));
    fields.insert("first_name_short_3", FieldValue::Text(prefix(first, 3)));
    fields.insert("first_name_short_4", FieldValue::Text(prefix(first, 4)));
    fields.insert("last_name_short_2", FieldValue::Text(prefix(last, 2)));
    fields.insert("last_name_short_3", FieldValue::Text(prefix(last, 3)));
    fields.insert("last_name_short_4", FieldValue::Text(prefix(last, 4)));

    fields.insert("first_name_initial", FieldValue::Text(initial(first)));
    fields.insert("last_name_initial", FieldValue::Text(initial(last)));
    fields.insert("first_name_rev", FieldValue::Text(reversed(first)));
    fields.insert("last_name_rev", FieldValue::Text(reversed(last)));

    fields.insert("birth_day", FieldValue::Int(i64::from(profile.birth_day)));
    fields.insert("birth_month", FieldValue::Int(i64::from(profile.birth_month)));
    fields.insert("birth_year", FieldValue::Int(i64::from(profile.birth_year)));
    fields.insert(
        "birth_day_str",
        FieldValue::Text(format!("{:02}", profile.birth_day)),
    );
    fields.insert(
        "birth_month_str",
        FieldValue::Text(format!("{:02}", profile.birth_month)),
    );

    let year = profile.birth_year.to_string();
    fields.insert("birth_year_str", FieldValue::Text(year.clone()));
    fields.insert("birth_year_rev", FieldValue::Text(reversed(&year)));
    fields.insert(
        "birth_year_short",
        FieldValue::Text(suffix(&year, 2)),
    );
    let digits: Vec<String> = year.chars().map(String::from).collect();
    for (index, name) in [
        "birth_year_digit_1",
        "birth_year_digit_2",
        "birth_year_digit_3",
        "birth_year_digit_4",
    ]
    .iter()
    .enumerate()
    {
        let digit = digits.get(index).cloned().unwrap_or_default();
        fields.insert(name, FieldValue::Text(digit));
    }

    fields.insert("birthplace", FieldValue::Text(profile.birthplace.clone()));
    fields.insert("residence", FieldValue::Text(profile.residence.clone()));
    fields.insert(
        "birthplace_short_3",
        FieldValue::Text(prefix(&profile.birthplace, 3)),
    );
    fields.insert(
        "birthplace_short_4",
        FieldValue::Text(prefix(&profile.birthplace, 4)),
    );
    fields.insert(
        "residence_short_3",
        FieldValue::Text(prefix(&profile.residence, 3)),
    );
    fields.insert(
        "residence_short_4",
        FieldValue::Text(prefix(&profile.residence, 4)),
    );

    let phone = profile.phone_number.as_str();
    fields.insert("phone_number", FieldValue::Text(phone.to_string()));
    if phone.chars().count() >= 10 {
        fields.insert("phone_last_4", FieldValue::Text(suffix(phone, 4)));
        fields.insert("phone_first_3", FieldValue::Text(prefix(phone, 3)));
        fields.insert("phone_mid_3", FieldValue::Text(slice(phone, 3, 6)));
    } else {
        // Short numbers reuse the whole input rather than slicing past the end.
        fields.insert("phone_last_4", FieldValue::Text(phone.to_string()));
        fields.insert("phone_first_3", FieldValue::Text(phone.to_string()));
        fields.insert("phone_mid_3", FieldValue::Text(phone.to_string()));
    }

    fields.insert("nickname", FieldValue::from_opt(profile.nickname.as_deref()));
    fields.insert(
        "father_name",
        FieldValue::from_opt(profile.father_name.as_deref()),
    );
    fields.insert(
        "mother_name",
        FieldValue::from_opt(profile.mother_name.as_deref()),
    );
    fields.insert(
        "spouse_name",
        FieldValue::from_opt(profile.spouse_name.as_deref()),
    );
    fields.insert(
        "child_name",
        FieldValue::from_opt(profile.child_name.as_deref()),
    );
    fields.insert("pet_name", FieldValue::from_opt(profile.pet_name.as_deref()));
    fields.insert(
        "company_name",
        FieldValue::from_opt(profile.company_name.as_deref()),
    );
    fields.insert(
        "ex_partner_name",
        FieldValue::from_opt(profile.ex_partner_name.as_deref()),
    );
    fields.insert(
        "school_name",
        FieldValue::from_opt(profile.school_name.as_deref()),
    );
    fields.insert(
        "college_name",
        FieldValue::from_opt(profile.college_name.as_deref()),
    );
    fields.insert(
        "favorite_movie",
        FieldValue::from_opt(profile.favorite_movie.as_deref()),
    );
    fields.insert(
        "favorite_song",
        FieldValue::from_opt(profile.favorite_song.as_deref()),
    );
    fields.insert(
        "favorite_band",
        FieldValue::from_opt(profile.favorite_band.as_deref()),
    );
    fields.insert(
        "favorite_sport",
        FieldValue::from_opt(profile.favorite_sport.as_deref()),
    );
    fields.insert(
        "favorite_book",
        FieldValue::from_opt(profile.favorite_book.as_deref()),
    );
    fields.insert(
        "favorite_celebrity",
        FieldValue::from_opt(profile.favorite_celebrity.as_deref()),
    );
    fields.insert(
        "gamer_tag",
        FieldValue::from_opt(profile.gamer_tag.as_deref()),
    );
    fields.insert(
        "favorite_number",
        match profile.favorite_number {
            Some(value) => FieldValue::Int(value),
            None => FieldValue::Absent,
        },
    );

    fields.insert(
        "father_name_initial",
        opt_initial(profile.father_name.as_deref()),
    );
    fields.insert(
        "mother_name_initial",
        opt_initial(profile.mother_name.as_deref()),
    );
    fields.insert(
        "spouse_name_initial",
        opt_initial(profile.spouse_name.as_deref()),
    );
    fields.insert(
        "child_name_initial",
        opt_initial(profile.child_name.as_deref()),
    );
    fields.insert("pet_name_initial", opt_initial(profile.pet_name.as_deref()));

    fields.insert("social_handle", social_handle(profile));
    fields.insert(
        "device_name",
        FieldValue::from_opt(profile.device_names.first().map(String::as_str)),
    );

    fields
}

/// First non-empty handle in fixed platform-priority order.
fn social_handle(profile: &Profile) -> FieldValue {
    let handles: [Option<&str>; SOCIAL_PRIORITY] = [
        profile.facebook_id.as_deref(),
        profile.twitter_id.as_deref(),
        profile.instagram_id.as_deref(),
        profile.linkedin_id.as_deref(),
        profile.github_id.as_deref(),
        profile.reddit_id.as_deref(),
        profile.tiktok_id.as_deref(),
        profile.snapchat_id.as_deref(),
        profile.pinterest_id.as_deref(),
        profile.youtube_id.as_deref(),
    ];
    handles
        .into_iter()
        .flatten()
        .find(|handle| !handle.is_empty())
        .map(|handle| FieldValue::Text(handle.to_string()))
        .unwrap_or(FieldValue::Absent)
}

fn prefix(value: &str, len: usize) -> String {
    value.chars().take(len).collect()
}

fn suffix(value: &str, len: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(len)).collect()
}

fn slice(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

fn initial(value: &str) -> String {
    value
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_default()
}

fn opt_initial(value: Option<&str>) -> FieldValue {
    match value {
        Some(value) if !value.is_empty() => FieldValue::Text(initial(value)),
        _ => FieldValue::Absent,
    }
}

fn reversed(value: &str) -> String {
    value.chars().rev().collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

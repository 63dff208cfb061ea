//! Static form schemas
//!
//! Every form starts with the same contact fields; each submission kind
//! appends its own list. Concatenation order is the render order and
//! nothing is de-duplicated.

use serde::Serialize;

use crate::entities::SubmissionKind;

/// Input widget a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Url,
    Number,
    Textarea,
    Select,
}

/// One entry of a form schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl FieldDescriptor {
    const fn new(
        name: &'static str,
        label: &'static str,
        field_type: FieldType,
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            field_type,
            required,
            options: &[],
        }
    }

    const fn select(
        name: &'static str,
        label: &'static str,
        required: bool,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            field_type: FieldType::Select,
            required,
            options,
        }
    }
}

const ZONES: &[&str] = &[
    "northern",
    "southern",
    "eastern",
    "western",
    "central",
    "north_eastern",
];

const BASE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "Full Name", FieldType::Text, true),
    FieldDescriptor::new("email", "Email Address", FieldType::Email, true),
    FieldDescriptor::new("phone", "Phone Number", FieldType::Tel, false),
    FieldDescriptor::new("city", "City", FieldType::Text, false),
    FieldDescriptor::new("linkedin", "LinkedIn Profile", FieldType::Url, false),
];

const VOLUNTEER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select(
        "role",
        "Preferred Role",
        true,
        &["event_management", "content", "design", "social_media", "logistics", "technical"],
    ),
    FieldDescriptor::select(
        "availability",
        "Availability",
        false,
        &["weekdays", "weekends", "both"],
    ),
    FieldDescriptor::new("experience", "Previous Experience", FieldType::Textarea, false),
    FieldDescriptor::new("motivation", "Why do you want to volunteer?", FieldType::Textarea, false),
];

const SPONSOR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("company", "Company Name", FieldType::Text, true),
    FieldDescriptor::new("website", "Company Website", FieldType::Url, false),
    FieldDescriptor::select(
        "sponsorship_tier",
        "Sponsorship Tier",
        true,
        &["platinum", "gold", "silver", "bronze", "community"],
    ),
    FieldDescriptor::new("budget", "Budget (INR)", FieldType::Number, false),
    FieldDescriptor::new("message", "Message", FieldType::Textarea, false),
];

const SPEAKER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("talk_title", "Talk Title", FieldType::Text, true),
    FieldDescriptor::new("talk_abstract", "Abstract", FieldType::Textarea, true),
    FieldDescriptor::new("topic", "Topic", FieldType::Text, false),
    FieldDescriptor::select(
        "experience_level",
        "Speaking Experience",
        false,
        &["first_time", "some", "experienced"],
    ),
    FieldDescriptor::new("previous_talks", "Previous Talks", FieldType::Textarea, false),
];

const COMMUNITY_PARTNER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("community_name", "Community Name", FieldType::Text, true),
    FieldDescriptor::new("community_website", "Community Website", FieldType::Url, false),
    FieldDescriptor::new("member_count", "Member Count", FieldType::Number, false),
    FieldDescriptor::select("zone", "Zone", true, ZONES),
    FieldDescriptor::new("partnership_goals", "Partnership Goals", FieldType::Textarea, false),
];

/// Fields every form starts with
pub fn base_fields() -> &'static [FieldDescriptor] {
    BASE_FIELDS
}

/// Fields specific to a submission kind
pub fn fields_for(kind: SubmissionKind) -> &'static [FieldDescriptor] {
    match kind {
        SubmissionKind::Volunteer => VOLUNTEER_FIELDS,
        SubmissionKind::Sponsor => SPONSOR_FIELDS,
        SubmissionKind::Speaker => SPEAKER_FIELDS,
        SubmissionKind::CommunityPartner => COMMUNITY_PARTNER_FIELDS,
    }
}

/// Full schema for a form: base fields followed by the kind's fields
pub fn form_schema(kind: SubmissionKind) -> Vec<FieldDescriptor> {
    base_fields()
        .iter()
        .chain(fields_for(kind))
        .copied()
        .collect()
}

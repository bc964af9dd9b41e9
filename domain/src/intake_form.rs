//! Intake form model for the pet credential.
//!
//! A [`DraftProfile`] starts empty when the form screen opens and is mutated
//! one field at a time by user input. Nothing on the draft is required; the
//! required-field rule is applied only by [`DraftProfile::submit`], which is
//! the single way to obtain a finalized [`Profile`]. A rejected submission
//! reports every missing group at once and leaves the draft as it was.

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use shared::{
    DayPreset, HairType, Locale, MissingField, PhotoData, ProfileValidation, RequiredGroup,
    ServiceType, TimeSlot, UnknownOption, Weekday,
};
use std::str::FromStr;

use crate::models::Profile;

/// Timestamp layout stamped on finalized profiles (Spanish short date + short time)
pub const CREATED_AT_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Form inputs addressable by their HTML `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    DogName,
    OwnerName,
    Phone,
    Breed,
    HairType,
    Weight,
    Age,
    ServiceType,
    Notes,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::DogName => "dogName",
            FormField::OwnerName => "ownerName",
            FormField::Phone => "phone",
            FormField::Breed => "breed",
            FormField::HairType => "hairType",
            FormField::Weight => "weight",
            FormField::Age => "age",
            FormField::ServiceType => "serviceType",
            FormField::Notes => "notes",
        }
    }
}

impl FromStr for FormField {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dogName" => Ok(FormField::DogName),
            "ownerName" => Ok(FormField::OwnerName),
            "phone" => Ok(FormField::Phone),
            "breed" => Ok(FormField::Breed),
            "hairType" => Ok(FormField::HairType),
            "weight" => Ok(FormField::Weight),
            "age" => Ok(FormField::Age),
            "serviceType" => Ok(FormField::ServiceType),
            "notes" => Ok(FormField::Notes),
            other => Err(UnknownOption {
                kind: "form field",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required fields: {missing:?}")]
    MissingRequired { missing: Vec<MissingField> },
}

impl IntakeError {
    /// Groups the user has to complete, in reporting order
    pub fn missing_groups(&self) -> Vec<RequiredGroup> {
        match self {
            IntakeError::MissingRequired { missing } => {
                ProfileValidation::from_missing(missing.clone()).groups()
            }
        }
    }

    /// The single combined notification shown to the user
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            IntakeError::MissingRequired { .. } => locale.missing_fields_message(),
        }
    }
}

/// A single user edit, so UI events can be queued and applied to the latest draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Field(FormField, String),
    HairType(HairType),
    ServiceType(ServiceType),
    Photo(Option<PhotoData>),
    ToggleDay(Weekday),
    ToggleTimeSlot(TimeSlot),
    DayPreset(DayPreset),
    AddTag(String),
    RemoveTag(String),
}

/// In-progress profile; every field may be empty
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftProfile {
    dog_name: String,
    owner_name: String,
    phone: String,
    breed: String,
    hair_type: HairType,
    weight: String,
    age: String,
    service_type: ServiceType,
    availability_days: Vec<Weekday>,
    availability_times: Vec<TimeSlot>,
    custom_tags: Vec<String>,
    notes: String,
    photo: Option<PhotoData>,
}

impl DraftProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Field(field, value) => self.update_field(field, &value),
            DraftEdit::HairType(hair_type) => self.set_hair_type(hair_type),
            DraftEdit::ServiceType(service_type) => self.set_service_type(service_type),
            DraftEdit::Photo(photo) => self.set_photo(photo),
            DraftEdit::ToggleDay(day) => self.toggle_day(day),
            DraftEdit::ToggleTimeSlot(slot) => self.toggle_time_slot(slot),
            DraftEdit::DayPreset(preset) => self.apply_day_preset(preset),
            DraftEdit::AddTag(text) => {
                self.add_tag(&text);
            }
            DraftEdit::RemoveTag(text) => self.remove_tag(&text),
        }
    }

    /// Sets one field from raw input. Never fails; an unrecognized hair type or
    /// service value keeps the previous selection.
    pub fn update_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::DogName => self.dog_name = value.to_string(),
            FormField::OwnerName => self.owner_name = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
            FormField::Breed => self.breed = value.to_string(),
            FormField::Weight => self.weight = value.to_string(),
            FormField::Age => self.age = value.to_string(),
            FormField::Notes => self.notes = value.to_string(),
            FormField::HairType => match value.parse::<HairType>() {
                Ok(hair_type) => self.hair_type = hair_type,
                Err(e) => warn!("⚠️ Ignoring hair type update: {}", e),
            },
            FormField::ServiceType => match value.parse::<ServiceType>() {
                Ok(service_type) => self.service_type = service_type,
                Err(e) => warn!("⚠️ Ignoring service update: {}", e),
            },
        }
    }

    pub fn set_hair_type(&mut self, hair_type: HairType) {
        self.hair_type = hair_type;
    }

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
    }

    /// Stores the decoded photo. `None` means the picker closed without a file.
    pub fn set_photo(&mut self, photo: Option<PhotoData>) {
        match photo {
            Some(photo) => {
                debug!("📷 Photo set: {:?}", photo);
                self.photo = Some(photo);
            }
            None => debug!("📷 No file selected, keeping current photo"),
        }
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if self.availability_days.contains(&day) {
            self.availability_days.retain(|d| *d != day);
        } else {
            self.availability_days.push(day);
        }
    }

    pub fn toggle_time_slot(&mut self, slot: TimeSlot) {
        if self.availability_times.contains(&slot) {
            self.availability_times.retain(|s| *s != slot);
        } else {
            self.availability_times.push(slot);
        }
    }

    /// Replaces the whole day selection with the preset's days
    pub fn apply_day_preset(&mut self, preset: DayPreset) {
        self.availability_days = preset.days().to_vec();
    }

    /// Appends the trimmed tag. Returns false (and changes nothing) for blank input.
    pub fn add_tag(&mut self, text: &str) -> bool {
        let tag = text.trim();
        if tag.is_empty() {
            return false;
        }
        self.custom_tags.push(tag.to_string());
        true
    }

    /// Removes every tag equal to `text`
    pub fn remove_tag(&mut self, text: &str) {
        self.custom_tags.retain(|tag| tag != text);
    }

    pub fn dog_name(&self) -> &str {
        &self.dog_name
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn hair_type(&self) -> HairType {
        self.hair_type
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn availability_days(&self) -> &[Weekday] {
        &self.availability_days
    }

    pub fn availability_times(&self) -> &[TimeSlot] {
        &self.availability_times
    }

    pub fn custom_tags(&self) -> &[String] {
        &self.custom_tags
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn photo(&self) -> Option<&PhotoData> {
        self.photo.as_ref()
    }

    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::DogName => self.dog_name.clone(),
            FormField::OwnerName => self.owner_name.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Breed => self.breed.clone(),
            FormField::HairType => self.hair_type.key().to_string(),
            FormField::Weight => self.weight.clone(),
            FormField::Age => self.age.clone(),
            FormField::ServiceType => self.service_type.key().to_string(),
            FormField::Notes => self.notes.clone(),
        }
    }

    /// Checks the required-field rule without touching the draft
    pub fn validate(&self) -> ProfileValidation {
        let mut missing = Vec::new();

        if self.photo.is_none() {
            missing.push(MissingField::Photo);
        }
        if self.dog_name.trim().is_empty() {
            missing.push(MissingField::DogName);
        }
        if self.owner_name.trim().is_empty() {
            missing.push(MissingField::OwnerName);
        }
        if self.phone.trim().is_empty() {
            missing.push(MissingField::Phone);
        }
        if self.availability_days.is_empty() {
            missing.push(MissingField::Days);
        }
        if self.availability_times.is_empty() {
            missing.push(MissingField::TimeSlots);
        }

        ProfileValidation::from_missing(missing)
    }

    /// Finalizes the draft, stamped with the current local time
    pub fn submit(&self) -> Result<Profile, IntakeError> {
        self.submit_at(Local::now().naive_local())
    }

    /// Finalizes the draft with an explicit creation time
    pub fn submit_at(&self, now: NaiveDateTime) -> Result<Profile, IntakeError> {
        let validation = self.validate();
        let photo = match (&self.photo, validation.is_valid) {
            (Some(photo), true) => photo.clone(),
            _ => {
                info!("📝 Submission rejected, missing: {:?}", validation.missing);
                return Err(IntakeError::MissingRequired {
                    missing: validation.missing,
                });
            }
        };

        let profile = Profile {
            dog_name: self.dog_name.clone(),
            owner_name: self.owner_name.clone(),
            phone: self.phone.clone(),
            breed: self.breed.clone(),
            hair_type: self.hair_type,
            weight: self.weight.clone(),
            age: self.age.clone(),
            service_type: self.service_type,
            availability_days: self.availability_days.clone(),
            availability_times: self.availability_times.clone(),
            custom_tags: self.custom_tags.clone(),
            notes: self.notes.clone(),
            photo,
            created_at: now.format(CREATED_AT_FORMAT).to_string(),
        };

        info!("✅ Profile finalized for {}", profile.dog_name);
        Ok(profile)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    pub(crate) fn test_photo() -> PhotoData {
        PhotoData::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap()
    }

    pub(crate) fn test_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    pub(crate) fn complete_draft() -> DraftProfile {
        let mut draft = DraftProfile::new();
        draft.update_field(FormField::DogName, "Rex");
        draft.update_field(FormField::OwnerName, "Ana");
        draft.update_field(FormField::Phone, "555-1234");
        draft.set_photo(Some(test_photo()));
        draft.toggle_day("Lunes".parse().unwrap());
        draft.toggle_time_slot("Mediodía".parse().unwrap());
        draft
    }

    #[test]
    fn test_new_draft_has_defaults() {
        let draft = DraftProfile::new();
        assert_eq!(draft.hair_type(), HairType::Short);
        assert_eq!(draft.service_type(), ServiceType::Bath);
        assert!(draft.photo().is_none());
        assert!(draft.availability_days().is_empty());
        assert!(draft.custom_tags().is_empty());
    }

    #[test]
    fn test_update_field_sets_text_and_options() {
        let mut draft = DraftProfile::new();
        draft.update_field("breed".parse().unwrap(), "Caniche");
        draft.update_field(FormField::HairType, "Rizado");
        draft.update_field(FormField::ServiceType, "training");

        assert_eq!(draft.breed(), "Caniche");
        assert_eq!(draft.hair_type(), HairType::Curly);
        assert_eq!(draft.service_type(), ServiceType::Training);
        assert_eq!(draft.field_value(FormField::HairType), "curly");
    }

    #[test]
    fn test_update_field_with_unknown_option_keeps_previous_value() {
        let mut draft = DraftProfile::new();
        draft.update_field(FormField::HairType, "Long");
        draft.update_field(FormField::HairType, "Mohawk");
        assert_eq!(draft.hair_type(), HairType::Long);
    }

    #[test]
    fn test_form_field_names_round_trip() {
        for field in [
            FormField::DogName,
            FormField::OwnerName,
            FormField::Phone,
            FormField::Breed,
            FormField::HairType,
            FormField::Weight,
            FormField::Age,
            FormField::ServiceType,
            FormField::Notes,
        ] {
            assert_eq!(field.name().parse::<FormField>(), Ok(field));
        }
        assert!("photoUrl".parse::<FormField>().is_err());
    }

    #[test]
    fn test_set_photo_none_is_noop() {
        let mut draft = DraftProfile::new();
        draft.set_photo(Some(test_photo()));
        draft.set_photo(None);
        assert_eq!(draft.photo(), Some(&test_photo()));
    }

    #[test]
    fn test_toggle_day_preserves_insertion_order() {
        let mut draft = DraftProfile::new();
        draft.toggle_day(Weekday::Friday);
        draft.toggle_day(Weekday::Monday);
        draft.toggle_day(Weekday::Wednesday);
        draft.toggle_day(Weekday::Monday);

        assert_eq!(draft.availability_days(), &[Weekday::Friday, Weekday::Wednesday]);
    }

    #[test]
    fn test_weekday_preset_replaces_selection() {
        let mut draft = DraftProfile::new();
        draft.toggle_day(Weekday::Sunday);
        draft.apply_day_preset(DayPreset::Weekdays);

        assert_eq!(draft.availability_days().len(), 5);
        assert!(!draft.availability_days().contains(&Weekday::Sunday));

        draft.apply_day_preset(DayPreset::Weekend);
        assert_eq!(draft.availability_days(), &[Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn test_add_tag_trims_and_allows_duplicates() {
        let mut draft = DraftProfile::new();
        assert!(draft.add_tag("  Nudos "));
        assert!(draft.add_tag("Piel sensible"));
        assert!(draft.add_tag("Nudos"));
        assert!(!draft.add_tag("   "));

        assert_eq!(draft.custom_tags(), &["Nudos", "Piel sensible", "Nudos"]);
    }

    #[test]
    fn test_remove_tag_removes_all_matches() {
        let mut draft = DraftProfile::new();
        draft.add_tag("Nudos");
        draft.add_tag("Piel sensible");
        draft.add_tag("Nudos");

        draft.remove_tag("Nudos");
        assert_eq!(draft.custom_tags(), &["Piel sensible"]);

        draft.remove_tag("nudos");
        assert_eq!(draft.custom_tags(), &["Piel sensible"]);
    }

    #[test]
    fn test_submit_complete_draft() {
        let draft = complete_draft();
        let profile = draft.submit_at(test_time()).unwrap();

        assert_eq!(profile.dog_name(), "Rex");
        assert_eq!(profile.owner_name(), "Ana");
        assert_eq!(profile.phone(), "555-1234");
        assert_eq!(profile.availability_days(), &[Weekday::Monday]);
        assert_eq!(profile.availability_times(), &[TimeSlot::Midday]);
        assert_eq!(profile.hair_type(), HairType::Short);
        assert_eq!(profile.service_type(), ServiceType::Bath);
        assert_eq!(profile.created_at(), "07/03/25, 09:05");
    }

    #[test]
    fn test_submit_with_local_clock_stamps_timestamp() {
        let profile = complete_draft().submit().unwrap();
        assert!(!profile.created_at().is_empty());
    }

    #[test]
    fn test_submit_empty_draft_reports_every_group() {
        let draft = DraftProfile::new();
        let err = draft.submit_at(test_time()).unwrap_err();

        assert_eq!(
            err,
            IntakeError::MissingRequired {
                missing: vec![
                    MissingField::Photo,
                    MissingField::DogName,
                    MissingField::OwnerName,
                    MissingField::Phone,
                    MissingField::Days,
                    MissingField::TimeSlots,
                ]
            }
        );
        assert_eq!(
            err.missing_groups(),
            vec![RequiredGroup::Photo, RequiredGroup::Identity, RequiredGroup::Availability]
        );
        assert!(err.user_message(Locale::Es).starts_with("Por favor completa"));
    }

    #[test]
    fn test_apply_edits_in_order() {
        let mut draft = DraftProfile::new();
        for edit in [
            DraftEdit::Field(FormField::DogName, "Luna".to_string()),
            DraftEdit::ServiceType(ServiceType::HolisticTherapy),
            DraftEdit::ToggleDay(Weekday::Sunday),
            DraftEdit::DayPreset(DayPreset::Weekend),
            DraftEdit::ToggleTimeSlot(TimeSlot::Morning),
            DraftEdit::AddTag(" Tímido ".to_string()),
            DraftEdit::AddTag("Nudos".to_string()),
            DraftEdit::RemoveTag("Nudos".to_string()),
            DraftEdit::Photo(None),
        ] {
            draft.apply(edit);
        }

        assert_eq!(draft.dog_name(), "Luna");
        assert_eq!(draft.service_type(), ServiceType::HolisticTherapy);
        assert_eq!(draft.availability_days(), &[Weekday::Saturday, Weekday::Sunday]);
        assert_eq!(draft.availability_times(), &[TimeSlot::Morning]);
        assert_eq!(draft.custom_tags(), &["Tímido"]);
        assert!(draft.photo().is_none());
    }

    #[test]
    fn test_whitespace_identity_fields_count_as_missing() {
        let mut draft = complete_draft();
        draft.update_field(FormField::Phone, "   ");

        let err = draft.submit_at(test_time()).unwrap_err();
        assert_eq!(err.missing_groups(), vec![RequiredGroup::Identity]);
    }

    fn any_day() -> impl Strategy<Value = Weekday> {
        prop::sample::select(Weekday::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_toggle_day_twice_is_identity(
            start in prop::collection::vec(any_day(), 0..10),
            day in any_day(),
        ) {
            let mut draft = DraftProfile::new();
            for d in start {
                draft.toggle_day(d);
            }
            let before = draft.availability_days().to_vec();

            draft.toggle_day(day);
            draft.toggle_day(day);

            // Toggling back in re-appends at the end, so compare as sets when the day was present
            let mut after = draft.availability_days().to_vec();
            let mut expected = before.clone();
            if before.contains(&day) {
                after.sort_by_key(|d| d.key());
                expected.sort_by_key(|d| d.key());
            }
            prop_assert_eq!(after, expected);
        }

        #[test]
        fn prop_days_never_contain_duplicates(toggles in prop::collection::vec(any_day(), 0..30)) {
            let mut draft = DraftProfile::new();
            for d in toggles {
                draft.toggle_day(d);
            }
            let days = draft.availability_days();
            for (i, day) in days.iter().enumerate() {
                prop_assert!(!days[i + 1..].contains(day));
            }
        }

        #[test]
        fn prop_preset_overwrites_previous_days(
            toggles in prop::collection::vec(any_day(), 0..10),
            preset in prop::sample::select(DayPreset::ALL.to_vec()),
        ) {
            let mut draft = DraftProfile::new();
            for d in toggles {
                draft.toggle_day(d);
            }
            draft.apply_day_preset(preset);
            prop_assert_eq!(draft.availability_days(), preset.days());
        }

        #[test]
        fn prop_incomplete_drafts_are_rejected_unchanged(
            has_photo: bool,
            has_name: bool,
            has_owner: bool,
            has_phone: bool,
            has_day: bool,
            has_time: bool,
        ) {
            prop_assume!(!(has_photo && has_name && has_owner && has_phone && has_day && has_time));

            let mut draft = DraftProfile::new();
            if has_photo { draft.set_photo(Some(test_photo())); }
            if has_name { draft.update_field(FormField::DogName, "Rex"); }
            if has_owner { draft.update_field(FormField::OwnerName, "Ana"); }
            if has_phone { draft.update_field(FormField::Phone, "555-1234"); }
            if has_day { draft.toggle_day(Weekday::Tuesday); }
            if has_time { draft.toggle_time_slot(TimeSlot::Morning); }
            let before = draft.clone();

            prop_assert!(draft.submit_at(test_time()).is_err());
            prop_assert_eq!(draft, before);
        }
    }
}

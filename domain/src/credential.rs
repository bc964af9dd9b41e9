//! Display model for the pet ID card.
//!
//! Turns a finalized [`Profile`] into the strings the card shows. Styling and
//! layout belong to the UI; everything here is plain text so it can be
//! checked without a browser.

use serde::Serialize;
use shared::{Locale, TimeSlot, Weekday, BUSINESS_NAME, BUSINESS_TAGLINE};

use crate::models::Profile;

/// Above this many days the card shows a single label instead of the list
pub const MAX_LISTED_DAYS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialView {
    pub business_name: &'static str,
    pub tagline: &'static str,
    pub photo_url: String,
    /// Dog name, upper-cased
    pub display_name: String,
    pub breed_badge: String,
    pub service_badge: &'static str,
    /// Age, weight, hair type, owner first name
    pub stats: [StatCell; 4],
    pub tags: Vec<String>,
    pub phone: String,
    pub availability: String,
    pub notes: Option<String>,
    pub footer: String,
}

fn stat_labels(locale: Locale) -> [&'static str; 4] {
    match locale {
        Locale::Es => ["Edad", "Peso", "Pelo", "Dueño"],
        Locale::En => ["Age", "Weight", "Hair", "Owner"],
    }
}

fn or_placeholder(value: &str, locale: Locale) -> String {
    if value.is_empty() {
        locale.empty_stat_placeholder().to_string()
    } else {
        value.to_string()
    }
}

impl CredentialView {
    pub fn from_profile(profile: &Profile, locale: Locale) -> Self {
        let [age, weight, hair, owner] = stat_labels(locale);
        let breed_badge = if profile.breed().is_empty() {
            locale.mixed_breed_label().to_string()
        } else {
            profile.breed().to_string()
        };
        let notes = Some(profile.notes())
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        Self {
            business_name: BUSINESS_NAME,
            tagline: BUSINESS_TAGLINE,
            photo_url: profile.photo().as_data_url().to_string(),
            display_name: profile.dog_name().to_uppercase(),
            breed_badge,
            service_badge: profile.service_type().label(locale),
            stats: [
                StatCell {
                    label: age,
                    value: or_placeholder(profile.age(), locale),
                },
                StatCell {
                    label: weight,
                    value: or_placeholder(profile.weight(), locale),
                },
                StatCell {
                    label: hair,
                    value: profile.hair_type().label(locale).to_string(),
                },
                StatCell {
                    label: owner,
                    value: profile.owner_first_name().to_string(),
                },
            ],
            tags: profile.custom_tags().to_vec(),
            phone: profile.phone().to_string(),
            availability: summarize_availability(
                profile.availability_days(),
                profile.availability_times(),
                locale,
            ),
            notes,
            footer: format!("{}: {}", locale.created_at_caption(), profile.created_at()),
        }
    }
}

/// Day part of the availability line.
///
/// More than [`MAX_LISTED_DAYS`] days collapse to the locale's "weekdays"
/// label whatever the actual days are; otherwise each day is abbreviated in
/// selection order.
pub fn summarize_days(days: &[Weekday], locale: Locale) -> String {
    if days.len() > MAX_LISTED_DAYS {
        return locale.many_days_label().to_string();
    }
    days.iter()
        .map(|day| day.abbreviation(locale))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"<days> - <times>"`, or empty when no day is selected
pub fn summarize_availability(days: &[Weekday], times: &[TimeSlot], locale: Locale) -> String {
    if days.is_empty() {
        return String::new();
    }
    let times = times
        .iter()
        .map(|slot| slot.label(locale))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} - {}", summarize_days(days, locale), times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake_form::tests::{complete_draft, test_time};
    use crate::intake_form::FormField;
    use shared::{DayPreset, HairType, ServiceType};

    #[test]
    fn test_five_weekdays_collapse_to_label() {
        let days = DayPreset::Weekdays.days();
        assert_eq!(summarize_days(days, Locale::En), "Weekdays");
        assert_eq!(summarize_days(days, Locale::Es), "Días de semana");
    }

    #[test]
    fn test_two_days_are_abbreviated() {
        let days = [Weekday::Monday, Weekday::Wednesday];
        assert_eq!(summarize_days(&days, Locale::En), "Mon, Wed");
        assert_eq!(summarize_days(&days, Locale::Es), "Lun, Mié");
    }

    #[test]
    fn test_days_keep_selection_order() {
        let days = [Weekday::Friday, Weekday::Monday];
        assert_eq!(summarize_days(&days, Locale::En), "Fri, Mon");
    }

    #[test]
    fn test_any_five_days_collapse() {
        let days = [
            Weekday::Saturday,
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
        ];
        assert_eq!(summarize_days(&days, Locale::En), "Weekdays");
        assert_eq!(summarize_days(&days[..4], Locale::En), "Sat, Sun, Mon, Tue");
    }

    #[test]
    fn test_availability_line() {
        let line = summarize_availability(
            &[Weekday::Monday],
            &[TimeSlot::Afternoon, TimeSlot::Morning],
            Locale::Es,
        );
        assert_eq!(line, "Lun - Por la tarde, Por la mañana");
        assert_eq!(summarize_availability(&[], &[TimeSlot::Midday], Locale::Es), "");
    }

    #[test]
    fn test_credential_view_from_minimal_profile() {
        let profile = complete_draft().submit_at(test_time()).unwrap();
        let view = CredentialView::from_profile(&profile, Locale::Es);

        assert_eq!(view.business_name, "La Barberie de los Perritos");
        assert_eq!(view.display_name, "REX");
        assert_eq!(view.breed_badge, "Mestizo");
        assert_eq!(view.service_badge, "Baño");
        assert_eq!(view.stats[0].value, "-");
        assert_eq!(view.stats[1].value, "-");
        assert_eq!(view.stats[2].value, "Corto");
        assert_eq!(view.stats[3].value, "Ana");
        assert_eq!(view.availability, "Lun - Mediodía");
        assert_eq!(view.notes, None);
        assert!(view.tags.is_empty());
        assert_eq!(view.footer, "ID Creado: 07/03/25, 09:05");
        assert!(view.photo_url.starts_with("data:image/png"));
    }

    #[test]
    fn test_credential_view_from_full_profile() {
        let mut draft = complete_draft();
        draft.update_field(FormField::OwnerName, "Ana María López");
        draft.update_field(FormField::DogName, "Sir Rex");
        draft.update_field(FormField::Breed, "Schnauzer");
        draft.update_field(FormField::Age, "3 años");
        draft.update_field(FormField::Weight, "8");
        draft.update_field(FormField::Notes, "Alergia al pollo");
        draft.set_hair_type(HairType::Wire);
        draft.set_service_type(ServiceType::BathAndCut);
        draft.add_tag("Nudos");
        let profile = draft.submit_at(test_time()).unwrap();

        let view = CredentialView::from_profile(&profile, Locale::En);
        assert_eq!(view.display_name, "SIR REX");
        assert_eq!(view.breed_badge, "Schnauzer");
        assert_eq!(view.service_badge, "Bath + Cut");
        assert_eq!(view.stats[0].label, "Age");
        assert_eq!(view.stats[0].value, "3 años");
        assert_eq!(view.stats[2].value, "Wire");
        assert_eq!(view.stats[3].value, "Ana");
        assert_eq!(view.tags, vec!["Nudos".to_string()]);
        assert_eq!(view.notes.as_deref(), Some("Alergia al pollo"));
        assert_eq!(view.footer, "ID Created: 07/03/25, 09:05");
    }

    #[test]
    fn test_credential_view_serializes_for_debugging() {
        let profile = complete_draft().submit_at(test_time()).unwrap();
        let json = serde_json::to_value(CredentialView::from_profile(&profile, Locale::Es)).unwrap();

        assert_eq!(json["display_name"], "REX");
        assert_eq!(json["stats"][3]["label"], "Dueño");
        assert!(json["notes"].is_null());
    }
}

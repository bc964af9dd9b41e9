//! Screen state machine: welcome, intake form, credential display.
//!
//! Exactly one screen is active. The draft only exists while the form is
//! open and the finalized profile only while the credential is shown, so
//! leaving either screen drops its data.

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use std::fmt;

use crate::intake_form::{DraftProfile, IntakeError};
use crate::models::Profile;

/// Which screen is active, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    FormEntry,
    CredentialDisplay,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Welcome => "welcome",
            Screen::FormEntry => "form",
            Screen::CredentialDisplay => "credential",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppView {
    Welcome,
    FormEntry { draft: DraftProfile },
    CredentialDisplay { profile: Profile },
}

impl AppView {
    pub fn screen(&self) -> Screen {
        match self {
            AppView::Welcome => Screen::Welcome,
            AppView::FormEntry { .. } => Screen::FormEntry,
            AppView::CredentialDisplay { .. } => Screen::CredentialDisplay,
        }
    }
}

/// User actions that move between screens
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    StartCreation,
    Cancel,
    FormSubmitted(Profile),
    Back,
    CreateNew,
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            ViewEvent::StartCreation => "start creation",
            ViewEvent::Cancel => "cancel",
            ViewEvent::FormSubmitted(_) => "form submitted",
            ViewEvent::Back => "back",
            ViewEvent::CreateNew => "create new",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("'{event}' is not allowed on the {screen} screen")]
    NotAllowed { screen: Screen, event: &'static str },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
}

/// Next view for `event` on `view`; invalid pairs are rejected
pub fn transition(view: &AppView, event: ViewEvent) -> Result<AppView, TransitionError> {
    match (view, event) {
        (AppView::Welcome, ViewEvent::StartCreation) => Ok(AppView::FormEntry {
            draft: DraftProfile::new(),
        }),
        (AppView::FormEntry { .. }, ViewEvent::Cancel) => Ok(AppView::Welcome),
        (AppView::FormEntry { .. }, ViewEvent::FormSubmitted(profile)) => {
            Ok(AppView::CredentialDisplay { profile })
        }
        (AppView::CredentialDisplay { .. }, ViewEvent::Back) => Ok(AppView::Welcome),
        (AppView::CredentialDisplay { .. }, ViewEvent::CreateNew) => Ok(AppView::FormEntry {
            draft: DraftProfile::new(),
        }),
        (view, event) => Err(TransitionError::NotAllowed {
            screen: view.screen(),
            event: event.name(),
        }),
    }
}

/// Owns the active view and applies transitions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewController {
    view: AppView,
}

impl Default for AppView {
    fn default() -> Self {
        AppView::Welcome
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &AppView {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn dispatch(&mut self, event: ViewEvent) -> Result<(), TransitionError> {
        let from = self.view.screen();
        match transition(&self.view, event) {
            Ok(next) => {
                debug!("🧭 {} -> {}", from, next.screen());
                self.view = next;
                Ok(())
            }
            Err(e) => {
                warn!("🧭 Rejected transition: {}", e);
                Err(e)
            }
        }
    }

    pub fn start_creation(&mut self) -> Result<(), TransitionError> {
        self.dispatch(ViewEvent::StartCreation)
    }

    /// Leaves the form; the draft is discarded
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        self.dispatch(ViewEvent::Cancel)
    }

    /// Leaves the credential; the profile is discarded
    pub fn back(&mut self) -> Result<(), TransitionError> {
        self.dispatch(ViewEvent::Back)
    }

    /// Drops the current profile and opens a fresh form
    pub fn create_new(&mut self) -> Result<(), TransitionError> {
        self.dispatch(ViewEvent::CreateNew)
    }

    pub fn draft(&self) -> Option<&DraftProfile> {
        match &self.view {
            AppView::FormEntry { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut DraftProfile> {
        match &mut self.view {
            AppView::FormEntry { draft } => Some(draft),
            _ => None,
        }
    }

    /// Applies `edit` to the open draft. Returns false when no form is open.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut DraftProfile)) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                edit(draft);
                true
            }
            None => {
                warn!("📝 Draft edit ignored on the {} screen", self.screen());
                false
            }
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.view {
            AppView::CredentialDisplay { profile } => Some(profile),
            _ => None,
        }
    }

    /// Finalizes the open draft and shows the credential
    pub fn submit(&mut self) -> Result<&Profile, SubmitError> {
        self.submit_at(Local::now().naive_local())
    }

    pub fn submit_at(&mut self, now: NaiveDateTime) -> Result<&Profile, SubmitError> {
        let draft = self.draft().ok_or(TransitionError::NotAllowed {
            screen: self.screen(),
            event: "form submitted",
        })?;
        let profile = draft.submit_at(now)?;

        info!("🪪 Showing credential for {}", profile.dog_name());
        self.dispatch(ViewEvent::FormSubmitted(profile))?;
        self.profile().ok_or_else(|| {
            SubmitError::Transition(TransitionError::NotAllowed {
                screen: Screen::CredentialDisplay,
                event: "form submitted",
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake_form::tests::{complete_draft, test_photo, test_time};
    use crate::intake_form::FormField;
    use shared::{MissingField, TimeSlot, Weekday};

    fn controller_on_credential() -> ViewController {
        let mut controller = ViewController::new();
        controller.start_creation().unwrap();
        *controller.draft_mut().unwrap() = complete_draft();
        controller.submit_at(test_time()).unwrap();
        controller
    }

    #[test]
    fn test_starts_on_welcome() {
        let controller = ViewController::new();
        assert_eq!(controller.screen(), Screen::Welcome);
        assert!(controller.draft().is_none());
        assert!(controller.profile().is_none());
    }

    #[test]
    fn test_start_creation_opens_empty_draft() {
        let mut controller = ViewController::new();
        controller.start_creation().unwrap();

        assert_eq!(controller.screen(), Screen::FormEntry);
        assert_eq!(controller.draft(), Some(&DraftProfile::new()));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut controller = ViewController::new();
        controller.start_creation().unwrap();
        controller.update_draft(|draft| draft.update_field(FormField::DogName, "Rex"));

        controller.cancel().unwrap();
        assert_eq!(controller.screen(), Screen::Welcome);

        controller.start_creation().unwrap();
        assert_eq!(controller.draft().unwrap().dog_name(), "");
    }

    #[test]
    fn test_end_to_end_rex() {
        let mut controller = ViewController::new();
        controller.start_creation().unwrap();

        assert!(controller.update_draft(|draft| {
            draft.update_field(FormField::DogName, "Rex");
            draft.update_field(FormField::OwnerName, "Ana");
            draft.update_field(FormField::Phone, "555-1234");
            draft.set_photo(Some(test_photo()));
            draft.toggle_day("Lunes".parse::<Weekday>().unwrap());
            draft.toggle_time_slot("Mediodía".parse::<TimeSlot>().unwrap());
        }));

        let profile = controller.submit().unwrap().clone();
        assert_eq!(profile.dog_name(), "Rex");
        assert!(!profile.created_at().is_empty());
        assert_eq!(controller.screen(), Screen::CredentialDisplay);
        assert_eq!(controller.profile(), Some(&profile));
    }

    #[test]
    fn test_failed_submit_stays_on_form_with_draft_intact() {
        let mut controller = ViewController::new();
        controller.start_creation().unwrap();
        controller.update_draft(|draft| draft.update_field(FormField::DogName, "Rex"));
        let before = controller.clone();

        let err = controller.submit_at(test_time()).unwrap_err();
        match err {
            SubmitError::Intake(IntakeError::MissingRequired { missing }) => {
                assert!(missing.contains(&MissingField::Photo));
                assert!(!missing.contains(&MissingField::DogName));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(controller, before);
    }

    #[test]
    fn test_back_returns_to_welcome_and_drops_profile() {
        let mut controller = controller_on_credential();
        controller.back().unwrap();

        assert_eq!(controller.screen(), Screen::Welcome);
        assert!(controller.profile().is_none());
    }

    #[test]
    fn test_create_new_opens_fresh_draft() {
        let mut controller = controller_on_credential();
        controller.create_new().unwrap();

        assert_eq!(controller.screen(), Screen::FormEntry);
        assert_eq!(controller.draft(), Some(&DraftProfile::new()));
        assert!(controller.profile().is_none());
    }

    #[test]
    fn test_invalid_events_leave_state_untouched() {
        let mut controller = ViewController::new();
        assert_eq!(
            controller.back(),
            Err(TransitionError::NotAllowed {
                screen: Screen::Welcome,
                event: "back"
            })
        );
        assert!(controller.cancel().is_err());
        assert!(controller.create_new().is_err());
        assert_eq!(controller.screen(), Screen::Welcome);

        let mut controller = controller_on_credential();
        let before = controller.clone();
        assert!(controller.start_creation().is_err());
        assert!(controller.cancel().is_err());
        assert_eq!(controller, before);
    }

    #[test]
    fn test_submit_outside_form_is_rejected() {
        let mut controller = ViewController::new();
        let err = controller.submit_at(test_time()).unwrap_err();
        assert!(matches!(err, SubmitError::Transition(_)));
        assert!(!controller.update_draft(|draft| {
            draft.add_tag("Nudos");
        }));
    }

    #[test]
    fn test_transition_function_table() {
        let profile = complete_draft().submit_at(test_time()).unwrap();
        let form = AppView::FormEntry {
            draft: DraftProfile::new(),
        };
        let card = AppView::CredentialDisplay {
            profile: profile.clone(),
        };

        assert_eq!(transition(&AppView::Welcome, ViewEvent::StartCreation), Ok(form.clone()));
        assert_eq!(transition(&form, ViewEvent::Cancel), Ok(AppView::Welcome));
        assert_eq!(
            transition(&form, ViewEvent::FormSubmitted(profile.clone())),
            Ok(card.clone())
        );
        assert_eq!(transition(&card, ViewEvent::Back), Ok(AppView::Welcome));
        assert_eq!(transition(&card, ViewEvent::CreateNew), Ok(form.clone()));

        assert!(transition(&AppView::Welcome, ViewEvent::FormSubmitted(profile)).is_err());
        assert!(transition(&form, ViewEvent::StartCreation).is_err());
        assert!(transition(&card, ViewEvent::Cancel).is_err());
    }
}

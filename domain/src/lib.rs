//! # Barberie Domain
//!
//! Business logic for the pet credential app, independent of any UI toolkit.
//!
//! ## Module Organization
//!
//! - **view_controller**: which screen is active and the transitions between them
//! - **intake_form**: the draft profile, field edits and the required-field rule
//! - **credential**: text shown on the ID card, including the availability summary
//! - **exporter**: render-and-save flow for the card image, one export at a time
//! - **assistant**: chat transcript and the single-flight call to the text service
//! - **models**: the finalized [`Profile`]
//!
//! The rasterizer, file saver and text service are traits so the browser
//! implementations can be swapped for stubs in tests.

pub mod assistant;
pub mod credential;
pub mod exporter;
pub mod intake_form;
pub mod models;
pub mod view_controller;

pub use assistant::{
    reply_or_fallback, AssistantSession, CollaboratorError, OutgoingTurn, SendRejected,
    TextCollaborator,
};
pub use credential::{summarize_availability, summarize_days, CredentialView, StatCell};
pub use exporter::{export_file_name, ExportError, Exporter, FileSaver, RasterImage, Rasterizer};
pub use intake_form::{DraftEdit, DraftProfile, FormField, IntakeError};
pub use models::Profile;
pub use view_controller::{
    transition, AppView, Screen, SubmitError, TransitionError, ViewController, ViewEvent,
};

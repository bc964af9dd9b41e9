//! Credential export: render the card region to an image and save it.
//!
//! Both steps are delegated to collaborators so the flow can run without a
//! browser. Only one export runs at a time per [`Exporter`]; failures leave
//! the displayed credential and view state alone.

use async_trait::async_trait;
use log::{error, info, warn};
use shared::{ExportConfig, Locale, RasterizeOptions};
use std::cell::Cell;

use crate::models::Profile;

/// Encoded raster image, as a `data:image/png;base64,...` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub data_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    InProgress,
    #[error("image renderer is not available")]
    RendererUnavailable,
    #[error("rendering failed: {0}")]
    RenderFailed(String),
    #[error("saving the image failed: {0}")]
    SaveFailed(String),
}

impl ExportError {
    /// Dismissable notification text, including the manual-capture fallback
    pub fn user_message(&self, locale: Locale) -> &'static str {
        locale.export_failed_message()
    }
}

/// Renders a region of the page into image bytes
#[async_trait(?Send)]
pub trait Rasterizer {
    type Region: ?Sized;

    async fn capture(
        &self,
        region: &Self::Region,
        options: &RasterizeOptions,
    ) -> Result<RasterImage, ExportError>;
}

/// Hands a finished image to the platform's "save as file" action
pub trait FileSaver {
    fn save(&self, file_name: &str, image: &RasterImage) -> Result<(), ExportError>;
}

/// `Credencial_<name>.png`, with each whitespace run in the name replaced by `_`
pub fn export_file_name(dog_name: &str, config: &ExportConfig) -> String {
    let mut stem = String::with_capacity(dog_name.len());
    let mut in_whitespace = false;
    for c in dog_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }
    format!("{}{}.{}", config.file_prefix, stem, config.file_extension)
}

struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct Exporter<R, S> {
    rasterizer: R,
    saver: S,
    config: ExportConfig,
    in_flight: Cell<bool>,
}

impl<R, S> Exporter<R, S>
where
    R: Rasterizer,
    S: FileSaver,
{
    pub fn new(rasterizer: R, saver: S, config: ExportConfig) -> Self {
        Self {
            rasterizer,
            saver,
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.in_flight.get()
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Renders `region` and saves it under a name derived from the dog's name.
    /// Returns the file name on success.
    pub async fn export(&self, region: &R::Region, profile: &Profile) -> Result<String, ExportError> {
        if self.in_flight.replace(true) {
            warn!("⏳ Export already running, ignoring request");
            return Err(ExportError::InProgress);
        }
        let _in_flight = InFlight(&self.in_flight);

        let file_name = export_file_name(profile.dog_name(), &self.config);
        info!("🖼️ Exporting credential as {}", file_name);

        let image = self
            .rasterizer
            .capture(region, &self.config.rasterize)
            .await
            .map_err(|e| {
                error!("Error generating image: {}", e);
                e
            })?;
        self.saver.save(&file_name, &image).map_err(|e| {
            error!("Error saving image: {}", e);
            e
        })?;

        info!("✅ Credential saved as {}", file_name);
        Ok(file_name)
    }
}

use anyhow::{anyhow, Context};
use gloo::file::{futures::read_as_data_url, File};
use shared::PhotoData;
use web_sys::HtmlInputElement;

/// First file chosen in a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0).map(File::from)
}

/// Reads an image file into an inline data URL
pub async fn read_photo(file: File) -> anyhow::Result<PhotoData> {
    let name = file.name();
    let data_url = read_as_data_url(&file)
        .await
        .with_context(|| format!("Failed to read {}", name))?;
    PhotoData::from_data_url(data_url).map_err(|e| anyhow!("{}: {}", name, e))
}

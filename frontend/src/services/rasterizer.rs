use anyhow::{anyhow, Context};
use async_trait::async_trait;
use barberie_domain::{ExportError, FileSaver, RasterImage, Rasterizer};
use shared::RasterizeOptions;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    // Loaded from a <script> tag in index.html
    #[wasm_bindgen(catch, js_namespace = window, js_name = html2canvas)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, value)
}

/// Rasterizes a DOM element through the page's `html2canvas` global
#[derive(Clone, Default)]
pub struct Html2Canvas;

impl Html2Canvas {
    pub fn is_available() -> bool {
        web_sys::window()
            .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("html2canvas")).unwrap_or(false))
            .unwrap_or(false)
    }

    async fn render(element: &HtmlElement, options: &RasterizeOptions) -> anyhow::Result<String> {
        let options_json = serde_json::to_string(options).context("Failed to serialize options")?;
        let options = js_sys::JSON::parse(&options_json).map_err(|e| js_error("Invalid options", e))?;

        let promise = html2canvas(element, &options).map_err(|e| js_error("html2canvas threw", e))?;
        let canvas = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("html2canvas rejected", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|e| js_error("html2canvas did not return a canvas", e.into()))?;

        canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| js_error("Failed to encode canvas", e))
    }
}

#[async_trait(?Send)]
impl Rasterizer for Html2Canvas {
    type Region = HtmlElement;

    async fn capture(
        &self,
        region: &HtmlElement,
        options: &RasterizeOptions,
    ) -> Result<RasterImage, ExportError> {
        if !Self::is_available() {
            return Err(ExportError::RendererUnavailable);
        }
        Self::render(region, options)
            .await
            .map(|data_url| RasterImage { data_url })
            .map_err(|e| ExportError::RenderFailed(e.to_string()))
    }
}

/// Saves images by clicking a temporary `<a download>` link
#[derive(Clone, Default)]
pub struct AnchorDownload;

impl AnchorDownload {
    fn trigger(file_name: &str, href: &str) -> anyhow::Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .context("No document available")?;
        let link = document
            .create_element("a")
            .map_err(|e| js_error("Failed to create link", e))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|e| js_error("Created element is not a link", e.into()))?;
        link.set_href(href);
        link.set_download(file_name);
        link.click();
        Ok(())
    }
}

impl FileSaver for AnchorDownload {
    fn save(&self, file_name: &str, image: &RasterImage) -> Result<(), ExportError> {
        Self::trigger(file_name, &image.data_url).map_err(|e| ExportError::SaveFailed(e.to_string()))
    }
}

use yew::prelude::*;
use shared::{ExportConfig, Locale};
use barberie_domain::{ExportError, Exporter, Profile};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use crate::services::logging::Logger;
use crate::services::rasterizer::{AnchorDownload, Html2Canvas};

#[derive(Clone, PartialEq)]
pub struct CredentialExportState {
    pub exporting: bool,
    pub saved: bool,
    pub error: Option<String>,
}

pub struct UseCredentialExportResult {
    pub state: CredentialExportState,
    pub export: Callback<Profile>,
    pub dismiss_error: Callback<()>,
}

/// Exports the element behind `card_ref` as a PNG download
#[hook]
pub fn use_credential_export(
    card_ref: NodeRef,
    config: &ExportConfig,
    locale: Locale,
) -> UseCredentialExportResult {
    let exporter = {
        let config = config.clone();
        use_memo((), move |_| Exporter::new(Html2Canvas, AnchorDownload, config))
    };
    let exporting = use_state(|| false);
    let saved = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let export = {
        let exporter = exporter.clone();
        let exporting = exporting.clone();
        let saved = saved.clone();
        let error = error.clone();

        use_callback(card_ref, move |profile: Profile, card_ref| {
            if exporter.is_exporting() {
                return;
            }
            let Some(element) = card_ref.cast::<HtmlElement>() else {
                Logger::error_with_component("export", "Credential element is not mounted");
                error.set(Some(locale.export_failed_message().to_string()));
                return;
            };

            let exporter = exporter.clone();
            let exporting = exporting.clone();
            let saved = saved.clone();
            let error = error.clone();
            spawn_local(async move {
                exporting.set(true);
                error.set(None);

                match exporter.export(&element, &profile).await {
                    Ok(file_name) => {
                        Logger::info_with_component("export", &format!("Downloaded {}", file_name));
                        saved.set(true);
                        let saved = saved.clone();
                        Timeout::new(exporter.config().success_display_ms, move || saved.set(false))
                            .forget();
                    }
                    // Another export owns the busy flag
                    Err(ExportError::InProgress) => return,
                    Err(e) => error.set(Some(e.user_message(locale).to_string())),
                }
                exporting.set(false);
            });
        })
    };

    let dismiss_error = {
        let error = error.clone();
        use_callback((), move |_: (), _| error.set(None))
    };

    let state = CredentialExportState {
        exporting: *exporting,
        saved: *saved,
        error: (*error).clone(),
    };

    UseCredentialExportResult {
        state,
        export,
        dismiss_error,
    }
}

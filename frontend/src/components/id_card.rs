use yew::prelude::*;
use shared::{ExportConfig, Locale};
use barberie_domain::{CredentialView, Profile};
use crate::hooks::use_credential_export::use_credential_export;

#[derive(Properties, PartialEq)]
pub struct IdCardProps {
    pub profile: Profile,
    pub locale: Locale,
    pub export: ExportConfig,
    pub on_back: Callback<()>,
}

#[function_component(IdCard)]
pub fn id_card(props: &IdCardProps) -> Html {
    let card_ref = use_node_ref();
    let export = use_credential_export(card_ref.clone(), &props.export, props.locale);
    let view = CredentialView::from_profile(&props.profile, props.locale);

    let on_download = {
        let profile = props.profile.clone();
        let export = export.export.clone();
        Callback::from(move |_| export.emit(profile.clone()))
    };
    let on_back = props.on_back.clone();
    let dismiss_error = export.dismiss_error.clone();

    let download_label = if export.state.exporting {
        "⏳ Generando..."
    } else if export.state.saved {
        "✅ Guardado"
    } else {
        "⬇️ Descargar ID"
    };

    html! {
        <section class="credential-section">
            {if let Some(error) = export.state.error.as_ref() {
                html! {
                    <div class="form-message error">
                        <span>{error}</span>
                        <button class="btn-close" onclick={Callback::from(move |_| dismiss_error.emit(()))}>{"×"}</button>
                    </div>
                }
            } else { html! {} }}

            <div class="id-card" ref={card_ref}>
                <div class="id-card-header">
                    <strong>{view.business_name}</strong>
                    <small>{view.tagline}</small>
                </div>

                <div class="id-card-body">
                    <img class="id-card-photo" src={view.photo_url.clone()} alt={view.display_name.clone()} />
                    <div class="id-card-identity">
                        <h2>{&view.display_name}</h2>
                        <div class="badges">
                            <span class="badge breed">{&view.breed_badge}</span>
                            <span class="badge service">{view.service_badge}</span>
                        </div>
                    </div>
                </div>

                <div class="stat-grid">
                    {for view.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <span class="stat-label">{stat.label}</span>
                            <span class="stat-value">{&stat.value}</span>
                        </div>
                    })}
                </div>

                {if !view.tags.is_empty() {
                    html! {
                        <div class="chip-row tags">
                            {for view.tags.iter().map(|tag| html! { <span class="chip tag">{tag}</span> })}
                        </div>
                    }
                } else { html! {} }}

                <div class="id-card-contact">
                    <div>{"📞 "}{&view.phone}</div>
                    <div>{"📅 "}{&view.availability}</div>
                </div>

                {if let Some(notes) = view.notes.as_ref() {
                    html! { <p class="id-card-notes">{notes}</p> }
                } else { html! {} }}

                <div class="id-card-footer">{&view.footer}</div>
            </div>

            <div class="credential-actions">
                <button class="btn btn-secondary" onclick={Callback::from(move |_| on_back.emit(()))}>
                    {"← Volver"}
                </button>
                <button
                    class="btn btn-primary"
                    disabled={export.state.exporting}
                    onclick={on_download}
                >
                    {download_label}
                </button>
            </div>
        </section>
    }
}

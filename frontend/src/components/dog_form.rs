use yew::prelude::*;
use shared::{HairType, Locale, ServiceType};
use barberie_domain::{DraftEdit, DraftProfile, FormField};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use super::forms::availability_picker::AvailabilityPicker;
use super::forms::tag_editor::TagEditor;
use crate::services::logging::Logger;
use crate::services::photo::{read_photo, selected_file};

#[derive(Properties, PartialEq)]
pub struct DogFormProps {
    pub draft: DraftProfile,
    pub locale: Locale,
    pub on_edit: Callback<DraftEdit>,
    pub on_cancel: Callback<()>,
    /// Only emitted once the draft passes validation
    pub on_submit: Callback<()>,
}

// Inputs carry the field's name attribute so one handler serves all of them
fn field_edit(name: &str, value: String) -> Option<DraftEdit> {
    match name.parse::<FormField>() {
        Ok(field) => Some(DraftEdit::Field(field, value)),
        Err(e) => {
            Logger::warn_with_component("form", &format!("Unknown input: {}", e));
            None
        }
    }
}

#[function_component(DogForm)]
pub fn dog_form(props: &DogFormProps) -> Html {
    let show_details = use_state(|| false);
    let draft = &props.draft;

    let on_text_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Some(edit) = field_edit(&target.name(), target.value()) {
                on_edit.emit(edit);
            }
        })
    };

    let on_notes_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            if let Some(edit) = field_edit(&target.name(), target.value()) {
                on_edit.emit(edit);
            }
        })
    };

    let on_hair_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Some(edit) = field_edit(&target.name(), target.value()) {
                on_edit.emit(edit);
            }
        })
    };

    let on_photo_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                on_edit.emit(DraftEdit::Photo(None));
                return;
            };
            let on_edit = on_edit.clone();
            spawn_local(async move {
                match read_photo(file).await {
                    Ok(photo) => on_edit.emit(DraftEdit::Photo(Some(photo))),
                    Err(e) => Logger::error_with_component("form", &format!("Could not load photo: {:#}", e)),
                }
            });
        })
    };

    let on_submit = {
        let draft = props.draft.clone();
        let locale = props.locale;
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.validate().is_valid {
                on_submit.emit(());
            } else {
                gloo::dialogs::alert(locale.missing_fields_message());
            }
        })
    };

    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_| show_details.set(!*show_details))
    };

    let on_cancel = props.on_cancel.clone();
    let on_edit = props.on_edit.clone();

    html! {
        <section class="form-section">
            <h2>{"🐾 Nueva Credencial"}</h2>
            <form class="dog-form" onsubmit={on_submit}>
                <div class="photo-upload">
                    <label for="photo" class="photo-drop">
                        {if let Some(photo) = draft.photo() {
                            html! { <img src={photo.as_data_url().to_string()} alt="Foto de la mascota" /> }
                        } else {
                            html! { <span>{"📷 Subir foto *"}</span> }
                        }}
                    </label>
                    <input type="file" id="photo" accept="image/*" hidden={true} onchange={on_photo_change} />
                </div>

                <div class="form-group">
                    <label for="dogName">{"Nombre del perro *"}</label>
                    <input type="text" id="dogName" name="dogName" placeholder="Rex"
                        value={draft.dog_name().to_string()} oninput={on_text_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="ownerName">{"Nombre del dueño *"}</label>
                    <input type="text" id="ownerName" name="ownerName" placeholder="Ana Gómez"
                        value={draft.owner_name().to_string()} oninput={on_text_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="phone">{"Teléfono *"}</label>
                    <input type="tel" id="phone" name="phone" placeholder="555-1234"
                        value={draft.phone().to_string()} oninput={on_text_input.clone()} />
                </div>

                <button type="button" class="btn btn-link details-toggle" onclick={toggle_details}>
                    {if *show_details { "▾ Ocultar detalles" } else { "▸ Más detalles (raza, pelo, peso...)" }}
                </button>

                {if *show_details {
                    let on_add = {
                        let on_edit = on_edit.clone();
                        Callback::from(move |tag: String| on_edit.emit(DraftEdit::AddTag(tag)))
                    };
                    let on_remove = {
                        let on_edit = on_edit.clone();
                        Callback::from(move |tag: String| on_edit.emit(DraftEdit::RemoveTag(tag)))
                    };
                    html! {
                        <div class="form-details">
                            <div class="form-group">
                                <label for="breed">{"Raza"}</label>
                                <input type="text" id="breed" name="breed" placeholder="Mestizo"
                                    value={draft.breed().to_string()} oninput={on_text_input.clone()} />
                            </div>
                            <div class="form-group">
                                <label for="hairType">{"Tipo de pelo"}</label>
                                <select id="hairType" name="hairType" onchange={on_hair_change}>
                                    {for HairType::ALL.iter().map(|hair| html! {
                                        <option value={hair.key()} selected={*hair == draft.hair_type()}>
                                            {hair.label(props.locale)}
                                        </option>
                                    })}
                                </select>
                            </div>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="weight">{"Peso"}</label>
                                    <input type="text" id="weight" name="weight" placeholder="12 kg"
                                        value={draft.weight().to_string()} oninput={on_text_input.clone()} />
                                </div>
                                <div class="form-group">
                                    <label for="age">{"Edad"}</label>
                                    <input type="text" id="age" name="age" placeholder="3 años"
                                        value={draft.age().to_string()} oninput={on_text_input.clone()} />
                                </div>
                            </div>
                            <TagEditor tags={draft.custom_tags().to_vec()} {on_add} {on_remove} />
                        </div>
                    }
                } else { html! {} }}

                <div class="form-group">
                    <label>{"Servicio"}</label>
                    <div class="service-grid">
                        {for ServiceType::ALL.iter().map(|service| {
                            let service = *service;
                            let on_edit = on_edit.clone();
                            html! {
                                <button
                                    type="button"
                                    class={if service == draft.service_type() { "service-btn selected" } else { "service-btn" }}
                                    onclick={Callback::from(move |_| on_edit.emit(DraftEdit::ServiceType(service)))}
                                >
                                    {service.label(props.locale)}
                                </button>
                            }
                        })}
                    </div>
                </div>

                <AvailabilityPicker
                    days={draft.availability_days().to_vec()}
                    times={draft.availability_times().to_vec()}
                    locale={props.locale}
                    on_toggle_day={on_edit.reform(DraftEdit::ToggleDay)}
                    on_toggle_time={on_edit.reform(DraftEdit::ToggleTimeSlot)}
                    on_preset={on_edit.reform(DraftEdit::DayPreset)}
                />

                <div class="form-group">
                    <label for="notes">{"Notas"}</label>
                    <textarea id="notes" name="notes" rows="3"
                        placeholder="Alergias, comportamiento, indicaciones especiales..."
                        value={draft.notes().to_string()} oninput={on_notes_input} />
                </div>

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={Callback::from(move |_| on_cancel.emit(()))}>
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {"Crear Credencial"}
                    </button>
                </div>
            </form>
        </section>
    }
}

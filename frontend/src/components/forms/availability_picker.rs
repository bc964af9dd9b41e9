use yew::prelude::*;
use shared::{DayPreset, Locale, TimeSlot, Weekday};

#[derive(Properties, PartialEq)]
pub struct AvailabilityPickerProps {
    pub days: Vec<Weekday>,
    pub times: Vec<TimeSlot>,
    pub locale: Locale,
    pub on_toggle_day: Callback<Weekday>,
    pub on_toggle_time: Callback<TimeSlot>,
    pub on_preset: Callback<DayPreset>,
}

#[function_component(AvailabilityPicker)]
pub fn availability_picker(props: &AvailabilityPickerProps) -> Html {
    html! {
        <fieldset class="availability-picker">
            <legend>{"Disponibilidad *"}</legend>

            <div class="preset-row">
                {for DayPreset::ALL.iter().map(|preset| {
                    let preset = *preset;
                    let on_preset = props.on_preset.clone();
                    html! {
                        <button
                            type="button"
                            class="btn btn-link preset-btn"
                            onclick={Callback::from(move |_| on_preset.emit(preset))}
                        >
                            {preset.label(props.locale)}
                        </button>
                    }
                })}
            </div>

            <div class="chip-row days">
                {for Weekday::ALL.iter().map(|day| {
                    let day = *day;
                    let selected = props.days.contains(&day);
                    let on_toggle_day = props.on_toggle_day.clone();
                    html! {
                        <button
                            type="button"
                            class={if selected { "chip selected" } else { "chip" }}
                            onclick={Callback::from(move |_| on_toggle_day.emit(day))}
                        >
                            {day.abbreviation(props.locale)}
                        </button>
                    }
                })}
            </div>

            <div class="chip-row times">
                {for TimeSlot::ALL.iter().map(|slot| {
                    let slot = *slot;
                    let selected = props.times.contains(&slot);
                    let on_toggle_time = props.on_toggle_time.clone();
                    html! {
                        <button
                            type="button"
                            class={if selected { "chip selected" } else { "chip" }}
                            onclick={Callback::from(move |_| on_toggle_time.emit(slot))}
                        >
                            {slot.label(props.locale)}
                        </button>
                    }
                })}
            </div>
        </fieldset>
    }
}

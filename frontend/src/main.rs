use yew::prelude::*;
use chrono::{Datelike, Local};
use barberie_domain::{AppView, DraftEdit};
use shared::{AppConfig, BUSINESS_NAME};

mod components;
mod hooks;
mod services;
mod state;

use components::dog_form::DogForm;
use components::header::Header;
use components::id_card::IdCard;
use components::welcome::Welcome;
use services::logging;
use state::{AppAction, AppState};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = AppConfig::from_build_env();
        logging::init(&config.log_level);
        if config.assistant.api_key.is_none() {
            log::warn!("No API key configured, the assistant will use fallback replies");
        }
        config
    });
    let state = use_reducer(AppState::default);
    let locale = config.locale;

    let dispatch = |action: AppAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action.clone()))
    };
    let on_edit = {
        let state = state.clone();
        Callback::from(move |edit: DraftEdit| state.dispatch(AppAction::Edit(edit)))
    };

    let content = match state.controller.view() {
        AppView::Welcome => html! {
            <Welcome
                assistant={config.assistant.clone()}
                {locale}
                on_start={dispatch(AppAction::StartCreation)}
            />
        },
        AppView::FormEntry { draft } => html! {
            <DogForm
                draft={draft.clone()}
                {locale}
                {on_edit}
                on_cancel={dispatch(AppAction::Cancel)}
                on_submit={dispatch(AppAction::Submit)}
            />
        },
        AppView::CredentialDisplay { profile } => html! {
            <IdCard
                profile={profile.clone()}
                {locale}
                export={config.export.clone()}
                on_back={dispatch(AppAction::Back)}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                show_create_new={matches!(state.controller.view(), AppView::CredentialDisplay { .. })}
                on_create_new={dispatch(AppAction::CreateNew)}
            />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
            <footer class="footer">
                {format!("© {} {}", Local::now().year(), BUSINESS_NAME)}
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

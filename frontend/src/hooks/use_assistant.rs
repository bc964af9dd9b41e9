use yew::prelude::*;
use shared::{AssistantConfig, ChatMessage, Locale};
use barberie_domain::{AssistantSession, SendRejected};
use wasm_bindgen_futures::spawn_local;
use crate::services::gemini::GeminiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct AssistantState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

pub struct UseAssistantResult {
    pub state: AssistantState,
    pub send: Callback<String>,
}

#[hook]
pub fn use_assistant(config: &AssistantConfig, locale: Locale) -> UseAssistantResult {
    let session = {
        let config = config.clone();
        use_memo((), move |_| {
            AssistantSession::new(GeminiClient::new(config.clone()), &config, locale)
        })
    };
    let messages = use_state(Vec::<ChatMessage>::new);
    let loading = use_state(|| false);

    let send = {
        let session = session.clone();
        let messages = messages.clone();
        let loading = loading.clone();

        use_callback((), move |text: String, _| {
            let turn = match session.begin_send(&text) {
                Ok(turn) => turn,
                Err(SendRejected::Busy) => {
                    Logger::debug_with_component("assistant", "Reply pending, message not sent");
                    return;
                }
                Err(SendRejected::EmptyMessage) => return,
            };
            messages.set(session.messages());
            loading.set(true);

            let session = session.clone();
            let messages = messages.clone();
            let loading = loading.clone();
            spawn_local(async move {
                session.complete(turn).await;
                messages.set(session.messages());
                loading.set(false);
            });
        })
    };

    // Greet once when the widget mounts
    use_effect_with((), {
        let session = session.clone();
        let messages = messages.clone();
        let loading = loading.clone();
        move |_| {
            spawn_local(async move {
                loading.set(true);
                if session.greet().await.is_some() {
                    messages.set(session.messages());
                } else {
                    Logger::warn_with_component("assistant", "Greeting skipped, session already started");
                }
                loading.set(false);
            });
            || ()
        }
    });

    let state = AssistantState {
        messages: (*messages).clone(),
        loading: *loading,
    };

    UseAssistantResult { state, send }
}

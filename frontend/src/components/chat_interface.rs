use yew::prelude::*;
use shared::{AssistantConfig, ChatRole, Locale};
use web_sys::{Element, HtmlInputElement};
use crate::hooks::use_assistant::use_assistant;

#[derive(Properties, PartialEq)]
pub struct ChatInterfaceProps {
    pub config: AssistantConfig,
    pub locale: Locale,
    /// Call-to-action that opens the intake form
    pub on_start: Callback<()>,
}

#[function_component(ChatInterface)]
pub fn chat_interface(props: &ChatInterfaceProps) -> Html {
    let assistant = use_assistant(&props.config, props.locale);
    let input = use_state(String::new);
    let messages_ref = use_node_ref();

    // Keep the newest message in view
    {
        let messages_ref = messages_ref.clone();
        use_effect_with(
            (assistant.state.messages.len(), assistant.state.loading),
            move |_| {
                if let Some(list) = messages_ref.cast::<Element>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
        );
    }

    let loading = assistant.state.loading;

    let submit = {
        let input = input.clone();
        let send = assistant.send.clone();
        Callback::from(move |_: ()| {
            if loading || input.trim().is_empty() {
                return;
            }
            send.emit((*input).clone());
            input.set(String::new());
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_start = props.on_start.clone();

    html! {
        <section class="chat-widget">
            <div class="chat-header">
                <span class="chat-avatar">{"🤖"}</span>
                <div>
                    <h3>{"Asistente Virtual"}</h3>
                    <small>{"Te ayudamos a registrar a tu mascota"}</small>
                </div>
            </div>

            <div class="chat-messages" ref={messages_ref}>
                {if assistant.state.messages.is_empty() && loading {
                    html! { <div class="chat-connecting">{"Conectando con el asistente..."}</div> }
                } else { html! {} }}

                {for assistant.state.messages.iter().map(|message| {
                    let class = match message.role {
                        ChatRole::User => "chat-bubble user",
                        ChatRole::Assistant => "chat-bubble assistant",
                    };
                    html! { <div key={message.id.clone()} class={class}>{&message.text}</div> }
                })}

                {if loading && !assistant.state.messages.is_empty() {
                    html! {
                        <div class="chat-bubble assistant typing">
                            <span class="dot"></span><span class="dot"></span><span class="dot"></span>
                        </div>
                    }
                } else { html! {} }}
            </div>

            <div class="chat-cta">
                <button
                    class="btn btn-primary"
                    onclick={Callback::from(move |_| on_start.emit(()))}
                >
                    {"🐾 Crear ID de Mascota Ahora"}
                </button>
            </div>

            <div class="chat-input-row">
                <input
                    type="text"
                    placeholder="Escribe tu pregunta..."
                    value={(*input).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    class="btn btn-send"
                    disabled={loading || input.trim().is_empty()}
                    onclick={Callback::from(move |_| submit.emit(()))}
                >
                    {"➤"}
                </button>
            </div>
        </section>
    }
}

use yew::prelude::*;
use shared::{AssistantConfig, Locale, BUSINESS_NAME};
use super::chat_interface::ChatInterface;

#[derive(Properties, PartialEq)]
pub struct WelcomeProps {
    pub assistant: AssistantConfig,
    pub locale: Locale,
    pub on_start: Callback<()>,
}

#[function_component(Welcome)]
pub fn welcome(props: &WelcomeProps) -> Html {
    let on_start = props.on_start.clone();

    html! {
        <section class="welcome-section">
            <div class="welcome-card">
                <div class="welcome-icon">{"🐶"}</div>
                <h2>{format!("¡Bienvenido a {}!", BUSINESS_NAME)}</h2>
                <p>
                    {"Crea la credencial de tu mascota en un minuto. Nos ayuda a organizar tus turnos \
                      y a conocer mejor a tu perro, y te llevas una tarjeta digital para descargar."}
                </p>
                <button
                    class="btn btn-primary"
                    onclick={Callback::from(move |_| on_start.emit(()))}
                >
                    {"🐾 Crear Credencial"}
                </button>
            </div>

            <ChatInterface
                config={props.assistant.clone()}
                locale={props.locale}
                on_start={props.on_start.clone()}
            />
        </section>
    }
}

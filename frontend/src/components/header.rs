use yew::prelude::*;
use shared::{BUSINESS_NAME, BUSINESS_TAGLINE};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Only the credential screen offers the "Nuevo" shortcut
    pub show_create_new: bool,
    pub on_create_new: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <div class="brand">
                    <span class="brand-logo">{"✂️"}</span>
                    <div>
                        <h1>{BUSINESS_NAME}</h1>
                        <p class="brand-tagline">{BUSINESS_TAGLINE}</p>
                    </div>
                </div>
                {if props.show_create_new {
                    let on_create_new = props.on_create_new.clone();
                    html! {
                        <button
                            class="btn btn-secondary header-new-btn"
                            onclick={Callback::from(move |_| on_create_new.emit(()))}
                        >
                            {"＋ Nuevo"}
                        </button>
                    }
                } else { html! {} }}
            </div>
        </header>
    }
}

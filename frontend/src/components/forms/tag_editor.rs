use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq)]
pub struct TagEditorProps {
    pub tags: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
}

/// Free-text characteristics ("Nudos", "Miedoso", ...) shown as chips
#[function_component(TagEditor)]
pub fn tag_editor(props: &TagEditorProps) -> Html {
    let pending = use_state(String::new);

    let add = {
        let pending = pending.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: ()| {
            if pending.trim().is_empty() {
                return;
            }
            on_add.emit((*pending).clone());
            pending.set(String::new());
        })
    };

    let on_input = {
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            pending.set(target.value());
        })
    };

    let on_keydown = {
        let add = add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add.emit(());
            }
        })
    };

    html! {
        <div class="tag-editor">
            <label>{"Características"}</label>
            <div class="tag-input-row">
                <input
                    type="text"
                    placeholder="Ej: Nudos, Miedoso, Alergias..."
                    value={(*pending).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button type="button" class="btn btn-secondary" onclick={Callback::from(move |_| add.emit(()))}>
                    {"＋"}
                </button>
            </div>
            <div class="chip-row tags">
                {for props.tags.iter().enumerate().map(|(index, tag)| {
                    let on_remove = props.on_remove.clone();
                    let value = tag.clone();
                    html! {
                        <span key={format!("{}-{}", index, tag)} class="chip tag">
                            {tag}
                            <button
                                type="button"
                                class="chip-remove"
                                onclick={Callback::from(move |_| on_remove.emit(value.clone()))}
                            >
                                {"×"}
                            </button>
                        </span>
                    }
                })}
            </div>
        </div>
    }
}

use dioxus::prelude::*;

use crate::domain::models::EntityType;
use crate::shared::hooks::UseSuggestions;

/// Entity selection for trend queries (BEM: c-entity-picker): a Party/Member
/// select plus a free-text name input with autocomplete candidates underneath.
#[component]
pub fn EntityPicker(suggestions: UseSuggestions) -> Element {
    let state = suggestions.state.read();

    let entity_type = state.entity_type;
    let type_value = entity_type.as_str();
    let name_value = state.name.clone();
    let options = state.options.clone();
    let input_label = format!("{} Name", entity_type.display_name());

    rsx! {
        div { class: "c-entity-picker",
            select {
                class: "c-entity-picker__type",
                value: "{type_value}",
                onchange: move |evt| {
                    if let Some(entity_type) = EntityType::from_slug(&evt.value()) {
                        suggestions.set_entity_type(entity_type);
                    }
                },
                option { value: "party", "Party" }
                option { value: "member", "Member" }
            }

            div { class: "c-entity-picker__input-wrapper",
                input {
                    r#type: "text",
                    class: "c-entity-picker__input",
                    placeholder: "{input_label}",
                    value: "{name_value}",
                    oninput: move |evt| suggestions.on_input(evt.value()),
                }

                if !options.is_empty() {
                    ul { class: "c-entity-picker__options",
                        for option in options.iter() {
                            li {
                                key: "{option}",
                                class: "c-entity-picker__option",
                                onclick: {
                                    let option = option.clone();
                                    move |_| suggestions.accept(option.clone())
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::shared::hooks::UseSearchSession;

/// Input value of an HTML date field.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}

/// Filter bar: free-text query, date range, submit (BEM: c-filters).
///
/// Edits only mutate the pending query; nothing is fetched until the Search
/// button (or Enter in the text field) submits. The To field stays disabled
/// until From is set and is bounded below by it, mirroring the range
/// invariant enforced by the session state.
#[component]
pub fn SearchFilters(search: UseSearchSession) -> Element {
    let mut search = search;
    let session = search.session.read();

    let text_value = session.query.text.clone().unwrap_or_default();
    let from_value = session
        .query
        .from_date
        .map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default();
    let to_value = session
        .query
        .to_date
        .map(|d| d.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_default();
    let to_disabled = session.query.from_date.is_none();
    let in_flight = session.in_flight;

    rsx! {
        div { class: "c-filters",
            input {
                r#type: "text",
                class: "c-filters__query",
                placeholder: "Search speeches...",
                value: "{text_value}",
                oninput: move |evt| search.session.write().set_text(&evt.value()),
                onkeypress: move |evt| {
                    if evt.key() == Key::Enter {
                        search.submit();
                    }
                },
            }
            label { class: "c-filters__date-label",
                span { "From" }
                input {
                    r#type: "date",
                    class: "c-filters__date",
                    value: "{from_value}",
                    oninput: move |evt| {
                        search.session.write().set_from_date(parse_input_date(&evt.value()));
                    },
                }
            }
            label { class: "c-filters__date-label",
                span { "To" }
                input {
                    r#type: "date",
                    class: "c-filters__date",
                    value: "{to_value}",
                    min: "{from_value}",
                    disabled: to_disabled,
                    oninput: move |evt| {
                        search.session.write().set_to_date(parse_input_date(&evt.value()));
                    },
                }
            }
            button {
                class: "c-btn c-btn--primary",
                disabled: in_flight,
                onclick: move |_| search.submit(),
                if in_flight { "Searching..." } else { "Search" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2019-03-05"),
            NaiveDate::from_ymd_opt(2019, 3, 5)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("05/03/2019"), None);
    }
}

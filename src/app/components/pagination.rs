use dioxus::prelude::*;

/// Numbered pagination control (BEM: c-pagination). Renders nothing when a
/// single page holds everything.
#[component]
pub fn Pagination(page: u32, total_pages: u32, on_select: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        nav { class: "c-pagination",
            for n in 1..=total_pages {
                button {
                    key: "{n}",
                    class: if n == page {
                        "c-pagination__page c-pagination__page--current"
                    } else {
                        "c-pagination__page"
                    },
                    disabled: n == page,
                    onclick: move |_| on_select.call(n),
                    "{n}"
                }
            }
        }
    }
}

//! Plain-text screens. Each renderer returns the screen as a `String`.

pub mod contact_list;
pub mod dashboard;
pub mod message_view;
pub mod network_view;
pub mod polling_view;

pub(crate) fn heading(title: &str) -> Vec<String> {
    vec![title.to_string(), "=".repeat(title.chars().count())]
}

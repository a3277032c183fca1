use crate::api::delivery::simulated_recipient_state;
use crate::api::fixtures;
use crate::api::models::{Contact, MessageKind, MessageTemplate};
use crate::directory::{self, RecipientBuckets};
use crate::error::{Error, Result};

pub fn find_message<'a>(messages: &'a [MessageTemplate], id: &str) -> Result<&'a MessageTemplate> {
    messages
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| Error::UnknownMessage(id.to_string()))
}

/// Every message campaign, or only `focus` when given.
pub fn render_all(contacts: &[Contact], focus: Option<&str>) -> Result<String> {
    let messages: Vec<&MessageTemplate> = match focus {
        Some(id) => vec![find_message(&fixtures::MESSAGES, id)?],
        None => fixtures::MESSAGES.iter().collect(),
    };
    let (sent, failed) = simulated_recipient_state(contacts);
    let mut lines = super::heading("Message Campaigns");
    for message in messages {
        let buckets = directory::bucket_recipients(&message.id, contacts, &sent, &failed);
        lines.push(render_campaign(message, &buckets, contacts.len()));
    }
    Ok(lines.join("\n"))
}

fn render_campaign(
    message: &MessageTemplate,
    buckets: &RecipientBuckets<'_>,
    total: usize,
) -> String {
    let tag = match message.kind {
        MessageKind::Urgent => "URGENT",
        MessageKind::Scheduled => "SCHEDULED",
    };
    let mut lines = vec![
        format!("[{tag}] {} ({})", message.title, message.received),
        format!("From: {} - Sent to {} of {} contacts", message.from, buckets.attempted(), total),
        format!("  {}", message.content),
    ];
    for (label, group) in [
        ("Not Sent", &buckets.not_sent),
        ("Sent", &buckets.sent),
        ("Failed", &buckets.failed),
    ] {
        let names: Vec<&str> = group.iter().map(|c| c.name.as_str()).collect();
        lines.push(format!("  {label} ({}): {}", group.len(), names.join(", ")));
    }
    lines.push(String::new());
    lines.join("\n")
}

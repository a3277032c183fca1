use crate::api::models::{Contact, MessageTemplate};
use crate::error::{Error, Result};
use log::info;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Queued,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientResult {
    pub contact_id: String,
    pub outcome: DeliveryOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub message_id: String,
    pub results: Vec<RecipientResult>,
}

impl DeliveryReport {
    pub fn queued(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == DeliveryOutcome::Queued)
            .count()
    }

    pub fn failed_ids(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, DeliveryOutcome::Failed { .. }))
            .map(|r| r.contact_id.as_str())
            .collect()
    }
}

/// Hands one message to one recipient.
pub trait DeliveryService {
    fn deliver(&self, message: &MessageTemplate, recipient: &Contact) -> DeliveryOutcome;
}

/// Accepts every message and only writes it to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDelivery;

impl DeliveryService for LoggingDelivery {
    fn deliver(&self, message: &MessageTemplate, recipient: &Contact) -> DeliveryOutcome {
        info!("queued \"{}\" for {} ({})", message.title, recipient.name, recipient.id);
        DeliveryOutcome::Queued
    }
}

/// Sends `message` to every contact whose id is in `selection`, in list order.
pub fn send_message<S: DeliveryService + ?Sized>(
    service: &S,
    message: &MessageTemplate,
    contacts: &[Contact],
    selection: &HashSet<String>,
) -> Result<DeliveryReport> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }
    let results: Vec<RecipientResult> = contacts
        .iter()
        .filter(|c| selection.contains(&c.id))
        .map(|c| RecipientResult {
            contact_id: c.id.clone(),
            outcome: service.deliver(message, c),
        })
        .collect();
    info!(
        "sending \"{}\" to {} contacts",
        message.title,
        results.len()
    );
    Ok(DeliveryReport {
        message_id: message.id.clone(),
        results,
    })
}

/// Delivery state shown before any real send: the first half of the list has
/// received the message and the contact right after it failed.
pub fn simulated_recipient_state(contacts: &[Contact]) -> (HashSet<String>, HashSet<String>) {
    let half = contacts.len() / 2;
    let sent = contacts[..half].iter().map(|c| c.id.clone()).collect();
    let failed = contacts[half..]
        .iter()
        .take(1)
        .map(|c| c.id.clone())
        .collect();
    (sent, failed)
}

use crate::api::models::{Contact, ContactFilter};
use crate::directory;

pub fn render(contacts: &[Contact], filter: &ContactFilter) -> String {
    let matches = directory::filter_contacts(contacts, filter);
    let title = format!("My Network ({} of {})", matches.len(), contacts.len());
    let mut lines = super::heading(&title);
    for c in &matches {
        let mut row = format!(
            "  {:<14} {:<10} {:<13} {:<7} {:<11} network {}",
            c.name,
            c.member_id,
            c.relationship.label(),
            c.support.label(),
            c.app_status.label(),
            c.network_size
        );
        if c.can_influence {
            row.push_str(" (influencer)");
        }
        if let Some(seen) = &c.last_seen {
            row.push_str(&format!(" - seen {seen}"));
        }
        lines.push(row);
    }
    if matches.is_empty() {
        lines.push("  No contacts found.".into());
        if filter.is_active() {
            lines.push("  Try adjusting your search or filters.".into());
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

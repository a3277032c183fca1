use crate::api::models::{Contact, PromotionRequest, SecondLevelNetworks, SupportLikelihood};
use crate::directory;
use crate::utils::{format_thousands, initial};

pub fn campaigner(contacts: &[Contact], latest: usize) -> String {
    let mut lines = super::heading("Welcome!");
    lines.push(format!("You have {} contacts in your network.", contacts.len()));
    lines.push(String::new());
    lines.push("My Network (most recently added)".into());
    for c in directory::latest_contacts(contacts, latest) {
        lines.push(format!("  [{}] {} - {}", initial(&c.name), c.name, c.relationship));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Reach, support and relationship mix across direct and second-level contacts.
pub fn candidate(contacts: &[Contact], networks: &SecondLevelNetworks) -> String {
    let reach: Vec<Contact> = directory::network_reach(contacts, networks)
        .into_iter()
        .cloned()
        .collect();
    let breakdown = directory::support_breakdown(&reach);
    let status = directory::app_status_counts(&reach);

    let mut lines = super::heading("Candidate Dashboard");
    lines.push(format!("Total Network Reach: {}", format_thousands(reach.len() as u64)));
    lines.push(format!("Active Members: {}", format_thousands(status.installed as u64)));
    lines.push(format!(
        "Support Score: {}",
        format_thousands(directory::compute_support_score(&reach))
    ));
    lines.push(String::new());
    lines.push("Support Levels".into());
    for level in SupportLikelihood::ALL {
        lines.push(format!("  {:<8} {}", level.label(), breakdown.count(level)));
    }
    lines.push(String::new());
    lines.push("Relationships".into());
    for (rel, count) in directory::relationship_distribution(&reach) {
        lines.push(format!("  {:<13} {}", rel.label(), count));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn promotions(requests: &[PromotionRequest]) -> String {
    let pending = directory::pending_promotions(requests);
    let mut lines = super::heading(&format!("Promotion Requests ({} pending)", pending.len()));
    for r in pending {
        lines.push(format!(
            "  {} - requested by {} {}",
            r.contact_name, r.requested_by, r.requested_at
        ));
        lines.push(format!("    {}", r.reason));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;

    #[test]
    fn test_campaigner_lists_latest() {
        let out = campaigner(&fixtures::CONTACTS, 2);
        assert!(out.contains("[P] Priya Sharma - Family"));
        assert!(out.contains("[A] Amit Patel - Friend"));
        assert!(!out.contains("Sara Ali"));
    }

    #[test]
    fn test_candidate_counts_second_level() {
        let out = candidate(&fixtures::CONTACTS, &fixtures::SECOND_LEVEL_NETWORKS);
        assert!(out.contains("Total Network Reach: 13"));
        // 7 High, 4 Medium, 1 Low across direct and second-level contacts.
        assert!(out.contains("Support Score: 41"));
    }

    #[test]
    fn test_promotions_only_pending() {
        let out = promotions(&fixtures::PROMOTION_REQUESTS);
        assert!(out.contains("2 pending"));
        assert!(!out.contains("Sunita Gupta"));
    }
}

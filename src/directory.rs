//! Derived views over the contact list.
//!
//! Every function here is pure: inputs are borrowed, results are fresh
//! values, and nothing fails on well-typed input.

use crate::api::models::{
    AppStatus, Contact, ContactEdit, ContactFilter, PollingStatus, PromotionRequest,
    PromotionStatus, Relationship, SecondLevelNetworks, SupportLikelihood,
};
use crate::utils::{contains_ignore_case, percentage};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// Contacts matching every active predicate of `filter`, in input order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &ContactFilter) -> Vec<&'a Contact> {
    let query = filter.search.to_lowercase();
    contacts
        .iter()
        .filter(|c| filter.relationship.is_none_or(|r| c.relationship == r))
        .filter(|c| filter.support.is_none_or(|s| c.support == s))
        .filter(|c| {
            query.is_empty()
                || contains_ignore_case(&c.name, &query)
                || contains_ignore_case(&c.member_id, &query)
        })
        .collect()
}

/// Copy of `contacts` with the fields of `edit` applied to `contact_id`.
/// Every contact carrying that id is updated; an unknown id leaves the list
/// unchanged.
pub fn edit_contact(contacts: &[Contact], contact_id: &str, edit: &ContactEdit) -> Vec<Contact> {
    let mut out = contacts.to_vec();
    let mut matched = false;
    for target in out.iter_mut().filter(|c| c.id == contact_id) {
        matched = true;
        if let Some(relationship) = edit.relationship {
            target.relationship = relationship;
        }
        if let Some(support) = edit.support {
            target.support = support;
        }
    }
    if !matched {
        debug!("edit ignored, no contact with id {contact_id}");
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkNode {
    pub contact: Contact,
    /// Leaf nodes; their own networks are never expanded.
    pub children: Vec<Contact>,
}

/// One node per top-level contact with its second-level contacts attached.
/// `network_size` is recomputed from the attached children.
pub fn build_network_tree(
    contacts: &[Contact],
    networks: &SecondLevelNetworks,
) -> Vec<NetworkNode> {
    contacts
        .iter()
        .map(|c| {
            let children = networks.get(&c.id).cloned().unwrap_or_default();
            let mut contact = c.clone();
            contact.network_size = children.len();
            NetworkNode { contact, children }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SupportBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unsure: usize,
}

impl SupportBreakdown {
    pub fn count(&self, level: SupportLikelihood) -> usize {
        match level {
            SupportLikelihood::High => self.high,
            SupportLikelihood::Medium => self.medium,
            SupportLikelihood::Low => self.low,
            SupportLikelihood::Unsure => self.unsure,
        }
    }

    pub fn score(&self) -> u64 {
        SupportLikelihood::ALL
            .iter()
            .map(|&level| level.weight() * self.count(level) as u64)
            .sum()
    }
}

pub fn support_breakdown(contacts: &[Contact]) -> SupportBreakdown {
    let mut out = SupportBreakdown::default();
    for c in contacts {
        match c.support {
            SupportLikelihood::High => out.high += 1,
            SupportLikelihood::Medium => out.medium += 1,
            SupportLikelihood::Low => out.low += 1,
            SupportLikelihood::Unsure => out.unsure += 1,
        }
    }
    out
}

/// 4 points per High, 3 per Medium, 1 per Low, none for Unsure.
pub fn compute_support_score(contacts: &[Contact]) -> u64 {
    contacts.iter().map(|c| c.support.weight()).sum()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientBuckets<'a> {
    pub message_id: String,
    pub sent: Vec<&'a Contact>,
    pub failed: Vec<&'a Contact>,
    pub not_sent: Vec<&'a Contact>,
}

impl RecipientBuckets<'_> {
    /// Contacts the message was attempted for, successfully or not.
    pub fn attempted(&self) -> usize {
        self.sent.len() + self.failed.len()
    }
}

/// Splits `contacts` by delivery state for one message. A contact in both
/// sets counts as sent.
pub fn bucket_recipients<'a>(
    message_id: &str,
    contacts: &'a [Contact],
    sent: &HashSet<String>,
    failed: &HashSet<String>,
) -> RecipientBuckets<'a> {
    let mut buckets = RecipientBuckets {
        message_id: message_id.to_string(),
        ..Default::default()
    };
    for c in contacts {
        if sent.contains(&c.id) {
            buckets.sent.push(c);
        } else if failed.contains(&c.id) {
            buckets.failed.push(c);
        } else {
            buckets.not_sent.push(c);
        }
    }
    buckets
}

/// Count per relationship, in declaration order, including empty ones.
pub fn relationship_distribution(contacts: &[Contact]) -> Vec<(Relationship, usize)> {
    Relationship::ALL
        .iter()
        .map(|&rel| (rel, contacts.iter().filter(|c| c.relationship == rel).count()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppStatusCounts {
    pub installed: usize,
    pub pending: usize,
    pub not_joined: usize,
}

pub fn app_status_counts(contacts: &[Contact]) -> AppStatusCounts {
    let mut out = AppStatusCounts::default();
    for c in contacts {
        match c.app_status {
            AppStatus::Installed => out.installed += 1,
            AppStatus::Pending => out.pending += 1,
            AppStatus::NotJoined => out.not_joined += 1,
        }
    }
    out
}

/// Direct contacts followed by every second-level contact.
pub fn network_reach<'a>(
    contacts: &'a [Contact],
    networks: &'a SecondLevelNetworks,
) -> Vec<&'a Contact> {
    let mut out: Vec<&Contact> = contacts.iter().collect();
    let direct: HashSet<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    for c in contacts {
        if let Some(children) = networks.get(&c.id) {
            out.extend(children.iter());
        }
    }
    let mut orphaned: Vec<&String> = networks
        .keys()
        .filter(|k| !direct.contains(k.as_str()))
        .collect();
    orphaned.sort();
    for key in orphaned {
        out.extend(networks[key].iter());
    }
    out
}

pub fn latest_contacts(contacts: &[Contact], n: usize) -> &[Contact] {
    &contacts[..n.min(contacts.len())]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollingSummary<'a> {
    pub total: usize,
    pub voted: usize,
    pub turnout: f64,
    pub high_priority: Vec<&'a Contact>,
    pub medium_priority: Vec<&'a Contact>,
    pub low_priority: Vec<&'a Contact>,
}

impl PollingSummary<'_> {
    pub fn not_voted(&self) -> usize {
        self.high_priority.len() + self.medium_priority.len() + self.low_priority.len()
    }
}

/// Turnout across `contacts` plus the not-yet-voted contacts grouped by how
/// likely they are to support.
pub fn polling_summary(contacts: &[Contact]) -> PollingSummary<'_> {
    let voted = contacts
        .iter()
        .filter(|c| c.polling_status == PollingStatus::Voted)
        .count();
    let mut summary = PollingSummary {
        total: contacts.len(),
        voted,
        turnout: percentage(voted, contacts.len()),
        high_priority: Vec::new(),
        medium_priority: Vec::new(),
        low_priority: Vec::new(),
    };
    for c in contacts.iter().filter(|c| c.polling_status == PollingStatus::NotVotedYet) {
        match c.support {
            SupportLikelihood::High => summary.high_priority.push(c),
            SupportLikelihood::Medium => summary.medium_priority.push(c),
            SupportLikelihood::Low | SupportLikelihood::Unsure => summary.low_priority.push(c),
        }
    }
    summary
}

pub fn pending_promotions(requests: &[PromotionRequest]) -> Vec<&PromotionRequest> {
    requests
        .iter()
        .filter(|r| r.status == PromotionStatus::Pending)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;
    use pretty_assertions::assert_eq;

    fn make(
        id: &str,
        name: &str,
        relationship: Relationship,
        support: SupportLikelihood,
    ) -> Contact {
        Contact {
            id: id.into(),
            name: name.into(),
            member_id: format!("CA{id}00000"),
            relationship,
            support,
            can_influence: false,
            app_status: AppStatus::Installed,
            network_size: 0,
            polling_status: PollingStatus::Unknown,
            last_seen: None,
        }
    }

    fn ids(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let contacts = vec![
            make("1", "Priya Sharma", Relationship::Family, SupportLikelihood::High),
            make("2", "Amit Patel", Relationship::Friend, SupportLikelihood::High),
        ];
        let out = filter_contacts(&contacts, &ContactFilter::default().search("amit"));
        assert_eq!(out, vec![&contacts[1]]);
    }

    #[test]
    fn test_search_matches_member_id() {
        let out = filter_contacts(&fixtures::CONTACTS, &ContactFilter::default().search("ca8901"));
        assert_eq!(ids(&out), vec!["7"]);
    }

    #[test]
    fn test_default_filter_is_identity() {
        let out: Vec<Contact> = filter_contacts(&fixtures::CONTACTS, &ContactFilter::default())
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(out, *fixtures::CONTACTS);
    }

    #[test]
    fn test_predicates_are_anded_and_order_kept() {
        let filter = ContactFilter::default()
            .relationship(Relationship::Friend)
            .support(SupportLikelihood::High);
        let out = filter_contacts(&fixtures::CONTACTS, &filter);
        assert_eq!(ids(&out), vec!["2", "8"]);

        let narrowed = filter_contacts(&fixtures::CONTACTS, &filter.clone().search("vik"));
        assert_eq!(ids(&narrowed), vec!["8"]);
    }

    #[test]
    fn test_filter_on_empty_input() {
        let out = filter_contacts(&[], &ContactFilter::default().search("x"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_edit_replaces_only_given_fields() {
        let edit = ContactEdit {
            support: Some(SupportLikelihood::Low),
            ..Default::default()
        };
        let out = edit_contact(&fixtures::CONTACTS, "2", &edit);
        assert_eq!(out[1].support, SupportLikelihood::Low);
        assert_eq!(out[1].relationship, Relationship::Friend);
        assert_eq!(out[0], fixtures::CONTACTS[0]);
        assert_eq!(out.len(), fixtures::CONTACTS.len());
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let edit = ContactEdit {
            support: Some(SupportLikelihood::Low),
            ..Default::default()
        };
        let out = edit_contact(&fixtures::CONTACTS, "99", &edit);
        assert_eq!(out, *fixtures::CONTACTS);
    }

    #[test]
    fn test_edit_applies_to_every_duplicate_id() {
        let mut contacts = fixtures::CONTACTS.clone();
        contacts.push(contacts[0].clone());
        let edit = ContactEdit {
            support: Some(SupportLikelihood::Low),
            ..Default::default()
        };
        let out = edit_contact(&contacts, "1", &edit);
        assert_eq!(out[0].support, SupportLikelihood::Low);
        assert_eq!(out[8].support, SupportLikelihood::Low);
        assert_eq!(out[1], contacts[1]);
    }

    #[test]
    fn test_tree_recomputes_network_size() {
        let mut contacts = fixtures::CONTACTS.clone();
        contacts[0].network_size = 42;
        contacts[1].network_size = 7;
        let tree = build_network_tree(&contacts, &fixtures::SECOND_LEVEL_NETWORKS);
        for (node, c) in tree.iter().zip(&contacts) {
            let expected = fixtures::SECOND_LEVEL_NETWORKS.get(&c.id).map_or(0, Vec::len);
            assert_eq!(node.contact.network_size, expected);
            assert_eq!(node.children.len(), expected);
        }
        assert_eq!(tree[0].contact.network_size, 2);
        assert_eq!(tree[1].contact.network_size, 0);
    }

    #[test]
    fn test_tree_children_are_not_expanded() {
        let tree = build_network_tree(&fixtures::CONTACTS, &fixtures::SECOND_LEVEL_NETWORKS);
        // "1-1" has a stored network_size of 2 but no further level is attached.
        let child = &tree[0].children[0];
        assert_eq!(child.id, "1-1");
        assert_eq!(child.network_size, 2);
    }

    #[test]
    fn test_support_score_example() {
        let levels = [
            SupportLikelihood::High,
            SupportLikelihood::Unsure,
            SupportLikelihood::High,
            SupportLikelihood::Medium,
            SupportLikelihood::Unsure,
            SupportLikelihood::Low,
            SupportLikelihood::Unsure,
        ];
        let contacts: Vec<Contact> = levels
            .iter()
            .enumerate()
            .map(|(i, &s)| make(&i.to_string(), "x", Relationship::Other, s))
            .collect();
        assert_eq!(compute_support_score(&contacts), 12);
        assert_eq!(support_breakdown(&contacts).score(), 12);

        let mut reversed = contacts.clone();
        reversed.reverse();
        assert_eq!(compute_support_score(&reversed), 12);
    }

    #[test]
    fn test_support_score_empty() {
        assert_eq!(compute_support_score(&[]), 0);
    }

    #[test]
    fn test_bucketing_partitions_input() {
        let contacts = &*fixtures::CONTACTS;
        let sent: HashSet<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        let failed: HashSet<String> = ["3", "4"].iter().map(|s| s.to_string()).collect();
        let buckets = bucket_recipients("msg1", contacts, &sent, &failed);

        assert_eq!(buckets.message_id, "msg1");
        assert_eq!(ids(&buckets.sent), vec!["1", "2", "3"]);
        assert_eq!(ids(&buckets.failed), vec!["4"]);
        assert_eq!(ids(&buckets.not_sent), vec!["5", "6", "7", "8"]);
        assert_eq!(buckets.attempted(), 4);
    }

    #[test]
    fn test_relationship_distribution_covers_all() {
        let dist = relationship_distribution(&fixtures::CONTACTS);
        assert_eq!(
            dist,
            vec![
                (Relationship::Family, 2),
                (Relationship::Friend, 3),
                (Relationship::Colleague, 1),
                (Relationship::Neighbor, 1),
                (Relationship::Acquaintance, 1),
                (Relationship::Other, 0),
            ]
        );
    }

    #[test]
    fn test_network_reach_flattens_second_level() {
        let reach = network_reach(&fixtures::CONTACTS, &fixtures::SECOND_LEVEL_NETWORKS);
        assert_eq!(reach.len(), 13);
        assert_eq!(
            ids(&reach[8..]),
            vec!["1-1", "1-2", "3-1", "7-1", "8-1"]
        );
    }

    #[test]
    fn test_network_reach_appends_unlinked_keys_sorted() {
        let contacts = vec![make(
            "1",
            "Priya Sharma",
            Relationship::Family,
            SupportLikelihood::High,
        )];
        let mut networks = SecondLevelNetworks::new();
        networks.insert(
            "z".into(),
            vec![make("z-1", "Zed", Relationship::Friend, SupportLikelihood::Low)],
        );
        networks.insert(
            "1".into(),
            vec![make("1-1", "Child", Relationship::Friend, SupportLikelihood::Medium)],
        );
        networks.insert(
            "b".into(),
            vec![
                make("b-1", "Bea", Relationship::Other, SupportLikelihood::Unsure),
                make("b-2", "Ben", Relationship::Other, SupportLikelihood::High),
            ],
        );
        let reach = network_reach(&contacts, &networks);
        assert_eq!(ids(&reach), vec!["1", "1-1", "b-1", "b-2", "z-1"]);
    }

    #[test]
    fn test_polling_summary_tiers() {
        let summary = polling_summary(&fixtures::CONTACTS);
        assert_eq!(summary.total, 8);
        assert_eq!(summary.voted, 4);
        assert_eq!(summary.turnout, 50.0);
        assert_eq!(ids(&summary.high_priority), vec!["1", "2"]);
        assert!(summary.medium_priority.is_empty());
        assert_eq!(ids(&summary.low_priority), vec!["5", "6"]);
        assert_eq!(summary.not_voted(), 4);
    }

    #[test]
    fn test_polling_summary_empty() {
        let summary = polling_summary(&[]);
        assert_eq!(summary.turnout, 0.0);
        assert_eq!(summary.not_voted(), 0);
    }

    #[test]
    fn test_pending_promotions() {
        let pending = pending_promotions(&fixtures::PROMOTION_REQUESTS);
        let ids: Vec<_> = pending.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["req1", "req2"]);
    }

    #[test]
    fn test_app_status_counts_and_latest() {
        let counts = app_status_counts(&fixtures::CONTACTS);
        assert_eq!(counts, AppStatusCounts { installed: 4, pending: 2, not_joined: 2 });
        assert_eq!(latest_contacts(&fixtures::CONTACTS, 3).len(), 3);
        assert_eq!(latest_contacts(&fixtures::CONTACTS, 30).len(), 8);
    }
}

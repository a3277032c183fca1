//! Seed data loaded once at startup. Stands in for the member directory.

use crate::api::models::{
    AppStatus, Contact, MessageKind, MessageTemplate, PollingStatus, PromotionRequest,
    PromotionStatus, Relationship, SecondLevelNetworks, SupportLikelihood, User,
};
use once_cell::sync::Lazy;

pub static USER: Lazy<User> = Lazy::new(|| User {
    name: "Sunil".into(),
    level: Some(1),
});

pub static SECOND_LEVEL_NETWORKS: Lazy<SecondLevelNetworks> = Lazy::new(|| {
    let mut map = SecondLevelNetworks::new();
    map.insert(
        "1".into(),
        vec![
            contact("1-1", "Friend 1 of Priya", "CA-F1", Relationship::Friend, SupportLikelihood::High, true, AppStatus::Installed, 2, PollingStatus::Voted),
            contact("1-2", "Colleague 1 of Priya", "CA-C1", Relationship::Colleague, SupportLikelihood::Medium, false, AppStatus::Pending, 0, PollingStatus::NotVotedYet),
        ],
    );
    map.insert(
        "3".into(),
        vec![contact("3-1", "Family 1 of Sara", "CA-F2", Relationship::Family, SupportLikelihood::High, false, AppStatus::Installed, 3, PollingStatus::Voted)],
    );
    map.insert(
        "7".into(),
        vec![contact("7-1", "Neighbor 1 of Sunita", "CA-N1", Relationship::Neighbor, SupportLikelihood::Medium, true, AppStatus::NotJoined, 0, PollingStatus::NotVotedYet)],
    );
    map.insert(
        "8".into(),
        vec![contact("8-1", "Friend 2 of Vikram", "CA-F3", Relationship::Friend, SupportLikelihood::High, false, AppStatus::Installed, 1, PollingStatus::Voted)],
    );
    map
});

pub static CONTACTS: Lazy<Vec<Contact>> = Lazy::new(|| {
    let seeded = [
        ("1", "Priya Sharma", "CA234567", Relationship::Family, SupportLikelihood::High, true, AppStatus::Installed, PollingStatus::NotVotedYet, Some("10 min ago")),
        ("2", "Amit Patel", "CA345678", Relationship::Friend, SupportLikelihood::High, false, AppStatus::Pending, PollingStatus::NotVotedYet, Some("1 hour ago")),
        ("3", "Sara Ali", "CA456789", Relationship::Colleague, SupportLikelihood::Medium, true, AppStatus::Installed, PollingStatus::Voted, None),
        ("4", "Raj Kumar", "CA567890", Relationship::Neighbor, SupportLikelihood::Medium, false, AppStatus::NotJoined, PollingStatus::Voted, None),
        ("5", "Deepak Shah", "CA678901", Relationship::Friend, SupportLikelihood::Low, false, AppStatus::Pending, PollingStatus::NotVotedYet, None),
        ("6", "Rohan Verma", "CA789012", Relationship::Acquaintance, SupportLikelihood::Unsure, false, AppStatus::NotJoined, PollingStatus::NotVotedYet, None),
        ("7", "Sunita Gupta", "CA890123", Relationship::Family, SupportLikelihood::High, true, AppStatus::Installed, PollingStatus::Voted, None),
        ("8", "Vikram Singh", "CA901234", Relationship::Friend, SupportLikelihood::High, true, AppStatus::Installed, PollingStatus::Voted, None),
    ];
    seeded
        .into_iter()
        .map(|(id, name, member_id, relationship, support, can_influence, app_status, polling_status, last_seen)| {
            let network_size = SECOND_LEVEL_NETWORKS.get(id).map_or(0, Vec::len);
            let mut c = contact(id, name, member_id, relationship, support, can_influence, app_status, network_size, polling_status);
            c.last_seen = last_seen.map(str::to_string);
            c
        })
        .collect()
});

pub static MESSAGES: Lazy<Vec<MessageTemplate>> = Lazy::new(|| {
    vec![
        MessageTemplate {
            id: "msg1".into(),
            title: "IMPORTANT: Community Town Hall".into(),
            from: "Central Office".into(),
            received: "2 min ago".into(),
            content: "Join us for a community town hall tomorrow at the Grand Auditorium. Your participation is valuable for discussing key issues. We look forward to your presence.".into(),
            kind: MessageKind::Urgent,
        },
        MessageTemplate {
            id: "msg2".into(),
            title: "Reminder: Election Day".into(),
            from: "Central Office".into(),
            received: "1 day ago".into(),
            content: "This is a reminder that the election is on [Date]. Your participation is important. Your designated polling station is [Polling Station].".into(),
            kind: MessageKind::Scheduled,
        },
        MessageTemplate {
            id: "msg3".into(),
            title: "Thank You for Your Contribution".into(),
            from: "Central Office".into(),
            received: "3 days ago".into(),
            content: "We appreciate your continued engagement and contribution. Please continue to share information with your network and encourage their participation.".into(),
            kind: MessageKind::Urgent,
        },
    ]
});

pub static PROMOTION_REQUESTS: Lazy<Vec<PromotionRequest>> = Lazy::new(|| {
    vec![
        promotion("req1", "1", "Priya Sharma", "Has built a strong network of 15+ contacts and shows excellent leadership potential", PromotionStatus::Pending, "2 days ago"),
        promotion("req2", "3", "Sara Ali", "Highly influential in their community and has recruited 8 new supporters", PromotionStatus::Pending, "1 day ago"),
        promotion("req3", "7", "Sunita Gupta", "Demonstrates strong organizational skills and community engagement", PromotionStatus::Approved, "3 days ago"),
    ]
});

/// Members that can be found from the "add contact" search but are not yet
/// part of the network.
pub static MEMBER_DIRECTORY: Lazy<Vec<Contact>> = Lazy::new(|| {
    vec![contact("9", "Rajesh Kumar", "CA123456", Relationship::Other, SupportLikelihood::Unsure, false, AppStatus::NotJoined, 0, PollingStatus::Unknown)]
});

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    name: &str,
    member_id: &str,
    relationship: Relationship,
    support: SupportLikelihood,
    can_influence: bool,
    app_status: AppStatus,
    network_size: usize,
    polling_status: PollingStatus,
) -> Contact {
    Contact {
        id: id.into(),
        name: name.into(),
        member_id: member_id.into(),
        relationship,
        support,
        can_influence,
        app_status,
        network_size,
        polling_status,
        last_seen: None,
    }
}

fn promotion(
    id: &str,
    contact_id: &str,
    contact_name: &str,
    reason: &str,
    status: PromotionStatus,
    requested_at: &str,
) -> PromotionRequest {
    PromotionRequest {
        id: id.into(),
        contact_id: contact_id.into(),
        contact_name: contact_name.into(),
        requested_by: "Campaigner User".into(),
        reason: reason.into(),
        status,
        requested_at: requested_at.into(),
    }
}

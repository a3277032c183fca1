use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Direct contacts of a contact, keyed by that contact's id. Two levels only.
pub type SecondLevelNetworks = HashMap<String, Vec<Contact>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Family,
    Friend,
    Colleague,
    Neighbor,
    Acquaintance,
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 6] = [
        Relationship::Family,
        Relationship::Friend,
        Relationship::Colleague,
        Relationship::Neighbor,
        Relationship::Acquaintance,
        Relationship::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Relationship::Family => "Family",
            Relationship::Friend => "Friend",
            Relationship::Colleague => "Colleague",
            Relationship::Neighbor => "Neighbor",
            Relationship::Acquaintance => "Acquaintance",
            Relationship::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportLikelihood {
    High,
    Medium,
    Low,
    Unsure,
}

impl SupportLikelihood {
    pub const ALL: [SupportLikelihood; 4] = [
        SupportLikelihood::High,
        SupportLikelihood::Medium,
        SupportLikelihood::Low,
        SupportLikelihood::Unsure,
    ];

    /// Points contributed to the support score.
    pub fn weight(self) -> u64 {
        match self {
            SupportLikelihood::High => 4,
            SupportLikelihood::Medium => 3,
            SupportLikelihood::Low => 1,
            SupportLikelihood::Unsure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupportLikelihood::High => "High",
            SupportLikelihood::Medium => "Medium",
            SupportLikelihood::Low => "Low",
            SupportLikelihood::Unsure => "Unsure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppStatus {
    Installed,
    Pending,
    #[serde(rename = "Not Joined")]
    NotJoined,
}

impl AppStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppStatus::Installed => "Installed",
            AppStatus::Pending => "Pending",
            AppStatus::NotJoined => "Not Joined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollingStatus {
    Voted,
    #[serde(rename = "Not Voted Yet")]
    NotVotedYet,
    Unknown,
}

impl PollingStatus {
    pub fn label(self) -> &'static str {
        match self {
            PollingStatus::Voted => "Voted",
            PollingStatus::NotVotedYet => "Not Voted Yet",
            PollingStatus::Unknown => "Unknown",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Relationship, SupportLikelihood, AppStatus, PollingStatus);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub member_id: String,
    pub relationship: Relationship,
    pub support: SupportLikelihood,
    pub can_influence: bool,
    pub app_status: AppStatus,
    /// Count of this contact's own second-level contacts.
    pub network_size: usize,
    pub polling_status: PollingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Urgent,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub id: String,
    pub title: String,
    pub from: String,
    pub received: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromotionStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub id: String,
    pub contact_id: String,
    pub contact_name: String,
    pub requested_by: String,
    pub reason: String,
    pub status: PromotionStatus,
    pub requested_at: String,
}

/// Contact list criteria. `None` on an enum field means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportLikelihood>,
}

impl ContactFilter {
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }

    pub fn support(mut self, support: SupportLikelihood) -> Self {
        self.support = Some(support);
        self
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.relationship.is_some() || self.support.is_some()
    }
}

/// Partial update applied by `edit_contact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub relationship: Option<Relationship>,
    pub support: Option<SupportLikelihood>,
}

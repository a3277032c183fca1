//! Contact network tracking for campaign volunteers and candidates.

pub mod api;
pub mod app;
pub mod directory;
pub mod error;
pub mod storage;
pub mod ui;
pub mod utils;

pub use api::models::{
    AppStatus, Contact, ContactEdit, ContactFilter, MessageTemplate, PollingStatus, Relationship,
    SecondLevelNetworks, SupportLikelihood, User,
};
pub use directory::{
    bucket_recipients, build_network_tree, compute_support_score, edit_contact, filter_contacts,
    NetworkNode, RecipientBuckets,
};
pub use error::{Error, Result};
pub use storage::ContactStore;

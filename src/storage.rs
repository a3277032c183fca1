use crate::api::fixtures;
use crate::api::models::{
    Contact, ContactEdit, Relationship, SecondLevelNetworks, SupportLikelihood,
};
use crate::directory::{self, NetworkNode};
use crate::error::{Error, Result};
use log::{debug, info};

/// Session-held contact list. Edits live only as long as the store does.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    networks: SecondLevelNetworks,
    members: Vec<Contact>,
}

impl ContactStore {
    pub fn new(contacts: Vec<Contact>, networks: SecondLevelNetworks) -> Self {
        Self {
            contacts,
            networks,
            members: Vec::new(),
        }
    }

    /// Store seeded from the bundled fixtures.
    pub fn seeded() -> Self {
        let mut store = Self::new(
            fixtures::CONTACTS.clone(),
            fixtures::SECOND_LEVEL_NETWORKS.clone(),
        );
        store.members = fixtures::MEMBER_DIRECTORY.clone();
        debug!("seeded store with {} contacts", store.contacts.len());
        store
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn networks(&self) -> &SecondLevelNetworks {
        &self.networks
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Applies `edit` to the contact with `id`. Returns whether a contact with
    /// that id exists; an unknown id is not an error.
    pub fn edit(&mut self, id: &str, edit: &ContactEdit) -> bool {
        let found = self.get(id).is_some();
        self.contacts = directory::edit_contact(&self.contacts, id, edit);
        found
    }

    /// Looks up a member by member id (case-insensitive) among members not
    /// yet in the network.
    pub fn find_member(&self, member_id: &str) -> Option<&Contact> {
        let query = member_id.trim();
        self.members
            .iter()
            .find(|m| m.member_id.eq_ignore_ascii_case(query))
    }

    /// Adds a member to the network tagged with `relationship` and `support`.
    pub fn add_contact(
        &mut self,
        member: &Contact,
        relationship: Relationship,
        support: SupportLikelihood,
    ) -> Result<&Contact> {
        if self.get(&member.id).is_some() {
            return Err(Error::DuplicateContact(member.id.clone()));
        }
        let mut contact = member.clone();
        contact.relationship = relationship;
        contact.support = support;
        contact.network_size = self.networks.get(&contact.id).map_or(0, Vec::len);
        info!("added {} ({}) to network", contact.name, contact.member_id);
        self.members.retain(|m| m.id != contact.id);
        let idx = self.contacts.len();
        self.contacts.push(contact);
        Ok(&self.contacts[idx])
    }

    pub fn network_tree(&self) -> Vec<NetworkNode> {
        directory::build_network_tree(&self.contacts, &self.networks)
    }
}

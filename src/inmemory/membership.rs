use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{Membership, MembershipMemberType, MembershipReference};
use crate::query::Filter;
use crate::service::{MembershipCrudService, MembershipQueryService};
use crate::storage::Storage;

pub struct MembershipCrudServiceInMemory {
    memberships: CrudFacade<Membership>,
}

impl MembershipCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            memberships: CrudFacade::with_config(config),
        }
    }

    pub fn backing(&self) -> &Storage<Membership> {
        self.memberships.storage()
    }
}

impl Default for MembershipCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(MembershipCrudServiceInMemory, Membership, memberships);

impl MembershipCrudService for MembershipCrudServiceInMemory {
    fn create(&self, membership: Membership) -> Result<Membership> {
        self.memberships.create(membership)
    }

    fn update(&self, membership: Membership) -> Result<Membership> {
        self.memberships.update(membership)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.memberships.delete(&id.to_string())
    }
}

#[derive(Default)]
pub struct MembershipQueryServiceInMemory {
    memberships: Storage<Membership>,
}

impl MembershipQueryServiceInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over(crud: &MembershipCrudServiceInMemory) -> Self {
        Self {
            memberships: Storage::shared_with(crud.backing()),
        }
    }
}

in_memory_alternative!(MembershipQueryServiceInMemory, Membership, memberships);

impl MembershipQueryService for MembershipQueryServiceInMemory {
    fn find_by_reference(&self, reference: &MembershipReference) -> Vec<Membership> {
        self.memberships.filter(|m| m.is_on(reference))
    }

    fn find_by_reference_and_role(&self, reference: &MembershipReference, role_id: &str) -> Vec<Membership> {
        Filter::new()
            .and(|m: &Membership| m.is_on(reference))
            .eq(Some(role_id), |m: &Membership| m.role_id.as_str())
            .select(&self.memberships)
    }

    fn find_by_member(&self, member_type: MembershipMemberType, member_id: &str) -> Vec<Membership> {
        Filter::new()
            .eq(Some(&member_type), |m: &Membership| &m.member_type)
            .eq(Some(member_id), |m: &Membership| m.member_id.as_str())
            .select(&self.memberships)
    }
}

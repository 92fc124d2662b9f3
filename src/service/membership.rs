use crate::core::Result;
use crate::model::{Membership, MembershipMemberType, MembershipReference};

pub trait MembershipCrudService: Send + Sync {
    fn create(&self, membership: Membership) -> Result<Membership>;
    fn update(&self, membership: Membership) -> Result<Membership>;
    fn delete(&self, id: &str) -> Result<()>;
}

pub trait MembershipQueryService: Send + Sync {
    fn find_by_reference(&self, reference: &MembershipReference) -> Vec<Membership>;

    fn find_by_reference_and_role(&self, reference: &MembershipReference, role_id: &str) -> Vec<Membership>;

    fn find_by_member(&self, member_type: MembershipMemberType, member_id: &str) -> Vec<Membership>;
}

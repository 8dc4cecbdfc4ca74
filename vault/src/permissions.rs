multiversx_sc::imports!();

use common_errors::ERROR_MISSING_ROLE;
use common_structs::Role;

/// Explicit permission table keyed by role. The owner administers
/// membership; each privileged operation checks its role on entry.
#[multiversx_sc::module]
pub trait PermissionsModule: common_events::EventsModule {
    #[only_owner]
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, member: ManagedAddress) {
        if self.role_members(role).insert(member.clone()) {
            self.role_granted_event(&role, &member);
        }
    }

    #[only_owner]
    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, member: ManagedAddress) {
        if self.role_members(role).swap_remove(&member) {
            self.role_revoked_event(&role, &member);
        }
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.role_members(role).contains(&caller), ERROR_MISSING_ROLE);
    }

    #[view(getRoleMembers)]
    #[storage_mapper("role_members")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}

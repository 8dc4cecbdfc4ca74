#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

/// One event per state-changing operation family, consumed by off-chain
/// indexers; not required for correctness of the ledgers themselves.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("user_deposited")]
    fn user_deposited_event(&self, #[indexed] user: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("user_withdrew")]
    fn user_withdrew_event(&self, #[indexed] user: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("user_borrowed")]
    fn user_borrowed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] collateral_used: &BigUint,
        #[indexed] amount: &BigUint,
    );

    #[event("user_repaid")]
    fn user_repaid_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] returned_collateral: &BigUint,
    );

    #[event("user_liquidated")]
    fn user_liquidated_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] user: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] seized_collateral: &BigUint,
    );

    #[event("collateral_config")]
    fn collateral_config_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] price_source: &ManagedAddress,
        #[indexed] loan_to_value: &BigUint,
    );

    #[event("index_sync")]
    fn index_sync_event(
        &self,
        #[indexed] deposit_index: &BigUint,
        #[indexed] borrow_index: &BigUint,
    );

    #[event("role_granted")]
    fn role_granted_event(&self, #[indexed] role: &Role, #[indexed] member: &ManagedAddress);

    #[event("role_revoked")]
    fn role_revoked_event(&self, #[indexed] role: &Role, #[indexed] member: &ManagedAddress);
}

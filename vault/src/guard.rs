multiversx_sc::imports!();

use common_errors::ERROR_REENTRANT_CALL;

/// Mutual-exclusion flag around every endpoint that transfers out after
/// mutating ledger state, so a transfer callback cannot re-enter the
/// operation mid-flight. State mutation still strictly precedes the
/// outbound transfer in each endpoint; the flag guards the sync-call
/// window on top of that ordering.
#[multiversx_sc::module]
pub trait GuardModule {
    fn lock(&self) {
        require!(!self.reentrancy_lock().get(), ERROR_REENTRANT_CALL);

        self.reentrancy_lock().set(true);
    }

    fn unlock(&self) {
        self.reentrancy_lock().clear();
    }

    #[storage_mapper("reentrancy_lock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}

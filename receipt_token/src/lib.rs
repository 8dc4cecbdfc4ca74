#![no_std]

multiversx_sc::imports!();

pub mod rebase;
pub mod storage;

use common_constants::WAD;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_ALLOWANCE,
    ERROR_INSUFFICIENT_BALANCE,
};

/// Rebasing receipt balance for vault depositors.
///
/// Balances are stored in raw units; every endpoint is denominated in
/// value units and converts at the current deposit index. The index is
/// moved by the owning vault, which projects pool asset growth onto all
/// holders at once without iterating them.
#[multiversx_sc::contract]
pub trait ReceiptToken:
    storage::StorageModule + rebase::RebaseModule + common_math::SharedMathModule
{
    #[init]
    fn init(&self) {
        self.deposit_index().set(BigUint::from(WAD));
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits `value` worth of raw units to `holder`.
    #[only_owner]
    #[endpoint(mint)]
    fn mint(&self, holder: ManagedAddress, value: BigUint) {
        let raw = self.value_to_raw(&value);

        self.raw_balance(&holder).update(|balance| *balance += &raw);
        self.raw_supply().update(|supply| *supply += &raw);
    }

    /// Removes `value` worth of raw units from `holder`.
    #[only_owner]
    #[endpoint(burn)]
    fn burn(&self, holder: ManagedAddress, value: BigUint) {
        let raw = self.value_to_raw(&value);
        let balance = self.raw_balance(&holder).get();
        require!(balance >= raw, ERROR_INSUFFICIENT_BALANCE);

        self.raw_balance(&holder).set(&(balance - &raw));
        self.raw_supply().update(|supply| *supply -= &raw);
    }

    /// Sets the deposit index to an absolute value. Callers compute the
    /// new value themselves; this is not a multiplicative update.
    #[only_owner]
    #[endpoint(updateIndex)]
    fn update_index(&self, new_index: BigUint) {
        require!(
            new_index > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.deposit_index().set(&new_index);
    }

    /// Transfers `value` worth of raw units to `to`.
    ///
    /// Two transfers of the same value straddling an index change move
    /// different raw amounts; value, not raw, is what is preserved.
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, value: BigUint) {
        let caller = self.blockchain().get_caller();

        self.move_raw(&caller, &to, &value);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, value: BigUint) {
        let caller = self.blockchain().get_caller();

        self.allowance(&caller, &spender).set(&value);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, value: BigUint) {
        let caller = self.blockchain().get_caller();
        let allowed = self.allowance(&from, &caller).get();
        require!(allowed >= value, ERROR_INSUFFICIENT_ALLOWANCE);

        self.allowance(&from, &caller).set(&(allowed - &value));
        self.move_raw(&from, &to, &value);
    }

    /// Observable balance in value units.
    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.raw_to_value(&self.raw_balance(&address).get())
    }

    /// Total receipt supply in value units.
    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.raw_to_value(&self.raw_supply().get())
    }
}

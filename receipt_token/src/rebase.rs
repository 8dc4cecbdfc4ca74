multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_BALANCE;

/// Conversions between ledger-internal raw units and the value units
/// every endpoint is denominated in.
///
/// The round trip `raw_to_value(value_to_raw(x))` is `<= x`; equality
/// holds only while the deposit index sits at 1.0 WAD.
#[multiversx_sc::module]
pub trait RebaseModule: crate::storage::StorageModule + common_math::SharedMathModule {
    fn value_to_raw(&self, value: &BigUint) -> BigUint {
        self.div_wad(value, &self.deposit_index().get())
    }

    fn raw_to_value(&self, raw: &BigUint) -> BigUint {
        self.mul_wad(raw, &self.deposit_index().get())
    }

    /// Moves `value` worth of raw units between two holders at the
    /// current index.
    fn move_raw(&self, from: &ManagedAddress, to: &ManagedAddress, value: &BigUint) {
        let raw = self.value_to_raw(value);
        let from_balance = self.raw_balance(from).get();
        require!(from_balance >= raw, ERROR_INSUFFICIENT_BALANCE);

        self.raw_balance(from).set(&(from_balance - &raw));
        self.raw_balance(to).update(|balance| *balance += &raw);
    }
}

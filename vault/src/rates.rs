multiversx_sc::imports!();

use common_constants::{MIN_LIQUIDITY_THRESHOLD, WAD};
use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;
use common_structs::Role;

use super::contexts::base::StorageCache;

/// Index movement and risk-parameter tuning.
#[multiversx_sc::module]
pub trait RatesModule:
    crate::storage::StorageModule
    + crate::receipt::ReceiptModule
    + crate::permissions::PermissionsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Compounds the borrow index by `(1 + rate)`. The index only ever
    /// grows; there is no negative-rate path.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self, rate: BigUint) {
        self.require_role(Role::BorrowInterestManager);

        let mut storage_cache = StorageCache::new(self);
        let wad = BigUint::from(WAD);

        let outstanding_before =
            self.mul_wad(&storage_cache.total_borrow_scaled, &storage_cache.borrow_index);
        storage_cache.borrow_index = &storage_cache.borrow_index * &(&wad + &rate) / &wad;
        let outstanding_after =
            self.mul_wad(&storage_cache.total_borrow_scaled, &storage_cache.borrow_index);

        storage_cache.interest_accrued += outstanding_after - outstanding_before;
    }

    /// Projects pool asset growth onto depositor balances by setting the
    /// receipt deposit index to `total assets / raw supply`. This is the
    /// bridge that pays borrower interest to depositors without
    /// iterating holders. After uncompensated losses the computed value
    /// can regress; clamping it would hide insolvency, so it is allowed.
    #[endpoint(syncDepositIndex)]
    fn sync_deposit_index(&self) {
        self.require_role(Role::ReceiptInterestManager);

        let raw_supply = self.receipt_raw_supply();
        if raw_supply == 0 {
            return;
        }

        let storage_cache = StorageCache::new(self);
        let total_assets = &storage_cache.total_liquidity
            + &self.mul_wad(&storage_cache.total_borrow_scaled, &storage_cache.borrow_index);
        let new_index = self.div_wad(&total_assets, &raw_supply);
        let borrow_index = storage_cache.borrow_index.clone();
        drop(storage_cache);

        self.receipt_update_index(&new_index);
        self.index_sync_event(&new_index, &borrow_index);
    }

    #[endpoint(setLiquidityThreshold)]
    fn set_liquidity_threshold(&self, value: BigUint) {
        self.require_role(Role::LiquidityManager);
        require!(
            value >= BigUint::from(MIN_LIQUIDITY_THRESHOLD) && value <= BigUint::from(WAD),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.liquidity_threshold().set(&value);
    }

    #[endpoint(setLiquidityPrecision)]
    fn set_liquidity_precision(&self, value: BigUint) {
        self.require_role(Role::LiquidityManager);
        require!(
            value <= BigUint::from(WAD),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.liquidity_precision().set(&value);
    }
}

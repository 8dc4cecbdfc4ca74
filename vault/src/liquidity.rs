multiversx_sc::imports!();

use common_constants::{MIN_LIQUIDITY_HEALTH_RATE, WAD};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_ASSET,
};

use super::contexts::base::StorageCache;

/// Aggregate pool accounting: base-asset deposits against receipt mints,
/// throttled withdrawals, and the liquidity-health computations feeding
/// both the debt ledger and the withdrawal path.
#[multiversx_sc::module]
pub trait LiquidityModule:
    crate::storage::StorageModule
    + crate::receipt::ReceiptModule
    + crate::guard::GuardModule
    + crate::collateral::CollateralModule
    + crate::oracle::OracleModule
    + crate::permissions::PermissionsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Supplies base asset to the pool and mints receipts worth the same
    /// value at the current deposit index.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.lock();

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.base_asset().get(), ERROR_INVALID_ASSET);
        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let mut storage_cache = StorageCache::new(self);
        self.credit(&mut storage_cache, &amount);
        drop(storage_cache);

        self.receipt_mint(&caller, &amount);

        self.user_deposited_event(&caller, &amount);
        self.unlock();
    }

    /// Withdraws base asset by burning receipts of equal value. Bounded
    /// by `max_extractable`, which tightens as pool health degrades.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.lock();

        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let mut storage_cache = StorageCache::new(self);
        let max_amount = self.max_extractable_internal(&storage_cache);
        require!(amount <= max_amount, ERROR_INSUFFICIENT_LIQUIDITY);

        self.debit(&mut storage_cache, &amount);
        drop(storage_cache);

        // burn fails on insufficient receipt balance, reverting the debit
        self.receipt_burn(&caller, &amount);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&self.base_asset().get(), 0, &amount)
            .transfer();

        self.user_withdrew_event(&caller, &amount);
        self.unlock();
    }

    fn credit(&self, storage_cache: &mut StorageCache<Self>, amount: &BigUint) {
        storage_cache.total_liquidity += amount;
    }

    fn debit(&self, storage_cache: &mut StorageCache<Self>, amount: &BigUint) {
        require!(
            amount <= &storage_cache.total_liquidity,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        storage_cache.total_liquidity -= amount;
    }

    /// Idle liquidity relative to the value owed to depositors. WAD when
    /// the pool fully covers the receipt supply, 0 when everything is
    /// out on loan.
    fn liquidity_health_rate_internal(&self, storage_cache: &StorageCache<Self>) -> BigUint {
        if storage_cache.total_liquidity == 0 {
            return BigUint::zero();
        }

        let raw_supply = self.receipt_raw_supply();
        if raw_supply == 0 {
            return BigUint::from(WAD);
        }

        let owed_to_depositors = self.mul_wad(&raw_supply, &self.receipt_deposit_index());
        let rate = self.div_wad(&storage_cache.total_liquidity, &owed_to_depositors);

        self.get_min(rate, BigUint::from(WAD))
    }

    /// How much the pool will lend or pay out right now. Zero at or
    /// below the protocol health floor.
    fn max_extractable_internal(&self, storage_cache: &StorageCache<Self>) -> BigUint {
        let health_rate = self.liquidity_health_rate_internal(storage_cache);
        let floor = BigUint::from(MIN_LIQUIDITY_HEALTH_RATE);
        if health_rate <= floor {
            return BigUint::zero();
        }

        self.mul_wad(&storage_cache.total_liquidity, &(health_rate - floor))
    }

    /// Self-adjusting risk parameter: the configured threshold, tightened
    /// by however much pool health has degraded.
    fn effective_liquidity_threshold_internal(
        &self,
        storage_cache: &StorageCache<Self>,
    ) -> BigUint {
        let health_rate = self.liquidity_health_rate_internal(storage_cache);

        self.get_max(
            self.liquidity_threshold().get(),
            BigUint::from(WAD) - health_rate,
        )
    }

    /// A position is liquidatable when this is false. Zero-debt
    /// positions are healthy.
    fn is_position_healthy_internal(
        &self,
        position: &common_structs::DebtPosition<Self::Api>,
        token: &TokenIdentifier,
        storage_cache: &StorageCache<Self>,
    ) -> bool {
        if !position.has_debt() {
            return true;
        }

        let accrued_debt = self.mul_wad(&position.debt, &storage_cache.borrow_index);
        let capacity = self.max_borrow_from_collateral(token, &position.locked_collateral);
        let threshold = self.effective_liquidity_threshold_internal(storage_cache);
        let limit = self.mul_wad(&capacity, &(BigUint::from(WAD) - threshold));

        accrued_debt < limit
    }
}

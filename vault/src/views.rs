multiversx_sc::imports!();

use common_structs::DebtPosition;

use super::contexts::base::StorageCache;

/// Read-only query surface. Each public view snapshots the aggregates
/// and delegates to the internal computation the mutating paths use.
#[multiversx_sc::module]
pub trait ViewModule:
    crate::storage::StorageModule
    + crate::liquidity::LiquidityModule
    + crate::collateral::CollateralModule
    + crate::receipt::ReceiptModule
    + crate::guard::GuardModule
    + crate::oracle::OracleModule
    + crate::permissions::PermissionsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Deposit index, proxied from the receipt-token contract.
    #[view(getDepositIndex)]
    fn get_deposit_index(&self) -> BigUint {
        self.receipt_deposit_index()
    }

    #[view(getLiquidityHealthRate)]
    fn get_liquidity_health_rate(&self) -> BigUint {
        let storage_cache = StorageCache::new(self);

        self.liquidity_health_rate_internal(&storage_cache)
    }

    #[view(getMaxExtractable)]
    fn get_max_extractable(&self) -> BigUint {
        let storage_cache = StorageCache::new(self);

        self.max_extractable_internal(&storage_cache)
    }

    #[view(getEffectiveLiquidityThreshold)]
    fn get_effective_liquidity_threshold(&self) -> BigUint {
        let storage_cache = StorageCache::new(self);

        self.effective_liquidity_threshold_internal(&storage_cache)
    }

    #[view(isPositionHealthy)]
    fn is_position_healthy(&self, user: ManagedAddress, token: TokenIdentifier) -> bool {
        let storage_cache = StorageCache::new(self);
        let position = self.debt_position_or_default(&user, &token);

        self.is_position_healthy_internal(&position, &token, &storage_cache)
    }

    /// Real owed amount at the current borrow index.
    #[view(getAccruedDebt)]
    fn get_accrued_debt(&self, user: ManagedAddress, token: TokenIdentifier) -> BigUint {
        let position = self.debt_position_or_default(&user, &token);

        self.mul_wad(&position.debt, &self.borrow_index().get())
    }

    #[view(getDebtPosition)]
    fn get_debt_position(
        &self,
        user: ManagedAddress,
        token: TokenIdentifier,
    ) -> DebtPosition<Self::Api> {
        self.debt_position_or_default(&user, &token)
    }
}

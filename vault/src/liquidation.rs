multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_HEALTH_FACTOR, ERROR_INVALID_ASSET,
    ERROR_NO_DEBT_FOR_COLLATERAL,
};
use common_structs::Role;

use super::contexts::base::StorageCache;

#[multiversx_sc::module]
pub trait LiquidationModule:
    crate::storage::StorageModule
    + crate::collateral::CollateralModule
    + crate::liquidity::LiquidityModule
    + crate::receipt::ReceiptModule
    + crate::guard::GuardModule
    + crate::oracle::OracleModule
    + crate::permissions::PermissionsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays an unhealthy position with the attached payment and seizes
    /// collateral in proportion to the debt retired.
    ///
    /// When `liquidity_precision` is set, the liquidator additionally
    /// keeps a fraction of the interest component of the repayment,
    /// folded into the refund. A position can be liquidated repeatedly
    /// while it stays unhealthy.
    #[payable("*")]
    #[endpoint(liquidate)]
    fn liquidate(&self, user: ManagedAddress, token: TokenIdentifier) {
        self.lock();
        self.require_role(Role::Liquidator);

        let (paid_token, paid) = self.call_value().egld_or_single_fungible_esdt();
        require!(paid_token == self.base_asset().get(), ERROR_INVALID_ASSET);
        require!(
            paid > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let liquidator = self.blockchain().get_caller();
        let mut position = self.debt_position_or_default(&user, &token);
        require!(position.has_debt(), ERROR_NO_DEBT_FOR_COLLATERAL);

        let mut storage_cache = StorageCache::new(self);
        require!(
            !self.is_position_healthy_internal(&position, &token, &storage_cache),
            ERROR_HEALTH_FACTOR
        );

        let accrued_debt = self.mul_wad(&position.debt, &storage_cache.borrow_index);
        let repaid_real = self.get_min(paid.clone(), accrued_debt.clone());
        let mut refund = &paid - &repaid_real;

        let seized_collateral = &position.locked_collateral * &repaid_real / &accrued_debt;
        let scaled_paid = self.div_wad(&repaid_real, &storage_cache.borrow_index);

        position.debt -= &scaled_paid;
        position.locked_collateral -= &seized_collateral;
        storage_cache.total_borrow_scaled -= &scaled_paid;
        storage_cache.total_liquidity += &repaid_real;

        // interest share kept by the liquidator as incentive
        let precision = self.liquidity_precision().get();
        if precision != 0 {
            let interest_portion = &repaid_real - &scaled_paid;
            let precision_reward = &scaled_paid * &precision / &accrued_debt;
            refund += self.mul_wad(&interest_portion, &precision_reward);
        }

        self.debt_positions(&user, &token).set(&position);
        drop(storage_cache);

        if seized_collateral > BigUint::zero() {
            self.tx()
                .to(&liquidator)
                .single_esdt(&token, 0, &seized_collateral)
                .transfer();
        }
        if refund > BigUint::zero() {
            self.tx()
                .to(&liquidator)
                .egld_or_single_esdt(&self.base_asset().get(), 0, &refund)
                .transfer();
        }

        self.user_liquidated_event(&liquidator, &user, &token, &repaid_real, &seized_collateral);
        self.unlock();
    }
}

multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_COLLATERAL,
    ERROR_INSUFFICIENT_DEPOSIT, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_ASSET,
    ERROR_NO_DEBT_FOR_COLLATERAL,
};

use super::contexts::base::StorageCache;

/// The borrow side of the ledger: collateral custody, borrows against
/// it, and repayments. Accounting always precedes the outbound transfer.
#[multiversx_sc::module]
pub trait DebtModule:
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
    /// Parks collateral with the vault without borrowing against it.
    /// Deposit and borrow are separate user actions.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self) {
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        self.supported_collateral_config(&payment.token_identifier);

        let caller = self.blockchain().get_caller();
        let mut position = self.debt_position_or_default(&caller, &payment.token_identifier);
        position.available_collateral += &payment.amount;
        self.debt_positions(&caller, &payment.token_identifier)
            .set(&position);
    }

    /// Reclaims collateral that is not currently backing a borrow.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(&self, token: TokenIdentifier, amount: BigUint) {
        self.lock();

        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let mut position = self.debt_position_or_default(&caller, &token);
        require!(
            amount <= position.available_collateral,
            ERROR_INSUFFICIENT_DEPOSIT
        );

        position.available_collateral -= &amount;
        self.debt_positions(&caller, &token).set(&position);

        self.tx()
            .to(&caller)
            .single_esdt(&token, 0, &amount)
            .transfer();

        self.unlock();
    }

    /// Borrows base asset against available collateral.
    ///
    /// With `take_max_available` the request is clamped twice: first to
    /// what the collateral supports, then to what the pool will extend.
    /// After the liquidity clamp the locked collateral is deliberately
    /// not recomputed, so the position keeps the larger backing.
    /// `BORROW_ALL` plus `take_max_available` is the borrow-max composite.
    #[endpoint(borrow)]
    fn borrow(&self, token: TokenIdentifier, amount: BigUint, take_max_available: bool) {
        self.lock();

        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let mut position = self.debt_position_or_default(&caller, &token);
        require!(
            position.available_collateral > BigUint::zero(),
            ERROR_INSUFFICIENT_COLLATERAL
        );

        let mut amount = amount;
        let mut locked = self.collateral_needed_for_borrow(&token, &amount);
        if locked > position.available_collateral {
            require!(take_max_available, ERROR_INSUFFICIENT_COLLATERAL);

            locked = position.available_collateral.clone();
            amount = self.max_borrow_from_collateral(&token, &locked);
        }

        let mut storage_cache = StorageCache::new(self);
        let max_amount = self.max_extractable_internal(&storage_cache);
        require!(max_amount > BigUint::zero(), ERROR_INSUFFICIENT_LIQUIDITY);
        if amount > max_amount {
            require!(take_max_available, ERROR_INSUFFICIENT_LIQUIDITY);

            amount = max_amount;
        }

        self.debit(&mut storage_cache, &amount);

        let scaled_debt = self.div_wad(&amount, &storage_cache.borrow_index);
        position.debt += &scaled_debt;
        position.available_collateral -= &locked;
        position.locked_collateral += &locked;
        storage_cache.total_borrow_scaled += &scaled_debt;

        self.debt_positions(&caller, &token).set(&position);
        drop(storage_cache);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&self.base_asset().get(), 0, &amount)
            .transfer();

        self.user_borrowed_event(&caller, &token, &locked, &amount);
        self.unlock();
    }

    /// Repays debt on a position with the attached base-asset payment.
    /// Overpayment is refunded; collateral is released in proportion to
    /// the scaled debt retired, all of it on full payoff.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, token: TokenIdentifier) {
        self.lock();

        let (paid_token, paid) = self.call_value().egld_or_single_fungible_esdt();
        require!(paid_token == self.base_asset().get(), ERROR_INVALID_ASSET);
        require!(
            paid > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let caller = self.blockchain().get_caller();
        let mut position = self.debt_position_or_default(&caller, &token);
        require!(position.has_debt(), ERROR_NO_DEBT_FOR_COLLATERAL);

        let mut storage_cache = StorageCache::new(self);
        let accrued_debt = self.mul_wad(&position.debt, &storage_cache.borrow_index);

        let refund = if paid > accrued_debt {
            &paid - &accrued_debt
        } else {
            BigUint::zero()
        };
        let repaid_real = self.get_min(paid, accrued_debt);
        let mut scaled_repaid = self.div_wad(&repaid_real, &storage_cache.borrow_index);

        // truncation can push the scaled amount past the stored debt on
        // full payoff, hence >= and the clamp
        let returned_collateral = if scaled_repaid >= position.debt {
            scaled_repaid = position.debt.clone();
            position.locked_collateral.clone()
        } else {
            &position.locked_collateral * &scaled_repaid / &position.debt
        };

        position.debt -= &scaled_repaid;
        position.locked_collateral -= &returned_collateral;
        storage_cache.total_borrow_scaled -= &scaled_repaid;
        storage_cache.total_liquidity += &repaid_real;

        self.debt_positions(&caller, &token).set(&position);
        drop(storage_cache);

        if returned_collateral > BigUint::zero() {
            self.tx()
                .to(&caller)
                .single_esdt(&token, 0, &returned_collateral)
                .transfer();
        }
        if refund > BigUint::zero() {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&self.base_asset().get(), 0, &refund)
                .transfer();
        }

        self.user_repaid_event(&caller, &token, &repaid_real, &returned_collateral);
        self.unlock();
    }
}

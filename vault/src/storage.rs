multiversx_sc::imports!();

use common_structs::{CollateralConfig, DebtPosition};

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getBaseAsset)]
    #[storage_mapper("base_asset")]
    fn base_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getReceiptTokenAddress)]
    #[storage_mapper("receipt_token_address")]
    fn receipt_token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalLiquidity)]
    #[storage_mapper("total_liquidity")]
    fn total_liquidity(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalBorrowScaled)]
    #[storage_mapper("total_borrow_scaled")]
    fn total_borrow_scaled(&self) -> SingleValueMapper<BigUint>;

    #[view(getInterestAccrued)]
    #[storage_mapper("interest_accrued")]
    fn interest_accrued(&self) -> SingleValueMapper<BigUint>;

    #[view(getLiquidityThreshold)]
    #[storage_mapper("liquidity_threshold")]
    fn liquidity_threshold(&self) -> SingleValueMapper<BigUint>;

    #[view(getLiquidityPrecision)]
    #[storage_mapper("liquidity_precision")]
    fn liquidity_precision(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("collateral_configs")]
    fn collateral_configs(
        &self,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<CollateralConfig<Self::Api>>;

    #[storage_mapper("debt_positions")]
    fn debt_positions(
        &self,
        user: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<DebtPosition<Self::Api>>;

    /// Positions are created implicitly on first touch and never removed;
    /// an absent entry reads as the zero position.
    fn debt_position_or_default(
        &self,
        user: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> DebtPosition<Self::Api> {
        let mapper = self.debt_positions(user, token);
        if mapper.is_empty() {
            DebtPosition::zeroed()
        } else {
            mapper.get()
        }
    }
}

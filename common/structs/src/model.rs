#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-token collateral parameters.
///
/// `loan_to_value` is an inverse haircut, WAD-scaled and `>= WAD`: one unit
/// of base-asset value only backs `value * WAD / loan_to_value` of borrow.
/// An entry with `loan_to_value == 0` means the token was never registered.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct CollateralConfig<M: ManagedTypeApi> {
    pub price_source: ManagedAddress<M>,
    pub loan_to_value: BigUint<M>,
}

/// Per-(user, token) debt record.
///
/// `debt` is scaled by the borrow index at the time it was last touched;
/// multiplying by the current index yields the real owed amount.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct DebtPosition<M: ManagedTypeApi> {
    pub debt: BigUint<M>,
    pub locked_collateral: BigUint<M>,
    pub available_collateral: BigUint<M>,
}

impl<M: ManagedTypeApi> DebtPosition<M> {
    pub fn zeroed() -> Self {
        DebtPosition {
            debt: BigUint::zero(),
            locked_collateral: BigUint::zero(),
            available_collateral: BigUint::zero(),
        }
    }

    pub fn has_debt(&self) -> bool {
        self.debt != 0
    }

    pub fn is_empty(&self) -> bool {
        self.debt == 0 && self.locked_collateral == 0 && self.available_collateral == 0
    }
}

impl<M: ManagedTypeApi> Default for DebtPosition<M> {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Protocol roles checked at the start of each privileged operation.
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum Role {
    BorrowInterestManager,
    ReceiptInterestManager,
    CollateralManager,
    Liquidator,
    LiquidityManager,
}

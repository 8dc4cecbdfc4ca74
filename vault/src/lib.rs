#![no_std]

multiversx_sc::imports!();

pub mod collateral;
pub mod contexts;
pub mod debt;
pub mod guard;
pub mod liquidation;
pub mod liquidity;
pub mod oracle;
pub mod permissions;
pub mod rates;
pub mod receipt;
pub mod storage;
pub mod views;

pub use common_events::*;

use common_constants::{MIN_LIQUIDITY_THRESHOLD, WAD};
use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_receipt_token;

/// Collateralized-debt vault.
///
/// Depositors supply the base asset and hold a rebasing receipt balance
/// that grows through the deposit index; the same pooled liquidity is
/// lent out against registered collateral tokens, with interest carried
/// by the borrow index and undercollateralized positions open to
/// liquidation. The two indices only move through their dedicated
/// endpoints; there is no implicit coupling beyond `syncDepositIndex`.
#[multiversx_sc::contract]
pub trait Vault:
    storage::StorageModule
    + permissions::PermissionsModule
    + guard::GuardModule
    + oracle::OracleModule
    + receipt::ReceiptModule
    + collateral::CollateralModule
    + liquidity::LiquidityModule
    + debt::DebtModule
    + liquidation::LiquidationModule
    + rates::RatesModule
    + views::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Both indices start at 1.0 WAD; the liquidity threshold starts at
    /// the protocol floor and the liquidator interest reward is off.
    #[init]
    fn init(&self, base_asset: EgldOrEsdtTokenIdentifier) {
        self.base_asset().set(&base_asset);
        self.borrow_index().set(BigUint::from(WAD));
        self.liquidity_threshold()
            .set(BigUint::from(MIN_LIQUIDITY_THRESHOLD));
        self.liquidity_precision().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deploys the receipt-token contract from a template and records
    /// it. The vault owns the new contract, making it the only address
    /// able to mint, burn or move the deposit index.
    #[only_owner]
    #[endpoint(deployReceiptToken)]
    fn deploy_receipt_token(&self, template_address: ManagedAddress) -> ManagedAddress {
        require!(!template_address.is_zero(), ERROR_TEMPLATE_EMPTY);

        let new_address = self
            .tx()
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .init()
            .from_source(template_address)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.receipt_token_address().set(&new_address);

        new_address
    }
}

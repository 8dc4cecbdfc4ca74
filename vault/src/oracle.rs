multiversx_sc::imports!();

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_RATE};
use common_proxies::proxy_price_feed;

/// Adapter over the per-token price-feed contracts.
///
/// A feed reports the base-asset value of one whole token, scaled by its
/// own `10^decimals`; the adapter rescales to plain base-asset units.
#[multiversx_sc::module]
pub trait OracleModule {
    /// Base-asset value of `amount` units of the token behind
    /// `price_source`. The zero-amount guard here is what surfaces a
    /// liquidation attempt against an empty position as an error.
    fn quote(&self, price_source: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let rate: BigUint = self
            .tx()
            .to(price_source)
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_rate()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(rate > BigUint::zero(), ERROR_INVALID_RATE);

        let decimals: u8 = self
            .tx()
            .to(price_source)
            .typed(proxy_price_feed::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();

        amount * &rate / BigUint::from(10u64).pow(decimals as u32)
    }
}

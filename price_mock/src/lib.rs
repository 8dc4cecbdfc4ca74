#![no_std]

multiversx_sc::imports!();

/// Settable price feed used as the oracle capability in tests.
///
/// `latestRate` reports the base-asset value of one whole token, scaled
/// by `10^decimals`. A zero rate simulates a broken feed.
#[multiversx_sc::contract]
pub trait PriceMock {
    #[init]
    fn init(&self, rate: BigUint, decimals: u8) {
        self.rate().set(&rate);
        self.decimals().set(decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setRate)]
    fn set_rate(&self, rate: BigUint) {
        self.rate().set(&rate);
    }

    #[only_owner]
    #[endpoint(setDecimals)]
    fn set_decimals(&self, decimals: u8) {
        self.decimals().set(decimals);
    }

    #[view(latestRate)]
    #[storage_mapper("rate")]
    fn rate(&self) -> SingleValueMapper<BigUint>;

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;
}

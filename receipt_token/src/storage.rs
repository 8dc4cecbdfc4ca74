multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getDepositIndex)]
    #[storage_mapper("deposit_index")]
    fn deposit_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getRawSupply)]
    #[storage_mapper("raw_supply")]
    fn raw_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getRawBalance)]
    #[storage_mapper("raw_balance")]
    fn raw_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getAllowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}

multiversx_sc::imports!();

use common_errors::ERROR_RECEIPT_TOKEN_NOT_SET;
use common_proxies::proxy_receipt_token;

/// Calls into the receipt-token contract the vault owns. Mint, burn and
/// index updates are `#[only_owner]` on the receipt side, so the vault
/// is the only address that can move them.
#[multiversx_sc::module]
pub trait ReceiptModule: crate::storage::StorageModule {
    fn existing_receipt_token(&self) -> ManagedAddress {
        let mapper = self.receipt_token_address();
        require!(!mapper.is_empty(), ERROR_RECEIPT_TOKEN_NOT_SET);

        mapper.get()
    }

    fn receipt_mint(&self, holder: &ManagedAddress, value: &BigUint) {
        self.tx()
            .to(self.existing_receipt_token())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .mint(holder, value)
            .sync_call();
    }

    fn receipt_burn(&self, holder: &ManagedAddress, value: &BigUint) {
        self.tx()
            .to(self.existing_receipt_token())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .burn(holder, value)
            .sync_call();
    }

    fn receipt_update_index(&self, new_index: &BigUint) {
        self.tx()
            .to(self.existing_receipt_token())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .update_index(new_index)
            .sync_call();
    }

    fn receipt_raw_supply(&self) -> BigUint {
        self.tx()
            .to(self.existing_receipt_token())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .raw_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn receipt_deposit_index(&self) -> BigUint {
        self.tx()
            .to(self.existing_receipt_token())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .deposit_index()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}

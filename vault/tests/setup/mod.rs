use common_proxies::{proxy_price_feed, proxy_receipt_token, proxy_vault};
use common_structs::{DebtPosition, Role};
use multiversx_sc_scenario::{api::StaticApi, imports::*};

use crate::constants::*;

pub fn wad(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(WAD)
}

pub fn wei(value: u128) -> BigUint<StaticApi> {
    BigUint::from(value)
}

pub struct VaultTestState {
    pub world: ScenarioWorld,
    pub vault_sc: ManagedAddress<StaticApi>,
    pub receipt_sc: ManagedAddress<StaticApi>,
    pub price_mock_sc: ManagedAddress<StaticApi>,
}

impl VaultTestState {
    /// Deploys the price feed, the receipt-token template and the vault,
    /// wires the receipt token through the vault's factory endpoint,
    /// grants every role and registers the collateral token at 1:1 price
    /// with a 150% loan-to-value multiplier.
    pub fn new() -> Self {
        let mut world = ScenarioWorld::new();

        world.register_contract(VAULT_PATH, vault::ContractBuilder);
        world.register_contract(RECEIPT_TOKEN_PATH, receipt_token::ContractBuilder);
        world.register_contract(PRICE_MOCK_PATH, price_mock::ContractBuilder);

        world.account(OWNER_ADDRESS).nonce(1).balance(wad(1_000));
        world.account(SUPPLIER_ADDRESS).nonce(1).balance(wad(1_000));
        world
            .account(BORROWER_ADDRESS)
            .nonce(1)
            .balance(wad(100))
            .esdt_balance(COLLATERAL_TOKEN, wad(10_000_000))
            .esdt_balance(UNREGISTERED_TOKEN, wad(100));
        world.account(LIQUIDATOR_ADDRESS).nonce(1).balance(wad(500));

        let price_mock_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .init(wad(1), COLLATERAL_DECIMALS)
            .code(PRICE_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let receipt_template_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .init()
            .code(RECEIPT_TOKEN_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let vault_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::VaultProxy)
            .init(EgldOrEsdtTokenIdentifier::egld())
            .code(VAULT_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let receipt_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .to(vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .deploy_receipt_token(receipt_template_sc)
            .returns(ReturnsResult)
            .run();

        let mut state = VaultTestState {
            world,
            vault_sc,
            receipt_sc,
            price_mock_sc,
        };

        state.grant_role(Role::CollateralManager, OWNER_ADDRESS);
        state.grant_role(Role::BorrowInterestManager, OWNER_ADDRESS);
        state.grant_role(Role::ReceiptInterestManager, OWNER_ADDRESS);
        state.grant_role(Role::LiquidityManager, OWNER_ADDRESS);
        state.grant_role(Role::Liquidator, LIQUIDATOR_ADDRESS);

        state.add_collateral(COLLATERAL_TOKEN, wei(LOAN_TO_VALUE));

        state
    }

    pub fn grant_role(&mut self, role: Role, member: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .grant_role(role, member.to_managed_address())
            .run();
    }

    pub fn add_collateral(&mut self, token: TestTokenIdentifier, loan_to_value: BigUint<StaticApi>) {
        let price_source = self.price_mock_sc.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .add_collateral(token.to_token_identifier(), price_source, loan_to_value)
            .run();
    }

    pub fn set_feed_rate(&mut self, rate: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_mock_sc.clone())
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_rate(rate)
            .run();
    }

    pub fn deposit(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .deposit()
            .egld(amount)
            .run();
    }

    pub fn withdraw(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw(amount)
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw(amount)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn deposit_collateral(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        let transfer = EsdtTokenPayment::new(token.to_token_identifier(), 0, amount);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .deposit_collateral()
            .esdt(transfer)
            .run();
    }

    pub fn deposit_collateral_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &str,
    ) {
        let transfer = EsdtTokenPayment::new(token.to_token_identifier(), 0, amount);
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .deposit_collateral()
            .esdt(transfer)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn withdraw_collateral(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw_collateral(COLLATERAL_TOKEN.to_token_identifier(), amount)
            .run();
    }

    pub fn withdraw_collateral_error(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw_collateral(COLLATERAL_TOKEN.to_token_identifier(), amount)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn borrow(&mut self, from: TestAddress, amount: BigUint<StaticApi>, take_max: bool) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .borrow(COLLATERAL_TOKEN.to_token_identifier(), amount, take_max)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        take_max: bool,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .borrow(COLLATERAL_TOKEN.to_token_identifier(), amount, take_max)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn repay(&mut self, from: TestAddress, paid: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .repay(COLLATERAL_TOKEN.to_token_identifier())
            .egld(paid)
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: TestAddress,
        paid: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .repay(COLLATERAL_TOKEN.to_token_identifier())
            .egld(paid)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: TestAddress,
        user: TestAddress,
        paid: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .liquidate(
                user.to_managed_address(),
                COLLATERAL_TOKEN.to_token_identifier(),
            )
            .egld(paid)
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: TestAddress,
        user: TestAddress,
        paid: BigUint<StaticApi>,
        error_message: &str,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .liquidate(
                user.to_managed_address(),
                COLLATERAL_TOKEN.to_token_identifier(),
            )
            .egld(paid)
            .returns(ExpectMessage(error_message))
            .run();
    }

    pub fn accrue_interest(&mut self, rate: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .accrue_interest(rate)
            .run();
    }

    pub fn sync_deposit_index(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .sync_deposit_index()
            .run();
    }

    pub fn set_liquidity_precision(&mut self, value: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .set_liquidity_precision(value)
            .run();
    }

    pub fn set_liquidity_threshold(&mut self, value: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .set_liquidity_threshold(value)
            .run();
    }

    pub fn total_liquidity(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .total_liquidity()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_borrow_scaled(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .total_borrow_scaled()
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_index(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .borrow_index()
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_index(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .get_deposit_index()
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_accrued(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .interest_accrued()
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_extractable(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .get_max_extractable()
            .returns(ReturnsResult)
            .run()
    }

    pub fn accrued_debt(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .get_accrued_debt(
                user.to_managed_address(),
                COLLATERAL_TOKEN.to_token_identifier(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt_position(&mut self, user: TestAddress) -> DebtPosition<StaticApi> {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .get_debt_position(
                user.to_managed_address(),
                COLLATERAL_TOKEN.to_token_identifier(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_position_healthy(&mut self, user: TestAddress) -> bool {
        self.world
            .query()
            .to(self.vault_sc.clone())
            .typed(proxy_vault::VaultProxy)
            .is_position_healthy(
                user.to_managed_address(),
                COLLATERAL_TOKEN.to_token_identifier(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn receipt_balance(&mut self, holder: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.receipt_sc.clone())
            .typed(proxy_receipt_token::ReceiptTokenProxy)
            .balance_of(holder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }
}

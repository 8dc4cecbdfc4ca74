multiversx_sc::imports!();

use common_constants::{BORROW_ALL, WAD};
use common_errors::{
    ERROR_ASSET_ALREADY_SUPPORTED, ERROR_ASSET_NOT_SUPPORTED, ERROR_COLLATERAL_NOT_REGISTERED,
    ERROR_INVALID_COLLATERAL_PARAMS,
};
use common_structs::{CollateralConfig, Role};

/// Per-token collateral registry and the valuation helpers built on it.
#[multiversx_sc::module]
pub trait CollateralModule:
    crate::storage::StorageModule
    + crate::oracle::OracleModule
    + crate::permissions::PermissionsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Registers a new collateral token. Fails when the token is already
    /// registered; `modifyCollateral` can also create an entry, which is
    /// deliberate admin convenience rather than a security boundary.
    #[endpoint(addCollateral)]
    fn add_collateral(
        &self,
        token: TokenIdentifier,
        price_source: ManagedAddress,
        loan_to_value: BigUint,
    ) {
        self.require_role(Role::CollateralManager);

        let mapper = self.collateral_configs(&token);
        let exists = !mapper.is_empty() && mapper.get().loan_to_value != 0;
        require!(!exists, ERROR_ASSET_ALREADY_SUPPORTED);

        self.store_collateral_config(token, price_source, loan_to_value);
    }

    /// Overwrites (or creates) the entry for `token`.
    #[endpoint(modifyCollateral)]
    fn modify_collateral(
        &self,
        token: TokenIdentifier,
        price_source: ManagedAddress,
        loan_to_value: BigUint,
    ) {
        self.require_role(Role::CollateralManager);

        self.store_collateral_config(token, price_source, loan_to_value);
    }

    #[endpoint(modifyPriceSource)]
    fn modify_price_source(&self, token: TokenIdentifier, price_source: ManagedAddress) {
        self.require_role(Role::CollateralManager);

        let config = self.existing_collateral_config(&token);
        self.store_collateral_config(token, price_source, config.loan_to_value);
    }

    #[endpoint(modifyLoanToValue)]
    fn modify_loan_to_value(&self, token: TokenIdentifier, loan_to_value: BigUint) {
        self.require_role(Role::CollateralManager);

        let config = self.existing_collateral_config(&token);
        self.store_collateral_config(token, config.price_source, loan_to_value);
    }

    fn store_collateral_config(
        &self,
        token: TokenIdentifier,
        price_source: ManagedAddress,
        loan_to_value: BigUint,
    ) {
        require!(
            token.is_valid_esdt_identifier(),
            ERROR_INVALID_COLLATERAL_PARAMS
        );
        require!(!price_source.is_zero(), ERROR_INVALID_COLLATERAL_PARAMS);
        require!(
            loan_to_value >= BigUint::from(WAD),
            ERROR_INVALID_COLLATERAL_PARAMS
        );

        self.collateral_config_event(&token, &price_source, &loan_to_value);
        self.collateral_configs(&token).set(&CollateralConfig {
            price_source,
            loan_to_value,
        });
    }

    fn existing_collateral_config(&self, token: &TokenIdentifier) -> CollateralConfig<Self::Api> {
        let mapper = self.collateral_configs(token);
        require!(!mapper.is_empty(), ERROR_COLLATERAL_NOT_REGISTERED);

        let config = mapper.get();
        require!(config.loan_to_value != 0, ERROR_COLLATERAL_NOT_REGISTERED);

        config
    }

    fn supported_collateral_config(&self, token: &TokenIdentifier) -> CollateralConfig<Self::Api> {
        let mapper = self.collateral_configs(token);
        require!(!mapper.is_empty(), ERROR_ASSET_NOT_SUPPORTED);

        let config = mapper.get();
        require!(!config.price_source.is_zero(), ERROR_ASSET_NOT_SUPPORTED);

        config
    }

    /// Base-asset value of `amount` units of a collateral token.
    fn valuate(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        let config = self.supported_collateral_config(token);

        self.quote(&config.price_source, amount)
    }

    /// Borrowing capacity of `amount` units of collateral, haircut
    /// applied via the loan-to-value multiplier.
    fn max_borrow_from_collateral(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        let config = self.supported_collateral_config(token);
        let value = self.quote(&config.price_source, amount);

        self.div_wad(&value, &config.loan_to_value)
    }

    /// Collateral units needed to back a borrow of `amount` base-asset
    /// units. The borrow-all sentinel passes through unchanged; the
    /// caller reads it as "take all available collateral".
    fn collateral_needed_for_borrow(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        if amount == &BigUint::from(BORROW_ALL) {
            return amount.clone();
        }

        let per_unit = self.max_borrow_from_collateral(token, &BigUint::from(WAD));

        self.div_wad(amount, &per_unit)
    }

    #[view(getCollateralConfig)]
    fn get_collateral_config(&self, token: TokenIdentifier) -> CollateralConfig<Self::Api> {
        self.existing_collateral_config(&token)
    }
}

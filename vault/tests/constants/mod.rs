use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const WAD: u64 = 1_000_000_000_000_000_000;

/// 150% loan-to-value multiplier: 1.5 units of collateral value back 1
/// unit of borrow.
pub const LOAN_TO_VALUE: u128 = 1_500_000_000_000_000_000;

/// Mirrors the protocol floors in `common-constants`.
pub const MIN_LIQUIDITY_THRESHOLD: u128 = 50_000_000_000_000_000;
pub const MIN_LIQUIDITY_HEALTH_RATE: u128 = 20_000_000_000_000_000;

pub const BORROW_ALL: u128 = u128::MAX;

pub const COLLATERAL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("COLL-abcdef");
pub const COLLATERAL_DECIMALS: u8 = 18;

pub const UNREGISTERED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NOPE-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");

pub const VAULT_PATH: MxscPath = MxscPath::new("output/vault.mxsc.json");
pub const RECEIPT_TOKEN_PATH: MxscPath =
    MxscPath::new("../receipt_token/output/receipt-token.mxsc.json");
pub const PRICE_MOCK_PATH: MxscPath = MxscPath::new("../price_mock/output/price-mock.mxsc.json");

#![no_std]

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_COLLATERAL_NOT_REGISTERED: &[u8] = b"Collateral not registered.";

pub static ERROR_INVALID_COLLATERAL_PARAMS: &[u8] = b"Invalid collateral parameters.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_DEPOSIT: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_NO_DEBT_FOR_COLLATERAL: &[u8] = b"No debt found for this collateral.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_HEALTH_FACTOR: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient balance.";

pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient allowance.";

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_INVALID_RATE: &[u8] = b"Invalid rate from price feed.";

pub static ERROR_MISSING_ROLE: &[u8] = b"Caller is missing the required role.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_REENTRANT_CALL: &[u8] = b"Reentrant call.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Receipt token template is empty.";

pub static ERROR_RECEIPT_TOKEN_NOT_SET: &[u8] = b"Receipt token not set.";

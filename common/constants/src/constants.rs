#![no_std]

/// Fixed-point scale factor representing 1.0.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Floor for the configurable liquidity threshold (5%).
pub const MIN_LIQUIDITY_THRESHOLD: u128 = 50_000_000_000_000_000;

/// Health rate at or below which the pool stops lending out liquidity (2%).
pub const MIN_LIQUIDITY_HEALTH_RATE: u128 = 20_000_000_000_000_000;

/// Sentinel borrow amount meaning "as much as the available collateral supports".
pub const BORROW_ALL: u128 = u128::MAX;

use multiversx_sc_scenario::imports::*;

pub mod constants;
pub mod setup;

use constants::*;
use setup::*;

/// 10 in the pool, 1000 collateral locked behind a 9.8 borrow-max loan.
/// One 50% accrual pushes the accrued debt past the health limit.
fn open_standard_position(state: &mut VaultTestState) {
    state.deposit(SUPPLIER_ADDRESS, wad(10));
    state.deposit_collateral(BORROWER_ADDRESS, COLLATERAL_TOKEN, wad(1_000));
    state.borrow(BORROWER_ADDRESS, wei(BORROW_ALL), true);
}

#[test]
fn test_liquidate_healthy_position_fails() {
    let mut state = VaultTestState::new();
    open_standard_position(&mut state);

    assert!(state.is_position_healthy(BORROWER_ADDRESS));
    state.liquidate_error(
        LIQUIDATOR_ADDRESS,
        BORROWER_ADDRESS,
        wad(1),
        "Health not low enough for liquidation.",
    );

    // nothing moved
    let position = state.debt_position(BORROWER_ADDRESS);
    assert_eq!(position.debt, wei(9_800_000_000_000_000_000));
    assert_eq!(position.locked_collateral, wad(1_000));
}

#[test]
fn test_liquidate_zero_debt_position_fails() {
    let mut state = VaultTestState::new();

    state.deposit(SUPPLIER_ADDRESS, wad(10));
    state.deposit_collateral(BORROWER_ADDRESS, COLLATERAL_TOKEN, wad(1_000));

    state.liquidate_error(
        LIQUIDATOR_ADDRESS,
        BORROWER_ADDRESS,
        wad(1),
        "No debt found for this collateral.",
    );
}

#[test]
fn test_liquidation_requires_role() {
    let mut state = VaultTestState::new();
    open_standard_position(&mut state);
    state.accrue_interest(wei(500_000_000_000_000_000));

    state.liquidate_error(
        BORROWER_ADDRESS,
        BORROWER_ADDRESS,
        wad(1),
        "Caller is missing the required role.",
    );
}

#[test]
fn test_partial_liquidation_seizes_proportionally() {
    let mut state = VaultTestState::new();
    open_standard_position(&mut state);

    state.accrue_interest(wei(500_000_000_000_000_000));
    assert!(!state.is_position_healthy(BORROWER_ADDRESS));

    // half of the 14.7 owed
    state.liquidate(
        LIQUIDATOR_ADDRESS,
        BORROWER_ADDRESS,
        wei(7_350_000_000_000_000_000),
    );

    let position = state.debt_position(BORROWER_ADDRESS);
    assert_eq!(position.debt, wei(4_900_000_000_000_000_000));
    assert_eq!(position.locked_collateral, wad(500));

    assert_eq!(state.total_liquidity(), wei(7_550_000_000_000_000_000));
    state
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .balance(wei(492_650_000_000_000_000_000))
        .esdt_balance(COLLATERAL_TOKEN, wad(500));

    // the payment restored pool health, so a second pass is rejected
    assert!(state.is_position_healthy(BORROWER_ADDRESS));
    state.liquidate_error(
        LIQUIDATOR_ADDRESS,
        BORROWER_ADDRESS,
        wad(1),
        "Health not low enough for liquidation.",
    );
}

#[test]
fn test_full_liquidation_closes_position() {
    let mut state = VaultTestState::new();
    open_standard_position(&mut state);

    state.accrue_interest(wei(500_000_000_000_000_000));
    state.liquidate(LIQUIDATOR_ADDRESS, BORROWER_ADDRESS, wad(20));

    let position = state.debt_position(BORROWER_ADDRESS);
    assert_eq!(position.debt, BigUint::zero());
    assert_eq!(position.locked_collateral, BigUint::zero());

    // paid 20, owed 14.7, overpayment refunded
    state
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .balance(wei(485_300_000_000_000_000_000))
        .esdt_balance(COLLATERAL_TOKEN, wad(1_000));
}

#[test]
fn test_liquidation_reward_grows_with_precision() {
    // same liquidation twice: once with the interest reward disabled,
    // once with precision at 0.4
    let mut without_reward = VaultTestState::new();
    open_standard_position(&mut without_reward);
    without_reward.accrue_interest(wei(500_000_000_000_000_000));
    without_reward.liquidate(LIQUIDATOR_ADDRESS, BORROWER_ADDRESS, wad(20));
    without_reward
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .balance(wei(485_300_000_000_000_000_000));

    let mut with_reward = VaultTestState::new();
    open_standard_position(&mut with_reward);
    with_reward.set_liquidity_precision(wei(400_000_000_000_000_000));
    with_reward.accrue_interest(wei(500_000_000_000_000_000));
    with_reward.liquidate(LIQUIDATOR_ADDRESS, BORROWER_ADDRESS, wad(20));

    // keeps 0.4 of its share of the 4.9 interest on top of the refund
    with_reward
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .balance(wei(486_606_666_666_666_666_663));
}

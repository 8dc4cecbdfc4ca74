#![no_std]

use common_constants::WAD;
use common_errors::ERROR_DIVISION_BY_ZERO;

multiversx_sc::imports!();

/// WAD fixed-point helpers shared by every contract in the workspace.
///
/// All division truncates toward zero. The downward bias of partial
/// results is protocol behavior: full-payoff comparisons use `>=`.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / WAD`, truncating.
    fn mul_wad(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b / BigUint::from(WAD)
    }

    /// `a * WAD / b`, truncating.
    fn div_wad(&self, a: &BigUint, b: &BigUint) -> BigUint {
        require!(b > &BigUint::zero(), ERROR_DIVISION_BY_ZERO);

        a * &BigUint::from(WAD) / b
    }

    fn wad(&self) -> BigUint {
        BigUint::from(WAD)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(&self, a: BigUint, b: BigUint) -> BigUint {
        if a > b {
            a
        } else {
            b
        }
    }
}

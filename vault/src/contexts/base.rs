multiversx_sc::imports!();

/// In-memory snapshot of the pool aggregates, committed back to storage
/// when dropped. Keeps the aggregates consistent within one operation
/// without repeated storage reads.
pub struct StorageCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    sc_ref: &'a C,
    pub total_liquidity: BigUint<C::Api>,
    pub total_borrow_scaled: BigUint<C::Api>,
    pub borrow_index: BigUint<C::Api>,
    pub interest_accrued: BigUint<C::Api>,
}

impl<'a, C> StorageCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        StorageCache {
            total_liquidity: sc_ref.total_liquidity().get(),
            total_borrow_scaled: sc_ref.total_borrow_scaled().get(),
            borrow_index: sc_ref.borrow_index().get(),
            interest_accrued: sc_ref.interest_accrued().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for StorageCache<'_, C>
where
    C: crate::storage::StorageModule,
{
    fn drop(&mut self) {
        self.sc_ref.total_liquidity().set(&self.total_liquidity);
        self.sc_ref
            .total_borrow_scaled()
            .set(&self.total_borrow_scaled);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref.interest_accrued().set(&self.interest_accrued);
    }
}

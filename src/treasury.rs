multiversx_sc::imports!();

/// Stake accounting. Every escrowed stake is in exactly one bucket: pending
/// (its poll is Waiting, or Expired and not yet refunded), refunded, or
/// credited to the treasury when its poll succeeded. Only the treasury
/// bucket can be withdrawn by the owner.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::config::ConfigModule + crate::events::EventsModule {
    #[only_owner]
    #[endpoint(withdrawByAdmin)]
    fn withdraw_by_admin(&self, to: ManagedAddress, amount: BigUint) {
        let available = self.treasury_balance().get();
        require!(amount <= available, "ExceedAvailableToken");

        self.treasury_balance().set(&(available - &amount));
        self.total_admin_withdrawn().update(|total| *total += &amount);

        if amount > 0u64 {
            let stake_token_id = self.stake_token_id().get();
            self.send().direct_esdt(&to, &stake_token_id, 0, &amount);
        }
        self.admin_withdraw_event(&to, &amount);
    }

    // ========================================================
    // INTERNAL: escrow bookkeeping
    // ========================================================

    fn record_stake(&self, amount: &BigUint) {
        self.total_staked().update(|total| *total += amount);
    }

    fn record_refund(&self, amount: &BigUint) {
        self.total_refunded().update(|total| *total += amount);
    }

    fn credit_treasury(&self, amount: &BigUint) {
        self.treasury_balance().update(|balance| *balance += amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (total staked, total refunded, total withdrawn by the owner)
    #[view(getEscrowStats)]
    fn get_escrow_stats(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.total_staked().get(),
            self.total_refunded().get(),
            self.total_admin_withdrawn().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTreasuryBalance)]
    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalRefunded")]
    fn total_refunded(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalAdminWithdrawn")]
    fn total_admin_withdrawn(&self) -> SingleValueMapper<BigUint>;
}

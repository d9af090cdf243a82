multiversx_sc::imports!();

use crate::types::Period;

/// Issuance windows. Only one period is open at a time, and a new one may
/// start only after the previous quota has been fully minted.
#[multiversx_sc::module]
pub trait PeriodModule: crate::config::ConfigModule + crate::events::EventsModule {
    #[only_owner]
    #[endpoint(startPeriod)]
    fn start_period(&self, quota: u64) {
        require!(quota > 0, "PeriodTokenSupplyTooLow");

        let period = self.period_snapshot();
        require!(!period.open, "DuringPeriod: during period");
        require!(
            period.ordinal == 0 || period.remaining_quota == 0,
            "PrevPeriodTokenLeft"
        );

        let released = self.released_token_supply().get();
        let max_supply = self.max_token_supply().get();
        require!(
            quota <= max_supply && released <= max_supply - quota,
            "ExceedMaxTokenSupply"
        );

        let ordinal = period.ordinal + 1;
        self.period().set(&Period {
            ordinal,
            total_quota: quota,
            remaining_quota: quota,
            open: true,
        });
        self.released_token_supply().set(released + quota);

        let now = self.blockchain().get_block_timestamp();
        self.period_started_event(ordinal, quota, now);
    }

    /// Closes the open period. Unminted quota stays frozen on it.
    #[only_owner]
    #[endpoint(endPeriod)]
    fn end_period(&self) {
        let mut period = self.period_snapshot();
        require!(period.open, "DuringPeriod: not during period");

        period.open = false;
        self.period().set(&period);

        let now = self.blockchain().get_block_timestamp();
        self.period_ended_event(period.ordinal, period.remaining_quota, now);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn period_snapshot(&self) -> Period {
        if self.period().is_empty() {
            return Period::default();
        }
        self.period().get()
    }

    fn require_during_period(&self) -> Period {
        let period = self.period_snapshot();
        require!(period.open, "DuringPeriod: not during period");
        period
    }

    /// Takes one unit of the current period's quota, whether or not the
    /// period is still open.
    fn consume_period_quota(&self) -> u64 {
        let mut period = self.period_snapshot();
        require!(period.remaining_quota > 0, "ExceedAvailableTokenSupply");

        period.remaining_quota -= 1;
        self.period().set(&period);
        period.remaining_quota
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(currentPeriod)]
    fn current_period(&self) -> u64 {
        self.period_snapshot().ordinal
    }

    #[view(duringPeriod)]
    fn during_period(&self) -> bool {
        self.period_snapshot().open
    }

    #[view(getPeriod)]
    fn get_period(&self) -> Period {
        self.period_snapshot()
    }

    #[view(availableTokenSupply)]
    fn available_token_supply(&self) -> u64 {
        self.period_snapshot().remaining_quota
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("period")]
    fn period(&self) -> SingleValueMapper<Period>;

    /// Sum of the quotas of every period ever started
    #[view(getReleasedTokenSupply)]
    #[storage_mapper("releasedTokenSupply")]
    fn released_token_supply(&self) -> SingleValueMapper<u64>;
}

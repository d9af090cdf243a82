multiversx_sc::imports!();

use crate::types::{compute_poll_status, Poll, PollStatus, VoteRecord};

/// Longest a poll may run: 7 days in seconds
pub const MAX_POLL_DURATION: u64 = 604_800;

/// Stake-backed polls. Voters escrow the level's stake; a poll that reaches
/// its quorum hands the stakes to the treasury, an expired one lets each
/// voter reclaim theirs.
#[multiversx_sc::module]
pub trait PollModule:
    crate::config::ConfigModule
    + crate::period::PeriodModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createPoll
    // ========================================================

    #[endpoint(createPoll)]
    fn create_poll(&self, level: usize, deadline: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let period = self.require_during_period();
        self.require_level(level);

        let now = self.blockchain().get_block_timestamp();
        require!(
            deadline > now && deadline <= now + MAX_POLL_DURATION,
            "InvalidDeadline"
        );

        // A resolved poll frees the slot; its record stays reachable by id
        // for the voters still holding stakes on it.
        if !self.poll_of(&caller).is_empty() {
            let previous_id = self.poll_of(&caller).get();
            require!(
                self.poll_status_by_id(previous_id) != PollStatus::Waiting,
                "HasPollAlready"
            );
        }

        let poll_id = self.poll_count().get() + 1;
        let poll = Poll {
            id: poll_id,
            owner: caller.clone(),
            level,
            deadline,
            vote_count: 0,
            period: period.ordinal,
            created_at: now,
        };
        self.polls(poll_id).set(&poll);
        self.poll_of(&caller).set(poll_id);
        self.poll_count().set(poll_id);

        self.poll_created_event(poll_id, &caller, level, deadline);

        poll_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Payment must be exactly the level's stake in the stake token.
    // ========================================================

    #[payable("*")]
    #[endpoint(vote)]
    fn vote(&self, poll_owner: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(!self.poll_of(&poll_owner).is_empty(), "NoPoll");

        let poll_id = self.poll_of(&poll_owner).get();
        let previous_vote = if self.vote_record(&caller).is_empty() {
            None
        } else {
            Some(self.vote_record(&caller).get())
        };
        if let Some(previous) = &previous_vote {
            require!(previous.poll_id != poll_id, "AlreadyVote");
        }

        let mut poll = self.polls(poll_id).get();
        let level = self.levels().get(poll.level);
        let now = self.blockchain().get_block_timestamp();
        let status =
            compute_poll_status(&poll, level.required_voters, &self.period_snapshot(), now);
        require!(status == PollStatus::Waiting, "InvalidPollStatus");

        // One stake slot per voter. It can only be reused once the stake it
        // holds went to the treasury; an expired stake must be withdrawn first.
        if let Some(previous) = &previous_vote {
            require!(
                self.poll_status_by_id(previous.poll_id) == PollStatus::Success,
                "AlreadyVote"
            );
        }

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.stake_token_id().get()
                && payment.token_nonce == 0
                && payment.amount == level.required_stake,
            "InvalidStakePayment"
        );

        poll.vote_count += 1;
        self.polls(poll_id).set(&poll);
        self.vote_record(&caller).set(&VoteRecord {
            poll_id,
            poll_owner: poll_owner.clone(),
            staked_amount: level.required_stake.clone(),
        });
        self.record_stake(&level.required_stake);

        self.vote_event(poll_id, &caller, poll.vote_count, &level.required_stake);

        if poll.vote_count == level.required_voters {
            let credit = &level.required_stake * level.required_voters;
            self.credit_treasury(&credit);
            self.poll_succeeded_event(poll_id, &poll_owner, &credit);
        }
    }

    // ========================================================
    // ENDPOINT: withdrawByVoter
    // Refunds the caller's stake once its poll expired.
    // ========================================================

    #[endpoint(withdrawByVoter)]
    fn withdraw_by_voter(&self) {
        let caller = self.blockchain().get_caller();
        require!(!self.vote_record(&caller).is_empty(), "NoTokenWithdrawable");

        let record = self.vote_record(&caller).get();
        require!(
            self.poll_status_by_id(record.poll_id) == PollStatus::Expired,
            "InvalidPollStatus"
        );

        self.vote_record(&caller).clear();
        self.record_refund(&record.staked_amount);

        let stake_token_id = self.stake_token_id().get();
        self.send()
            .direct_esdt(&caller, &stake_token_id, 0, &record.staked_amount);
        self.voter_withdraw_event(record.poll_id, &caller, &record.staked_amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn poll_status_by_id(&self, poll_id: u64) -> PollStatus {
        let poll = self.polls(poll_id).get();
        let level = self.levels().get(poll.level);
        let now = self.blockchain().get_block_timestamp();
        compute_poll_status(&poll, level.required_voters, &self.period_snapshot(), now)
    }

    fn require_poll_id(&self, owner: &ManagedAddress) -> u64 {
        require!(!self.poll_of(owner).is_empty(), "NoPoll");
        self.poll_of(owner).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(pollStatus)]
    fn poll_status(&self, owner: ManagedAddress) -> PollStatus {
        let poll_id = self.require_poll_id(&owner);
        self.poll_status_by_id(poll_id)
    }

    #[view(getPoll)]
    fn get_poll(&self, owner: ManagedAddress) -> Poll<Self::Api> {
        let poll_id = self.require_poll_id(&owner);
        self.polls(poll_id).get()
    }

    #[view(getPollById)]
    fn get_poll_by_id(&self, poll_id: u64) -> OptionalValue<Poll<Self::Api>> {
        if self.polls(poll_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.polls(poll_id).get())
    }

    #[view(getVoteRecord)]
    fn get_vote_record(&self, voter: ManagedAddress) -> OptionalValue<VoteRecord<Self::Api>> {
        if self.vote_record(&voter).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.vote_record(&voter).get())
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPollCount)]
    #[storage_mapper("pollCount")]
    fn poll_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("polls")]
    fn polls(&self, poll_id: u64) -> SingleValueMapper<Poll<Self::Api>>;

    /// Latest poll created by each address
    #[storage_mapper("pollOf")]
    fn poll_of(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("voteRecord")]
    fn vote_record(&self, voter: &ManagedAddress) -> SingleValueMapper<VoteRecord<Self::Api>>;
}

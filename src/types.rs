multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Poll Status — computed, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum PollStatus {
    /// Never returned by `pollStatus`; addresses without a poll are rejected.
    None,
    /// Collecting votes: below quorum, before the deadline, period still open.
    Waiting,
    /// Quorum reached while Waiting. Terminal; stakes belong to the treasury.
    Success,
    /// Deadline passed or the poll's period closed before quorum. Terminal;
    /// stakes are refundable to their voters.
    Expired,
}

// ============================================================
// Level — one row of the static level table
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Level<M: ManagedTypeApi> {
    /// Amount of the stake token every voter escrows.
    pub required_stake: BigUint<M>,
    /// Distinct voters needed for the poll to succeed.
    pub required_voters: u64,
}

// ============================================================
// Period — issuance window
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug, Default)]
pub struct Period {
    /// 1 for the first period ever started, 0 if none has.
    pub ordinal: u64,
    pub total_quota: u64,
    pub remaining_quota: u64,
    pub open: bool,
}

impl Period {
    /// True while `ordinal` is the period currently accepting polls.
    pub fn is_open_period(&self, ordinal: u64) -> bool {
        self.open && self.ordinal == ordinal
    }
}

// ============================================================
// Poll — the per-address campaign
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Poll<M: ManagedTypeApi> {
    pub id: u64,
    pub owner: ManagedAddress<M>,
    /// 1-based index into the level table
    pub level: usize,
    pub deadline: u64,
    pub vote_count: u64,
    /// Ordinal of the period the poll was created in
    pub period: u64,
    pub created_at: u64,
}

/// Derives a poll's status from its stored fields, the period snapshot and
/// the block timestamp.
///
/// Success is decided by the vote count alone: `vote` only accepts votes while
/// the poll is Waiting, so the threshold can never be crossed after expiry and
/// a successful poll never regresses.
pub fn compute_poll_status<M: ManagedTypeApi>(
    poll: &Poll<M>,
    required_voters: u64,
    period: &Period,
    now: u64,
) -> PollStatus {
    if poll.vote_count >= required_voters {
        return PollStatus::Success;
    }
    // the deadline is the instant voting closes, so no vote lands at it
    if !period.is_open_period(poll.period) || now >= poll.deadline {
        return PollStatus::Expired;
    }
    PollStatus::Waiting
}

// ============================================================
// Vote Record — one escrowed stake per voter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub poll_id: u64,
    pub poll_owner: ManagedAddress<M>,
    pub staked_amount: BigUint<M>,
}

// ============================================================
// Mint authorization — the message the authority signs
// ============================================================

#[type_abi]
#[derive(TopEncode, NestedEncode, Clone, Debug)]
pub struct AuthorizationDomain<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub version: ManagedBuffer<M>,
    pub verifying_contract: ManagedAddress<M>,
}

#[type_abi]
#[derive(TopEncode, NestedEncode, Clone, Debug)]
pub struct MintAuthorization<M: ManagedTypeApi> {
    pub domain: AuthorizationDomain<M>,
    pub uuid: ManagedBuffer<M>,
    pub user_address: ManagedAddress<M>,
    pub deadline: u64,
    pub metadata_uri: ManagedBuffer<M>,
}

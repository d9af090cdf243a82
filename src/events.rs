multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("periodStarted")]
    fn period_started_event(
        &self,
        #[indexed] ordinal: u64,
        #[indexed] quota: u64,
        timestamp: u64,
    );

    #[event("periodEnded")]
    fn period_ended_event(
        &self,
        #[indexed] ordinal: u64,
        #[indexed] remaining_quota: u64,
        timestamp: u64,
    );

    #[event("pollCreated")]
    fn poll_created_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] level: usize,
        deadline: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote_count: u64,
        stake: &BigUint,
    );

    #[event("pollSucceeded")]
    fn poll_succeeded_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] owner: &ManagedAddress,
        treasury_credit: &BigUint,
    );

    #[event("voterWithdraw")]
    fn voter_withdraw_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("authorizationConsumed")]
    fn authorization_consumed_event(
        &self,
        #[indexed] uuid: &ManagedBuffer,
        #[indexed] user: &ManagedAddress,
        remaining_quota: u64,
    );

    #[event("collectibleMinted")]
    fn collectible_minted_event(
        &self,
        #[indexed] token_id: u64,
        #[indexed] owner: &ManagedAddress,
        uri: &ManagedBuffer,
    );

    #[event("adminWithdraw")]
    fn admin_withdraw_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);
}

#![no_std]

multiversx_sc::imports!();

pub mod authorization;
pub mod collectible;
pub mod config;
pub mod events;
pub mod period;
pub mod poll;
pub mod treasury;
pub mod types;

// ============================================================
// Contract
// Two gates before a collectible is issued: a stake-backed poll
// reaching its quorum, and a signed single-use authorization.
// ============================================================

#[multiversx_sc::contract]
pub trait OperatorNft:
    config::ConfigModule
    + events::EventsModule
    + period::PeriodModule
    + treasury::TreasuryModule
    + poll::PollModule
    + collectible::CollectibleModule
    + authorization::AuthorizationModule
{
    /// `levels` are (required stake, required voters) pairs, addressed from 1
    /// in the order given.
    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        max_token_supply: u64,
        authority: ManagedAddress,
        stake_token_id: TokenIdentifier,
        levels: MultiValueEncoded<MultiValue2<BigUint, u64>>,
    ) {
        self.init_collection(name, symbol);
        self.init_config(max_token_supply, authority, stake_token_id, levels);
    }

    #[upgrade]
    fn upgrade(&self) {}
}

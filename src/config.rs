multiversx_sc::imports!();

use crate::types::Level;

/// Construction-time configuration: the level table, the stake token, the
/// mint authority and the global supply ceiling.
#[multiversx_sc::module]
pub trait ConfigModule {
    fn init_config(
        &self,
        max_token_supply: u64,
        authority: ManagedAddress,
        stake_token_id: TokenIdentifier,
        levels: MultiValueEncoded<MultiValue2<BigUint, u64>>,
    ) {
        require!(
            stake_token_id.is_valid_esdt_identifier(),
            "InvalidStakeToken"
        );

        self.max_token_supply().set(max_token_supply);
        self.authority().set(&authority);
        self.stake_token_id().set(&stake_token_id);

        for level in levels.into_iter() {
            let (required_stake, required_voters) = level.into_tuple();
            require!(
                required_stake > 0u64 && required_voters > 0,
                "InvalidLevelTable"
            );
            self.levels().push(&Level {
                required_stake,
                required_voters,
            });
        }
        require!(!self.levels().is_empty(), "InvalidLevelTable");
    }

    /// Resolves a 1-based level index.
    fn require_level(&self, index: usize) -> Level<Self::Api> {
        require!(
            index >= 1 && index <= self.levels().len(),
            "InValidLevel"
        );
        self.levels().get(index)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLevel)]
    fn get_level(&self, index: usize) -> Level<Self::Api> {
        self.require_level(index)
    }

    #[view(getLevels)]
    fn get_levels(&self) -> MultiValueEncoded<Level<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for level in self.levels().iter() {
            result.push(level);
        }
        result
    }

    #[view(getLevelCount)]
    fn get_level_count(&self) -> usize {
        self.levels().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("levels")]
    fn levels(&self) -> VecMapper<Level<Self::Api>>;

    #[view(getMaxTokenSupply)]
    #[storage_mapper("maxTokenSupply")]
    fn max_token_supply(&self) -> SingleValueMapper<u64>;

    #[view(getAuthority)]
    #[storage_mapper("authority")]
    fn authority(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStakeTokenId)]
    #[storage_mapper("stakeTokenId")]
    fn stake_token_id(&self) -> SingleValueMapper<TokenIdentifier>;
}

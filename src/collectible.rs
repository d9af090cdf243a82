multiversx_sc::imports!();

/// Enumerable ownership ledger for the issued collectibles. Ids are assigned
/// sequentially from 0.
#[multiversx_sc::module]
pub trait CollectibleModule: crate::events::EventsModule {
    fn init_collection(&self, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.collection_name().set(&name);
        self.collection_symbol().set(&symbol);
    }

    fn mint_collectible(&self, to: &ManagedAddress, uri: &ManagedBuffer) -> u64 {
        let token_id = self.collectible_count().get();

        self.collectible_owner(token_id).set(to);
        self.collectible_uri(token_id).set(uri);
        self.owned_collectibles(to).push(&token_id);
        self.collectible_count().set(token_id + 1);

        self.collectible_minted_event(token_id, to, uri);
        token_id
    }

    fn require_collectible(&self, token_id: u64) {
        require!(
            token_id < self.collectible_count().get(),
            "NonexistentToken"
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        self.require_collectible(token_id);
        self.collectible_owner(token_id).get()
    }

    #[view(tokenURI)]
    fn token_uri(&self, token_id: u64) -> ManagedBuffer {
        self.require_collectible(token_id);
        self.collectible_uri(token_id).get()
    }

    #[view(tokensOfOwner)]
    fn tokens_of_owner(&self, owner: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for token_id in self.owned_collectibles(&owner).iter() {
            result.push(token_id);
        }
        result
    }

    #[view(balanceOf)]
    fn balance_of(&self, owner: ManagedAddress) -> usize {
        self.owned_collectibles(&owner).len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(name)]
    #[storage_mapper("collectionName")]
    fn collection_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(symbol)]
    #[storage_mapper("collectionSymbol")]
    fn collection_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(totalSupply)]
    #[storage_mapper("collectibleCount")]
    fn collectible_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("collectibleOwner")]
    fn collectible_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("collectibleUri")]
    fn collectible_uri(&self, token_id: u64) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("ownedCollectibles")]
    fn owned_collectibles(&self, owner: &ManagedAddress) -> VecMapper<u64>;
}

multiversx_sc::imports!();

use ed25519_dalek::{Signature, VerifyingKey};
use multiversx_sc::codec::TopEncode;

use crate::types::{AuthorizationDomain, MintAuthorization};

pub const AUTHORIZATION_DOMAIN_VERSION: &[u8] = b"1";

const ED25519_SIGNATURE_LEN: usize = 64;

/// Signature-gated minting. The authority signs, off-chain, the keccak256
/// digest of a `MintAuthorization` with the ed25519 key behind its address.
/// Verification runs in the contract rather than through the VM hook, which
/// aborts with its own message instead of returning a result.
///
/// Nothing here looks at polls: the authority is expected to sign only for
/// owners of successful polls, but that rule lives off-chain.
#[multiversx_sc::module]
pub trait AuthorizationModule:
    crate::config::ConfigModule
    + crate::period::PeriodModule
    + crate::collectible::CollectibleModule
    + crate::events::EventsModule
{
    #[endpoint(checkTokenAndMint)]
    fn check_token_and_mint(
        &self,
        uuid: ManagedBuffer,
        user_address: ManagedAddress,
        deadline: u64,
        metadata_uri: ManagedBuffer,
        signature: ManagedBuffer,
    ) -> u64 {
        // `deadline` is the last second the authorization is usable
        let now = self.blockchain().get_block_timestamp();
        require!(now <= deadline, "ExpiredDeadline");
        require!(!self.used_uuid(&uuid).get(), "UsedUUID");

        let digest = self.authorization_digest(&uuid, &user_address, deadline, &metadata_uri);
        self.verify_authority_signature(&digest, &signature);

        let caller = self.blockchain().get_caller();
        require!(caller == user_address, "InvalidUserAddress");

        let remaining_quota = self.consume_period_quota();
        self.used_uuid(&uuid).set(true);
        self.authorization_consumed_event(&uuid, &user_address, remaining_quota);

        self.mint_collectible(&user_address, &metadata_uri)
    }

    // ========================================================
    // INTERNAL: credential verification
    // ========================================================

    /// Hash of the authorization bound to this contract and domain version.
    fn authorization_digest(
        &self,
        uuid: &ManagedBuffer,
        user_address: &ManagedAddress,
        deadline: u64,
        metadata_uri: &ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        let authorization = MintAuthorization {
            domain: AuthorizationDomain {
                name: self.collection_name().get(),
                version: ManagedBuffer::from(AUTHORIZATION_DOMAIN_VERSION),
                verifying_contract: self.blockchain().get_sc_address(),
            },
            uuid: uuid.clone(),
            user_address: user_address.clone(),
            deadline,
            metadata_uri: metadata_uri.clone(),
        };

        let mut encoded = ManagedBuffer::new();
        if let Err(err) = authorization.top_encode(&mut encoded) {
            sc_panic!(err.message_str());
        }
        self.crypto().keccak256(&encoded)
    }

    /// Rejects with `InValidSignerAddress` unless `signature` is the
    /// configured authority's ed25519 signature of `digest`. Any other key,
    /// any altered field and any malformed signature get the same rejection.
    fn verify_authority_signature(
        &self,
        digest: &ManagedByteArray<Self::Api, 32>,
        signature: &ManagedBuffer,
    ) {
        require!(
            signature.len() == ED25519_SIGNATURE_LEN,
            "InValidSignerAddress"
        );
        let mut signature_bytes = [0u8; ED25519_SIGNATURE_LEN];
        signature.load_to_byte_array(&mut signature_bytes);

        let authority_key = self.authority().get().to_byte_array();
        let verified = match VerifyingKey::from_bytes(&authority_key) {
            Ok(key) => key
                .verify_strict(&digest.to_byte_array(), &Signature::from_bytes(&signature_bytes))
                .is_ok(),
            Err(_) => false,
        };
        require!(verified, "InValidSignerAddress");
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAuthorizationDigest)]
    fn get_authorization_digest(
        &self,
        uuid: ManagedBuffer,
        user_address: ManagedAddress,
        deadline: u64,
        metadata_uri: ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.authorization_digest(&uuid, &user_address, deadline, &metadata_uri)
    }

    #[view(isUuidUsed)]
    fn is_uuid_used(&self, uuid: ManagedBuffer) -> bool {
        self.used_uuid(&uuid).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("usedUuid")]
    fn used_uuid(&self, uuid: &ManagedBuffer) -> SingleValueMapper<bool>;
}

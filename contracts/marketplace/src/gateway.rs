//! Delegated execution gateway.
//!
//! A relayer submits a call authorized by the signer over the pair
//! `(nonce, call)`. The stored per-signer nonce must match and is bumped
//! before dispatch, so a captured authorization cannot be replayed.

use soroban_sdk::{symbol_short, Address, Env, IntoVal};

use crate::errors::{fail, require_enabled, MarketError};
use crate::storage;
use crate::types::MetaCall;

/// Next expected nonce for a signer.
pub fn get_nonce(e: &Env, signer: Address) -> u64 {
    storage::get_nonce(e, &signer)
}

/// Execute a delegated call on behalf of `signer`, submitted by `relayer`.
pub fn execute_meta_call(
    e: &Env,
    relayer: Address,
    signer: Address,
    nonce: u64,
    call: MetaCall,
) -> Result<(), MarketError> {
    // CHECKS
    require_enabled(e)?;
    relayer.require_auth();
    // The signer authorizes the exact (nonce, call) pair.
    signer.require_auth_for_args((nonce, call.clone()).into_val(e));

    if nonce != storage::get_nonce(e, &signer) {
        return Err(fail(e, MarketError::NonceMismatch));
    }

    // EFFECTS: burn the nonce before dispatching
    storage::set_nonce(e, &signer, nonce + 1);

    match call {
        MetaCall::OwnerSale(buyer, collection, token_id, value) => {
            crate::listings::owner_sale(e, signer.clone(), buyer, collection, token_id, value)?;
        }
        MetaCall::OwnerAuction(buyer, collection, token_id, value) => {
            crate::auctions::owner_auction(e, signer.clone(), buyer, collection, token_id, value)?;
        }
    }

    e.events()
        .publish((symbol_short!("MetaExec"), signer), (relayer, nonce));

    Ok(())
}

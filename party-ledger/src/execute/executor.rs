//! Call executor.
//!
//! Dispatches calls to their handlers and reports the result of each
//! transition. Every call is atomic: handlers run all validation
//! before the first mutation, so an `Err` means the ledger is exactly
//! as it was before the call.

use party_core::{Address, Call, TokenAmount, U256};
use tracing::debug;

use crate::error::LedgerResult;
use crate::state::LedgerWriter;

use super::context::ExecutionContext;
use super::generator::{execute_create_party, execute_deploy_generator};
use super::party::{execute_buy_tokens, execute_deploy_party, execute_end_party};

/// The observable result of a successfully applied call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    /// A generator was deployed at the given address.
    GeneratorDeployed(Address),

    /// A party was created through a generator at the given address.
    PartyCreated(Address),

    /// A party was deployed directly at the given address.
    PartyDeployed(Address),

    /// Tokens were credited to the caller.
    TokensPurchased(TokenAmount),

    /// A party was closed and its held balance paid out.
    PartyEnded {
        /// Native currency transferred to the owner.
        paid_out: U256,
    },
}

/// Apply a call to the ledger on behalf of `caller`.
///
/// Returns the outcome of the transition, or an error with the ledger
/// unchanged.
pub fn apply_call<S: LedgerWriter>(
    state: &mut S,
    ctx: &ExecutionContext,
    caller: &Address,
    call: &Call,
) -> LedgerResult<CallOutcome> {
    match call {
        Call::DeployGenerator { name } => {
            let address = execute_deploy_generator(state, ctx, caller, name)?;
            debug!(%caller, %address, %name, "generator deployed");
            Ok(CallOutcome::GeneratorDeployed(address))
        }

        Call::CreateParty {
            generator,
            name,
            symbol,
            pricing,
        } => {
            let address =
                execute_create_party(state, ctx, caller, generator, name, symbol, *pricing)?;
            debug!(%caller, %generator, %address, %name, "party created");
            Ok(CallOutcome::PartyCreated(address))
        }

        Call::DeployParty {
            name,
            symbol,
            pricing,
            owner,
        } => {
            let address =
                execute_deploy_party(state, ctx, caller, name, symbol, *pricing, owner)?;
            debug!(%caller, %address, %name, "party deployed");
            Ok(CallOutcome::PartyDeployed(address))
        }

        Call::BuyTokens { party, value } => {
            let tokens = execute_buy_tokens(state, ctx, caller, party, *value)?;
            debug!(%caller, %party, %value, ?tokens, "tokens purchased");
            Ok(CallOutcome::TokensPurchased(tokens))
        }

        Call::EndParty { party } => {
            let paid_out = execute_end_party(state, ctx, caller, party)?;
            debug!(%caller, %party, %paid_out, "party ended");
            Ok(CallOutcome::PartyEnded { paid_out })
        }
    }
}

//! Generator call handlers.
//!
//! The generator is a party factory: deploying one records an owner
//! and a creation counter, and each CreateParty call derives a fresh
//! party address from that counter and logs a PartyStarted event.

use party_core::{Account, Address, Generator, Party, PartyEvent, Pricing, U256};

use crate::error::{LedgerError, LedgerResult};
use crate::state::LedgerWriter;

use super::context::ExecutionContext;
use super::party::validate_party_params;

/// Execute a DeployGenerator call.
///
/// The generator's address derives from the caller's address and
/// nonce. Deployment itself emits no event; the generator's log only
/// records the parties it starts.
pub fn execute_deploy_generator<S: LedgerWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    caller: &Address,
    name: &str,
) -> LedgerResult<Address> {
    if name.is_empty() {
        return Err(LedgerError::EmptyName);
    }

    let deployer = state
        .get_account(caller)
        .ok_or(LedgerError::AccountNotFound { address: *caller })?;

    let address = Address::contract_address(caller, deployer.nonce);
    if state.contract_exists(&address) || state.account_exists(&address) {
        return Err(LedgerError::AddressCollision { address });
    }

    state.update_account(caller, |a| a.nonce += 1);
    state.insert_generator(Generator::new(address, name.to_string(), *caller));

    Ok(address)
}

/// Execute a CreateParty call.
///
/// Deploys a new party through a generator. The party's address
/// derives from the generator's address and its creation counter, the
/// caller becomes the party's owner, and a PartyStarted event is
/// appended to the generator's log.
///
/// # Validation
/// - Generator must exist
/// - Name and symbol must be non-empty
/// - Pricing parameter must be positive
pub fn execute_create_party<S: LedgerWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    caller: &Address,
    generator: &Address,
    name: &str,
    symbol: &str,
    pricing: Pricing,
) -> LedgerResult<Address> {
    validate_party_params(name, symbol, &pricing)?;

    let created = state
        .get_generator(generator)
        .ok_or(LedgerError::GeneratorNotFound { address: *generator })?
        .parties_created;

    let address = Address::contract_address(generator, created);
    if state.contract_exists(&address) || state.account_exists(&address) {
        return Err(LedgerError::AddressCollision { address });
    }

    state.insert_party(Party::new(
        address,
        name.to_string(),
        symbol.to_string(),
        pricing,
        *caller,
        *generator,
    ));
    // The party holds sale proceeds in its own account until close
    state.insert_account(Account::new(address, U256::zero()));
    state.update_generator(generator, |g| g.parties_created += 1);
    state.append_event(
        generator,
        PartyEvent::PartyStarted {
            name: name.to_string(),
            symbol: symbol.to_string(),
        },
    );

    Ok(address)
}

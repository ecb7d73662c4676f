//! Party call handlers.
//!
//! Handles direct party deployment, BuyTokens, and EndParty.

use party_core::{Account, Address, Party, PartyEvent, Pricing, TokenAmount, U256};

use crate::error::{LedgerError, LedgerResult};
use crate::state::LedgerWriter;

use super::context::ExecutionContext;

/// Validate party construction parameters.
///
/// Shared by direct deployment and factory creation.
pub(crate) fn validate_party_params(
    name: &str,
    symbol: &str,
    pricing: &Pricing,
) -> LedgerResult<()> {
    if name.is_empty() || symbol.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    if !pricing.is_valid() {
        return Err(LedgerError::ZeroPricingParameter);
    }
    Ok(())
}

/// Execute a DeployParty call.
///
/// Deploys a party directly. The party's address derives from the
/// caller's address and nonce; the caller is recorded as the party's
/// `generator` reference, so a deployer that names themselves as owner
/// ends up with `owner == generator`.
///
/// # Validation
/// - Caller account must exist
/// - Name and symbol must be non-empty
/// - Pricing parameter must be positive
pub fn execute_deploy_party<S: LedgerWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    caller: &Address,
    name: &str,
    symbol: &str,
    pricing: Pricing,
    owner: &Address,
) -> LedgerResult<Address> {
    validate_party_params(name, symbol, &pricing)?;

    let deployer = state
        .get_account(caller)
        .ok_or(LedgerError::AccountNotFound { address: *caller })?;

    let address = Address::contract_address(caller, deployer.nonce);
    if state.contract_exists(&address) || state.account_exists(&address) {
        return Err(LedgerError::AddressCollision { address });
    }

    state.update_account(caller, |a| a.nonce += 1);
    state.insert_party(Party::new(
        address,
        name.to_string(),
        symbol.to_string(),
        pricing,
        *owner,
        *caller,
    ));
    // The party holds sale proceeds in its own account until close
    state.insert_account(Account::new(address, U256::zero()));

    Ok(address)
}

/// Execute a BuyTokens call.
///
/// Credits tokens to the caller at the party's pricing, moves the sent
/// value into the party's held balance, and appends a TokensPurchased
/// event. A zero value is a valid purchase: it credits zero tokens and
/// still emits the event.
///
/// # Validation
/// - Party must exist and be active (hard terminal guard)
/// - Caller account must exist and cover `value`
/// - Token and currency arithmetic must not overflow
///
/// All validation happens before the first mutation, so an error
/// leaves balances and the event log untouched.
pub fn execute_buy_tokens<S: LedgerWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    caller: &Address,
    party: &Address,
    value: U256,
) -> LedgerResult<TokenAmount> {
    let pricing = {
        let record = state
            .get_party(party)
            .ok_or(LedgerError::PartyNotFound { address: *party })?;

        if !record.active {
            return Err(LedgerError::PartyInactive { party: *party });
        }

        record.pricing
    };

    let available = state
        .get_account(caller)
        .ok_or(LedgerError::AccountNotFound { address: *caller })?
        .balance;

    if available < value {
        return Err(LedgerError::InsufficientFunds {
            account: *caller,
            available,
            requested: value,
        });
    }

    let tokens = pricing
        .tokens_for(value)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let credited = state
        .balance_of(party, caller)
        .checked_add(&tokens)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let held = state
        .get_account(party)
        .ok_or(LedgerError::AccountNotFound { address: *party })?
        .balance;
    let new_held = held
        .checked_add(value)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    // All checks passed; commit
    state.update_account(caller, |a| a.balance = a.balance - value);
    state.update_account(party, |a| a.balance = new_held);
    state.set_token_balance(party, caller, credited);
    state.append_event(
        party,
        PartyEvent::TokensPurchased {
            buyer: *caller,
            amount: tokens,
        },
    );

    Ok(tokens)
}

/// Execute an EndParty call.
///
/// Deactivates the party (terminal), pays the entire held balance out
/// to the owner, and appends a PartyFinished event. Returns the amount
/// paid out.
///
/// # Validation
/// - Party must exist and still be active (re-entry guard: a second
///   close fails the same way a purchase after close does)
/// - Caller must be the stored owner
/// - Owner account must exist to receive the proceeds
pub fn execute_end_party<S: LedgerWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    caller: &Address,
    party: &Address,
) -> LedgerResult<U256> {
    let owner = {
        let record = state
            .get_party(party)
            .ok_or(LedgerError::PartyNotFound { address: *party })?;

        if !record.active {
            return Err(LedgerError::PartyInactive { party: *party });
        }

        if record.owner != *caller {
            return Err(LedgerError::NotOwner {
                party: *party,
                owner: record.owner,
                caller: *caller,
            });
        }

        record.owner
    };

    let held = state
        .get_account(party)
        .ok_or(LedgerError::AccountNotFound { address: *party })?
        .balance;

    let owner_balance = state
        .get_account(&owner)
        .ok_or(LedgerError::AccountNotFound { address: owner })?
        .balance;
    let new_owner_balance = owner_balance
        .checked_add(held)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    // All checks passed; commit
    state.update_party(party, |p| p.active = false);
    state.update_account(party, |a| a.balance = U256::zero());
    state.update_account(&owner, |a| a.balance = new_owner_balance);
    state.append_event(party, PartyEvent::PartyFinished);

    Ok(held)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LedgerReader, LedgerState};

    fn test_context() -> ExecutionContext {
        ExecutionContext::test_context()
    }

    fn deploy_default_party(state: &mut LedgerState, owner: &Address) -> Address {
        execute_deploy_party(
            state,
            &test_context(),
            owner,
            "Party",
            "P",
            Pricing::RatePerUnit(10),
            owner,
        )
        .unwrap()
    }

    #[test]
    fn test_deploy_party() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());

        let address = execute_deploy_party(
            &mut state,
            &ctx,
            &owner,
            "Party",
            "P",
            Pricing::RatePerUnit(10),
            &owner,
        )
        .unwrap();

        let party = state.get_party(&address).unwrap();
        assert_eq!(party.name, "Party");
        assert_eq!(party.symbol, "P");
        assert_eq!(party.pricing, Pricing::RatePerUnit(10));
        assert_eq!(party.owner, owner);
        assert_eq!(party.generator, owner);
        assert!(party.active);

        // The party has an account to hold proceeds
        let held = state.get_account(&address).unwrap();
        assert!(held.balance.is_zero());

        // Deployer nonce bumped
        assert_eq!(state.get_account(&owner).unwrap().nonce, 1);
    }

    #[test]
    fn test_deploy_party_unknown_caller_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let ghost = Address::from_bytes([9u8; 20]);

        let result = execute_deploy_party(
            &mut state,
            &ctx,
            &ghost,
            "Party",
            "P",
            Pricing::RatePerUnit(10),
            &ghost,
        );

        assert!(matches!(result, Err(LedgerError::AccountNotFound { .. })));
    }

    #[test]
    fn test_deploy_party_empty_name_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());

        let result = execute_deploy_party(
            &mut state,
            &ctx,
            &owner,
            "",
            "P",
            Pricing::RatePerUnit(10),
            &owner,
        );

        assert!(matches!(result, Err(LedgerError::EmptyName)));
    }

    #[test]
    fn test_deploy_party_zero_pricing_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());

        let result = execute_deploy_party(
            &mut state,
            &ctx,
            &owner,
            "Party",
            "P",
            Pricing::UnitCost(0),
            &owner,
        );

        assert!(matches!(result, Err(LedgerError::ZeroPricingParameter)));
    }

    #[test]
    fn test_deploy_two_parties_distinct_addresses() {
        let mut state = LedgerState::new();
        let owner = state.create_account_with_balance(U256::zero());

        let first = deploy_default_party(&mut state, &owner);
        let second = deploy_default_party(&mut state, &owner);

        assert_ne!(first, second);
        assert_eq!(state.party_count(), 2);
    }

    #[test]
    fn test_buy_tokens_credits_at_rate() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::from(100u64));
        let party = deploy_default_party(&mut state, &owner);

        let tokens =
            execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64)).unwrap();

        assert_eq!(tokens, TokenAmount::whole(100));
        assert_eq!(state.balance_of(&party, &buyer), TokenAmount::whole(100));

        // Value moved from buyer to the party's held balance
        assert_eq!(state.get_account(&buyer).unwrap().balance, U256::from(90u64));
        assert_eq!(state.get_account(&party).unwrap().balance, U256::from(10u64));

        let events = state.events_for(&party);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            PartyEvent::TokensPurchased {
                buyer,
                amount: TokenAmount::whole(100),
            }
        );
    }

    #[test]
    fn test_buy_zero_tokens_still_emits_event() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::zero());
        let party = deploy_default_party(&mut state, &owner);

        let tokens = execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::zero()).unwrap();

        assert!(tokens.is_zero());
        assert!(state.balance_of(&party, &buyer).is_zero());

        let events = state.events_named(&party, "TokensPurchased");
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            PartyEvent::TokensPurchased {
                buyer,
                amount: TokenAmount::zero(),
            }
        );
    }

    #[test]
    fn test_buy_tokens_accumulates() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::from(30u64));
        let party = deploy_default_party(&mut state, &owner);

        execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64)).unwrap();
        execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(20u64)).unwrap();

        assert_eq!(state.balance_of(&party, &buyer), TokenAmount::whole(300));
        assert_eq!(state.events_for(&party).len(), 2);
    }

    #[test]
    fn test_buy_tokens_fractional_credit() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::from(105u64));

        let party = execute_deploy_party(
            &mut state,
            &ctx,
            &owner,
            "Party",
            "P",
            Pricing::UnitCost(10),
            &owner,
        )
        .unwrap();

        // 105 currency at unit cost 10 = 10.5 tokens, recorded exactly
        let tokens =
            execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(105u64)).unwrap();

        assert_eq!(tokens, TokenAmount::from_ratio(21, 2));
        assert_eq!(state.balance_of(&party, &buyer), TokenAmount::from_ratio(21, 2));
    }

    #[test]
    fn test_buy_tokens_insufficient_funds_reverts() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::from(5u64));
        let party = deploy_default_party(&mut state, &owner);

        let result = execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));

        // Nothing moved, nothing logged
        assert_eq!(state.get_account(&buyer).unwrap().balance, U256::from(5u64));
        assert!(state.balance_of(&party, &buyer).is_zero());
        assert!(state.events_for(&party).is_empty());
    }

    #[test]
    fn test_buy_tokens_unknown_party_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let buyer = state.create_account_with_balance(U256::from(10u64));
        let ghost = Address::from_bytes([9u8; 20]);

        let result = execute_buy_tokens(&mut state, &ctx, &buyer, &ghost, U256::from(10u64));
        assert!(matches!(result, Err(LedgerError::PartyNotFound { .. })));
    }

    #[test]
    fn test_buy_tokens_after_end_reverts_unchanged() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let buyer = state.create_account_with_balance(U256::from(20u64));
        let party = deploy_default_party(&mut state, &owner);

        execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64)).unwrap();
        execute_end_party(&mut state, &ctx, &owner, &party).unwrap();

        let result = execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64));
        assert!(matches!(result, Err(LedgerError::PartyInactive { .. })));

        // Balance frozen at the pre-close value, no new events
        assert_eq!(state.balance_of(&party, &buyer), TokenAmount::whole(100));
        assert_eq!(state.get_account(&buyer).unwrap().balance, U256::from(10u64));
        assert_eq!(state.events_named(&party, "TokensPurchased").len(), 1);
    }

    #[test]
    fn test_end_party_pays_owner_in_full() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::from(7u64));
        let buyer = state.create_account_with_balance(U256::from(10u64));
        let party = deploy_default_party(&mut state, &owner);

        execute_buy_tokens(&mut state, &ctx, &buyer, &party, U256::from(10u64)).unwrap();

        let paid = execute_end_party(&mut state, &ctx, &owner, &party).unwrap();

        assert_eq!(paid, U256::from(10u64));
        assert_eq!(state.get_account(&owner).unwrap().balance, U256::from(17u64));
        assert!(state.get_account(&party).unwrap().balance.is_zero());
        assert!(!state.get_party(&party).unwrap().active);

        let finished = state.events_named(&party, "PartyFinished");
        assert_eq!(finished.len(), 1);
    }

    #[test]
    fn test_end_party_not_owner_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let other = state.create_account_with_balance(U256::zero());
        let party = deploy_default_party(&mut state, &owner);

        let result = execute_end_party(&mut state, &ctx, &other, &party);
        assert!(matches!(result, Err(LedgerError::NotOwner { .. })));

        // Still active, no event
        assert!(state.get_party(&party).unwrap().active);
        assert!(state.events_for(&party).is_empty());
    }

    #[test]
    fn test_end_party_twice_fails() {
        let mut state = LedgerState::new();
        let ctx = test_context();
        let owner = state.create_account_with_balance(U256::zero());
        let party = deploy_default_party(&mut state, &owner);

        execute_end_party(&mut state, &ctx, &owner, &party).unwrap();

        let result = execute_end_party(&mut state, &ctx, &owner, &party);
        assert!(matches!(result, Err(LedgerError::PartyInactive { .. })));

        // Exactly one PartyFinished event
        assert_eq!(state.events_named(&party, "PartyFinished").len(), 1);
    }
}

//! In-memory ledger state container.

use std::collections::HashMap;

use party_core::{Account, Address, Generator, Party, PartyEvent, TokenAmount, U256};

use crate::config::LedgerConfig;

use super::store::{LedgerReader, LedgerWriter};

/// In-memory ledger state backed by HashMaps.
///
/// Mutating operations must be serialized per instance; the contract
/// rules assume one call executes at a time.
#[derive(Clone, Debug)]
pub struct LedgerState {
    /// All accounts, external and contract-held.
    pub accounts: HashMap<Address, Account>,

    /// All deployed generators.
    pub generators: HashMap<Address, Generator>,

    /// All deployed parties.
    pub parties: HashMap<Address, Party>,

    /// Token balances per (party, holder). Absent entries read as zero.
    pub token_balances: HashMap<(Address, Address), TokenAmount>,

    /// Append-only event log per contract address.
    pub events: HashMap<Address, Vec<PartyEvent>>,

    config: LedgerConfig,
}

impl LedgerState {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a new empty ledger with the given configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            accounts: HashMap::new(),
            generators: HashMap::new(),
            parties: HashMap::new(),
            token_balances: HashMap::new(),
            events: HashMap::new(),
            config,
        }
    }

    /// Mint a fresh account funded per the ledger configuration.
    pub fn create_account(&mut self) -> Address {
        self.create_account_with_balance(self.config.initial_account_balance)
    }

    /// Mint a fresh account with an explicit starting balance.
    pub fn create_account_with_balance(&mut self, balance: U256) -> Address {
        let address = Address::random();
        self.accounts.insert(address, Account::new(address, balance));
        address
    }

    /// Get the number of accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Get the number of deployed generators.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Get the number of deployed parties.
    pub fn party_count(&self) -> usize {
        self.parties.len()
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerReader for LedgerState {
    fn get_account(&mut self, addr: &Address) -> Option<&Account> {
        self.accounts.get(addr)
    }

    fn get_generator(&mut self, addr: &Address) -> Option<&Generator> {
        self.generators.get(addr)
    }

    fn get_party(&mut self, addr: &Address) -> Option<&Party> {
        self.parties.get(addr)
    }

    fn balance_of(&mut self, party: &Address, holder: &Address) -> TokenAmount {
        self.token_balances
            .get(&(*party, *holder))
            .copied()
            .unwrap_or_else(TokenAmount::zero)
    }

    fn events_for(&mut self, contract: &Address) -> &[PartyEvent] {
        self.events.get(contract).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl LedgerWriter for LedgerState {
    fn insert_account(&mut self, account: Account) {
        self.accounts.insert(account.address, account);
    }

    fn update_account<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Account),
    {
        if let Some(account) = self.accounts.get_mut(addr) {
            f(account);
        }
    }

    fn insert_generator(&mut self, generator: Generator) {
        self.generators.insert(generator.address, generator);
    }

    fn update_generator<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Generator),
    {
        if let Some(generator) = self.generators.get_mut(addr) {
            f(generator);
        }
    }

    fn insert_party(&mut self, party: Party) {
        self.parties.insert(party.address, party);
    }

    fn update_party<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Party),
    {
        if let Some(party) = self.parties.get_mut(addr) {
            f(party);
        }
    }

    fn set_token_balance(&mut self, party: &Address, holder: &Address, amount: TokenAmount) {
        self.token_balances.insert((*party, *holder), amount);
    }

    fn append_event(&mut self, contract: &Address, event: PartyEvent) {
        self.events.entry(*contract).or_default().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_core::Pricing;

    #[test]
    fn test_new_state() {
        let state = LedgerState::new();
        assert_eq!(state.account_count(), 0);
        assert_eq!(state.generator_count(), 0);
        assert_eq!(state.party_count(), 0);
    }

    #[test]
    fn test_create_account_uses_config() {
        let mut state = LedgerState::with_config(LedgerConfig {
            initial_account_balance: U256::from(1000u64),
        });

        let addr = state.create_account();
        assert_eq!(state.get_account(&addr).unwrap().balance, U256::from(1000u64));
    }

    #[test]
    fn test_create_account_with_balance() {
        let mut state = LedgerState::new();
        let addr = state.create_account_with_balance(U256::from(42u64));

        let account = state.get_account(&addr).unwrap();
        assert_eq!(account.balance, U256::from(42u64));
        assert_eq!(account.nonce, 0);
    }

    #[test]
    fn test_update_account() {
        let mut state = LedgerState::new();
        let addr = state.create_account_with_balance(U256::from(100u64));

        state.update_account(&addr, |a| {
            a.balance = a.balance - U256::from(40u64);
            a.nonce += 1;
        });

        let account = state.get_account(&addr).unwrap();
        assert_eq!(account.balance, U256::from(60u64));
        assert_eq!(account.nonce, 1);
    }

    #[test]
    fn test_balance_of_defaults_to_zero() {
        let mut state = LedgerState::new();
        let party = Address::from_bytes([1u8; 20]);
        let holder = Address::from_bytes([2u8; 20]);

        assert!(state.balance_of(&party, &holder).is_zero());
    }

    #[test]
    fn test_set_token_balance() {
        let mut state = LedgerState::new();
        let party = Address::from_bytes([1u8; 20]);
        let holder = Address::from_bytes([2u8; 20]);

        state.set_token_balance(&party, &holder, TokenAmount::whole(100));
        assert_eq!(state.balance_of(&party, &holder), TokenAmount::whole(100));
    }

    #[test]
    fn test_insert_and_get_party() {
        let mut state = LedgerState::new();
        let owner = Address::from_bytes([1u8; 20]);
        let address = Address::from_bytes([2u8; 20]);
        let party = Party::new(
            address,
            "Party".into(),
            "P".into(),
            Pricing::RatePerUnit(10),
            owner,
            owner,
        );

        assert!(!state.party_exists(&address));
        state.insert_party(party);
        assert!(state.party_exists(&address));
        assert!(state.get_party(&address).unwrap().active);
    }

    #[test]
    fn test_event_log_append_order() {
        let mut state = LedgerState::new();
        let contract = Address::from_bytes([1u8; 20]);
        let buyer = Address::from_bytes([2u8; 20]);

        assert!(state.events_for(&contract).is_empty());

        state.append_event(
            &contract,
            PartyEvent::TokensPurchased {
                buyer,
                amount: TokenAmount::whole(1),
            },
        );
        state.append_event(&contract, PartyEvent::PartyFinished);

        let events = state.events_for(&contract);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "TokensPurchased");
        assert_eq!(events[1].name(), "PartyFinished");
    }

    #[test]
    fn test_events_named_filters() {
        let mut state = LedgerState::new();
        let contract = Address::from_bytes([1u8; 20]);
        let buyer = Address::from_bytes([2u8; 20]);

        state.append_event(
            &contract,
            PartyEvent::TokensPurchased {
                buyer,
                amount: TokenAmount::whole(1),
            },
        );
        state.append_event(&contract, PartyEvent::PartyFinished);

        let purchases = state.events_named(&contract, "TokensPurchased");
        assert_eq!(purchases.len(), 1);

        let finished = state.events_named(&contract, "PartyFinished");
        assert_eq!(finished.len(), 1);

        assert!(state.events_named(&contract, "PartyStarted").is_empty());
    }
}

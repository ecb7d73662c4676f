//! State storage traits.
//!
//! These traits abstract over the backing store, so a persistent
//! implementation can replace the in-memory one without changing the
//! contract handlers.

use party_core::{Account, Address, Generator, Party, PartyEvent, TokenAmount};

/// Read access to ledger state.
///
/// Methods take `&mut self` to allow implementations to lazily load
/// data from persistent storage into an internal cache on first access.
pub trait LedgerReader {
    // === Account Operations ===

    /// Get an account by address.
    fn get_account(&mut self, addr: &Address) -> Option<&Account>;

    /// Check if an account exists.
    fn account_exists(&mut self, addr: &Address) -> bool {
        self.get_account(addr).is_some()
    }

    // === Generator Operations ===

    /// Get a generator by address.
    fn get_generator(&mut self, addr: &Address) -> Option<&Generator>;

    /// Check if a generator exists.
    fn generator_exists(&mut self, addr: &Address) -> bool {
        self.get_generator(addr).is_some()
    }

    // === Party Operations ===

    /// Get a party by address.
    fn get_party(&mut self, addr: &Address) -> Option<&Party>;

    /// Check if a party exists.
    fn party_exists(&mut self, addr: &Address) -> bool {
        self.get_party(addr).is_some()
    }

    /// Check if any contract occupies an address.
    fn contract_exists(&mut self, addr: &Address) -> bool {
        self.generator_exists(addr) || self.party_exists(addr)
    }

    // === Token Balances ===

    /// A holder's token balance in a party's sale. Defaults to zero
    /// for accounts that never purchased.
    fn balance_of(&mut self, party: &Address, holder: &Address) -> TokenAmount;

    // === Event Log ===

    /// All events appended by a contract, in call order.
    fn events_for(&mut self, contract: &Address) -> &[PartyEvent];

    /// Events appended by a contract, filtered by event name.
    fn events_named(&mut self, contract: &Address, name: &str) -> Vec<PartyEvent> {
        self.events_for(contract)
            .iter()
            .filter(|e| e.name() == name)
            .cloned()
            .collect()
    }
}

/// Mutable access to ledger state.
pub trait LedgerWriter: LedgerReader {
    // === Account Mutations ===

    /// Insert a new account.
    fn insert_account(&mut self, account: Account);

    /// Update an existing account.
    fn update_account<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Account);

    // === Generator Mutations ===

    /// Insert a new generator.
    fn insert_generator(&mut self, generator: Generator);

    /// Update an existing generator.
    fn update_generator<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Generator);

    // === Party Mutations ===

    /// Insert a new party.
    fn insert_party(&mut self, party: Party);

    /// Update an existing party.
    fn update_party<F>(&mut self, addr: &Address, f: F)
    where
        F: FnOnce(&mut Party);

    // === Token Balance Mutations ===

    /// Set a holder's token balance in a party's sale.
    fn set_token_balance(&mut self, party: &Address, holder: &Address, amount: TokenAmount);

    // === Event Log Mutations ===

    /// Append an event to a contract's log. This is the only mutation
    /// the log supports.
    fn append_event(&mut self, contract: &Address, event: PartyEvent);
}

/// Combined trait for full ledger access.
///
/// Any type implementing both `LedgerReader` and `LedgerWriter`
/// automatically implements `LedgerStore`.
pub trait LedgerStore: LedgerReader + LedgerWriter {}

// Blanket implementation
impl<T: LedgerReader + LedgerWriter> LedgerStore for T {}

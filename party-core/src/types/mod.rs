//! Protocol data types.

mod account;
mod address;
mod amount;
mod event;
mod generator;
mod party;
mod pricing;

pub use account::Account;
pub use address::Address;
pub use amount::TokenAmount;
pub use event::PartyEvent;
pub use generator::Generator;
pub use party::Party;
pub use pricing::Pricing;

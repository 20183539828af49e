//! Core domain types.

mod contract;
mod date;
mod quote;

pub use contract::ContractCode;
pub use date::Date;
pub use quote::{tradable_quotes, SettlementQuote, NO_TRADE_PRICE};

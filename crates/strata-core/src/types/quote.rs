//! Daily settlement quotes from the futures exchange.

use serde::{Deserialize, Serialize};

use crate::types::{ContractCode, Date};

/// Settlement price published for a contract with no trading activity.
///
/// A price equal to the full redemption value means a zero effective rate
/// for the discount convention; the exchange uses it as a "no trade"
/// placeholder, not as a market observation.
pub const NO_TRADE_PRICE: f64 = 100_000.0;

/// One row of the exchange's daily settlement table.
///
/// Prices are discount prices ("PU"): the present value of a 100,000
/// redemption at the contract maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementQuote {
    /// Trading date this settlement was published for.
    pub reference_date: Date,
    /// Product family (e.g. `DI1` for one-day interbank deposit futures).
    pub commodity: String,
    /// Contract maturity code.
    pub contract: ContractCode,
    /// Previous session's settlement price.
    pub previous_settlement: f64,
    /// Current settlement price.
    pub settlement: f64,
    /// Price change between sessions.
    pub change: f64,
}

impl SettlementQuote {
    /// Whether this quote carries a usable market price.
    ///
    /// The no-trade placeholder and non-positive prices are excluded before
    /// any curve is built from the table.
    #[must_use]
    pub fn is_tradable(&self) -> bool {
        self.settlement > 0.0 && self.settlement != NO_TRADE_PRICE
    }
}

/// Restricts a settlement table to one product family, dropping rows
/// without a usable price.
///
/// This is the mandatory pre-filter in front of curve construction: only
/// one family is carried downstream and the no-trade placeholder must never
/// reach the rate conversion.
pub fn tradable_quotes(quotes: &[SettlementQuote], commodity: &str) -> Vec<SettlementQuote> {
    quotes
        .iter()
        .filter(|q| q.commodity == commodity && q.is_tradable())
        .cloned()
        .collect()
}

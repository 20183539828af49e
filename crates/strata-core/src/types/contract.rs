//! Futures contract maturity codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{StrataError, StrataResult};
use crate::types::Date;

/// A futures contract maturity code: month letter plus two-digit year.
///
/// Exchanges encode the delivery month of a contract as a single letter
/// (`F` = January through `Z` = December, skipping vowel-adjacent letters)
/// followed by the last two digits of the delivery year. `F27` is the
/// January 2027 contract.
///
/// # Example
///
/// ```rust
/// use strata_core::types::{ContractCode, Date};
///
/// let code: ContractCode = "F27".parse().unwrap();
/// assert_eq!(code.delivery_month(), 1);
/// assert_eq!(code.delivery_year(), 2027);
/// assert_eq!(code.maturity().unwrap(), Date::from_ymd(2027, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractCode {
    month: u32,
    year: i32,
}

/// Month letters in exchange order, January first.
const MONTH_LETTERS: [char; 12] = ['F', 'G', 'H', 'J', 'K', 'M', 'N', 'Q', 'U', 'V', 'X', 'Z'];

impl ContractCode {
    /// Parses a contract code from the trailing three characters of a
    /// ticker (e.g. `"F27"`, or `"DI1F27"` which also ends in `F27`).
    ///
    /// Two-digit years are interpreted in the 2000s, matching the exchange
    /// convention for listed maturities.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidContractCode` if the code is shorter
    /// than three characters, the month letter is unknown, or the year is
    /// not numeric.
    pub fn parse(ticker: &str) -> StrataResult<Self> {
        let chars: Vec<char> = ticker.chars().collect();
        if chars.len() < 3 {
            return Err(StrataError::invalid_contract_code(
                ticker,
                "expected at least 3 characters",
            ));
        }

        let code = &chars[chars.len() - 3..];
        let month = MONTH_LETTERS
            .iter()
            .position(|&c| c == code[0])
            .map(|i| i as u32 + 1)
            .ok_or_else(|| {
                StrataError::invalid_contract_code(
                    ticker,
                    format!("unknown month letter '{}'", code[0]),
                )
            })?;

        let year_suffix: String = code[1..].iter().collect();
        let year: i32 = year_suffix.parse().map_err(|_| {
            StrataError::invalid_contract_code(
                ticker,
                format!("non-numeric year '{year_suffix}'"),
            )
        })?;

        Ok(Self {
            month,
            year: 2000 + year,
        })
    }

    /// Returns the delivery month (1-12).
    #[must_use]
    pub fn delivery_month(&self) -> u32 {
        self.month
    }

    /// Returns the four-digit delivery year.
    #[must_use]
    pub fn delivery_year(&self) -> i32 {
        self.year
    }

    /// Returns the raw maturity: the first calendar day of the delivery
    /// month.
    ///
    /// This is the unadjusted maturity; settlement rolls it forward to the
    /// next business day via [`Calendar::following`](crate::calendars::Calendar::following).
    pub fn maturity(&self) -> StrataResult<Date> {
        Date::from_ymd(self.year, self.month, 1)
    }
}

impl fmt::Display for ContractCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = MONTH_LETTERS[(self.month - 1) as usize];
        write!(f, "{letter}{:02}", self.year % 100)
    }
}

impl FromStr for ContractCode {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContractCode {
    type Error = StrataError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ContractCode> for String {
    fn from(code: ContractCode) -> Self {
        code.to_string()
    }
}

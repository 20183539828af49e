//! # Strata Core
//!
//! Core types, calendars, and abstractions for the Strata yield surface
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Strata:
//!
//! - **Types**: Domain-specific types like `Date`, `ContractCode`,
//!   `SettlementQuote`
//! - **Business Day Calendars**: Holiday calendars and business-day
//!   arithmetic (`following`, business-day counts, date sequences)
//! - **Errors**: The shared [`StrataError`] type
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use strata_core::prelude::*;
//!
//! let refdate = Date::from_ymd(2024, 3, 15).unwrap();
//! let code = ContractCode::parse("F27").unwrap();
//! assert_eq!(code.maturity().unwrap(), Date::from_ymd(2027, 1, 1).unwrap());
//!
//! let cal = WeekendCalendar;
//! let settled = cal.following(code.maturity().unwrap());
//! assert!(cal.is_business_day(settled));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, HolidayCalendar, WeekendCalendar};
    pub use crate::error::{StrataError, StrataResult};
    pub use crate::types::{ContractCode, Date, SettlementQuote};
}

// Re-export commonly used types at crate root
pub use error::{StrataError, StrataResult};
pub use types::{ContractCode, Date, SettlementQuote};

//! Instrument definitions.
//!
//! - [`OptionKind`]: closed call/put enumeration with strict parsing
//! - [`OptionContract`]: validated European vanilla option terms

mod contract;
mod option_kind;

pub use contract::{year_fraction_from_days, OptionContract, DAYS_PER_YEAR};
pub(crate) use contract::is_positive;
pub use option_kind::OptionKind;

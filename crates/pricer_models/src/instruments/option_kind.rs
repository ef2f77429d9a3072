//! Option kind definitions.

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Kind of European vanilla option.
///
/// A closed set: every pricing path matches on it exhaustively, and text
/// input outside {call, put} is rejected at parse time.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// let call: OptionKind = "call".parse().unwrap();
/// assert_eq!(call, OptionKind::Call);
///
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0) at expiry
    Call,
    /// Right to sell at the strike: max(K - S, 0) at expiry
    Put,
}

impl OptionKind {
    /// Both kinds, call first.
    pub const ALL: [OptionKind; 2] = [OptionKind::Call, OptionKind::Put];

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(AnalyticalError::UnknownOptionKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

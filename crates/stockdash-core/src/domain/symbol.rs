use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 20;
const MAX_SUFFIX_LEN: usize = 3;

/// Exchange ticker such as `INFY.NS`, `M&M.NS` or `BAJAJ-AUTO.NS`.
///
/// The part before the last `.` is the ticker; the optional part after it
/// names the exchange (`NS` for NSE, `BO` for BSE).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parses `input`, trimming whitespace and uppercasing it.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        let (ticker, suffix) = split_exchange(&normalized);
        check_ticker(ticker)?;
        if let Some(suffix) = suffix {
            let letters_only = suffix.chars().all(|ch| ch.is_ascii_alphabetic());
            if suffix.is_empty() || suffix.len() > MAX_SUFFIX_LEN || !letters_only {
                return Err(ValidationError::InvalidExchangeSuffix {
                    suffix: suffix.to_owned(),
                    max: MAX_SUFFIX_LEN,
                });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ticker without the exchange suffix: `M&M` for `M&M.NS`.
    pub fn ticker(&self) -> &str {
        split_exchange(&self.0).0
    }

    /// Exchange suffix, if any: `NS` for `INFY.NS`.
    pub fn exchange(&self) -> Option<&str> {
        split_exchange(&self.0).1
    }
}

fn split_exchange(symbol: &str) -> (&str, Option<&str>) {
    match symbol.rsplit_once('.') {
        Some((ticker, suffix)) => (ticker, Some(suffix)),
        None => (symbol, None),
    }
}

// Tickers start with a letter; `&` and `-` appear in NSE names like M&M.
fn check_ticker(ticker: &str) -> Result<(), ValidationError> {
    let mut chars = ticker.chars().enumerate();
    match chars.next() {
        Some((_, first)) if first.is_ascii_alphabetic() => {}
        Some((_, first)) => return Err(ValidationError::SymbolInvalidStart { ch: first }),
        None => return Err(ValidationError::EmptySymbol),
    }

    match chars.find(|&(_, ch)| !(ch.is_ascii_alphanumeric() || matches!(ch, '&' | '-'))) {
        Some((index, ch)) => Err(ValidationError::SymbolInvalidChar { ch, index }),
        None => Ok(()),
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" infy.ns ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "INFY.NS");
        assert_eq!(parsed.ticker(), "INFY");
        assert_eq!(parsed.exchange(), Some("NS"));
    }

    #[test]
    fn accepts_ampersand_and_hyphen_tickers() {
        let mm = Symbol::parse("M&M.NS").expect("valid");
        assert_eq!(mm.ticker(), "M&M");
        assert_eq!(
            Symbol::parse("bajaj-auto.ns").expect("valid").as_str(),
            "BAJAJ-AUTO.NS"
        );
    }

    #[test]
    fn suffix_is_optional() {
        let bare = Symbol::parse("wipro").expect("valid");
        assert_eq!(bare.ticker(), "WIPRO");
        assert_eq!(bare.exchange(), None);
    }

    #[test]
    fn rejects_invalid_start() {
        let err = Symbol::parse("1INFY").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolInvalidStart { .. }));
        assert_eq!(Symbol::parse(".NS"), Err(ValidationError::EmptySymbol));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = Symbol::parse("INFY/NS").expect_err("must fail");
        assert_eq!(err, ValidationError::SymbolInvalidChar { ch: '/', index: 4 });
        // Only the last dot separates the exchange.
        let err = Symbol::parse("DR.REDDY.NS").expect_err("must fail");
        assert_eq!(err, ValidationError::SymbolInvalidChar { ch: '.', index: 2 });
    }

    #[test]
    fn rejects_malformed_exchange_suffix() {
        for input in ["INFY.", "INFY.NSEX", "INFY.N5"] {
            assert!(
                matches!(
                    Symbol::parse(input),
                    Err(ValidationError::InvalidExchangeSuffix { .. })
                ),
                "{input}"
            );
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{Company, FetchError};

/// Direction of the price move across the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// `Positive` only when the last value is strictly greater than the first.
    /// Flat and empty series are `Negative`.
    pub fn from_values(values: &[f64]) -> Self {
        match (values.first(), values.last()) {
            (Some(first), Some(last)) if last > first => Self::Positive,
            _ => Self::Negative,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Chart-ready price history for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub trend: Trend,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        let trend = Trend::from_values(&values);
        Self {
            label: label.into(),
            labels,
            values,
            trend,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_value(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Wire shape returned by the price-history service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceHistoryPayload {
    #[serde(default)]
    pub dates: Option<Vec<String>>,
    #[serde(default)]
    pub prices: Option<Vec<f64>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PriceHistoryPayload {
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Converts the payload into a series, honouring a populated `error` field first.
    pub fn into_series(self, company: &Company) -> Result<ChartSeries, FetchError> {
        if let Some(message) = self.error.filter(|message| !message.is_empty()) {
            return Err(FetchError::Application(message));
        }

        let dates = self
            .dates
            .ok_or_else(|| FetchError::Parse(String::from("missing field `dates`")))?;
        let prices = self
            .prices
            .ok_or_else(|| FetchError::Parse(String::from("missing field `prices`")))?;

        if dates.len() != prices.len() {
            return Err(FetchError::Parse(format!(
                "{} dates but {} prices",
                dates.len(),
                prices.len()
            )));
        }

        Ok(ChartSeries::new(company.caption(), dates, prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infosys() -> Company {
        Company::new("Infosys", "INFY.NS").expect("valid company")
    }

    #[test]
    fn trend_boundaries() {
        assert_eq!(Trend::from_values(&[100.0, 100.0]), Trend::Negative);
        assert_eq!(Trend::from_values(&[100.0, 101.0]), Trend::Positive);
        assert_eq!(Trend::from_values(&[101.0, 100.0]), Trend::Negative);
        assert_eq!(Trend::from_values(&[]), Trend::Negative);
        assert_eq!(Trend::from_values(&[42.0]), Trend::Negative);
    }

    #[test]
    fn trend_ignores_the_middle_of_the_series() {
        assert_eq!(
            Trend::from_values(&[100.0, 10.0, 500.0, 100.5]),
            Trend::Positive
        );
    }

    #[test]
    fn error_field_wins_over_data() {
        let payload = PriceHistoryPayload::from_json(
            r#"{"dates":["2024-01-01"],"prices":[1.0],"error":"symbol not found"}"#,
        )
        .expect("payload parses");

        let err = payload.into_series(&infosys()).expect_err("must fail");
        assert_eq!(err, FetchError::Application(String::from("symbol not found")));
    }

    #[test]
    fn empty_error_field_is_ignored() {
        let payload =
            PriceHistoryPayload::from_json(r#"{"dates":["2024-01-01"],"prices":[1.0],"error":""}"#)
                .expect("payload parses");

        let series = payload.into_series(&infosys()).expect("series");
        assert_eq!(series.len(), 1);
        assert_eq!(series.label, "Infosys (INFY.NS)");
    }

    #[test]
    fn mismatched_lengths_are_parse_errors() {
        let payload = PriceHistoryPayload::from_json(
            r#"{"dates":["2024-01-01","2024-01-02"],"prices":[1.0]}"#,
        )
        .expect("payload parses");

        let err = payload.into_series(&infosys()).expect_err("must fail");
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn missing_prices_are_parse_errors() {
        let payload = PriceHistoryPayload::from_json(r#"{"dates":[]}"#).expect("payload parses");
        let err = payload.into_series(&infosys()).expect_err("must fail");
        assert_eq!(err, FetchError::Parse(String::from("missing field `prices`")));
    }

    #[test]
    fn non_json_bodies_are_parse_errors() {
        let err = PriceHistoryPayload::from_json("<html>").expect_err("must fail");
        assert!(matches!(err, FetchError::Parse(_)));
    }
}

//! Static universe of selectable companies and the sidebar search filter.

use std::sync::OnceLock;

use crate::{Company, ValidationError};

const LISTINGS: &[(&str, &str)] = &[
    ("Reliance Industries", "RELIANCE.NS"),
    ("Tata Consultancy Services", "TCS.NS"),
    ("Infosys", "INFY.NS"),
    ("State Bank of India", "SBIN.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("Hindustan Unilever", "HINDUNILVR.NS"),
    ("Kotak Mahindra Bank", "KOTAKBANK.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("Adani Ports", "ADANIPORTS.NS"),
    ("Wipro", "WIPRO.NS"),
    ("HCL Technologies", "HCLTECH.NS"),
    ("Tech Mahindra", "TECHM.NS"),
    ("Axis Bank", "AXISBANK.NS"),
    ("Tata Motors", "TATAMOTORS.NS"),
    ("Maruti Suzuki", "MARUTI.NS"),
    ("Mahindra & Mahindra", "M&M.NS"),
    ("Bajaj Finance", "BAJFINANCE.NS"),
    ("Bajaj Finserv", "BAJAJFINSV.NS"),
    ("Tata Steel", "TATASTEEL.NS"),
    ("JSW Steel", "JSWSTEEL.NS"),
    ("Power Grid Corp", "POWERGRID.NS"),
    ("NTPC", "NTPC.NS"),
    ("Larsen & Toubro", "LT.NS"),
    ("UltraTech Cement", "ULTRACEMCO.NS"),
    ("Asian Paints", "ASIANPAINT.NS"),
    ("Nestle India", "NESTLEIND.NS"),
    ("Sun Pharma", "SUNPHARMA.NS"),
    ("Dr. Reddy's Labs", "DRREDDY.NS"),
    ("Cipla", "CIPLA.NS"),
    ("Divi's Labs", "DIVISLAB.NS"),
    ("Bajaj Auto", "BAJAJ-AUTO.NS"),
    ("Hero MotoCorp", "HEROMOTOCO.NS"),
    ("Eicher Motors", "EICHERMOT.NS"),
    ("Grasim Industries", "GRASIM.NS"),
    ("HDFC Life", "HDFCLIFE.NS"),
    ("SBI Life", "SBILIFE.NS"),
    ("ICICI Prudential Life", "ICICIPRULI.NS"),
    ("Coal India", "COALINDIA.NS"),
    ("Oil and Natural Gas Corp", "ONGC.NS"),
    ("Britannia Industries", "BRITANNIA.NS"),
    ("Tata Power", "TATAPOWER.NS"),
    ("IndusInd Bank", "INDUSINDBK.NS"),
    ("Shree Cement", "SHREECEM.NS"),
    ("Adani Enterprises", "ADANIENT.NS"),
    ("Ambuja Cements", "AMBUJACEM.NS"),
    ("Dabur India", "DABUR.NS"),
    ("Godrej Consumer", "GODREJCP.NS"),
    ("Pidilite Industries", "PIDILITIND.NS"),
];

/// Ordered, immutable list of companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    companies: Vec<Company>,
}

impl Catalog {
    /// Builds a catalog from arbitrary entries. Order is preserved; at least
    /// one entry is required so a selection always exists.
    pub fn new(companies: Vec<Company>) -> Result<Self, ValidationError> {
        if companies.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        Ok(Self { companies })
    }

    /// The built-in NSE listing table.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            LISTINGS
                .iter()
                .map(|(name, symbol)| Company::new(*name, symbol))
                .collect::<Result<Vec<_>, _>>()
                .and_then(Catalog::new)
                .expect("builtin listings are valid")
        })
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn first(&self) -> &Company {
        &self.companies[0]
    }

    pub fn filter(&self, query: &str) -> Vec<&Company> {
        filter_companies(&self.companies, query)
    }

    /// Resolves a user-typed needle to exactly one company.
    ///
    /// Tries an exact symbol match, then a bare ticker (`infy` for
    /// `INFY.NS`), then an exact name (all case-insensitive), then falls back
    /// to a unique search hit.
    pub fn resolve(&self, needle: &str) -> Result<&Company, ValidationError> {
        let trimmed = needle.trim();
        let lowered = trimmed.to_lowercase();

        if let Some(company) = self
            .companies
            .iter()
            .find(|company| company.symbol.as_str().eq_ignore_ascii_case(trimmed))
        {
            return Ok(company);
        }

        if let Some(company) = self
            .companies
            .iter()
            .find(|company| company.symbol.ticker().eq_ignore_ascii_case(trimmed))
        {
            return Ok(company);
        }

        if let Some(company) = self
            .companies
            .iter()
            .find(|company| company.name.to_lowercase() == lowered)
        {
            return Ok(company);
        }

        if trimmed.is_empty() {
            return Err(ValidationError::UnknownCompany {
                needle: needle.to_owned(),
            });
        }

        match self.filter(trimmed).as_slice() {
            [] => Err(ValidationError::UnknownCompany {
                needle: trimmed.to_owned(),
            }),
            [company] => Ok(*company),
            matches => Err(ValidationError::AmbiguousCompany {
                needle: trimmed.to_owned(),
                count: matches.len(),
            }),
        }
    }
}

/// Companies whose name or symbol contains `query`, ignoring case.
///
/// An empty query keeps every entry. Relative order is always preserved.
pub fn filter_companies<'a>(companies: &'a [Company], query: &str) -> Vec<&'a Company> {
    if query.is_empty() {
        return companies.iter().collect();
    }

    let needle = query.to_lowercase();
    companies
        .iter()
        .filter(|company| {
            company.name.to_lowercase().contains(&needle)
                || company.symbol.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}

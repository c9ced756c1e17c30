//! Currency choices for expenses

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One of the ten supported ISO 4217 codes. Defaults to RSD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    Aud,
    Bam,
    Cad,
    Hrk,
    Eur,
    Huf,
    Nzd,
    #[default]
    Rsd,
    Gbp,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Aud,
        Currency::Bam,
        Currency::Cad,
        Currency::Hrk,
        Currency::Eur,
        Currency::Huf,
        Currency::Nzd,
        Currency::Rsd,
        Currency::Gbp,
        Currency::Usd,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Bam => "BAM",
            Self::Cad => "CAD",
            Self::Hrk => "HRK",
            Self::Eur => "EUR",
            Self::Huf => "HUF",
            Self::Nzd => "NZD",
            Self::Rsd => "RSD",
            Self::Gbp => "GBP",
            Self::Usd => "USD",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aud => "Australia Dollar",
            Self::Bam => "Bosnia and Herzegovina Convertible Marka",
            Self::Cad => "Canada Dollar",
            Self::Hrk => "Croatia Kuna",
            Self::Eur => "Euro Member Countries",
            Self::Huf => "Hungary Forint",
            Self::Nzd => "New Zealand Dollar",
            Self::Rsd => "Serbia Dinar",
            Self::Gbp => "United Kingdom Pound",
            Self::Usd => "United States Dollar",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    /// Exact, upper-case code match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unsupported currency: {}", s)))
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.code().to_string()
    }
}

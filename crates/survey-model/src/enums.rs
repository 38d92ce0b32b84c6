//! Type-safe enumerations for normalized survey answers.
//!
//! The raw export carries these concepts as free text in the respondent's
//! language; the cleaned dataset reduces them to the small closed sets
//! defined here. `as_str` returns the label used in the cleaned output,
//! which matches the historical dataset published alongside the survey.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Effective payment currency of a response.
///
/// The survey only offers Colombian pesos or US dollars; respondents paid
/// in anything else are instructed to convert to dollars. Anything that
/// cannot be reduced to one of the two is `Unknown` and fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Currency {
    Usd,
    Cop,
    Unknown,
}

impl Currency {
    /// Label used in the cleaned dataset (historical output compatibility).
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "Dólares",
            Currency::Cop => "Pesos",
            Currency::Unknown => "Unknown",
        }
    }

    /// Short code used in the elimination report's `salary_type` column.
    pub fn as_code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cop => "COP",
            Currency::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Currency::Unknown)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Normalized company classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyType {
    /// Foreign company.
    Foreign,
    /// Colombian company selling into foreign markets.
    DomesticForeignMarket,
    /// Colombian company selling into the domestic market.
    DomesticMarket,
    /// Independent / freelance.
    Independent,
    NoAnswer,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Foreign => "Extranjera",
            CompanyType::DomesticForeignMarket => "Colombiana con mercado extranjero",
            CompanyType::DomesticMarket => "Colombiana con mercado nacional",
            CompanyType::Independent => "Soy independiente (Freelance)",
            CompanyType::NoAnswer => "Sin Respuesta",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized work mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    OnSite,
    Remote,
    Hybrid,
    Flexible,
    NoAnswer,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::OnSite => "Presencial",
            WorkMode::Remote => "Remoto",
            WorkMode::Hybrid => "Híbrido",
            WorkMode::Flexible => "Flexible",
            WorkMode::NoAnswer => "Sin Respuesta",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    /// Employment contract.
    Employment,
    /// Service provision / contractor / independent.
    Services,
    NoAnswer,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Employment => "Laboral",
            ContractType::Services => "Prestación de servicios/Contractor/Independiente",
            ContractType::NoAnswer => "Sin Respuesta",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_labels() {
        assert_eq!(Currency::Usd.as_str(), "Dólares");
        assert_eq!(Currency::Cop.as_str(), "Pesos");
        assert_eq!(Currency::Usd.as_code(), "USD");
        assert!(!Currency::Unknown.is_known());
    }

    #[test]
    fn serde_uses_kebab_codes() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"usd\"");
        assert_eq!(
            serde_json::to_string(&WorkMode::OnSite).unwrap(),
            "\"on-site\""
        );
        assert_eq!(
            serde_json::from_str::<WorkMode>("\"remote\"").unwrap(),
            WorkMode::Remote
        );
    }
}

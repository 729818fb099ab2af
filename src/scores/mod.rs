pub mod adhd;
pub mod alzheimers;
pub mod asd;
pub mod parkinsons;
pub mod risk;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::scores::risk::RuleTable;

/// Screened disorders, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Parkinsons,
    Alzheimers,
    Asd,
    Adhd,
}

impl Disease {
    pub const ALL: [Disease; 4] = [
        Disease::Parkinsons,
        Disease::Alzheimers,
        Disease::Asd,
        Disease::Adhd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parkinsons => "parkinsons",
            Self::Alzheimers => "alzheimers",
            Self::Asd => "asd",
            Self::Adhd => "adhd",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Parkinsons => "Parkinson's disease",
            Self::Alzheimers => "Alzheimer's disease",
            Self::Asd => "Autism spectrum disorder",
            Self::Adhd => "ADHD",
        }
    }

    pub fn rule_table(&self) -> &'static RuleTable {
        match self {
            Self::Parkinsons => &parkinsons::RULES,
            Self::Alzheimers => &alzheimers::RULES,
            Self::Asd => &asd::RULES,
            Self::Adhd => &adhd::RULES,
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '\'' && *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "parkinsons" | "parkinson" | "pd" => Ok(Self::Parkinsons),
            "alzheimers" | "alzheimer" | "ad" => Ok(Self::Alzheimers),
            "asd" | "autism" => Ok(Self::Asd),
            "adhd" => Ok(Self::Adhd),
            _ => Err(AnalysisError::invalid(format!(
                "unknown disease '{}' (expected parkinsons, alzheimers, asd or adhd)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseSelection {
    diseases: Vec<Disease>,
}

impl DiseaseSelection {
    pub fn all() -> Self {
        Self {
            diseases: Disease::ALL.to_vec(),
        }
    }

    pub fn only(diseases: &[Disease]) -> Self {
        let mut diseases = diseases.to_vec();
        diseases.sort();
        diseases.dedup();
        Self { diseases }
    }

    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, AnalysisError> {
        if names.is_empty() {
            return Ok(Self::all());
        }
        let diseases = names
            .iter()
            .map(|n| n.as_ref().parse::<Disease>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::only(&diseases))
    }

    pub fn contains(&self, disease: Disease) -> bool {
        self.diseases.contains(&disease)
    }

    pub fn iter(&self) -> impl Iterator<Item = Disease> + '_ {
        self.diseases.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

impl Default for DiseaseSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const MODERATE_CUT: f64 = 0.3;
    pub const HIGH_CUT: f64 = 0.6;

    pub fn from_score(score: f64) -> Self {
        if score < Self::MODERATE_CUT {
            Self::Low
        } else if score < Self::HIGH_CUT {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub name: String,
    pub fired: bool,
    pub threshold: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseResult {
    pub disease: Disease,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
    pub rule_evaluations: Vec<RuleEvaluation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub highest_risk_disease: Option<Disease>,
    pub highest_risk_score: f64,
    pub risk_level: RiskLevel,
    pub overall_recommendations: Vec<String>,
}

//! Lead dossier types as delivered by the enrichment backend.
//!
//! The backend owns scoring; this side only reads the record, bands the
//! score for display and attaches the seasonal context.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{SeasonalCalendar, SeasonalContext};
use crate::masking::format_cnpj;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadData {
    pub status: String,
    pub company: CompanyRecord,
    pub intelligence: LeadIntelligence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub cnpj: String,
    #[serde(default)]
    pub capital: f64,
    /// `"municipio/UF"`, e.g. `"Sorriso/MT"`.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activity: String,
}

impl CompanyRecord {
    /// State code after the last `/` of the location, uppercased.
    pub fn state_code(&self) -> Option<String> {
        let (_, uf) = self.location.rsplit_once('/')?;
        let uf = uf.trim();
        if uf.is_empty() {
            None
        } else {
            Some(uf.to_uppercase())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadIntelligence {
    /// 0-100.
    pub score: u8,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_big_fish: bool,
}

/// Display banding of the intelligence score. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Moderate,
    HighRisk,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 50 {
            ScoreBand::Moderate
        } else {
            ScoreBand::HighRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excelente",
            ScoreBand::Moderate => "Moderado",
            ScoreBand::HighRisk => "Alto Risco",
        }
    }
}

/// Everything the details modal shows beyond the raw lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDossier {
    pub name: String,
    pub cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    pub score: u8,
    pub score_band: ScoreBand,
    pub score_label: String,
    pub is_big_fish: bool,
    pub products: Vec<String>,
    pub tags: Vec<String>,
    pub seasonal: SeasonalContext,
}

impl LeadDossier {
    pub fn build(lead: &LeadData, calendar: &SeasonalCalendar, reference_date: NaiveDate) -> Self {
        let state_code = lead.company.state_code();
        let seasonal = calendar.resolve(
            state_code.as_deref().unwrap_or(""),
            &lead.company.activity,
            reference_date,
        );
        let score = lead.intelligence.score.min(100);
        let score_band = ScoreBand::from_score(score);

        Self {
            name: lead.company.name.clone(),
            cnpj: format_cnpj(Some(&lead.company.cnpj)),
            state_code,
            score,
            score_band,
            score_label: score_band.label().to_string(),
            is_big_fish: lead.intelligence.is_big_fish,
            products: lead.intelligence.products.clone(),
            tags: lead.intelligence.tags.clone(),
            seasonal,
        }
    }
}

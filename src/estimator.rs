//! Rough revenue range from segment and operational size.
//!
//! Per-unit multipliers are market averages (R$/ha/year for growers, R$ per
//! head turned over for cattle, R$ per ton of cane crushed for mills).

use serde::{Deserialize, Serialize};

const GRAIN_PER_HA: (f64, f64) = (10_000.0, 13_000.0);
const COTTON_PER_HA: (f64, f64) = (18_000.0, 25_000.0);
const CATTLE_PER_HEAD: (f64, f64) = (1_500.0, 2_200.0);
const PASTURE_PER_HA: (f64, f64) = (2_500.0, 4_000.0);
const CANE_PER_TON: (f64, f64) = (280.0, 350.0);

const GROWER_KEYWORDS: &[&str] = &["grãos", "soja", "produtor", "agrícola", "algodão"];
const COTTON_KEYWORDS: &[&str] = &["algodão", "fibra"];
const LIVESTOCK_KEYWORDS: &[&str] = &["pecuária", "gado", "bovino"];
const INDUSTRY_KEYWORDS: &[&str] = &["usina", "sucro", "etanol", "bioenergia"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationParams {
    #[serde(default)]
    pub hectares: Option<f64>,
    /// Head of cattle.
    #[serde(default)]
    pub heads: Option<f64>,
    /// Tons of cane crushed per season.
    #[serde(default)]
    pub crushing_capacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEstimation {
    pub estimated_range: String,
    pub raw_avg: f64,
    pub logic: String,
}

fn contains_any(segment: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| segment.contains(k))
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Millions with one decimal and a comma separator: `12,5 MM`.
fn format_millions(value: f64) -> String {
    format!("{:.1}", value / 1_000_000.0).replace('.', ",") + " MM"
}

/// Estimate annual revenue. Segment families are exclusive: a grower
/// segment without hectares does not fall through to livestock.
pub fn estimate_revenue(segment: &str, params: &EstimationParams) -> Option<RevenueEstimation> {
    let seg = segment.to_lowercase();

    let (rate, units, logic) = if contains_any(&seg, GROWER_KEYWORDS) {
        let hectares = positive(params.hectares)?;
        if contains_any(&seg, COTTON_KEYWORDS) {
            (
                COTTON_PER_HA,
                hectares,
                "Baseado em alto custo/receita do Algodão (MT/BA).",
            )
        } else {
            (
                GRAIN_PER_HA,
                hectares,
                "Baseado em produtividade média de Soja+Milho na região (60+100 sc/ha) x Preço Médio de Mercado.",
            )
        }
    } else if contains_any(&seg, LIVESTOCK_KEYWORDS) {
        if let Some(heads) = positive(params.heads) {
            (
                CATTLE_PER_HEAD,
                heads,
                "Estimativa baseada no giro de rebanho e preço da Arroba atual.",
            )
        } else {
            let hectares = positive(params.hectares)?;
            (
                PASTURE_PER_HA,
                hectares,
                "Estimativa baseada em lotação média de pastagem e giro de arroba (Pecuária de Ciclo Curto).",
            )
        }
    } else if contains_any(&seg, INDUSTRY_KEYWORDS) {
        let tons = positive(params.crushing_capacity)?;
        (
            CANE_PER_TON,
            tons,
            "Baseado no mix de produção (Açúcar/Etanol) por tonelada de cana moída (TCH).",
        )
    } else {
        log::debug!("estimate_revenue: no segment family for '{}'", seg);
        return None;
    };

    let low = units * rate.0;
    let high = units * rate.1;

    Some(RevenueEstimation {
        estimated_range: format!("R$ {} - R$ {}", format_millions(low), format_millions(high)),
        raw_avg: (low + high) / 2.0,
        logic: logic.to_string(),
    })
}

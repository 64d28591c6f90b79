//! Built-in Brazilian agribusiness calendar.
//!
//! Families are listed in precedence order. Segment keywords overlap
//! ("produtor" appears in both grower families), so the order is part of the
//! behavior and must not be re-sorted.

use super::schema::{
    AlertLevel, KeywordMatch, MatchPolicy, MonthRule, SeasonalCalendar, SeasonalContext,
    SegmentFamily,
};

pub const BUILTIN_CALENDAR_ID: &str = "agro-br";

/// State codes treated as the Center-West grain belt.
pub const CENTER_WEST_STATES: [&str; 5] = ["MT", "GO", "MS", "DF", "TO"];

fn rule(from: u32, to: u32, context: SeasonalContext) -> MonthRule {
    MonthRule {
        from,
        to,
        center_west_only: false,
        context,
    }
}

// ---------------------------------------------------------------------------
// Family: cotton grower (high-cost cycle)
// ---------------------------------------------------------------------------

fn cotton_grower() -> SegmentFamily {
    SegmentFamily {
        id: "cotton_grower".to_string(),
        label: "Produtor de Algodão".to_string(),
        keywords: KeywordMatch::all(&["algodão", "produtor"]),
        rules: vec![
            rule(
                1,
                2,
                SeasonalContext::new(
                    "🚜 Plantio do Algodão",
                    "☁️",
                    AlertLevel::High,
                    "Fase de alto desembolso financeiro (Sementes/Químicos). Margem operacional pressionada.",
                ),
            ),
            rule(
                6,
                9,
                SeasonalContext::new(
                    "🚛 Colheita do Algodão",
                    "📦",
                    AlertLevel::High,
                    "Logística complexa de fardos e transporte intenso para algodoeira.",
                ),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Family: grain / livestock grower
// ---------------------------------------------------------------------------

fn grain_grower() -> SegmentFamily {
    SegmentFamily {
        id: "grain_grower".to_string(),
        label: "Produtor de Grãos e Pecuária".to_string(),
        keywords: KeywordMatch::any(&["soja", "grãos", "produtor", "pecuária"]),
        rules: vec![
            // Soy harvest overlaps second-crop corn planting in the grain belt.
            MonthRule {
                from: 1,
                to: 3,
                center_west_only: true,
                context: SeasonalContext::new(
                    "🚜 Pico de Safra (Colheita/Plantio)",
                    "🌽",
                    AlertLevel::High,
                    "Operação no limite. Máquinas em uso máximo, chuva atrapalhando logística de escoamento.",
                ),
            },
            rule(
                4,
                6,
                SeasonalContext::new(
                    "🌱 Desenvolvimento Safrinha",
                    "🌾",
                    AlertLevel::Medium,
                    "Momento de monitoramento da lavoura e planejamento de vendas futuras.",
                ),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Family: resellers, machinery and input dealers
// ---------------------------------------------------------------------------

/// Dealers run the inverse cycle: when growers harvest, dealers collect.
fn reseller() -> SegmentFamily {
    SegmentFamily {
        id: "reseller".to_string(),
        label: "Revendas, Máquinas e Insumos".to_string(),
        keywords: KeywordMatch::any(&["revenda", "máquinas", "insumos"]),
        rules: vec![
            rule(
                1,
                4,
                SeasonalContext::new(
                    "💰 Safra Financeira (Cobrança)",
                    "💲",
                    AlertLevel::High,
                    "Foco total do backoffice em receber contas dos produtores e liquidar contratos de Barter.",
                ),
            ),
            rule(
                8,
                10,
                SeasonalContext::new(
                    "🚚 Expedição & Vendas",
                    "📦",
                    AlertLevel::High,
                    "Logística de entrega de insumos no pico. Estoque girando rápido.",
                ),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Family: industrial processors (sugar/ethanol mills)
// ---------------------------------------------------------------------------

fn industrial_processor() -> SegmentFamily {
    SegmentFamily {
        id: "industrial_processor".to_string(),
        label: "Indústria e Usinas".to_string(),
        keywords: KeywordMatch::any(&["usina", "sucro", "bioenergia"]),
        rules: vec![
            rule(
                1,
                3,
                SeasonalContext::new(
                    "🛠️ Entressafra (Manutenção Industrial)",
                    "🏭",
                    AlertLevel::Medium,
                    "Usina parada para reforma. Alto volume de compras de peças e serviços de manutenção.",
                ),
            ),
            rule(
                4,
                12,
                SeasonalContext::new(
                    "🔥 Safra de Moagem",
                    "⚡",
                    AlertLevel::High,
                    "Indústria rodando 24h. Foco crítico em rendimento industrial e disponibilidade de planta.",
                ),
            ),
        ],
    }
}

/// Returned when no family/month rule applies.
pub fn market_monitoring() -> SeasonalContext {
    SeasonalContext::new(
        "Monitoramento de Mercado",
        "📡",
        AlertLevel::Low,
        "Verifique o momento específico da empresa.",
    )
}

impl SeasonalCalendar {
    /// The built-in calendar, in fixed precedence order.
    pub fn builtin() -> Self {
        Self {
            id: BUILTIN_CALENDAR_ID.to_string(),
            name: "Calendário Agro Brasil".to_string(),
            policy: MatchPolicy::FirstFamily,
            families: vec![
                cotton_grower(),
                grain_grower(),
                reseller(),
                industrial_processor(),
            ],
            fallback: market_monitoring(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_family_order() {
        let cal = SeasonalCalendar::builtin();
        let ids: Vec<&str> = cal.families.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["cotton_grower", "grain_grower", "reseller", "industrial_processor"]
        );
    }

    #[test]
    fn test_builtin_rule_ranges_are_well_formed() {
        let cal = SeasonalCalendar::builtin();
        for family in &cal.families {
            assert!(!family.rules.is_empty(), "{} has no rules", family.id);
            for r in &family.rules {
                assert!(r.from >= 1 && r.from <= r.to && r.to <= 12);
            }
        }
    }

    #[test]
    fn test_only_grain_peak_is_center_west_gated() {
        let cal = SeasonalCalendar::builtin();
        let gated: Vec<(&str, u32)> = cal
            .families
            .iter()
            .flat_map(|f| {
                f.rules
                    .iter()
                    .filter(|r| r.center_west_only)
                    .map(move |r| (f.id.as_str(), r.from))
            })
            .collect();
        assert_eq!(gated, vec![("grain_grower", 1)]);
    }

    #[test]
    fn test_market_monitoring_is_low() {
        assert_eq!(market_monitoring().alert_level, AlertLevel::Low);
    }
}

use serde::{Deserialize, Serialize};

/// Ordinal urgency attached to a seasonal context. Declaration order is the
/// sort order: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Low,
    Medium,
    High,
}

/// Where an account sits in its agricultural/industrial calendar right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalContext {
    pub status: String,
    pub emoji: String,
    pub alert_level: AlertLevel,
    pub message: String,
}

impl SeasonalContext {
    pub fn new(status: &str, emoji: &str, alert_level: AlertLevel, message: &str) -> Self {
        Self {
            status: status.to_string(),
            emoji: emoji.to_string(),
            alert_level,
            message: message.to_string(),
        }
    }
}

/// Keyword predicate over the lowercased segment text.
///
/// Every `all_of` keyword must appear. When `any_of` is non-empty at least
/// one of its keywords must appear too.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<String>,
}

impl KeywordMatch {
    pub fn all(keywords: &[&str]) -> Self {
        Self {
            all_of: keywords.iter().map(|k| k.to_string()).collect(),
            any_of: Vec::new(),
        }
    }

    pub fn any(keywords: &[&str]) -> Self {
        Self {
            all_of: Vec::new(),
            any_of: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all_of.is_empty() && self.any_of.is_empty()
    }

    /// `segment` must already be lowercased.
    pub fn matches(&self, segment: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let all = self
            .all_of
            .iter()
            .all(|k| segment.contains(k.to_lowercase().as_str()));
        let any = self.any_of.is_empty()
            || self
                .any_of
                .iter()
                .any(|k| segment.contains(k.to_lowercase().as_str()));
        all && any
    }
}

/// One month window inside a family. `from` and `to` are inclusive, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRule {
    pub from: u32,
    pub to: u32,
    #[serde(default)]
    pub center_west_only: bool,
    pub context: SeasonalContext,
}

impl MonthRule {
    pub fn applies(&self, month: u32, is_center_west: bool) -> bool {
        month >= self.from && month <= self.to && (is_center_west || !self.center_west_only)
    }
}

/// A segment family: keyword predicate plus its month rules, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentFamily {
    pub id: String,
    pub label: String,
    pub keywords: KeywordMatch,
    pub rules: Vec<MonthRule>,
}

/// What happens when the first matching family has no rule for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPolicy {
    /// The first family whose keywords match decides; an uncovered month
    /// yields the fallback.
    #[default]
    FirstFamily,
    /// Keep scanning later families until some month rule applies.
    FirstRule,
}

/// An ordered rule calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalCalendar {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub policy: MatchPolicy,
    pub families: Vec<SegmentFamily>,
    pub fallback: SeasonalContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_level_ordering() {
        assert!(AlertLevel::High > AlertLevel::Medium);
        assert!(AlertLevel::Medium > AlertLevel::Low);
        let mut levels = vec![AlertLevel::Medium, AlertLevel::High, AlertLevel::Low];
        levels.sort();
        assert_eq!(levels, vec![AlertLevel::Low, AlertLevel::Medium, AlertLevel::High]);
    }

    #[test]
    fn test_context_serializes_flat_camel_case() {
        let ctx = SeasonalContext::new("🔥 Safra de Moagem", "⚡", AlertLevel::High, "Indústria rodando 24h.");
        let json = serde_json::to_value(&ctx).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["alertLevel"], "high");
        assert_eq!(obj["emoji"], "⚡");
        assert!(obj.contains_key("status"));
        assert!(obj.contains_key("message"));
    }

    #[test]
    fn test_keyword_all_of_requires_every_token() {
        let kw = KeywordMatch::all(&["algodão", "produtor"]);
        assert!(kw.matches("produtor de algodão"));
        assert!(!kw.matches("algodoeira"));
        assert!(!kw.matches("produtor de soja"));
    }

    #[test]
    fn test_keyword_any_of() {
        let kw = KeywordMatch::any(&["usina", "sucro"]);
        assert!(kw.matches("sucroenergético"));
        assert!(!kw.matches("revenda"));
    }

    #[test]
    fn test_keyword_uppercase_tokens_still_match() {
        let kw = KeywordMatch::any(&["SOJA"]);
        assert!(kw.matches("produtor de soja"));
    }

    #[test]
    fn test_empty_keywords_never_match() {
        assert!(!KeywordMatch::default().matches("qualquer coisa"));
    }

    #[test]
    fn test_month_rule_center_west_gate() {
        let rule = MonthRule {
            from: 1,
            to: 3,
            center_west_only: true,
            context: SeasonalContext::new("x", "y", AlertLevel::High, "z"),
        };
        assert!(rule.applies(2, true));
        assert!(!rule.applies(2, false));
        assert!(!rule.applies(4, true));
    }

    #[test]
    fn test_policy_defaults_to_first_family() {
        let json = r#"{"id":"c","name":"C","families":[],"fallback":{"status":"s","emoji":"e","alertLevel":"low","message":"m"}}"#;
        let cal: SeasonalCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(cal.policy, MatchPolicy::FirstFamily);
    }
}

//! Keyword-routed reply selection.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::templates;

/// Which canned reply a message was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    NextBestAction,
    PipelineSummary,
    TopLeads,
    PerformanceStats,
    Fallback,
}

impl ResponseKind {
    pub fn template(self) -> &'static str {
        match self {
            ResponseKind::NextBestAction => templates::NEXT_BEST_ACTION,
            ResponseKind::PipelineSummary => templates::PIPELINE_SUMMARY,
            ResponseKind::TopLeads => templates::TOP_LEADS,
            ResponseKind::PerformanceStats => templates::PERFORMANCE_STATS,
            ResponseKind::Fallback => templates::FALLBACK,
        }
    }
}

/// Built-in rules, in evaluation order. Keywords are lower-case.
const GERMAN_RULES: [(ResponseKind, &[&str]); 4] = [
    (ResponseKind::NextBestAction, &["führe", "nächste beste aktion"]),
    (ResponseKind::PipelineSummary, &["deals", "pipeline"]),
    (ResponseKind::TopLeads, &["kontakte", "leads"]),
    (ResponseKind::PerformanceStats, &["statistik", "performance"]),
];

/// Route `text` through the built-in rules and return the reply.
///
/// Matching is a substring test on the lower-cased input; the first rule with
/// any matching keyword wins, and unmatched input gets the capability menu.
pub fn select_response(text: &str) -> &'static str {
    classify_with(&GERMAN_RULES, text).template()
}

fn classify_with(rules: &[(ResponseKind, &[&str])], text: &str) -> ResponseKind {
    let normalized = text.to_lowercase();
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ResponseKind::Fallback)
}

/// One `(keywords, reply)` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRule {
    pub kind: ResponseKind,
    pub keywords: Vec<String>,
    pub template: String,
}

impl ResponseRule {
    pub fn new(
        kind: ResponseKind,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            keywords: keywords.into_iter().map(Into::into).collect(),
            template: template.into(),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Ordered rule list plus an unconditional fallback reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSelector {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl ResponseSelector {
    /// Build a selector, rejecting rules that could never match or would
    /// answer with nothing. Keywords are lower-cased here once.
    pub fn new(rules: Vec<ResponseRule>, fallback: impl Into<String>) -> Result<Self, ChatError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(ChatError::InvalidRule("fallback reply is empty".to_string()));
        }

        let mut normalized = Vec::with_capacity(rules.len());
        for mut rule in rules {
            if rule.template.trim().is_empty() {
                return Err(ChatError::InvalidRule(format!("{:?}: reply is empty", rule.kind)));
            }
            if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(ChatError::InvalidRule(format!(
                    "{:?}: needs at least one non-empty keyword",
                    rule.kind
                )));
            }
            rule.keywords = rule.keywords.iter().map(|k| k.to_lowercase()).collect();
            normalized.push(rule);
        }

        Ok(Self {
            rules: normalized,
            fallback,
        })
    }

    /// The built-in German assistant rules.
    pub fn german() -> Self {
        Self {
            rules: GERMAN_RULES
                .iter()
                .map(|(kind, keywords)| ResponseRule::new(*kind, keywords.iter().copied(), kind.template()))
                .collect(),
            fallback: templates::FALLBACK.to_string(),
        }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn classify(&self, text: &str) -> ResponseKind {
        self.matching_rule(text)
            .map(|rule| rule.kind)
            .unwrap_or(ResponseKind::Fallback)
    }

    pub fn select(&self, text: &str) -> &str {
        self.matching_rule(text)
            .map(|rule| rule.template.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    fn matching_rule(&self, text: &str) -> Option<&ResponseRule> {
        let normalized = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::german()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_question_gets_pipeline_summary() {
        let reply = select_response("Zeig mir alle Deals mit > 50%");
        assert_eq!(reply, templates::PIPELINE_SUMMARY);
        assert!(reply.contains("Deine Pipeline enthält"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let text = "Was sind meine nächsten Schritte? Führe eine Analyse durch";
        assert_eq!(select_response(text), templates::NEXT_BEST_ACTION);

        // Matches both the action rule and the pipeline rule.
        let both = "Führe mich durch die Pipeline";
        assert_eq!(select_response(both), templates::NEXT_BEST_ACTION);
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        assert_eq!(select_response("hallo"), templates::FALLBACK);
        assert_eq!(select_response(""), templates::FALLBACK);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(select_response("PERFORMANCE bitte"), templates::PERFORMANCE_STATS);
        assert_eq!(select_response("Welche KONTAKTE?"), templates::TOP_LEADS);
        assert_eq!(
            select_response("Was ist die NÄCHSTE BESTE AKTION?"),
            templates::NEXT_BEST_ACTION
        );
    }

    #[test]
    fn substring_matching_is_not_word_bound() {
        // "leads" inside another word still routes to the leads reply.
        assert_eq!(select_response("subleads"), templates::TOP_LEADS);
    }

    #[test]
    fn every_reply_is_multiline_and_non_empty() {
        for kind in [
            ResponseKind::NextBestAction,
            ResponseKind::PipelineSummary,
            ResponseKind::TopLeads,
            ResponseKind::PerformanceStats,
            ResponseKind::Fallback,
        ] {
            assert!(kind.template().contains("\n\n"), "{kind:?}");
        }
    }

    #[test]
    fn german_selector_agrees_with_free_function() {
        let selector = ResponseSelector::german();
        for text in [
            "Zeig mir alle Deals mit > 50%",
            "Führe eine Analyse durch",
            "Top Leads?",
            "Statistik der Woche",
            "hallo",
        ] {
            assert_eq!(selector.select(text), select_response(text));
        }
        assert_eq!(selector.classify("pipeline"), ResponseKind::PipelineSummary);
        assert_eq!(selector.classify("hallo"), ResponseKind::Fallback);
    }

    #[test]
    fn custom_rules_are_normalized_and_ordered() {
        let selector = ResponseSelector::new(
            vec![
                ResponseRule::new(ResponseKind::TopLeads, ["VIP"], "vip reply"),
                ResponseRule::new(ResponseKind::PipelineSummary, ["vip", "umsatz"], "pipeline reply"),
            ],
            "fallback reply",
        )
        .unwrap();

        assert_eq!(selector.select("Zeig VIP Umsatz"), "vip reply");
        assert_eq!(selector.select("umsatz"), "pipeline reply");
        assert_eq!(selector.select("nichts"), "fallback reply");
    }

    #[test]
    fn degenerate_rules_fail_fast() {
        let empty_keyword = ResponseSelector::new(
            vec![ResponseRule::new(ResponseKind::TopLeads, [""], "reply")],
            "fallback",
        );
        assert!(matches!(empty_keyword, Err(ChatError::InvalidRule(_))));

        let no_keywords = ResponseSelector::new(
            vec![ResponseRule::new(ResponseKind::TopLeads, Vec::<String>::new(), "reply")],
            "fallback",
        );
        assert!(no_keywords.is_err());

        let empty_fallback = ResponseSelector::new(Vec::new(), "  ");
        assert!(empty_fallback.is_err());
    }
}

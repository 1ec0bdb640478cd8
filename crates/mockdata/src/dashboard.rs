//! Dashboard figures and canned AI insights.

use serde::{Deserialize, Serialize};

use crate::deal::DealStage;

/// Pre-written "AI insight" suggestions shown on the dashboard.
pub fn ai_insights() -> Vec<String> {
    [
        "Meetinganfrage für Weber IT Solutions erstellen",
        "Angebot für Schneider & Söhne aktualisieren",
        "Kontaktpriorität für Müller AG erhöhen",
        "Preismodell für Becker Pharma GmbH anpassen",
        "Sales Deck für Schmidt Maschinenbau vorbereiten",
        "Folgetermin mit Hoffmann & Partner vereinbaren",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScoring {
    pub hot_leads: u32,
    pub probability: u8,
    pub trend: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageShare {
    pub stage: DealStage,
    pub percentage: u8,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineHealth {
    pub stages: Vec<StageShare>,
    pub total_value: u64,
    pub ai_suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationStats {
    pub active_sequences: u32,
    pub pending_followups: u32,
    pub optimization_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotStats {
    pub new_chats: u32,
    pub open_requests: u32,
    pub average_response_time: String,
}

/// Static headline figures for the dashboard cards.
///
/// These are reference numbers, not derived from the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub lead_scoring: LeadScoring,
    pub pipeline_health: PipelineHealth,
    pub automations: AutomationStats,
    pub chatbot_interactions: ChatbotStats,
}

impl DashboardKpis {
    pub fn reference() -> Self {
        let share = |stage, percentage, count| StageShare {
            stage,
            percentage,
            count,
        };

        Self {
            lead_scoring: LeadScoring {
                hot_leads: 23,
                probability: 80,
                trend: 8,
            },
            pipeline_health: PipelineHealth {
                stages: vec![
                    share(DealStage::New, 25, 15),
                    share(DealStage::Qualified, 30, 9),
                    share(DealStage::Proposal, 25, 7),
                    share(DealStage::Closed, 20, 5),
                ],
                total_value: 1_245_000,
                ai_suggestion: "Fokussiere auf die 7 Deals in der Angebotsphase, 3 davon zeigen \
                                hohe Abschlusswahrscheinlichkeit."
                    .to_string(),
            },
            automations: AutomationStats {
                active_sequences: 5,
                pending_followups: 12,
                optimization_score: 87,
            },
            chatbot_interactions: ChatbotStats {
                new_chats: 8,
                open_requests: 3,
                average_response_time: "1.2m".to_string(),
            },
        }
    }
}

impl Default for DashboardKpis {
    fn default() -> Self {
        Self::reference()
    }
}

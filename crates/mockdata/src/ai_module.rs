//! AI-lab module catalog and the settings page toggles.
//!
//! Purely presentational configuration; nothing here drives a computation.

use serde::{Deserialize, Serialize};

use democrm_core::{Entity, ModuleId};

/// A tunable slider on a module card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleParameter {
    pub name: String,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ModuleParameter {
    fn percent(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            value,
            min: 0,
            max: 100,
            unit: None,
        }
    }

    pub fn accepts(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModule {
    pub id: ModuleId,
    pub name: String,
    pub active: bool,
    pub description: String,
    pub params: Vec<ModuleParameter>,
}

impl Entity for AiModule {
    type Id = ModuleId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

fn module(id: u32, name: &str, active: bool, description: &str, params: Vec<ModuleParameter>) -> AiModule {
    AiModule {
        id: ModuleId::new(id),
        name: name.to_string(),
        active,
        description: description.to_string(),
        params,
    }
}

/// The six AI-lab modules with their initial slider positions.
pub fn ai_module_catalog() -> Vec<AiModule> {
    vec![
        module(
            1,
            "Lead-Scoring Engine",
            true,
            "Bewertet Leads basierend auf Interaktionsdaten und demografischen Informationen.",
            vec![
                ModuleParameter::percent("Aggressivität", 70),
                ModuleParameter::percent("Priorisierung neuer Kontakte", 60),
            ],
        ),
        module(
            2,
            "Email-Sequenz Optimierer",
            true,
            "Optimiert E-Mail-Sequenzen für maximale Öffnungs- und Klickraten.",
            vec![
                ModuleParameter::percent("Sendefrequenz", 40),
                ModuleParameter::percent("Personalisierungsgrad", 80),
                ModuleParameter::percent("Content-Kreativität", 65),
            ],
        ),
        module(
            3,
            "Chatbot Intelligenz",
            true,
            "Steuert die Intelligenz und Autonomie des CRM-Chatbots.",
            vec![
                ModuleParameter::percent("Gesprächstiefe", 75),
                ModuleParameter::percent("Autonomie", 60),
            ],
        ),
        module(
            4,
            "Deal-Prognose",
            true,
            "Prognostiziert Erfolgswahrscheinlichkeiten und optimale Abschlussstrategien.",
            vec![
                ModuleParameter {
                    name: "Prognosehorizont".to_string(),
                    value: 30,
                    min: 7,
                    max: 90,
                    unit: Some("Tage".to_string()),
                },
                ModuleParameter::percent("Genauigkeit vs. Optimismus", 70),
            ],
        ),
        module(
            5,
            "Content Vorschläge",
            false,
            "Generiert personalisierte Inhaltsvorschläge für jeden Kundenkontakt.",
            vec![
                ModuleParameter::percent("Inhaltsmenge", 50),
                ModuleParameter::percent("Branchenfokus", 85),
            ],
        ),
        module(
            6,
            "Automatische Aktivitäten",
            true,
            "Erstellt und plant automatische Folgeaktivitäten ohne manuellen Eingriff.",
            vec![
                ModuleParameter::percent("Planungsintensität", 55),
                ModuleParameter::percent("Automatisierungsgrad", 65),
            ],
        ),
    ]
}

/// Named switch on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AiSetting {
    AutoEmailOutreach,
    LeadScoring,
    Chatbot,
    DealRecommendations,
    ContentSuggestions,
    AutomaticFollowups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub auto_email_outreach: bool,
    pub lead_scoring: bool,
    pub chatbot: bool,
    pub deal_recommendations: bool,
    pub content_suggestions: bool,
    pub automatic_followups: bool,
}

impl AiSettings {
    pub fn get(&self, setting: AiSetting) -> bool {
        match setting {
            AiSetting::AutoEmailOutreach => self.auto_email_outreach,
            AiSetting::LeadScoring => self.lead_scoring,
            AiSetting::Chatbot => self.chatbot,
            AiSetting::DealRecommendations => self.deal_recommendations,
            AiSetting::ContentSuggestions => self.content_suggestions,
            AiSetting::AutomaticFollowups => self.automatic_followups,
        }
    }

    pub(crate) fn slot(&mut self, setting: AiSetting) -> &mut bool {
        match setting {
            AiSetting::AutoEmailOutreach => &mut self.auto_email_outreach,
            AiSetting::LeadScoring => &mut self.lead_scoring,
            AiSetting::Chatbot => &mut self.chatbot,
            AiSetting::DealRecommendations => &mut self.deal_recommendations,
            AiSetting::ContentSuggestions => &mut self.content_suggestions,
            AiSetting::AutomaticFollowups => &mut self.automatic_followups,
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            auto_email_outreach: true,
            lead_scoring: true,
            chatbot: true,
            deal_recommendations: true,
            content_suggestions: false,
            automatic_followups: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_modules_with_valid_sliders() {
        let modules = ai_module_catalog();
        assert_eq!(modules.len(), 6);
        let ids: Vec<u32> = modules.iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for module in &modules {
            assert!(!module.params.is_empty());
            for param in &module.params {
                assert!(param.accepts(param.value), "{}: {}", module.name, param.name);
            }
        }
        assert_eq!(modules.iter().filter(|m| !m.active).count(), 1);
    }

    #[test]
    fn horizon_slider_has_day_unit() {
        let modules = ai_module_catalog();
        let horizon = &modules[3].params[0];
        assert_eq!(horizon.unit.as_deref(), Some("Tage"));
        assert!(!horizon.accepts(6));
        assert!(horizon.accepts(90));
    }

    #[test]
    fn default_settings_disable_only_content_suggestions() {
        let settings = AiSettings::default();
        assert!(!settings.get(AiSetting::ContentSuggestions));
        assert!(settings.get(AiSetting::Chatbot));
    }
}

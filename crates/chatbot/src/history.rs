//! Chat transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user message and the assistant's reply to it.
///
/// `bot` is `None` while the reply is still being composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub user: String,
    pub bot: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn pending(user: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user: user.into(),
            bot: None,
            submitted_at,
            answered_at: None,
        }
    }

    pub fn answered(mut self, bot: impl Into<String>, answered_at: DateTime<Utc>) -> Self {
        self.bot = Some(bot.into());
        self.answered_at = Some(answered_at);
        self
    }

    pub fn is_pending(&self) -> bool {
        self.bot.is_none()
    }
}

const SEED: [(&str, &str); 3] = [
    (
        "Zeig mir alle Deals mit > 50% Wahrscheinlichkeit.",
        "Hier sind 5 passende Deals mit über 50% Abschlusswahrscheinlichkeit:\n\n\
1. Müller AG - Softwarelizenz (75%)\n\
2. Weber IT Solutions - Consulting (62%)\n\
3. Becker Pharma - CRM-System (85%)\n\
4. Hoffmann & Partner - Schulung (58%)\n\
5. Schneider & Söhne - Cloud Migration (71%)\n\n\
Möchtest du mehr Details zu einem dieser Deals sehen?",
    ),
    (
        "Welche Kontakte sollte ich heute priorisieren?",
        "Basierend auf deiner Pipeline und AI-Scoring würde ich folgende Kontakte priorisieren:\n\n\
1. Thomas Weber (Weber IT Solutions) - Deal im Wert von 45.000€ in finaler Phase\n\
2. Laura Müller (Müller AG) - Letzte Interaktion vor 7 Tagen, hohes Engagement\n\
3. Christian Schmidt (Schmidt Maschinenbau) - Angebot läuft in 2 Tagen ab\n\n\
Soll ich für einen dieser Kontakte einen Gesprächsleitfaden vorbereiten?",
    ),
    (
        "Erstelle eine Zusammenfassung meiner Pipeline.",
        "Pipeline-Zusammenfassung:\n\n\
Gesamtwert: 1.245.000€\n\
Prognose Q2: 387.500€\n\n\
Verteilung:\n\
- Neu: 15 Deals (320.000€)\n\
- Qualifiziert: 9 Deals (405.000€)\n\
- Angebot: 7 Deals (345.000€)\n\
- Abschluss: 5 Deals (175.000€)\n\n\
AI-Einschätzung: Deine Conversion-Rate von \"Angebot\" zu \"Abschluss\" liegt 12% unter \
Branchendurchschnitt. Soll ich dir Optimierungsvorschläge machen?",
    ),
];

/// The example conversation a fresh chat page starts with.
pub fn seed_history(at: DateTime<Utc>) -> Vec<ChatMessage> {
    SEED.iter()
        .map(|(user, bot)| ChatMessage::pending(*user, at).answered(*bot, at))
        .collect()
}

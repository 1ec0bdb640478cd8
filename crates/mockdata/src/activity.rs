//! Timeline activities.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use democrm_core::{ActivityId, DomainError, DomainResult, Entity};

use crate::contact::Contact;
use crate::generator::{MockDataGenerator, pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Email,
    Call,
    Meeting,
    Task,
    Note,
    /// Entry produced by the (simulated) assistant.
    Ai,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Email,
        ActivityType::Call,
        ActivityType::Meeting,
        ActivityType::Task,
        ActivityType::Note,
        ActivityType::Ai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Email => "E-Mail",
            ActivityType::Call => "Anruf",
            ActivityType::Meeting => "Meeting",
            ActivityType::Task => "Aufgabe",
            ActivityType::Note => "Notiz",
            ActivityType::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub content: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "dateText")]
    pub timestamp_text: String,
    /// `None` exactly when `kind` is [`ActivityType::Ai`].
    pub contact: Option<String>,
    /// `None` exactly when `kind` is [`ActivityType::Ai`].
    pub company: Option<String>,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
}

impl Entity for Activity {
    type Id = ActivityId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// Generate `count` activities, newest first.
    ///
    /// Ids follow generation order, so after sorting they are not monotonic.
    pub fn generate_activities(
        &mut self,
        count: u32,
        contacts: &[Contact],
    ) -> DomainResult<Vec<Activity>> {
        if count > 0 && contacts.is_empty() {
            return Err(DomainError::invariant(
                "activities reference a contact; generate contacts first",
            ));
        }

        let mut activities: Vec<Activity> = (1..=count)
            .map(|id| self.generate_activity(ActivityId::new(id), contacts))
            .collect();

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug!(count = activities.len(), "generated activities");
        Ok(activities)
    }

    fn generate_activity(&mut self, id: ActivityId, contacts: &[Contact]) -> Activity {
        let contact = pick(&mut self.rng, contacts);
        let kind = *pick(&mut self.rng, &ActivityType::ALL);
        let timestamp = self.days_ago(self.config.activity_window_days);

        let (content, contact_name, company) = match kind {
            ActivityType::Ai => (
                pick(&mut self.rng, &self.lexicon.ai_activity_messages).clone(),
                None,
                None,
            ),
            _ => {
                let subject = pick(&mut self.rng, &self.lexicon.activity_subjects);
                (
                    format!("{}: {} - {}", kind.label(), subject, contact.company),
                    Some(contact.name.clone()),
                    Some(contact.company.clone()),
                )
            }
        };

        Activity {
            id,
            kind,
            content,
            timestamp,
            timestamp_text: self.relative(timestamp),
            contact: contact_name,
            company,
            is_ai: kind == ActivityType::Ai,
        }
    }
}

//! Contacts: generation plus the table search/sort the contact list offers.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use democrm_core::{ContactId, Entity};

use crate::generator::{MockDataGenerator, pick, score};

/// A synthetic lead/customer contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    /// `"{first_name} {last_name}"`.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub region: String,
    pub score: u8,
    pub ai_score: u8,
    pub last_interaction: DateTime<Utc>,
    pub last_interaction_text: String,
    pub notes: String,
    pub ai_summary: String,
}

impl Entity for Contact {
    type Id = ContactId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// `first.last@company.de`, lower-cased; the domain is the first word of the
/// company name.
pub fn derive_email(first_name: &str, last_name: &str, company: &str) -> String {
    let domain = company.split_whitespace().next().unwrap_or(company);
    format!(
        "{}.{}@{}.de",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        domain.to_lowercase()
    )
}

impl<R: Rng> MockDataGenerator<R> {
    /// Generate one contact. Names, company, position and region are
    /// independent draws, so duplicates across contacts are expected.
    pub fn generate_contact(&mut self, id: ContactId) -> Contact {
        let first_name = pick(&mut self.rng, &self.lexicon.first_names).clone();
        let last_name = pick(&mut self.rng, &self.lexicon.last_names).clone();
        let company = pick(&mut self.rng, &self.lexicon.companies).clone();
        let position = pick(&mut self.rng, &self.lexicon.positions).clone();
        let region = pick(&mut self.rng, &self.lexicon.regions).clone();
        let score_value = score(&mut self.rng, self.config.score_range);
        let ai_score = score(&mut self.rng, self.config.ai_score_range);
        let last_interaction = self.days_ago(self.config.interaction_window_days);

        let email = derive_email(&first_name, &last_name, &company);
        let phone = format!(
            "+49 {} {}",
            self.rng.gen_range(100..=999),
            self.rng.gen_range(1_000_000..=9_999_999)
        );

        let edition = if self.rng.gen_bool(0.5) { "Enterprise" } else { "Business" };
        let licences = self.rng.gen_range(5..=14);
        let notes = format!(
            "{first_name} hat großes Interesse an unserer {edition} Lösung gezeigt. \
             Letztes Gespräch: Preisverhandlung für {licences} Lizenzen."
        );

        let product = if self.rng.gen_bool(0.5) { "Produkt X" } else { "Produkt Y" };
        let interactions = self.rng.gen_range(2..=6);
        let focus = if self.rng.gen_bool(0.5) {
            "Kosteneinsparung"
        } else {
            "Effizienzsteigerung"
        };
        let ai_summary = format!(
            "Dieser Lead ist ideal für {product}, basierend auf den letzten {interactions} \
             Interaktionen und dem Vergleich mit ähnlichen Kunden. Fokus auf {focus} \
             könnte zum Abschluss führen."
        );

        Contact {
            id,
            name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            email,
            phone,
            company,
            position,
            region,
            score: score_value,
            ai_score,
            last_interaction,
            last_interaction_text: self.relative(last_interaction),
            notes,
            ai_summary,
        }
    }

    /// Generate `count` contacts with ids `1..=count` in order.
    pub fn generate_contacts(&mut self, count: u32) -> Vec<Contact> {
        let contacts: Vec<Contact> = (1..=count)
            .map(|id| self.generate_contact(ContactId::new(id)))
            .collect();
        debug!(count = contacts.len(), "generated contacts");
        contacts
    }
}

/// Column a contact table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactSortKey {
    Name,
    Company,
    Position,
    Region,
    Score,
    AiScore,
    LastInteraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort of a contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: ContactSortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: ContactSortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Clicking a column header: the same key flips ascending to descending,
    /// anything else starts ascending.
    pub fn toggle(current: Option<SortConfig>, key: ContactSortKey) -> SortConfig {
        match current {
            Some(SortConfig {
                key: current_key,
                direction: SortDirection::Asc,
            }) if current_key == key => SortConfig {
                key,
                direction: SortDirection::Desc,
            },
            _ => SortConfig::ascending(key),
        }
    }
}

/// Case-insensitive substring search over name, company and email.
///
/// An empty query returns every contact.
pub fn search_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return contacts.iter().collect();
    }
    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.company.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort of a (possibly filtered) contact view.
pub fn sort_contacts(contacts: &mut [&Contact], sort: SortConfig) {
    contacts.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Contact, b: &Contact, key: ContactSortKey) -> Ordering {
    match key {
        ContactSortKey::Name => a.name.cmp(&b.name),
        ContactSortKey::Company => a.company.cmp(&b.company),
        ContactSortKey::Position => a.position.cmp(&b.position),
        ContactSortKey::Region => a.region.cmp(&b.region),
        ContactSortKey::Score => a.score.cmp(&b.score),
        ContactSortKey::AiScore => a.ai_score.cmp(&b.ai_score),
        ContactSortKey::LastInteraction => a.last_interaction.cmp(&b.last_interaction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn test_generator(seed: u64) -> MockDataGenerator {
        MockDataGenerator::seeded(seed).at(test_time())
    }

    #[test]
    fn email_uses_first_word_of_company() {
        assert_eq!(
            derive_email("Anna", "Müller", "Schneider & Söhne GmbH"),
            "anna.müller@schneider.de"
        );
        assert_eq!(
            derive_email("Ralf", "Koch", "Weber IT Solutions"),
            "ralf.koch@weber.de"
        );
    }

    #[test]
    fn contacts_have_sequential_ids() {
        let contacts = test_generator(1).generate_contacts(25);
        assert_eq!(contacts.len(), 25);
        for (i, contact) in contacts.iter().enumerate() {
            assert_eq!(contact.id, ContactId::new(i as u32 + 1));
        }
    }

    #[test]
    fn contact_fields_are_consistent() {
        let mut generator = test_generator(2);
        let lexicon = generator.lexicon().clone();
        for contact in generator.generate_contacts(50) {
            assert!((30..=98).contains(&contact.score));
            assert!((10..=100).contains(&contact.ai_score));
            assert_eq!(contact.name, format!("{} {}", contact.first_name, contact.last_name));
            assert_eq!(
                contact.email,
                derive_email(&contact.first_name, &contact.last_name, &contact.company)
            );
            assert!(lexicon.companies.contains(&contact.company));
            assert!(lexicon.regions.contains(&contact.region));
            assert!(contact.phone.starts_with("+49 "));
            assert_eq!(contact.phone.len(), "+49 123 1234567".len());
            assert!(contact.last_interaction <= test_time());
            assert!(contact.last_interaction_text.starts_with("vor "));
            assert!(contact.notes.starts_with(&contact.first_name));
            assert!(
                contact.notes.contains("Enterprise Lösung")
                    || contact.notes.contains("Business Lösung")
            );
            assert!(contact.ai_summary.starts_with("Dieser Lead ist ideal für Produkt "));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = test_generator(99).generate_contacts(10);
        let b = test_generator(99).generate_contacts(10);
        assert_eq!(a, b);
    }

    #[test]
    fn search_matches_name_company_and_email_case_insensitively() {
        let contacts = test_generator(3).generate_contacts(25);
        let target = &contacts[4];

        let by_company = search_contacts(&contacts, &target.company.to_uppercase());
        assert!(by_company.iter().any(|c| c.id == target.id));

        let by_email = search_contacts(&contacts, &target.email);
        assert!(by_email.iter().any(|c| c.id == target.id));

        assert_eq!(search_contacts(&contacts, "").len(), 25);
        assert!(search_contacts(&contacts, "zzz-no-such-contact").is_empty());
    }

    #[test]
    fn sort_toggle_flips_only_same_key() {
        let first = SortConfig::toggle(None, ContactSortKey::Score);
        assert_eq!(first.direction, SortDirection::Asc);
        let second = SortConfig::toggle(Some(first), ContactSortKey::Score);
        assert_eq!(second.direction, SortDirection::Desc);
        let third = SortConfig::toggle(Some(second), ContactSortKey::Score);
        assert_eq!(third.direction, SortDirection::Asc);
        let other = SortConfig::toggle(Some(first), ContactSortKey::Region);
        assert_eq!(other, SortConfig::ascending(ContactSortKey::Region));
    }

    #[test]
    fn sort_orders_filtered_view() {
        let contacts = test_generator(4).generate_contacts(25);
        let mut view = search_contacts(&contacts, "");

        sort_contacts(&mut view, SortConfig::ascending(ContactSortKey::Score));
        assert!(view.windows(2).all(|w| w[0].score <= w[1].score));

        sort_contacts(
            &mut view,
            SortConfig {
                key: ContactSortKey::Name,
                direction: SortDirection::Desc,
            },
        );
        assert!(view.windows(2).all(|w| w[0].name >= w[1].name));
    }
}

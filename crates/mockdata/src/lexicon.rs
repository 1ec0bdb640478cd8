//! Fixed German lookup tables the generator draws from.

use serde::{Deserialize, Serialize};

use democrm_core::{DomainError, DomainResult};

const FIRST_NAMES: &[&str] = &[
    "Alexander", "Anna", "Bernd", "Christian", "Daniela", "Elena", "Frank", "Greta", "Hannah",
    "Ingo", "Julia", "Klaus", "Laura", "Michael", "Nina", "Oliver", "Petra", "Ralf", "Sabine",
    "Thomas", "Ursula", "Volker", "Wolfgang", "Xenia", "Yvonne",
];

const LAST_NAMES: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Schulz",
    "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder", "Neumann",
    "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann",
];

const COMPANIES: &[&str] = &[
    "Schneider & Söhne GmbH",
    "Müller AG",
    "Bauer Logistik",
    "Weber IT Solutions",
    "Schmidt Maschinenbau",
    "Fischer Elektronik",
    "Meyer Consulting",
    "Hoffmann & Partner",
    "Wolf Immobilien",
    "Becker Pharma GmbH",
    "Richter Automotive",
    "Klein Software",
    "Schröder Versicherungen",
    "Neumann Energie AG",
    "Schwarz Medien GmbH",
    "Zimmermann Bau",
    "Braun Textil",
    "Krüger Catering",
    "Hofmann Metallverarbeitung",
    "Hartmann Medical",
];

const POSITIONS: &[&str] = &[
    "Geschäftsführer",
    "CEO",
    "Vertriebsleiter",
    "Marketing Manager",
    "CTO",
    "Einkaufsleiter",
    "Finanzvorstand",
    "Produktmanager",
    "Leiter Digitalisierung",
    "Projektleiter",
    "CIO",
    "Bereichsleiter",
    "Teamleiter",
    "Abteilungsleiter",
];

const REGIONS: &[&str] = &[
    "Bayern",
    "Baden-Württemberg",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

const AI_RECOMMENDATIONS: &[&str] = &[
    "Nächster Kontakt in 3 Tagen empfohlen",
    "Produkt-Demo vorschlagen",
    "Preisverhandlung vorbereiten",
    "Referenzkunden vorstellen",
    "Case Study zusenden",
    "Neues Angebot erstellen",
    "Follow-up per Telefon empfohlen",
    "Kundenbedarf analysieren",
    "ROI-Berechnung teilen",
    "Entscheidungsprozess besprechen",
];

const ACTIVITY_SUBJECTS: &[&str] = &[
    "Angebot gesendet",
    "Nachfassung zum Angebot",
    "Demo durchgeführt",
    "Vertrag vorbereitet",
    "Bedarfsanalyse",
    "Erstgespräch",
    "ROI-Berechnung",
    "Follow-up Termin",
];

const AI_ACTIVITY_MESSAGES: &[&str] = &[
    "AI: Folge-Mail für Müller AG vorbereitet",
    "AI: Lead-Score für Schmidt Maschinenbau aktualisiert",
    "AI: Automatische Priorisierung durchgeführt",
    "AI: Angebots-Template basierend auf Kundenprofil angepasst",
    "AI: Erinnerung für Weber IT Solutions Nachfassung erstellt",
];

/// Word lists for contacts, deal recommendations and timeline entries.
///
/// Every table must be non-empty; [`Lexicon::validated`] enforces this so the
/// generator can draw from any table without a fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub companies: Vec<String>,
    pub positions: Vec<String>,
    pub regions: Vec<String>,
    pub ai_recommendations: Vec<String>,
    pub activity_subjects: Vec<String>,
    /// Complete timeline entries used for `ai` activities.
    pub ai_activity_messages: Vec<String>,
}

impl Lexicon {
    /// The built-in German tables.
    pub fn german() -> Self {
        Self {
            first_names: owned(FIRST_NAMES),
            last_names: owned(LAST_NAMES),
            companies: owned(COMPANIES),
            positions: owned(POSITIONS),
            regions: owned(REGIONS),
            ai_recommendations: owned(AI_RECOMMENDATIONS),
            activity_subjects: owned(ACTIVITY_SUBJECTS),
            ai_activity_messages: owned(AI_ACTIVITY_MESSAGES),
        }
    }

    /// Return `self` if every table has at least one entry.
    pub fn validated(self) -> DomainResult<Self> {
        let tables: [(&str, &[String]); 8] = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("companies", &self.companies),
            ("positions", &self.positions),
            ("regions", &self.regions),
            ("ai_recommendations", &self.ai_recommendations),
            ("activity_subjects", &self.activity_subjects),
            ("ai_activity_messages", &self.ai_activity_messages),
        ];

        if let Some((name, _)) = tables.iter().find(|(_, entries)| entries.is_empty()) {
            return Err(DomainError::validation(format!(
                "lexicon table `{name}` must not be empty"
            )));
        }

        Ok(self)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::german()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

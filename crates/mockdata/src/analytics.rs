//! Fixed analytics reference data (no randomness).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    /// Whole euros.
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConversion {
    pub campaign: String,
    /// Percent.
    pub rate: f64,
}

/// Headline KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    /// Pre-formatted display value, e.g. `"23%"`.
    pub value: String,
    /// Percent change versus the previous period.
    pub change: i32,
    pub target: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub revenue_by_month: Vec<MonthlyRevenue>,
    /// Identical to actual revenue for past months, diverging for projections.
    pub ai_predicted_revenue: Vec<MonthlyRevenue>,
    pub conversion_rate: Vec<CampaignConversion>,
    pub kpis: Vec<Kpi>,
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

const ACTUAL: [u64; 12] = [
    105_000, 125_000, 115_000, 130_000, 145_000, 160_000, 175_000, 185_000, 210_000, 195_000,
    220_000, 240_000,
];

const PREDICTED: [u64; 12] = [
    105_000, 125_000, 115_000, 130_000, 145_000, 160_000, 175_000, 185_000, 210_000, 208_000,
    235_000, 260_000,
];

impl AnalyticsData {
    /// The built-in reference tables.
    pub fn reference() -> Self {
        Self {
            revenue_by_month: series(&ACTUAL),
            ai_predicted_revenue: series(&PREDICTED),
            conversion_rate: [
                ("Email Kampagne Q1", 4.2),
                ("Social Media Ads", 3.1),
                ("Google Ads", 5.8),
                ("Messe Frankfurt", 7.2),
                ("Referral Programm", 8.5),
                ("Webinar Serie", 6.3),
            ]
            .into_iter()
            .map(|(campaign, rate)| CampaignConversion {
                campaign: campaign.to_string(),
                rate,
            })
            .collect(),
            kpis: vec![
                kpi("Durchschn. Reaktionszeit", "3.5h", -12, 4.0, "Stunden"),
                kpi("Abschlussrate", "23%", 8, 25.0, "%"),
                kpi("Pipeline Velocity", "18", -5, 20.0, "Tage"),
                kpi("Lead-to-Demo Rate", "38%", 15, 35.0, "%"),
            ],
        }
    }

    /// Months where the forecast departs from actual revenue.
    pub fn projected_months(&self) -> Vec<&str> {
        self.revenue_by_month
            .iter()
            .zip(&self.ai_predicted_revenue)
            .filter(|(actual, predicted)| actual.value != predicted.value)
            .map(|(actual, _)| actual.month.as_str())
            .collect()
    }

    pub fn best_campaign(&self) -> Option<&CampaignConversion> {
        self.conversion_rate
            .iter()
            .max_by(|a, b| a.rate.total_cmp(&b.rate))
    }
}

impl Default for AnalyticsData {
    fn default() -> Self {
        Self::reference()
    }
}

fn series(values: &[u64; 12]) -> Vec<MonthlyRevenue> {
    MONTHS
        .iter()
        .zip(values)
        .map(|(month, value)| MonthlyRevenue {
            month: (*month).to_string(),
            value: *value,
        })
        .collect()
}

fn kpi(name: &str, value: &str, change: i32, target: f64, unit: &str) -> Kpi {
    Kpi {
        name: name.to_string(),
        value: value.to_string(),
        change,
        target,
        unit: unit.to_string(),
    }
}

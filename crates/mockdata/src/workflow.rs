//! Automation workflows and their ordered steps.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use democrm_core::{Entity, WorkflowId};

use crate::generator::{MockDataGenerator, pick};

/// Inclusive bounds on the number of steps per workflow.
pub const STEP_COUNT: core::ops::RangeInclusive<u32> = 3..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowType {
    #[serde(rename = "Lead Nurturing")]
    LeadNurturing,
    #[serde(rename = "Onboarding")]
    Onboarding,
    #[serde(rename = "Reaktivierung")]
    Reactivation,
    #[serde(rename = "Event-Follow-up")]
    EventFollowUp,
    #[serde(rename = "Angebotsnachfassung")]
    ProposalFollowUp,
}

impl WorkflowType {
    pub const ALL: [WorkflowType; 5] = [
        WorkflowType::LeadNurturing,
        WorkflowType::Onboarding,
        WorkflowType::Reactivation,
        WorkflowType::EventFollowUp,
        WorkflowType::ProposalFollowUp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkflowType::LeadNurturing => "Lead Nurturing",
            WorkflowType::Onboarding => "Onboarding",
            WorkflowType::Reactivation => "Reaktivierung",
            WorkflowType::EventFollowUp => "Event-Follow-up",
            WorkflowType::ProposalFollowUp => "Angebotsnachfassung",
        }
    }
}

/// Channel or action a workflow step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    Email,
    Reminder,
    WhatsApp,
    #[serde(rename = "Aufgabe")]
    Task,
    #[serde(rename = "Telefonanruf")]
    PhoneCall,
    #[serde(rename = "Abschluss")]
    Closing,
}

impl StepType {
    pub const ALL: [StepType; 6] = [
        StepType::Email,
        StepType::Reminder,
        StepType::WhatsApp,
        StepType::Task,
        StepType::PhoneCall,
        StepType::Closing,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    /// 1-based position within the workflow.
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: StepType,
    /// Days to wait before this step runs, 1..=5.
    pub delay: u8,
    pub is_optimized: bool,
}

/// Percentages reported for a workflow's sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPerformance {
    /// 20..=49
    pub open_rate: u8,
    /// 10..=29
    pub click_rate: u8,
    /// 5..=19
    pub conversion: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: WorkflowId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkflowType,
    pub is_active: bool,
    pub last_run: DateTime<Utc>,
    pub last_run_text: String,
    pub steps: Vec<WorkflowStep>,
    pub performance: WorkflowPerformance,
    pub ai_optimized: bool,
}

impl Entity for Workflow {
    type Id = WorkflowId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl<R: Rng> MockDataGenerator<R> {
    pub fn generate_workflow(&mut self, id: WorkflowId) -> Workflow {
        let kind = *pick(&mut self.rng, &WorkflowType::ALL);
        let is_active = self.rng.gen_bool(0.7);
        let last_run = self.days_ago(self.config.workflow_run_window_days);
        let step_count = self.rng.gen_range(STEP_COUNT);

        let steps = (1..=step_count)
            .map(|step_id| WorkflowStep {
                id: step_id,
                kind: *pick(&mut self.rng, &StepType::ALL),
                delay: self.rng.gen_range(1..=5),
                is_optimized: self.rng.gen_bool(0.5),
            })
            .collect();

        let performance = WorkflowPerformance {
            open_rate: self.rng.gen_range(20..=49),
            click_rate: self.rng.gen_range(10..=29),
            conversion: self.rng.gen_range(5..=19),
        };

        Workflow {
            id,
            name: format!("{} Workflow {}", kind.label(), id),
            kind,
            is_active,
            last_run,
            last_run_text: self.relative(last_run),
            steps,
            performance,
            ai_optimized: self.rng.gen_bool(0.6),
        }
    }

    pub fn generate_workflows(&mut self, count: u32) -> Vec<Workflow> {
        let workflows: Vec<Workflow> = (1..=count)
            .map(|id| self.generate_workflow(WorkflowId::new(id)))
            .collect();
        debug!(count = workflows.len(), "generated workflows");
        workflows
    }
}

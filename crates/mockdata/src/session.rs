//! Session-local updates to generated state.
//!
//! Each operation takes the current state by value and returns the updated
//! state; nothing here is shared or global. Unknown ids are reported as
//! [`DomainError::NotFound`] and leave no partial change behind.

use tracing::debug;

use democrm_core::{DealId, DomainError, DomainResult, ModuleId, WorkflowId, position_of};

use crate::ai_module::{AiModule, AiSetting, AiSettings};
use crate::deal::{DealStage, Pipeline};
use crate::workflow::Workflow;

/// Flip a workflow's `is_active` flag.
pub fn toggle_workflow_active(
    mut workflows: Vec<Workflow>,
    id: WorkflowId,
) -> DomainResult<Vec<Workflow>> {
    let index = position_of(&workflows, id)
        .ok_or_else(|| DomainError::not_found(format!("workflow {id}")))?;
    let workflow = &mut workflows[index];
    workflow.is_active = !workflow.is_active;
    debug!(workflow = %id, active = workflow.is_active, "toggled workflow");
    Ok(workflows)
}

/// Move a deal to the end of another stage's column.
///
/// Moving to the current stage is a no-op. The probability is clamped into
/// the target stage's band so it stays consistent with the stage.
pub fn move_deal(mut pipeline: Pipeline, id: DealId, to: DealStage) -> DomainResult<Pipeline> {
    let from = pipeline
        .find(id)
        .map(|deal| deal.stage)
        .ok_or_else(|| DomainError::not_found(format!("deal {id}")))?;

    if from == to {
        return Ok(pipeline);
    }

    let mut deal = pipeline
        .remove(id)
        .ok_or_else(|| DomainError::invariant(format!("deal {id} vanished during move")))?;

    let band = to.probability_band();
    deal.stage = to;
    deal.probability = deal.probability.clamp(*band.start(), *band.end());
    pipeline.push(deal);

    debug!(deal = %id, %from, %to, "moved deal");
    Ok(pipeline)
}

/// Flip an AI-lab module's `active` flag.
pub fn toggle_module_active(
    mut modules: Vec<AiModule>,
    id: ModuleId,
) -> DomainResult<Vec<AiModule>> {
    let index = position_of(&modules, id)
        .ok_or_else(|| DomainError::not_found(format!("module {id}")))?;
    modules[index].active = !modules[index].active;
    Ok(modules)
}

/// Set one slider of a module. The value must lie within the parameter's
/// `[min, max]`.
pub fn set_module_parameter(
    mut modules: Vec<AiModule>,
    id: ModuleId,
    param_index: usize,
    value: u32,
) -> DomainResult<Vec<AiModule>> {
    let index = position_of(&modules, id)
        .ok_or_else(|| DomainError::not_found(format!("module {id}")))?;
    let param = modules[index]
        .params
        .get_mut(param_index)
        .ok_or_else(|| DomainError::not_found(format!("parameter {param_index} of module {id}")))?;

    if !param.accepts(value) {
        return Err(DomainError::validation(format!(
            "{}: {} outside [{}, {}]",
            param.name, value, param.min, param.max
        )));
    }

    param.value = value;
    Ok(modules)
}

/// Flip one switch on the settings page.
pub fn toggle_ai_setting(mut settings: AiSettings, setting: AiSetting) -> AiSettings {
    let slot = settings.slot(setting);
    *slot = !*slot;
    settings
}

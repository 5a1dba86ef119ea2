//! Validation for loaded content before it reaches the simulation.

use super::data::*;
use super::loader::LoadedContent;
use crate::fighter::FighterTuning;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a positive quantity
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Validate a stage: every platform needs positive area and at least one
/// platform must exist.
pub fn validate_stage(stage: &StageDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if stage.platforms.is_empty() {
        errors.push(ValidationError {
            source_type: "Stage",
            source_id: stage.id.clone(),
            field: "platforms",
            message: "stage has no platforms".to_string(),
        });
    }

    if stage.platforms.len() > usize::from(u16::MAX) + 1 {
        errors.push(ValidationError {
            source_type: "Stage",
            source_id: stage.id.clone(),
            field: "platforms",
            message: format!("stage has {} platforms, at most 65536 fit", stage.platforms.len()),
        });
    }

    for (index, platform) in stage.platforms.iter().enumerate() {
        let id = format!("{}[{}]", stage.id, index);
        check_positive!(errors, "Platform", id, "width", platform.width);
        check_positive!(errors, "Platform", id, "height", platform.height);
    }

    errors
}

/// Validate tuning values that would make the simulation degenerate.
pub fn validate_tuning(tuning: &FighterTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "fighter_tuning";

    check_positive!(errors, "Tuning", id, "body_width", tuning.body_width);
    check_positive!(errors, "Tuning", id, "body_height", tuning.body_height);
    check_positive!(errors, "Tuning", id, "gravity", tuning.gravity);
    check_positive!(errors, "Tuning", id, "max_fall_speed", tuning.max_fall_speed);
    check_positive!(errors, "Tuning", id, "shield_max_hp", tuning.shield_max_hp);

    if tuning.dodge_frames == 0 {
        errors.push(ValidationError {
            source_type: "Tuning",
            source_id: id.to_string(),
            field: "dodge_frames",
            message: "dodge must last at least one frame".to_string(),
        });
    }

    for (field, factor) in [
        ("ground_friction", tuning.ground_friction),
        ("air_friction", tuning.air_friction),
    ] {
        if !(0.0..=1.0).contains(&factor) {
            errors.push(ValidationError {
                source_type: "Tuning",
                source_id: id.to_string(),
                field,
                message: format!("friction factor must be within [0, 1], got {}", factor),
            });
        }
    }

    errors
}

/// Validate all loaded content, including that the selected stage exists.
pub fn validate_content(content: &LoadedContent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if content.selected_stage().is_none() {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "gameplay_defaults".to_string(),
            field: "stage_id",
            message: format!("references missing stage '{}'", content.defaults.stage_id),
        });
    }

    if content.defaults.player_count == 0 {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "gameplay_defaults".to_string(),
            field: "player_count",
            message: "at least one fighter is required".to_string(),
        });
    }

    let mut stage_ids: Vec<&String> = content.stages.keys().collect();
    stage_ids.sort();
    for id in stage_ids {
        errors.extend(validate_stage(&content.stages[id]));
    }

    errors.extend(validate_tuning(&content.tuning));
    errors
}

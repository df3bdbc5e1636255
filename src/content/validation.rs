//! Validation of controller values that the per-tick code takes for granted.

use super::data::ControllerDef;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "controller field '{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for range checks
macro_rules! check {
    ($errors:expr, $ok:expr, $field:expr, $message:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                field: $field,
                message: $message.to_string(),
            });
        }
    };
}

/// Validate a controller definition.
/// Returns a list of validation errors, empty if the definition is usable.
///
/// Ray counts below the minimum are not errors; they are clamped on load.
pub fn validate_controller(def: &ControllerDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let (width, height) = def.body.size;
    let skin = def.collision.skin_width;
    let motion = &def.motion;

    check!(errors, skin > 0.0, "collision.skin_width", "must be positive");
    check!(
        errors,
        width > 0.0 && height > 0.0,
        "body.size",
        "must be positive on both axes"
    );
    check!(
        errors,
        width > 2.0 * skin && height > 2.0 * skin,
        "body.size",
        "must be larger than twice the skin width"
    );
    check!(
        errors,
        !def.collision.obstruction_mask.is_empty(),
        "collision.obstruction_mask",
        "must name at least one layer"
    );
    check!(
        errors,
        motion.ground_smoothing > 0.0,
        "motion.ground_smoothing",
        "must be positive"
    );
    check!(
        errors,
        motion.air_smoothing > 0.0,
        "motion.air_smoothing",
        "must be positive"
    );
    check!(errors, motion.max_speed >= 0.0, "motion.max_speed", "must not be negative");
    check!(errors, motion.jump_speed >= 0.0, "motion.jump_speed", "must not be negative");
    check!(
        errors,
        motion.jump_sustain >= 0.0,
        "motion.jump_sustain",
        "must not be negative"
    );
    check!(errors, motion.gravity >= 0.0, "motion.gravity", "must not be negative");

    errors
}

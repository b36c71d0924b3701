pub mod field_error;
pub mod field_limits;
pub mod password_strength;

pub use field_error::FieldError;
pub use field_limits::FieldLimits;
pub use password_strength::PasswordStrength;

use crate::{CoreError, Result as CoreErrorResult};

/// Check a task title/description pair before it is sent anywhere.
#[track_caller]
pub fn validate_task_fields(
    title: &str,
    description: &str,
    limits: &FieldLimits,
) -> CoreErrorResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(CoreError::validation(FieldError::TitleRequired));
    }

    if title.chars().count() > limits.max_title_length {
        return Err(CoreError::validation(FieldError::TitleTooLong {
            max: limits.max_title_length,
        }));
    }

    if description.trim().chars().count() > limits.max_description_length {
        return Err(CoreError::validation(FieldError::DescriptionTooLong {
            max: limits.max_description_length,
        }));
    }

    Ok(())
}

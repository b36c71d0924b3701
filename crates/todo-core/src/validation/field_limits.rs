pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Length limits applied before any remote call. Lengths count characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub min_password_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

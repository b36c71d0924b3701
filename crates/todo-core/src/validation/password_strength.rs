use crate::validation::field_limits::DEFAULT_MIN_PASSWORD_LENGTH;

const STRONG_PASSWORD_LENGTH: usize = 12;

/// Registration-form hint; never blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    None,
    Weak,
    Fair,
    Strong,
}

impl PasswordStrength {
    pub fn assess(password: &str) -> Self {
        let length = password.chars().count();

        if length == 0 {
            return Self::None;
        }
        if length < DEFAULT_MIN_PASSWORD_LENGTH {
            return Self::Weak;
        }
        if length < STRONG_PASSWORD_LENGTH {
            return Self::Fair;
        }

        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if has_upper && has_digit {
            Self::Strong
        } else {
            Self::Fair
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
        }
    }
}

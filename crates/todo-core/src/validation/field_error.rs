use thiserror::Error;

/// A single failed form check. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
}

use crate::Route;

/// What the form should do after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token stored; go to `redirect`
    Authenticated { redirect: Route },
    /// Stay on the form and show `message`
    Failed { message: String },
}

impl AuthOutcome {
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            Self::Authenticated { .. } => None,
        }
    }
}

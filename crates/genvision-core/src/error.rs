use thiserror::Error;

/// Errors returned by [`crate::GenerationService::generate`].
///
/// The `Display` text of the validation variants is the exact message shown
/// to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Prompt is required")]
    EmptyPrompt,

    #[error("At least one model must be selected")]
    NoModelsSelected,

    /// Every key that is not in the registry, in request order.
    #[error("Invalid models: {}", .0.join(", "))]
    UnknownModel(Vec<String>),

    /// An unexpected fault while fabricating results. Never shown to clients.
    #[error("internal generation fault: {0}")]
    Internal(String),
}

impl GenerationError {
    /// `true` for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, GenerationError::Internal(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LikeError {
    #[error("video_id is missing")]
    MissingVideoId,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_model_message_lists_every_key() {
        let err = GenerationError::UnknownModel(vec!["bogus".into(), "nope".into()]);
        assert_eq!(err.to_string(), "Invalid models: bogus, nope");
    }

    #[test]
    fn internal_is_not_a_client_error() {
        assert!(GenerationError::EmptyPrompt.is_client_error());
        assert!(GenerationError::NoModelsSelected.is_client_error());
        assert!(!GenerationError::Internal("boom".into()).is_client_error());
    }
}

use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy verdict into a `Forbidden` error when the check fails.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(err) => Err(err),
    }
}

/// Role-based policy shared by every service method. The platform only
/// distinguishes admin from non-admin callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_passes_through_allowed() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn ensure_policy_maps_denial_to_forbidden() {
        let err = ensure_policy(Ok(false), "not allowed").unwrap_err();
        assert_eq!(err, CoreError::Forbidden("not allowed".to_string()));
    }

    #[test]
    fn ensure_policy_propagates_errors() {
        let err = ensure_policy(Err(CoreError::InternalServerError), "ignored").unwrap_err();
        assert_eq!(err, CoreError::InternalServerError);
    }
}

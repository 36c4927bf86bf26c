use crate::error::ApiError;

/// Decides whether a failed profile refresh ends the local session.
///
/// Every façade consults the same policy, so "cannot fetch my own profile"
/// means the same thing for all four roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionValidity {
    /// Any failure, transport or business-level, invalidates the session.
    #[default]
    AnyFailure,
    /// Only a refused credential (401/403) invalidates the session.
    Unauthorized,
}

impl SessionValidity {
    pub fn invalidates(self, error: &ApiError) -> bool {
        match self {
            SessionValidity::AnyFailure => true,
            SessionValidity::Unauthorized => error.is_access_denied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiResponse;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: String::new(),
            response: ApiResponse::new(code, ""),
        }
    }

    #[test]
    fn test_any_failure_invalidates_everything() {
        let policy = SessionValidity::default();
        assert!(policy.invalidates(&status(401)));
        assert!(policy.invalidates(&status(500)));
        assert!(policy.invalidates(&ApiError::Network {
            timed_out: false,
            detail: "refused".into()
        }));
        assert!(policy.invalidates(&ApiError::Envelope {
            code: 400,
            message: "no such user".into()
        }));
    }

    #[test]
    fn test_unauthorized_only_on_refused_credential() {
        let policy = SessionValidity::Unauthorized;
        assert!(policy.invalidates(&status(401)));
        assert!(policy.invalidates(&status(403)));
        assert!(!policy.invalidates(&status(500)));
        assert!(!policy.invalidates(&ApiError::Network {
            timed_out: true,
            detail: "deadline".into()
        }));
    }
}

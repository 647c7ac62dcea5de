use thiserror::Error;

use crate::config::ServiceKind;

/// Failure of a single request to one of the backend services.
///
/// Never shown to the user verbatim; views map it to a generic message for
/// the action that triggered the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{service} service unreachable: {message}")]
    Network { service: ServiceKind, message: String },

    #[error("{service} service responded with HTTP {status}: {message}")]
    Status {
        service: ServiceKind,
        status: u16,
        message: String,
    },

    #[error("{service} service sent an unreadable body: {message}")]
    Decode { service: ServiceKind, message: String },

    /// The request could not be assembled, so nothing was sent.
    #[error("{service} request could not be built: {message}")]
    Request { service: ServiceKind, message: String },
}

impl TransportError {
    pub fn service(&self) -> ServiceKind {
        match self {
            TransportError::Network { service, .. }
            | TransportError::Status { service, .. }
            | TransportError::Decode { service, .. }
            | TransportError::Request { service, .. } => *service,
        }
    }

    /// HTTP status of the failed response, when the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_only_for_http_failures() {
        let status = TransportError::Status {
            service: ServiceKind::Data,
            status: 500,
            message: "Failed to create case".into(),
        };
        let network = TransportError::Network {
            service: ServiceKind::Search,
            message: "connection refused".into(),
        };

        assert_eq!(status.status(), Some(500));
        assert_eq!(network.status(), None);
        assert_eq!(network.service(), ServiceKind::Search);
        assert_eq!(
            status.to_string(),
            "data service responded with HTTP 500: Failed to create case"
        );
    }

    #[test]
    fn request_errors_name_the_service_and_carry_no_status() {
        let err = TransportError::Request {
            service: ServiceKind::File,
            message: "FormData unavailable".into(),
        };
        assert_eq!(err.service(), ServiceKind::File);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "file request could not be built: FormData unavailable");
    }
}

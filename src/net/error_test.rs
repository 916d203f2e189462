use super::*;

// =============================================================
// Display
// =============================================================

#[test]
fn service_error_displays_the_raw_message() {
    let err = ApiError::Service {
        code: 500,
        message: "Internal server error".to_owned(),
    };
    assert_eq!(err.to_string(), "Internal server error");
}

#[test]
fn network_error_display_names_the_connection() {
    let err = ApiError::Network("dns failure".to_owned());
    assert_eq!(err.to_string(), "connection failed: dns failure");
}

// =============================================================
// status
// =============================================================

#[test]
fn status_only_for_service_errors() {
    let service = ApiError::Service {
        code: UNAUTHORIZED,
        message: String::new(),
    };
    assert_eq!(service.status(), Some(UNAUTHORIZED));
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

// =============================================================
// is_connectivity
// =============================================================

#[test]
fn transport_failures_classify_as_connectivity() {
    assert!(ApiError::Network("timed out".to_owned()).is_connectivity());
    assert!(ApiError::Decode("expected json".to_owned()).is_connectivity());
}

#[test]
fn service_messages_with_transport_vocabulary_classify_as_connectivity() {
    let err = ApiError::Service {
        code: 502,
        message: "Network request failed".to_owned(),
    };
    assert!(err.is_connectivity());

    let err = ApiError::Service {
        code: 500,
        message: "Failed to fetch".to_owned(),
    };
    assert!(err.is_connectivity());
}

#[test]
fn ordinary_service_errors_are_not_connectivity() {
    let err = ApiError::Service {
        code: CONFLICT,
        message: "A user with the same email already exists".to_owned(),
    };
    assert!(!err.is_connectivity());
}

use super::*;

#[test]
fn status_error_formats_operation_and_code() {
    let err = ApiError::Status { operation: "load bookings", status: 500 };
    assert_eq!(err.to_string(), "load bookings failed: 500");
}

#[test]
fn unavailable_message_matches_server_stub() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

use axum::http::StatusCode;
use service_template::error::AppError;
use service_template::utils::constant::*;
use service_template::utils::validator::{
    StatusCategory, ensure_status_code, validate_status_code,
};

#[test]
fn rejects_codes_that_are_not_eleven_digits() {
    let codes = [
        0,
        200,
        999_999_999,
        9_999_999_999,
        100_000_000_000,
        200_000_000_000,
        i64::MAX,
        i64::MIN,
    ];

    for code in codes {
        assert!(!validate_status_code(code), "{code} should be rejected");
    }
}

#[test]
fn rejects_negative_codes() {
    assert!(!validate_status_code(-1));
    assert!(!validate_status_code(-20_000_000_000));
    assert!(!validate_status_code(-40_000_000_001));
}

#[test]
fn accepts_known_categories() {
    let codes = [
        20_000_000_000,
        20_099_999_999,
        40_000_000_001,
        40_099_999_999,
        50_000_000_000,
        50_099_999_999,
    ];

    for code in codes {
        assert!(validate_status_code(code), "{code} should be accepted");
    }
}

#[test]
fn rejects_unknown_categories() {
    let codes = [
        10_000_000_000,
        19_999_999_999,
        20_100_000_000,
        30_000_000_000,
        39_999_999_999,
        40_100_000_000,
        50_100_000_000,
        99_999_999_999,
    ];

    for code in codes {
        assert!(!validate_status_code(code), "{code} should be rejected");
    }
}

#[test]
fn boundaries_of_the_digit_range() {
    assert_eq!(MIN_STATUS_CODE, 10_000_000_000);
    assert_eq!(MAX_STATUS_CODE, 99_999_999_999);
    // category 100 and 999 both exist in range but are not accepted
    assert_eq!(StatusCategory::of(MIN_STATUS_CODE), None);
    assert_eq!(StatusCategory::of(MAX_STATUS_CODE), None);
}

#[test]
fn classifies_categories() {
    assert_eq!(
        StatusCategory::of(20_000_000_000),
        Some(StatusCategory::Success)
    );
    assert_eq!(
        StatusCategory::of(40_000_000_001),
        Some(StatusCategory::ClientError)
    );
    assert_eq!(
        StatusCategory::of(50_099_999_999),
        Some(StatusCategory::ServerError)
    );
    assert_eq!(StatusCategory::of(30_000_000_000), None);
}

#[test]
fn category_maps_to_transport_status() {
    assert_eq!(StatusCategory::Success.http_status(), StatusCode::OK);
    assert_eq!(
        StatusCategory::ClientError.http_status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        StatusCategory::ServerError.http_status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn error_catalog_is_well_formed() {
    for code in [ERR_NOT_FOUND, ERR_BAD_REQUEST, ERR_METHOD_NOT_ALLOWED] {
        assert_eq!(StatusCategory::of(code), Some(StatusCategory::ClientError));
    }
    for code in [ERR_INTERNAL, ERR_SERIALIZATION] {
        assert_eq!(StatusCategory::of(code), Some(StatusCategory::ServerError));
    }
}

#[test]
fn ensure_returns_category_for_valid_code() {
    assert_eq!(
        ensure_status_code(50_000_000_001).unwrap(),
        StatusCategory::ServerError
    );
}

#[test]
fn ensure_rejects_malformed_code() {
    for code in [-1, 999_999_999, 30_000_000_000, 100_000_000_000] {
        assert!(matches!(
            ensure_status_code(code),
            Err(AppError::InvalidStatusCode(c)) if c == code
        ));
    }
}

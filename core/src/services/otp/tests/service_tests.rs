//! OTP service tests against the in-memory repository.

use std::sync::Arc;

use crate::domain::entities::phone_otp::{PhoneOtp, MAX_ATTEMPTS};
use crate::errors::{DomainError, OtpError};
use crate::repositories::{MockOtpRepository, OtpRepository};
use crate::services::otp::{MockSms, OtpConfig, OtpService};

const PHONE: &str = "255700000000";

fn service(
    repo: Arc<MockOtpRepository>,
    sms: Arc<MockSms>,
    config: OtpConfig,
) -> OtpService<MockOtpRepository, MockSms> {
    OtpService::new(repo, sms, config)
}

fn assert_otp_err(result: Result<(), DomainError>, expected: OtpError) {
    match result {
        Err(DomainError::Otp(err)) => assert_eq!(err, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_persists_and_sends() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms.clone(), OtpConfig::default());

    let issued = service.generate(PHONE).await.unwrap();
    assert_eq!(issued.code.len(), 4);
    assert!(issued.code.chars().all(|c| c.is_ascii_digit()));

    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert_eq!(record.code, issued.code);
    assert_eq!(record.attempts, 0);
    assert!(!record.verified);

    assert_eq!(sms.sent().await, vec![(PHONE.to_string(), issued.code)]);
}

#[tokio::test]
async fn test_generate_coerces_unknown_lengths_to_six() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let config = OtpConfig {
        code_length: 5,
        ..OtpConfig::default()
    };
    let service = service(repo, sms, config);

    let issued = service.generate(PHONE).await.unwrap();
    assert_eq!(issued.code.len(), 6);
}

#[tokio::test]
async fn test_regenerate_overwrites_previous_state() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms, OtpConfig::default());

    service.generate(PHONE).await.unwrap();
    service.verify(PHONE, "this-is-wrong").await.unwrap_err();
    assert_eq!(repo.find_by_phone(PHONE).await.unwrap().unwrap().attempts, 1);

    let issued = service.generate(PHONE).await.unwrap();
    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert_eq!(record.attempts, 0);
    assert!(!record.verified);
    assert_eq!(record.code, issued.code);
}

#[tokio::test]
async fn test_verify_success_marks_verified() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms, OtpConfig::default());

    let issued = service.generate(PHONE).await.unwrap();
    service.verify(PHONE, &issued.code).await.unwrap();

    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert!(record.verified);
    assert_eq!(record.attempts, 1);
}

#[tokio::test]
async fn test_verify_mismatch_increments_attempts() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms, OtpConfig::default());

    let issued = service.generate(PHONE).await.unwrap();
    let wrong = if issued.code == "0000" { "1111" } else { "0000" };

    assert_otp_err(service.verify(PHONE, wrong).await, OtpError::Mismatch);
    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert_eq!(record.attempts, 1);
    assert!(!record.verified);

    // Then the correct code still works, scenario-style
    service.verify(PHONE, &issued.code).await.unwrap();
    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert!(record.verified);
    assert_eq!(record.attempts, 2);
}

#[tokio::test]
async fn test_five_wrong_attempts_lock_out_the_correct_code() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms, OtpConfig::default());

    let issued = service.generate(PHONE).await.unwrap();
    let wrong = if issued.code == "0000" { "1111" } else { "0000" };

    for _ in 0..MAX_ATTEMPTS {
        assert_otp_err(service.verify(PHONE, wrong).await, OtpError::Mismatch);
    }

    // Sixth call with the right code: cap already reached
    assert_otp_err(
        service.verify(PHONE, &issued.code).await,
        OtpError::AttemptsExhausted,
    );
    let record = repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert_eq!(record.attempts, MAX_ATTEMPTS);
    assert!(!record.verified);
}

#[tokio::test]
async fn test_expired_code_always_fails_without_touching_attempts() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo.clone(), sms, OtpConfig::default());

    let mut record = PhoneOtp::issue_with_expiry(PHONE.to_string(), 4, 0);
    record.code = "4821".to_string();
    repo.insert(record).await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    // Correct code, but expired
    assert_otp_err(service.verify(PHONE, "4821").await, OtpError::Expired);
    // Expiry checks never mutate the counter
    assert_eq!(repo.find_by_phone(PHONE).await.unwrap().unwrap().attempts, 0);
}

#[tokio::test]
async fn test_verify_unknown_phone_is_not_found() {
    let repo = Arc::new(MockOtpRepository::new());
    let sms = Arc::new(MockSms::new());
    let service = service(repo, sms, OtpConfig::default());

    match service.verify("255799999999", "0000").await {
        Err(DomainError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

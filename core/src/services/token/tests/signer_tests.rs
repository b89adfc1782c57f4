//! Unit tests for the access token signer

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::TokenError;
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::TokenSigner;

const SECRET: &str = "s";

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
    ))
}

fn signer(secret: &str, clock: &Arc<ManualClock>) -> TokenSigner {
    TokenSigner::new(secret, clock.clone())
}

fn sign_raw<T: serde::Serialize>(algorithm: Algorithm, claims: &T, secret: &str) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_then_validate_returns_subject() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let user_id = Uuid::new_v4();

    let token = signer.issue(user_id, Duration::hours(1)).unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert!(!token.contains('='));
    assert_eq!(signer.validate(&token).unwrap(), user_id);
}

#[test]
fn test_different_secret_is_invalid_signature() {
    let clock = clock();
    let token = signer(SECRET, &clock)
        .issue(Uuid::new_v4(), Duration::hours(1))
        .unwrap();

    assert_eq!(
        signer("wrong", &clock).validate(&token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_zero_ttl_is_expired_immediately() {
    let clock = clock();
    let signer = signer(SECRET, &clock);

    let token = signer.issue(Uuid::new_v4(), Duration::zero()).unwrap();

    assert_eq!(signer.validate(&token), Err(TokenError::Expired));
}

#[test]
fn test_expiry_follows_injected_clock() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let user_id = Uuid::new_v4();
    let token = signer.issue(user_id, Duration::hours(1)).unwrap();

    clock.advance(Duration::minutes(59) + Duration::seconds(59));
    assert_eq!(signer.validate(&token).unwrap(), user_id);

    clock.advance(Duration::seconds(1));
    assert_eq!(signer.validate(&token), Err(TokenError::Expired));
}

#[test]
fn test_signature_checked_before_expiry() {
    let clock = clock();
    let token = signer(SECRET, &clock)
        .issue(Uuid::new_v4(), Duration::zero())
        .unwrap();

    assert_eq!(
        signer("wrong", &clock).validate(&token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_spliced_claims_are_invalid_signature() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let victim = signer.issue(Uuid::new_v4(), Duration::hours(1)).unwrap();
    let attacker = signer.issue(Uuid::new_v4(), Duration::hours(1)).unwrap();

    let victim_parts: Vec<&str> = victim.split('.').collect();
    let attacker_parts: Vec<&str> = attacker.split('.').collect();
    let forged = format!("{}.{}.{}", victim_parts[0], attacker_parts[1], victim_parts[2]);

    assert_eq!(signer.validate(&forged), Err(TokenError::InvalidSignature));
}

#[test]
fn test_undecodable_signature_is_malformed() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let token = signer.issue(Uuid::new_v4(), Duration::hours(1)).unwrap();
    let (signed_part, _) = token.rsplit_once('.').unwrap();

    for signature in ["!!!", "a+b/", "abc="] {
        let tampered = format!("{signed_part}.{signature}");
        assert_eq!(
            signer.validate(&tampered),
            Err(TokenError::Malformed),
            "signature: {signature:?}"
        );
    }

    // Decodable but wrong stays a signature failure
    let wrong = format!("{signed_part}.AAAA");
    assert_eq!(signer.validate(&wrong), Err(TokenError::InvalidSignature));
}

#[test]
fn test_other_algorithm_is_invalid_signature() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let claims = Claims::new_access_token(Uuid::new_v4(), clock.now(), Duration::hours(1));

    let token = sign_raw(Algorithm::HS512, &claims, SECRET);

    assert_eq!(signer.validate(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_non_uuid_subject_is_malformed() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let now = clock.now();
    let claims = Claims {
        iss: JWT_ISSUER.to_string(),
        sub: "u1".to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };

    let token = sign_raw(Algorithm::HS256, &claims, SECRET);

    assert_eq!(signer.validate(&token), Err(TokenError::Malformed));
}

#[test]
fn test_missing_exp_is_malformed() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let claims = serde_json::json!({
        "iss": JWT_ISSUER,
        "sub": Uuid::new_v4().to_string(),
        "iat": clock.now().timestamp(),
    });

    let token = sign_raw(Algorithm::HS256, &claims, SECRET);

    assert_eq!(signer.validate(&token), Err(TokenError::Malformed));
}

#[test]
fn test_foreign_issuer_is_rejected() {
    let clock = clock();
    let signer = signer(SECRET, &clock);
    let mut claims = Claims::new_access_token(Uuid::new_v4(), clock.now(), Duration::hours(1));
    claims.iss = "someone-else".to_string();

    let token = sign_raw(Algorithm::HS256, &claims, SECRET);

    assert_eq!(signer.validate(&token), Err(TokenError::Malformed));
}

#[test]
fn test_structurally_invalid_tokens_are_malformed() {
    let clock = clock();
    let signer = signer(SECRET, &clock);

    for token in ["", "abc", "a.b", "a.b.c", "not a token at all"] {
        assert_eq!(signer.validate(token), Err(TokenError::Malformed), "token: {token:?}");
    }
}

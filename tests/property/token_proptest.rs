//! Property-based tests for the token codec
//!
//! Uses proptest to generate claims and tamperings and verifies that
//! issued tokens verify back to their claims, and that changing any bit of
//! the payload or signature is always rejected.

use chrono::{DateTime, Duration};
use postgate::backend::auth::{AuthError, Claims, TokenCodec};
use postgate::backend::server::SigningSecret;
use proptest::prelude::*;

const NOW: i64 = 1_700_000_000;

fn codec(secret: &str) -> TokenCodec {
    TokenCodec::new(&SigningSecret::new(secret).unwrap())
}

fn claims(user_id: i64, login: String, lifetime_secs: i64) -> Claims {
    let issued_at = DateTime::from_timestamp(NOW, 0).unwrap();
    Claims::new(user_id, login, issued_at, Duration::seconds(lifetime_secs)).unwrap()
}

proptest! {
    #[test]
    fn test_issued_tokens_verify_to_their_claims(
        user_id in 1i64..1_000_000,
        login in "[a-z][a-z0-9_]{0,31}",
        lifetime in 1i64..1_000_000,
    ) {
        let codec = codec("proptest-secret");
        let claims = claims(user_id, login, lifetime);
        let token = codec.issue(&claims).unwrap();

        prop_assert_eq!(codec.verify_at(&token, NOW).unwrap(), claims.clone());
        prop_assert!(matches!(codec.verify_at(&token, claims.exp), Err(AuthError::Expired)));
    }

    #[test]
    fn test_non_ascii_logins_survive(login in "\\PC{1,24}") {
        let codec = codec("proptest-secret");
        let claims = claims(7, login, 3600);
        let token = codec.issue(&claims).unwrap();

        prop_assert_eq!(codec.verify_at(&token, NOW).unwrap().login, claims.login);
    }

    #[test]
    fn test_bit_flip_after_header_is_rejected(
        position in any::<prop::sample::Index>(),
        bit in 0u8..7,
    ) {
        let codec = codec("proptest-secret");
        let token = codec.issue(&claims(1, "alice".to_string(), 3600)).unwrap();

        // Only payload and signature bytes, and only bits that keep the byte ASCII.
        let start = token.find('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        let index = start + position.index(bytes.len() - start);
        bytes[index] ^= 1 << bit;
        let tampered = String::from_utf8(bytes).unwrap();

        let result = codec.verify_at(&tampered, NOW);
        prop_assert!(
            matches!(result, Err(AuthError::BadSignature | AuthError::Malformed)),
            "tampered token accepted or misclassified: {:?}",
            result
        );
    }

    #[test]
    fn test_other_secret_never_verifies(
        secret_a in "[a-zA-Z0-9]{8,32}",
        secret_b in "[a-zA-Z0-9]{8,32}",
    ) {
        prop_assume!(secret_a != secret_b);
        let token = codec(&secret_a).issue(&claims(1, "alice".to_string(), 3600)).unwrap();

        prop_assert!(matches!(
            codec(&secret_b).verify_at(&token, NOW),
            Err(AuthError::BadSignature)
        ));
    }
}

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hash a plaintext password with Argon2 and a fresh random salt.
/// Returns the PHC string; the plaintext is never stored anywhere.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Check a plaintext against a stored PHC hash. Login-side counterpart of
/// [`hash_password`]; the login page does not authenticate yet, so only
/// tests exercise it for now.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext() {
        let plain = "motdepasse-solide";
        let hash = hash_password(plain).expect("hashing should succeed");
        assert_ne!(hash, plain);
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let plain = "Un m0t de p@sse!";
        let hash = hash_password(plain).expect("hashing should succeed");
        assert!(verify_password(plain, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("bon-mot-de-passe").expect("hashing should succeed");
        assert!(!verify_password("mauvais-mot-de-passe", &hash).expect("verify should not error"));
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        // Fresh salt per call, so equal inputs must not collide.
        let a = hash_password("motdepasse").unwrap();
        let b = hash_password("motdepasse").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}

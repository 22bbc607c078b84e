use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use super::auth_service::AuthError;
use crate::config::SecurityConfig;

/// Hash a password using Argon2id with the configured cost parameters.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| AuthError::Hashing(format!("Invalid Argon2 params: {e}")))?;

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(format!("Failed to hash password: {e}")))
}

/// Checks `password` against a stored Argon2 or legacy bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    if is_bcrypt_hash(stored_hash) {
        return bcrypt::verify(password, stored_hash)
            .map_err(|e| AuthError::Hashing(format!("Invalid bcrypt hash: {e}")));
    }

    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AuthError::Hashing(format!("Invalid password hash format: {e}")))?;

    // Cost parameters are read from the hash itself.
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_config() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        }
    }

    #[test]
    fn argon2_round_trip() {
        let hash = hash_password("correct horse", &cheap_config()).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct horse"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same", &cheap_config()).unwrap();
        let b = hash_password("same", &cheap_config()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn legacy_bcrypt_hashes_still_verify() {
        let hash = bcrypt::hash("legacy-pass", 4).unwrap();

        assert!(verify_password("legacy-pass", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-hash").is_err());
    }

    #[test]
    fn invalid_params_rejected() {
        let config = SecurityConfig {
            argon2_memory_cost_kib: 1,
            argon2_time_cost: 0,
            argon2_parallelism: 1,
        };
        assert!(matches!(
            hash_password("pw", &config),
            Err(AuthError::Hashing(_))
        ));
    }
}

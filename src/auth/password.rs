use bcrypt::hash;

use crate::error::AppError;

pub fn hash_password(plain: &str, cost: u32) -> Result<String, AppError> {
    Ok(hash(plain, cost)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcrypt::verify;

    const COST: u32 = 4;

    #[test]
    fn hash_is_not_plaintext_and_verifies() {
        let h = hash_password("adminpass", COST).unwrap();
        assert_ne!(h, "adminpass");
        assert!(h.starts_with("$2"));
        assert!(verify("adminpass", &h).unwrap());
        assert!(!verify("wrong", &h).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("worker123", COST).unwrap();
        let b = hash_password("worker123", COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_cost_is_an_error() {
        assert!(matches!(hash_password("x", 2), Err(AppError::Hash(_))));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify("x", "not-a-hash").is_err());
    }
}

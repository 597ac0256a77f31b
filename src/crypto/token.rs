use rand::RngCore;
use rand::rngs::OsRng;

/// The size of a session token in bytes.
const SESSION_TOKEN_SIZE: usize = 16;

/// Generates a new random session token.
///
/// # Returns
///
/// A lowercase hex string, twice `SESSION_TOKEN_SIZE` characters long.
pub fn generate_session_token() -> String {
    let mut token = [0u8; SESSION_TOKEN_SIZE];
    OsRng.fill_bytes(&mut token);

    hex::encode(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_hex_and_distinct() {
        let a = generate_session_token();
        let b = generate_session_token();

        assert_eq!(a.len(), SESSION_TOKEN_SIZE * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }
}

//! Core type definitions for TokenVault

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tokens at or below this many characters are fully masked.
const MASK_FULL_THRESHOLD: usize = 20;
/// Characters kept visible on each side of a long masked token.
const MASK_VISIBLE_CHARS: usize = 10;

/// A stored token, one per project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub project_name: String,
    pub token_value: String,
    pub updated_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Token value safe to print on a terminal.
    pub fn masked_value(&self) -> String {
        mask_token(&self.token_value)
    }
}

/// Mask a token for display.
///
/// Short tokens become all `*`; longer ones keep the first and last ten
/// characters around a `...`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= MASK_FULL_THRESHOLD {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..MASK_VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - MASK_VISIBLE_CHARS..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_fully_masked() {
        assert_eq!(mask_token(""), "");
        assert_eq!(mask_token("abc123"), "******");
        assert_eq!(mask_token(&"x".repeat(20)), "*".repeat(20));
    }

    #[test]
    fn test_long_tokens_keep_edges() {
        let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature12";
        assert_eq!(mask_token(token), "eyJhbGciOi...ignature12");
    }

    #[test]
    fn test_mask_respects_multibyte_chars() {
        let token = "é".repeat(21);
        let masked = mask_token(&token);
        assert_eq!(masked, format!("{}...{}", "é".repeat(10), "é".repeat(10)));
    }

    #[test]
    fn test_record_serializes_with_rfc3339_timestamp() {
        let record = TokenRecord {
            project_name: "acme".to_string(),
            token_value: "abc123".to_string(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["project_name"], "acme");
        assert_eq!(json["token_value"], "abc123");
        assert!(json["updated_at"].as_str().unwrap().contains('T'));
        assert_eq!(record.masked_value(), "******");
    }
}

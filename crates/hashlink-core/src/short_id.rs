use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Display;
use std::str::FromStr;

/// A content-addressed identifier for a shortened URL.
///
/// A short id is the first [`ShortId::LEN`] lowercase hex characters of the
/// SHA-256 digest of the URL's UTF-8 bytes. The same URL always yields the
/// same id, across calls and across process restarts, so re-shortening a URL
/// is an idempotent overwrite rather than a new entry.
///
/// The id space is 16^8 = 2^32 values. With `n` stored URLs the chance of any
/// two colliding is roughly `n^2 / 2^33`: about 0.1% at 3,000 URLs and about
/// 1% at 9,300. Two colliding URLs share one slot and the later write wins.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortId(String);

impl ShortId {
    /// Number of hex characters in a short id.
    pub const LEN: usize = 8;

    /// Computes the short id of `url`.
    ///
    /// The input is hashed as-is. Empty strings and non-URLs are legal.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashlink_core::ShortId;
    ///
    /// let id = ShortId::fingerprint("https://example.com/a/b/c");
    /// assert_eq!(id.as_str().len(), ShortId::LEN);
    /// assert_eq!(id, ShortId::fingerprint("https://example.com/a/b/c"));
    /// ```
    pub fn fingerprint(url: &str) -> Self {
        let digest = Sha256::digest(url.as_bytes());
        // Each byte encodes to two hex characters.
        Self(hex::encode(&digest[..Self::LEN / 2]))
    }

    /// Parses a short id received from outside, e.g. a request path.
    ///
    /// Accepts exactly [`ShortId::LEN`] characters of `[0-9a-f]`.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.len() != Self::LEN {
            return Err(CoreError::InvalidShortId(format!(
                "length must be {}, got {}",
                Self::LEN,
                s.len()
            )));
        }

        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only lowercase hex characters: '{}'",
                s
            )));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let url = "https://example.com/very/long/url/that/needs/to/be/shortened";
        assert_eq!(ShortId::fingerprint(url), ShortId::fingerprint(url));
    }

    #[test]
    fn fingerprint_is_eight_lowercase_hex_chars() {
        let long = "x".repeat(10_000);
        for url in ["", " ", "https://example.com", "ünïcödé", long.as_str()] {
            let id = ShortId::fingerprint(url);
            assert_eq!(id.as_str().len(), ShortId::LEN, "input {url:?}");
            assert!(is_lower_hex(id.as_str()), "input {url:?} gave {id}");
        }
    }

    #[test]
    fn fingerprint_matches_sha256_prefix() {
        // sha256("") = e3b0c44298fc1c14...
        assert_eq!(ShortId::fingerprint("").as_str(), "e3b0c442");
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(ShortId::fingerprint("abc").as_str(), "ba7816bf");
    }

    #[test]
    fn fingerprint_hashes_input_verbatim() {
        assert_ne!(
            ShortId::fingerprint("https://example.com/a%20b"),
            ShortId::fingerprint("https://example.com/a b")
        );
        assert_ne!(
            ShortId::fingerprint("https://example.com/"),
            ShortId::fingerprint("https://example.com")
        );
    }

    #[test]
    fn parse_accepts_fingerprints() {
        let id = ShortId::fingerprint("https://example.com");
        assert_eq!(ShortId::parse(id.as_str()).unwrap(), id);
        assert_eq!(id.as_str().parse::<ShortId>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(ShortId::parse("").is_err());
        assert!(ShortId::parse("abc1234").is_err());
        assert!(ShortId::parse("doesnotexist12").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(ShortId::parse("ABCDEF12").is_err());
        assert!(ShortId::parse("abcdefgh").is_err());
        assert!(ShortId::parse("abc/ef12").is_err());
    }

    #[test]
    fn display_is_raw_id() {
        let id = ShortId::parse("0123abcd").unwrap();
        assert_eq!(id.to_string(), "0123abcd");
        assert_eq!(format!("http://h:3000/{id}"), "http://h:3000/0123abcd");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let id = ShortId::parse("0123abcd").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0123abcd\"");
        assert_eq!(serde_json::from_str::<ShortId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<ShortId>("\"not-an-id\"").is_err());
    }
}

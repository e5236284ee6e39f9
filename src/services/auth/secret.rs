use std::fmt;

/// Shared HS256 signing secret.
///
/// - Always non-empty. An empty value is treated as "not configured" (`None`).
/// - Key material is intentionally not printable via Debug.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_not_a_secret() {
        assert!(Secret::new("").is_none());
        assert!(Secret::new("s3cr3t").is_some());
    }

    #[test]
    fn debug_does_not_leak_key_material() {
        let secret = Secret::new("s3cr3t").expect("non-empty secret");
        let printed = format!("{secret:?}");

        assert!(!printed.contains("s3cr3t"));
    }
}

use crate::foundation::error::{IkError, IkResult};

/// Expected credentials, injected from configuration or the environment.
#[derive(Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Secrets {
    /// Expected `access_token` query value (`ACCESS_TOKEN`).
    pub access_token: String,
    /// Expected `imagekit_id` query value (`IMAGEKIT_ID`).
    pub imagekit_id: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("access_token", &"<redacted>")
            .field("imagekit_id", &self.imagekit_id)
            .finish()
    }
}

/// Proof that the caller passed the gate; carries the account to build URLs for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorized {
    imagekit_id: String,
}

impl Authorized {
    /// The verified ImageKit account identifier.
    pub fn imagekit_id(&self) -> &str {
        &self.imagekit_id
    }
}

/// Static two-string comparison guarding the form.
#[derive(Clone, Debug)]
pub struct AccessGate {
    secrets: Secrets,
}

impl AccessGate {
    /// Gate checking against `secrets`.
    pub fn new(secrets: Secrets) -> Self {
        Self { secrets }
    }

    /// `true` iff both values equal the configured secrets exactly.
    pub fn validate(&self, access_token: &str, imagekit_id: &str) -> bool {
        // Both comparisons always run.
        let token_ok = constant_time_eq(
            access_token.as_bytes(),
            self.secrets.access_token.as_bytes(),
        );
        let id_ok = constant_time_eq(imagekit_id.as_bytes(), self.secrets.imagekit_id.as_bytes());
        token_ok & id_ok
    }

    /// Check the raw query values; a missing or empty `access_token` always fails.
    pub fn authorize(
        &self,
        access_token: Option<&str>,
        imagekit_id: Option<&str>,
    ) -> IkResult<Authorized> {
        let token = access_token.unwrap_or_default();
        let id = imagekit_id.unwrap_or_default();
        if token.is_empty() || !self.validate(token, id) {
            tracing::warn!("access denied");
            return Err(IkError::Authentication);
        }
        Ok(Authorized {
            imagekit_id: id.to_string(),
        })
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
#[path = "../../tests/unit/access/gate.rs"]
mod tests;

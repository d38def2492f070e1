//! Login credentials value object.

/// A validated login credential pair.
///
/// Constructed by the intake decoder once per request and handed to the
/// caller by value. A `Credentials` produced by a successful decode always
/// has non-empty `username` and `password`; it is never cached or shared
/// across requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

// Keep the password out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

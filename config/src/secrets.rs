use std::path::Path;
use tracing::warn;
use utility::Result;

pub const BASIC_AUTH_USER_FILE: &str = "basic-auth-user";
pub const BASIC_AUTH_PASSWORD_FILE: &str = "basic-auth-password";

/// basic auth credentials for the gateway, read once at startup
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// reads the username and password files under `secret_mount_path`.
    /// a file that can't be read leaves that half of the credentials empty
    pub fn read(secret_mount_path: &Path) -> Credentials {
        let mut credentials = Credentials::default();

        match read_secret(&secret_mount_path.join(BASIC_AUTH_USER_FILE)) {
            Ok(val) => credentials.username = val,
            Err(e) => warn!(error = %e, "unable to read username"),
        }
        match read_secret(&secret_mount_path.join(BASIC_AUTH_PASSWORD_FILE)) {
            Ok(val) => credentials.password = val,
            Err(e) => warn!(error = %e, "unable to read password"),
        }

        credentials
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// contents of a secret file with surrounding whitespace removed,
/// or an empty string when the file does not exist
pub fn read_secret(path: &Path) -> Result<String> {
    if std::fs::metadata(path).is_err() {
        return Ok(String::new());
    }
    let data = std::fs::read_to_string(path)?;
    Ok(data.trim().to_string())
}

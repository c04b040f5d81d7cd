//! Network and filesystem defaults for the Simple Books client.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://simple-books-api.click";

/// Default location of the persisted credential, relative to the working directory.
pub const DEFAULT_TOKEN_PATH: &str = "Utils/token.json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

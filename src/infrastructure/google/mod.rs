use gcp_auth::TokenProvider;
use std::env;
use std::path::Path;

/// OAuth scope covering both the Gemini and Cloud TTS APIs.
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

const CREDENTIALS_ERROR: &str = "Google credentials not found or invalid.";

/// Verify that GOOGLE_APPLICATION_CREDENTIALS names an existing file.
///
/// Both external-call repositories run this before any network I/O, on every
/// call. The result is never cached; editing or removing the file takes
/// effect on the next request.
pub fn check_credentials() -> Result<String, String> {
    let path = env::var(CREDENTIALS_ENV).map_err(|_| CREDENTIALS_ERROR.to_string())?;
    if path.is_empty() || !Path::new(&path).exists() {
        return Err(CREDENTIALS_ERROR.to_string());
    }
    Ok(path)
}

/// Resolve an access token for the service account named by
/// GOOGLE_APPLICATION_CREDENTIALS.
///
/// Fails with the configuration error before any network attempt when the
/// credentials file is missing.
pub async fn access_token() -> Result<String, String> {
    check_credentials()?;

    let provider = gcp_auth::provider()
        .await
        .map_err(|e| format!("failed to load Google credentials: {}", e))?;
    let token = provider
        .token(&[CLOUD_PLATFORM_SCOPE])
        .await
        .map_err(|e| format!("failed to obtain Google access token: {}", e))?;

    Ok(token.as_str().to_string())
}

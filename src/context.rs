//! The host-injected console context.
//!
//! The host hands the console one JSON document describing itself: where the
//! auth service lives, the organization branding, and whether onboarding has
//! finished. Everything that needs a flag reads it from an explicit
//! [`DashboardContext`] value rather than ambient global state, so a missing
//! or malformed document is an ordinary load error at the boundary instead
//! of a crash somewhere in rendering code.

use serde::{Deserialize, Serialize};

/// Bootstrap document the host provides to the console.
///
/// Wire format is camelCase JSON:
///
/// ```json
/// {
///   "authorizerUrl": "https://auth.example.com",
///   "organizationName": "Acme",
///   "isOnboardingCompleted": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardContext {
    /// Base URL of the auth service backing the console.
    pub authorizer_url: String,
    /// Where the console returns after login. Optional; see
    /// [`DashboardContext::redirect_url`] for the default.
    pub redirect_url: Option<String>,
    /// Organization display name.
    #[serde(default)]
    pub organization_name: String,
    /// Organization logo URL.
    #[serde(default)]
    pub organization_logo: String,
    /// Set by the host once the admin secret has been configured. Absent
    /// means onboarding has not finished.
    #[serde(default)]
    pub is_onboarding_completed: bool,
}

impl DashboardContext {
    /// Parse a context document from its JSON text.
    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("invalid context document: {}", e))
    }

    /// Redirect target for the console: the explicit value when the host
    /// set one, otherwise `<authorizer_url>/app` with any trailing slash on
    /// the base trimmed first.
    pub fn redirect_url(&self) -> String {
        match &self.redirect_url {
            Some(url) => url.clone(),
            None => format!("{}/app", self.authorizer_url.trim_end_matches('/')),
        }
    }
}

/// Load a context document from a file on disk.
pub fn load_context(path: &str) -> Result<DashboardContext, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read context {}: {}", path, e))?;
    DashboardContext::from_json(&data)
}

/// True iff the host has marked onboarding as completed.
///
/// The host flips the flag once the admin secret is configured, so this is
/// also the gate for the console's admin-only area. A document without the
/// flag parses as not completed; gating never panics.
pub fn has_admin_secret(ctx: &DashboardContext) -> bool {
    ctx.is_onboarding_completed
}

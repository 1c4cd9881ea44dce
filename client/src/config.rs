//! Backend base-URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call is built from a single base: an explicit override when one
//! is configured, the local development backend in debug builds, and the
//! page's own origin under the host's [`PROXY_PREFIX`] in production.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used by debug builds when no override is configured.
pub const DEV_API_BASE: &str = "http://localhost:3001";

/// Path under which the SSR host forwards requests to the backend.
pub const PROXY_PREFIX: &str = "/api";

/// Environment variable naming the backend base URL (compile-time for the
/// browser bundle, runtime for the CLI and host).
pub const API_URL_ENV: &str = "GESTIONES_API_URL";

/// Normalized backend base URL without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Wrap `base`, trimming any trailing slashes.
    pub fn new(base: &str) -> Self {
        Self(base.trim().trim_end_matches('/').to_owned())
    }

    /// Pick the base URL: explicit override, else the development default in
    /// development mode, else `{origin}/api`. With no origin available in
    /// production the base is `/api` and URLs stay page-relative.
    pub fn resolve(explicit: Option<&str>, development: bool, origin: Option<&str>) -> Self {
        let explicit = explicit.map(str::trim).filter(|url| !url.is_empty());
        match (explicit, development) {
            (Some(url), _) => Self::new(url),
            (None, true) => Self::new(DEV_API_BASE),
            (None, false) => {
                let origin = origin.unwrap_or_default().trim_end_matches('/');
                Self::new(&format!("{origin}{PROXY_PREFIX}"))
            }
        }
    }

    /// Resolve from build settings: `GESTIONES_API_URL` at compile time,
    /// `debug_assertions` as development mode, and the browser origin.
    pub fn from_build() -> Self {
        Self::resolve(option_env!("GESTIONES_API_URL"), cfg!(debug_assertions), page_origin().as_deref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join `path` onto the base with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

fn page_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

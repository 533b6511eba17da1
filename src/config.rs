//! Client configuration
//!
//! [`ClientConfig`] is fixed when a client is built. [`ServiceProperties`]
//! reads the external configuration used by IBM Cloud SDKs: a credentials
//! file and `<SERVICE>_*` environment variables.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};

/// Service URL used when none is configured (Sydney region).
pub const DEFAULT_SERVICE_URL: &str = "https://api.au-syd.codeengine.cloud.ibm.com/v2";

/// Name under which external configuration is looked up.
pub const DEFAULT_SERVICE_NAME: &str = "code_engine";

/// API version date sent as the `version` query parameter.
pub const DEFAULT_VERSION: &str = "2025-03-29";

/// Regions with a Code Engine endpoint.
pub const REGIONS: &[&str] = &[
    "au-syd", "br-sao", "ca-tor", "eu-de", "eu-es", "eu-gb", "jp-osa", "jp-tok", "us-east",
    "us-south",
];

/// Name of the credentials file looked up in the working and home directories.
const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// Environment variable pointing at an explicit credentials file.
const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Service URL of a region's public endpoint.
pub fn service_url_for_region(region: &str) -> Result<String> {
    if REGIONS.contains(&region) {
        Ok(format!("https://api.{region}.codeengine.cloud.ibm.com/v2"))
    } else {
        Err(Error::Config(format!(
            "unknown region `{region}`, expected one of: {}",
            REGIONS.join(", ")
        )))
    }
}

/// Settings of a client. Read-only once the client exists.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every operation path is appended to.
    pub service_url: String,
    /// API version date; `None` omits the `version` query parameter.
    pub version: Option<String>,
    /// Headers added to every request.
    pub headers: HeaderMap,
    pub disable_ssl_verification: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            version: Some(DEFAULT_VERSION.to_string()),
            headers: HeaderMap::new(),
            disable_ssl_verification: false,
            user_agent: format!("codeengine-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn with_region(self, region: &str) -> Result<Self> {
        Ok(self.with_service_url(service_url_for_region(region)?))
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidArgument(format!("header name `{name}`: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidArgument(format!("value of header `{name}`: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Apply the URL and TLS settings found in external configuration.
    pub fn apply_properties(mut self, properties: &ServiceProperties) -> Self {
        if let Some(url) = properties.url() {
            self.service_url = url.to_string();
        }
        if properties.disable_ssl() {
            self.disable_ssl_verification = true;
        }
        self
    }
}

/// Properties of one service read from external configuration, keyed by
/// the part after the `<SERVICE>_` prefix (`URL`, `AUTH_TYPE`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    properties: IndexMap<String, String>,
}

impl ServiceProperties {
    /// Load the properties of `service_name`.
    ///
    /// Sources in order: the credentials file (`IBM_CREDENTIALS_FILE`, then
    /// `./ibm-credentials.env`, then `~/ibm-credentials.env`) and then the
    /// process environment. The first source that defines any property for
    /// the service is used alone.
    pub fn load(service_name: &str) -> Self {
        if let Some(path) = credentials_file_path() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    let properties = Self::from_credentials(service_name, &content);
                    if !properties.is_empty() {
                        tracing::debug!("Loaded {} properties from {}", service_name, path.display());
                        return properties;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read credentials file {}: {}", path.display(), e);
                }
            }
        }

        Self::from_env_vars(service_name, std::env::vars())
    }

    /// Parse `KEY=VALUE` lines of a credentials file.
    pub fn from_credentials(service_name: &str, content: &str) -> Self {
        let pairs = content.lines().filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unquote(value.trim()).to_string()))
        });
        Self::from_env_vars(service_name, pairs)
    }

    /// Collect the `<SERVICE>_*` entries of an environment-like list.
    pub fn from_env_vars<I, K, V>(service_name: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = format!("{}_", service_name.to_uppercase().replace('-', "_"));
        let properties = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let property = key.as_ref().strip_prefix(&prefix)?;
                (!property.is_empty()).then(|| (property.to_string(), value.into()))
            })
            .collect();
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .get(property)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.get("URL")
    }

    pub fn disable_ssl(&self) -> bool {
        self.get("DISABLE_SSL")
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }

    /// Configured authentication type, lower-cased. `AUTHTYPE` is accepted
    /// as an older spelling of `AUTH_TYPE`.
    pub fn auth_type(&self) -> Option<String> {
        self.get("AUTH_TYPE")
            .or_else(|| self.get("AUTHTYPE"))
            .map(str::to_lowercase)
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.get("BEARER_TOKEN")
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// First existing credentials file, if any.
fn credentials_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
        tracing::warn!("{} points at a missing file: {}", CREDENTIALS_FILE_ENV, path.display());
    }

    let cwd = Path::new(CREDENTIALS_FILE_NAME);
    if cwd.is_file() {
        return Some(cwd.to_path_buf());
    }

    dirs::home_dir()
        .map(|home| home.join(CREDENTIALS_FILE_NAME))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.version.as_deref(), Some(DEFAULT_VERSION));
        assert!(!config.disable_ssl_verification);
    }

    #[test]
    fn test_service_url_for_region() {
        assert_eq!(
            service_url_for_region("eu-de").unwrap(),
            "https://api.eu-de.codeengine.cloud.ibm.com/v2"
        );
        for region in REGIONS {
            assert!(service_url_for_region(region).is_ok());
        }
        assert!(matches!(service_url_for_region("mars-1"), Err(Error::Config(_))));
    }

    #[test]
    fn test_with_header_validates() {
        assert!(ClientConfig::new().with_header("X-Trace", "abc").is_ok());
        assert!(ClientConfig::new().with_header("bad header", "abc").is_err());
        assert!(ClientConfig::new().with_header("X-Trace", "line\nbreak").is_err());
    }

    #[test]
    fn test_credentials_file_parsing() {
        let content = r#"
# Code Engine
CODE_ENGINE_URL=https://api.us-south.codeengine.cloud.ibm.com/v2
CODE_ENGINE_AUTH_TYPE=BearerToken
CODE_ENGINE_BEARER_TOKEN="eyJhbGciOi=="

OTHER_SERVICE_URL=https://example.com
"#;
        let props = ServiceProperties::from_credentials("code_engine", content);
        assert_eq!(props.url(), Some("https://api.us-south.codeengine.cloud.ibm.com/v2"));
        assert_eq!(props.auth_type().as_deref(), Some("bearertoken"));
        // Only the first `=` splits; the token keeps its padding.
        assert_eq!(props.bearer_token(), Some("eyJhbGciOi=="));
        assert_eq!(props.get("OTHER_SERVICE_URL"), None);
        assert!(!props.disable_ssl());
    }

    #[test]
    fn test_env_vars_prefix_and_flags() {
        let vars = vec![
            ("CODE_ENGINE_DISABLE_SSL", "TRUE"),
            ("CODE_ENGINE_AUTHTYPE", "noauth"),
            ("CODE_ENGINE_", "ignored"),
            ("HOME", "/root"),
        ];
        let props = ServiceProperties::from_env_vars("code_engine", vars);
        assert!(props.disable_ssl());
        assert_eq!(props.auth_type().as_deref(), Some("noauth"));
        assert_eq!(props.url(), None);
    }

    #[test]
    fn test_apply_properties() {
        let props = ServiceProperties::from_env_vars(
            "code_engine",
            vec![("CODE_ENGINE_URL", "http://localhost:8080/v2")],
        );
        let config = ClientConfig::default().apply_properties(&props);
        assert_eq!(config.service_url, "http://localhost:8080/v2");
    }
}

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL: {value}")]
    InvalidUrl {
        value: String,
        #[source]
        error: url::ParseError,
    },

    #[error("API base URL must be http or https: {url}")]
    UnsupportedScheme { url: Url },

    #[error("Could not determine the API base URL")]
    Missing,
}

/// UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where the API lives. Requests go to `{base_url}/api/...`.
    pub base_url: Url,
}

impl Config {
    /// Loads the configuration from the build environment.
    ///
    /// `BIOLINK_API_URL` is read at compile time. If it's unset or empty, the
    /// document's base URI is used, i.e. the API is expected next to the UI.
    pub fn from_env() -> Result<Self, ConfigError> {
        match option_env!("BIOLINK_API_URL") {
            Some(value) if !value.trim().is_empty() => Self::parse(value),
            _ => {
                let base_uri = gloo_utils::document()
                    .base_uri()
                    .ok()
                    .flatten()
                    .ok_or(ConfigError::Missing)?;
                Self::from_document_base(&base_uri)
            }
        }
    }

    /// Uses the directory of the page as base URL.
    ///
    /// The page's file name, query and fragment are dropped, so
    /// `https://host/jane/index.html?ref=x` becomes `https://host/jane/`.
    pub fn from_document_base(value: &str) -> Result<Self, ConfigError> {
        let Self { base_url } = Self::parse(value)?;
        let base_url = base_url.join("./").map_err(|error| {
            ConfigError::InvalidUrl {
                value: value.to_owned(),
                error,
            }
        })?;
        Ok(Self { base_url })
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        let base_url: Url = value.parse().map_err(|error| {
            ConfigError::InvalidUrl {
                value: value.to_owned(),
                error,
            }
        })?;

        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            _ => Err(ConfigError::UnsupportedScheme { url: base_url }),
        }
    }
}

use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Partial scrape settings. Used both for TOML profile files and for the
/// values given on the command line; unset fields fall through to the
/// next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub url: Option<String>,
    pub out_dir: Option<String>,
    #[serde(default)]
    pub selectors: SelectorOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorOverrides {
    pub product: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub frequency: Option<String>,
    pub discount: Option<String>,
    pub discount_frequency: Option<String>,
}

impl Profile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ScrapeError::ProfileParseError {
            message: e.to_string(),
        })
    }

    /// Fills every unset field of `self` from `fallback`.
    pub fn or(self, fallback: Profile) -> Profile {
        let s = self.selectors;
        let f = fallback.selectors;
        Profile {
            url: self.url.or(fallback.url),
            out_dir: self.out_dir.or(fallback.out_dir),
            selectors: SelectorOverrides {
                product: s.product.or(f.product),
                title: s.title.or(f.title),
                description: s.description.or(f.description),
                price: s.price.or(f.price),
                frequency: s.frequency.or(f.frequency),
                discount: s.discount.or(f.discount),
                discount_frequency: s.discount_frequency.or(f.discount_frequency),
            },
        }
    }
}

/// Replaces `${NAME}` with the value of environment variable `NAME`.
/// Unknown variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

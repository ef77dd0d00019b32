//! Application settings assembled from environment variables.
//!
//! Settings are built once at startup and shared read-only afterwards.
//! Only `ENVIRONMENT` is validated; every other variable is passed through
//! as-is and defaults to an empty string when unset.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::constants::*;

/// Errors raised while assembling settings. All of them abort startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingVariable(&'static str),

    #[error("{name} has invalid value '{value}' (allowed: {allowed})")]
    InvalidValue {
        name: &'static str,
        value: String,
        allowed: String,
    },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => ENVIRONMENT_DEVELOPMENT,
            Environment::Production => ENVIRONMENT_PRODUCTION,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ENVIRONMENT_DEVELOPMENT => Ok(Environment::Development),
            ENVIRONMENT_PRODUCTION => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue {
                name: ENV_ENVIRONMENT,
                value: value.to_string(),
                allowed: VALID_ENVIRONMENTS.join(", "),
            }),
        }
    }
}

/// Database credentials.
#[derive(Clone, Default, Serialize)]
pub struct DatabaseSettings {
    pub dbms: String,
    pub host: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub database: String,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("dbms", &self.dbms)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

/// SMTP server credentials.
#[derive(Clone, Default, Serialize)]
pub struct SmtpSettings {
    pub host: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub protocol: String,
    pub port: String,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("protocol", &self.protocol)
            .field("port", &self.port)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MailSettings {
    pub smtp: SmtpSettings,
}

/// Remote Deployd API endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeploydSettings {
    pub host: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PathSettings {
    pub path: String,
}

/// Template engine paths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TwigSettings {
    pub templates: PathSettings,
    pub cache: PathSettings,
    pub public: String,
}

impl TwigSettings {
    /// Template directory, falling back to the bundled `templates` directory.
    pub fn templates_path(&self) -> &str {
        if self.templates.path.is_empty() {
            DEFAULT_TEMPLATES_PATH
        } else {
            &self.templates.path
        }
    }
}

/// Asset pipeline options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetSettings {
    pub path: String,
    pub chmod: String,
    pub base: String,
    pub cache: String,
    pub name: String,
    pub lifetime: String,
    pub minify: String,
}

impl AssetSettings {
    /// Directory and URL prefix to serve assets from, if both are configured.
    pub fn mount(&self) -> Option<(&str, &str)> {
        if self.path.is_empty() || self.base.is_empty() {
            None
        } else {
            Some((&self.path, &self.base))
        }
    }
}

#[derive(Clone, Default, Serialize)]
pub struct FacebookAppSettings {
    pub id: String,
    #[serde(skip_serializing)]
    pub secret: String,
}

impl fmt::Debug for FacebookAppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookAppSettings")
            .field("id", &self.id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Facebook app credentials.
#[derive(Clone, Default, Serialize)]
pub struct FacebookSettings {
    pub app: FacebookAppSettings,
    #[serde(skip_serializing)]
    pub token: String,
}

impl fmt::Debug for FacebookSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookSettings")
            .field("app", &self.app)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub environment: Environment,
    pub display_error_details: bool,
    pub domain: String,
    pub locale: String,
    pub locale_fallback: String,
    pub timezone: String,
    pub db: DatabaseSettings,
    pub mail: MailSettings,
    pub dpd: DeploydSettings,
    pub twig: TwigSettings,
    pub assets: AssetSettings,
    pub facebook: FacebookSettings,
}

impl Settings {
    /// Assemble settings from the process environment.
    ///
    /// `.env` is not read here; the binary loads it before argument parsing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Assemble settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = lookup(ENV_ENVIRONMENT)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable(ENV_ENVIRONMENT))?
            .parse()?;

        let var = |name: &str| lookup(name).unwrap_or_default();

        Ok(Self {
            environment,
            display_error_details: environment.is_development(),
            domain: var(ENV_DOMAIN),
            locale: var(ENV_LOCALE),
            locale_fallback: var(ENV_LOCALE_FALLBACK),
            timezone: var(ENV_TIMEZONE),
            db: DatabaseSettings {
                dbms: var(ENV_DB_DBMS),
                host: var(ENV_DB_HOST),
                username: var(ENV_DB_USERNAME),
                password: var(ENV_DB_PASSWORD),
                database: var(ENV_DB_DATABASE),
            },
            mail: MailSettings {
                smtp: SmtpSettings {
                    host: var(ENV_MAIL_SMTP_HOST),
                    user: var(ENV_MAIL_SMTP_USER),
                    password: var(ENV_MAIL_SMTP_PASSWORD),
                    protocol: var(ENV_MAIL_SMTP_PROTOCOL),
                    port: var(ENV_MAIL_SMTP_PORT),
                },
            },
            dpd: DeploydSettings {
                host: var(ENV_DPD_HOST),
                protocol: var(ENV_DPD_PROTOCOL),
            },
            twig: TwigSettings {
                templates: PathSettings {
                    path: var(ENV_TWIG_TEMPLATES_PATH),
                },
                cache: PathSettings {
                    path: var(ENV_TWIG_CACHE_PATH),
                },
                public: var(ENV_TWIG_PUBLIC),
            },
            assets: AssetSettings {
                path: var(ENV_ASSETS_PATH),
                chmod: var(ENV_ASSETS_CHMOD),
                base: var(ENV_ASSETS_BASE),
                cache: var(ENV_ASSETS_CACHE),
                name: var(ENV_ASSETS_NAME),
                lifetime: var(ENV_ASSETS_LIFETIME),
                minify: var(ENV_ASSETS_MINIFY),
            },
            facebook: FacebookSettings {
                app: FacebookAppSettings {
                    id: var(ENV_FACEBOOK_APP_ID),
                    secret: var(ENV_FACEBOOK_APP_SECRET),
                },
                token: var(ENV_FACEBOOK_TOKEN),
            },
        })
    }

    /// Locale to use for formatting: `LOCALE`, or `LOCALE_FALLBACK` when empty.
    pub fn effective_locale(&self) -> &str {
        if self.locale.is_empty() {
            &self.locale_fallback
        } else {
            &self.locale
        }
    }

    /// Configured timezone, or `None` to keep the process default.
    pub fn effective_timezone(&self) -> Option<&str> {
        if self.timezone.is_empty() {
            None
        } else {
            Some(&self.timezone)
        }
    }
}

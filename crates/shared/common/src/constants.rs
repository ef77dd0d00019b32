//! Environment variable names and allowed values.
//!
//! Centralized location for the keys the settings assembler reads.

// =============================================================================
// Environment
// =============================================================================

pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Development environment identifier
pub const ENVIRONMENT_DEVELOPMENT: &str = "development";

/// Production environment identifier
pub const ENVIRONMENT_PRODUCTION: &str = "production";

/// All valid environment values
pub const VALID_ENVIRONMENTS: &[&str] = &[ENVIRONMENT_DEVELOPMENT, ENVIRONMENT_PRODUCTION];

// =============================================================================
// Site
// =============================================================================

pub const ENV_DOMAIN: &str = "DOMAIN";
pub const ENV_LOCALE: &str = "LOCALE";
pub const ENV_LOCALE_FALLBACK: &str = "LOCALE_FALLBACK";
pub const ENV_TIMEZONE: &str = "TIMEZONE";

// =============================================================================
// Database
// =============================================================================

pub const ENV_DB_DBMS: &str = "DB_DBMS";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_USERNAME: &str = "DB_USERNAME";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_DATABASE: &str = "DB_DATABASE";

// =============================================================================
// Mailer (SMTP)
// =============================================================================

pub const ENV_MAIL_SMTP_HOST: &str = "MAIL_SMTP_HOST";
pub const ENV_MAIL_SMTP_USER: &str = "MAIL_SMTP_USER";
pub const ENV_MAIL_SMTP_PASSWORD: &str = "MAIL_SMTP_PASSWORD";
pub const ENV_MAIL_SMTP_PROTOCOL: &str = "MAIL_SMTP_PROTOCOL";
pub const ENV_MAIL_SMTP_PORT: &str = "MAIL_SMTP_PORT";

// =============================================================================
// Deployd
// =============================================================================

pub const ENV_DPD_HOST: &str = "DPD_HOST";
pub const ENV_DPD_PROTOCOL: &str = "DPD_PROTOCOL";

// =============================================================================
// Templating & Assets
// =============================================================================

pub const ENV_TWIG_TEMPLATES_PATH: &str = "TWIG_TEMPLATES_PATH";
pub const ENV_TWIG_CACHE_PATH: &str = "TWIG_CACHE_PATH";
pub const ENV_TWIG_PUBLIC: &str = "TWIG_PUBLIC";

pub const ENV_ASSETS_PATH: &str = "ASSETS_PATH";
pub const ENV_ASSETS_CHMOD: &str = "ASSETS_CHMOD";
pub const ENV_ASSETS_BASE: &str = "ASSETS_BASE";
pub const ENV_ASSETS_CACHE: &str = "ASSETS_CACHE";
pub const ENV_ASSETS_NAME: &str = "ASSETS_NAME";
pub const ENV_ASSETS_LIFETIME: &str = "ASSETS_LIFETIME";
pub const ENV_ASSETS_MINIFY: &str = "ASSETS_MINIFY";

/// Template directory used when `TWIG_TEMPLATES_PATH` is empty
pub const DEFAULT_TEMPLATES_PATH: &str = "templates";

// =============================================================================
// Facebook
// =============================================================================

pub const ENV_FACEBOOK_APP_ID: &str = "FACEBOOK_APP_ID";
pub const ENV_FACEBOOK_APP_SECRET: &str = "FACEBOOK_APP_SECRET";
pub const ENV_FACEBOOK_TOKEN: &str = "FACEBOOK_TOKEN";

// =============================================================================
// Server
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

use crate::types::ConfigError;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_URL_EXPIRES_SECONDS: u64 = 300;

/// Longest expiry S3 accepts for a SigV4 presigned URL (7 days)
pub const MAX_URL_EXPIRES_SECONDS: u64 = 604_800;

/// Slideshow API: lists media in an S3 bucket as short-lived signed URLs
#[derive(Parser, Debug, Clone)]
#[command(name = "slideshow-api")]
#[command(about = "Serve signed URLs for the media objects of an S3 bucket", long_about = None)]
pub struct Config {
    /// Bucket to list
    #[arg(long, env = "S3_BUCKET")]
    pub bucket: String,

    /// Region of the bucket
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Lifetime of each signed URL, in seconds
    #[arg(long, env = "URL_EXPIRES_SECONDS", default_value_t = DEFAULT_URL_EXPIRES_SECONDS)]
    pub url_expires_seconds: u64,

    /// Static access key; the default AWS credential chain is used when unset
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// Static secret key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Custom endpoint for S3-compatible stores
    #[arg(long, env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use path-style addressing (required by most S3-compatible stores)
    #[arg(long, env = "S3_FORCE_PATH_STYLE")]
    pub force_path_style: bool,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::MissingBucket);
        }

        if self.url_expires_seconds == 0 || self.url_expires_seconds > MAX_URL_EXPIRES_SECONDS {
            return Err(ConfigError::InvalidExpiry(self.url_expires_seconds));
        }

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(ConfigError::IncompleteCredentials);
        }

        Ok(())
    }

    pub fn url_expires(&self) -> Duration {
        Duration::from_secs(self.url_expires_seconds)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

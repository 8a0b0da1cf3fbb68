use std::{ops::Deref, sync::Arc};

use anyhow::Context;
use url::Url;

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    /// Externally visible base URL, used to build pagination links.
    pub public_url: Url,
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

fn env_var(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set in .env file"))
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let host = env_var("HOST")?;
        let port: u16 = env_var("PORT")?.parse().context("PORT is not a number")?;
        let public_url = match std::env::var("PUBLIC_URL") {
            Ok(url) => url,
            Err(_) => format!("http://{host}:{port}"),
        };

        let v = ConfigInner {
            db_url: env_var("DATABASE_URL")?,
            host,
            port,
            allowed_origin: env_var("ALLOWED_ORIGIN")?,
            public_url: Url::parse(&public_url).context("PUBLIC_URL is not a valid URL")?,
        };

        Ok(Self(Arc::new(v)))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }

    /// Absolute URL of the current request, from its path and query.
    pub fn request_url(&self, path_and_query: &str) -> Result<Url, url::ParseError> {
        self.0.public_url.join(path_and_query)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

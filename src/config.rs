//! Settings from environment variables.

use std::path::PathBuf;

use anyhow::Result;

use crate::util::{getenv, getenv_bool, getenv_or, log_basedir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `LISTEN_HTTP`
    pub listen_http: String,
    /// `LISTEN_HTTPS`, only used together with TLS keys.
    pub listen_https: String,
    /// `TLSKEYSFILEBASE`: path without the `.crt`/`.key` suffix.
    pub tlskeys_file_base: Option<String>,
    /// `TEMPLATESDIR`
    pub templates_dir: PathBuf,
    /// `PREVIEW_COMMAND`, whitespace separated; without it the
    /// preview endpoints answer 503.
    pub preview_command: Option<String>,
    /// `SERVICE_NAME`, the rendering context of previews.
    pub service_name: String,
    /// `LOGDIR`, default `$HOME/log/<program name>`.
    pub log_dir: Option<String>,
    /// `LOG_REQUEST_DATA`
    pub log_request_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            listen_http: getenv_or("LISTEN_HTTP", Some("127.0.0.1:3000"))?,
            listen_https: getenv_or("LISTEN_HTTPS", Some("127.0.0.1:3001"))?,
            tlskeys_file_base: getenv("TLSKEYSFILEBASE")?,
            templates_dir: getenv_or("TEMPLATESDIR", Some("app/views/templates"))?.into(),
            preview_command: getenv("PREVIEW_COMMAND")?,
            service_name: getenv_or("SERVICE_NAME", Some("Service name goes here"))?,
            log_dir: getenv("LOGDIR")?,
            log_request_data: getenv_bool("LOG_REQUEST_DATA")?,
        })
    }

    /// `log_dir`, or the default one (created if missing).
    pub fn log_dir(&self) -> Result<String> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => log_basedir(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_log_dir_override() -> Result<()> {
        let mut config = Config::from_env()?;
        config.log_dir = Some("/tmp/kitroutes-logs".into());
        assert_eq!(config.log_dir()?, "/tmp/kitroutes-logs");
        Ok(())
    }
}

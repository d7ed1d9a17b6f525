use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser as ClapParser;

use kitroutes::apachelog::Logs;
use kitroutes::config::Config;
use kitroutes::preview::{CommandPreviewRenderer, PreviewRenderer};
use kitroutes::rouille_runner::{RouilleRunner, Tlskeys};
use kitroutes::templates::{TemplateName, TemplateStore};
use kitroutes::webparts::App;
use kitroutes::{note, warn};


#[derive(clap::Parser, Debug)]
/// Serve GOV.UK Frontend macro calls built from query parameters,
/// page templates, and rendered previews. Options override the
/// corresponding environment variables.
struct Args {
    /// Address for plain HTTP (LISTEN_HTTP)
    #[clap(long)]
    listen_http: Option<String>,

    /// Address for HTTPS (LISTEN_HTTPS); only used when
    /// --tls-keys-file-base is given
    #[clap(long)]
    listen_https: Option<String>,

    /// Path of the TLS certificate and key, without the .crt / .key
    /// suffix (TLSKEYSFILEBASE)
    #[clap(long)]
    tls_keys_file_base: Option<String>,

    /// Directory holding the <name>.njk page templates (TEMPLATESDIR)
    #[clap(long)]
    templates_dir: Option<PathBuf>,

    /// Program (and arguments) rendering template text from stdin to
    /// HTML on stdout (PREVIEW_COMMAND)
    #[clap(long)]
    preview_command: Option<String>,

    /// Directory for the log files (LOGDIR)
    #[clap(long)]
    log_dir: Option<String>,

    /// Also log the submitted data of every request as JSON
    /// (LOG_REQUEST_DATA)
    #[clap(long)]
    log_request_data: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        let Args { listen_http, listen_https, tls_keys_file_base, templates_dir,
                   preview_command, log_dir, log_request_data } = self;
        if let Some(v) = listen_http { config.listen_http = v }
        if let Some(v) = listen_https { config.listen_https = v }
        if tls_keys_file_base.is_some() { config.tlskeys_file_base = tls_keys_file_base }
        if let Some(v) = templates_dir { config.templates_dir = v }
        if preview_command.is_some() { config.preview_command = preview_command }
        if log_dir.is_some() { config.log_dir = log_dir }
        if log_request_data { config.log_request_data = true }
    }
}

fn main() -> Result<()> {
    let mut config = Config::from_env()?;
    Args::parse().apply(&mut config);

    let templates = TemplateStore::new(&config.templates_dir);
    for name in TemplateName::all() {
        let path = templates.path_for(name);
        if !path.is_file() {
            warn!("missing template file {path:?}");
        }
    }

    let preview: Option<Arc<dyn PreviewRenderer>> =
        match &config.preview_command {
            Some(command_line) => Some(Arc::new(CommandPreviewRenderer::from_command_line(
                command_line, config.service_name.clone())?)),
            None => {
                warn!("no PREVIEW_COMMAND set, previews will answer 503");
                None
            }
        };

    let tlskeys = config.tlskeys_file_base.as_deref().map(Tlskeys::read).transpose()?;

    let logbasedir = config.log_dir()?;
    note!("logging to {logbasedir:?}");

    let runner = RouilleRunner::new(App { templates, preview }.router());

    let http_thread = runner.run_server(
        "kitroutes_http",
        config.listen_http.clone(),
        None,
        Arc::new(Logs::open_in_basedir(&logbasedir, false, config.log_request_data)?))?;

    let https_thread =
        if let Some(tlskeys) = tlskeys {
            Some(runner.run_server(
                "kitroutes_https",
                config.listen_https.clone(),
                Some(tlskeys),
                Arc::new(Logs::open_in_basedir(&logbasedir, true, config.log_request_data)?))?)
        } else {
            None
        };

    if http_thread.join().is_err() {
        warn!("http thread panicked");
    }
    if let Some(thread) = https_thread {
        if thread.join().is_err() {
            warn!("https thread panicked");
        }
    }
    bail!("Server stopped.");
}

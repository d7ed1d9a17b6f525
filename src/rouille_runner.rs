use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{Result, Context, anyhow};
use rouille::Server;

use crate::apachelog::Logs;
use crate::webparts::{server_handler, Router};
use crate::{note, warn};


pub struct Tlskeys {
    pub crt: Vec<u8>,
    pub key: Vec<u8>,
}

impl Tlskeys {
    /// Read `<base>.crt` and `<base>.key`.
    pub fn read(base: &str) -> Result<Self> {
        let read = |path: String| std::fs::read(&path).with_context(
            || anyhow!("reading TLS key file {path:?}"));
        Ok(Tlskeys {
            crt: read(format!("{base}.crt"))?,
            key: read(format!("{base}.key"))?,
        })
    }
}

/// Runs rouille servers sharing one router.
pub struct RouilleRunner {
    router: Arc<Router>,
}

impl RouilleRunner {
    pub fn new(router: Router) -> Self {
        RouilleRunner { router: Arc::new(router) }
    }

    /// Run a rouille server in a new thread. rouille serves requests
    /// from its own thread pool.
    pub fn run_server(
        &self,
        thread_name: &str,
        addr: String,
        tlskeys: Option<Tlskeys>,
        logs: Arc<Mutex<Logs>>,
    ) -> Result<JoinHandle<()>, std::io::Error>
    {
        thread::Builder::new().name(thread_name.into()).spawn({
            let router = self.router.clone();
            move || {
                let handler = server_handler(router, logs);
                let is_https = tlskeys.is_some();
                let server =
                    if let Some(Tlskeys { crt, key }) = tlskeys {
                        Server::new_ssl(addr.clone(), handler, crt, key)
                    } else {
                        Server::new(addr.clone(), handler)
                    };
                match server {
                    Ok(server) => {
                        note!("listening on http{}://{}",
                              if is_https { "s" } else { "" },
                              server.server_addr());
                        server.run()
                    }
                    Err(e) => warn!("error starting server on {addr:?}: {e}"),
                }
            }
        })
    }
}

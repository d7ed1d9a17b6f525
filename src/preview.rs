//! Rendering generated template text to HTML, by an external program.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Result, bail};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreviewError {
    /// The renderer rejected the template text.
    #[error("{0}")]
    Render(String),
    /// The renderer could not be run at all.
    #[error("preview renderer unavailable: {0}")]
    Unavailable(String),
}

pub trait PreviewRenderer: Send + Sync {
    /// Evaluate `source` with the component macros available and the
    /// fixed rendering context, giving HTML.
    fn render(&self, source: &str) -> Result<String, PreviewError>;
}

/// Runs a program that reads template source on stdin and writes
/// HTML to stdout. The service name of the rendering context is
/// passed in the `SERVICE_NAME` environment variable. A non-zero
/// exit status is a render error, with stderr as the message.
#[derive(Debug, Clone)]
pub struct CommandPreviewRenderer {
    program: String,
    args: Vec<String>,
    service_name: String,
}

impl CommandPreviewRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>, service_name: impl Into<String>)
               -> Self
    {
        CommandPreviewRenderer {
            program: program.into(),
            args,
            service_name: service_name.into(),
        }
    }

    /// From a whitespace separated command line (no quoting).
    pub fn from_command_line(command_line: &str, service_name: impl Into<String>)
                             -> Result<Self>
    {
        let mut words = command_line.split_whitespace().map(String::from);
        let program = match words.next() {
            Some(p) => p,
            None => bail!("empty preview command"),
        };
        Ok(Self::new(program, words.collect(), service_name))
    }
}

impl PreviewRenderer for CommandPreviewRenderer {
    fn render(&self, source: &str) -> Result<String, PreviewError> {
        let unavailable = |e: std::io::Error| PreviewError::Unavailable(
            format!("{:?}: {e}", self.program));
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("SERVICE_NAME", &self.service_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(unavailable)?;
        let mut stdin = child.stdin.take().ok_or_else(
            || PreviewError::Unavailable("no stdin pipe to renderer".into()))?;
        // stdin is fed from its own thread, the renderer may write
        // output before it has read all input
        let (output, written) = thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(source.as_bytes()));
            let output = child.wait_with_output();
            (output, writer.join())
        });
        let output = output.map_err(unavailable)?;
        match written {
            Ok(Ok(())) => (),
            // The renderer may legitimately stop reading early
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => (),
            Ok(Err(e)) => return Err(unavailable(e)),
            Err(_) => return Err(PreviewError::Unavailable("stdin writer panicked".into())),
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let msg = stderr.trim();
            return Err(PreviewError::Render(
                if msg.is_empty() {
                    format!("renderer exited with {}", output.status)
                } else {
                    msg.to_string()
                }))
        }
        String::from_utf8(output.stdout).map_err(
            |_| PreviewError::Render("renderer output is not UTF-8".into()))
    }
}

//! Write HTTP access log files in the Combined Log Format (extended
//! Common Log Format) for access logs (Apache style), as per
//! <https://httpd.apache.org/docs/2.4/logs.html>, plus an error log
//! and an optional JSON dump of the submitted data of each request.

use std::io::{stderr, BufWriter, Write};
use std::mem::swap;
use std::panic;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;
use chrono::{DateTime, Utc};
use rouille::{Response, ResponseBody};
use serde::Serialize;

use crate::arequest::ARequest;
use crate::easy_fs::open_log_output;
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::params::ParameterMap;
use crate::webutils::errorpage_from_status;
use crate::{try_result, warn};

// "06/Dec/2023:02:02:47 +0000"
pub fn write_time(
    outp: &mut impl Write,
    time: SystemTime
) -> Result<()> {
    let dt: DateTime<Utc> = DateTime::from(time);
    write!(outp, "{}", dt.format("%d/%b/%Y:%H:%M:%S +0000"))?;
    Ok(())
}

// Apache:
// 18.134.151.89 - - [06/Dec/2023:02:02:47 +0100] "GET /login.jsp HTTP/1.1" 404 447 "-" "Mozilla/5.0"
// We leave out the protocol and add the duration at the end.

/// Write to access.log
pub fn write_combined(
    outp: &mut impl Write,
    request: &ARequest,
    duration: Duration,
    response: &mut Response, // temporarily swaps out ResponseBody and back
) -> Result<()> {
    // The time when the log entry is made, not when the request
    // started
    let now = SystemTime::now();
    write!(outp, "{} - - [", request.client_ip())?;
    write_time(outp, now)?;
    let len = {
        // ResponseBody has no length accessor; take it apart and put
        // it back together.
        let mut responsebody = ResponseBody::empty();
        swap(&mut responsebody, &mut response.data);
        let (data, length) = responsebody.into_reader_and_size();
        responsebody =
            if let Some(len) = length {
                ResponseBody::from_reader_and_size(data, len)
            } else {
                ResponseBody::from_reader(data)
            };
        swap(&mut responsebody, &mut response.data);
        length
    };
    writeln!(outp, "] {:?} {} {} {:?} {:?} {duration:?}",
             request.request_line(),
             response.status_code,
             len.unwrap_or(0),
             request.referer().unwrap_or("-"),
             request.user_agent().unwrap_or("-")
    )?;
    outp.flush()?;
    Ok(())
}

/// Write to error.log
pub fn write_error(
    outp: &mut impl Write,
    request: &ARequest,
    duration: Duration,
    err: &anyhow::Error,
) -> Result<()> {
    let now = SystemTime::now();
    write!(outp, "[")?;
    write_time(outp, now)?;
    writeln!(outp, "] [error] [client {}] {:?} {duration:?}: {err:#}",
             request.client_ip(),
             request.request_line())?;
    outp.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct RequestData<'t> {
    method: &'t str,
    url: &'t str,
    #[serde(rename = "prevURL", skip_serializing_if = "Option::is_none")]
    prev_url: Option<&'t str>,
    data: ParameterMap,
}

/// Write the submitted data of the request (form fields and query
/// parameters) as a JSON record.
pub fn write_request_data(
    outp: &mut impl Write,
    request: &ARequest,
) -> Result<()> {
    let record = RequestData {
        method: request.method_str(),
        url: request.raw_url(),
        prev_url: request.referer(),
        data: request.data(),
    };
    serde_json::to_writer_pretty(&mut *outp, &record)?;
    writeln!(outp)?;
    outp.flush()?;
    Ok(())
}

/// Panic log to stderr.
fn write_panic_stderr(
    request: &ARequest,
    duration: Duration
) {
    let result = try_result!{
        let mut outp = BufWriter::new(stderr().lock());
        // stderr is fed to a service like daemontools, which adds
        // timestamps
        writeln!(&mut outp, "[panic] handling {:?} after {duration:?}",
                 request.request_line())?;
        outp.flush()?;
        Ok::<(), std::io::Error>(())
    };
    if let Err(e) = result {
        warn!("could not write panic notice: {e}");
    }
}


// rouille::log_custom can't be used: the error result of the handler
// is only available inside it, and the panic catching has to wrap
// the logging of that result. Thus this adapts its code.

/// The log files to write to. Should do buffering (i.e. be
/// BufWriter), the code calls flush once per entry.
pub struct Logs {
    pub access_log: Box<dyn Write + Send + Sync>,
    pub error_log: Box<dyn Write + Send + Sync>,
    /// Submitted data of every request, if enabled.
    pub data_log: Option<Box<dyn Write + Send + Sync>>,
}

impl Logs {
    pub fn open_in_basedir(
        logbasedir: &str,
        is_https: bool,
        log_request_data: bool,
    ) -> Result<Mutex<Logs>>
    {
        let s = if is_https { "s" } else { "" };
        Ok(Mutex::new(Logs {
            access_log: open_log_output(
                format!("{logbasedir}/http{s}_access.log"))?,
            error_log: open_log_output(
                format!("{logbasedir}/http{s}_error.log"))?,
            data_log:
                if log_request_data {
                    Some(open_log_output(
                        format!("{logbasedir}/http{s}_data.log"))?)
                } else {
                    None
                },
        }))
    }
}


pub fn log_combined<F>(
    request: &ARequest,
    logs: &Mutex<Logs>,
    handler: F
) -> Response
where
    F: FnOnce() -> anyhow::Result<Response>,
{
    {
        let mut logs = logs.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(data_log) = &mut logs.data_log {
            if let Err(e) = write_request_data(data_log, request) {
                warn!("could not write to data log: {e:#}")
            }
        }
    }

    let start_instant = Instant::now();

    // Call the handler and catch panics; unwinding is always resumed
    // afterwards.
    let result = panic::catch_unwind(panic::AssertUnwindSafe(handler));
    let elapsed = start_instant.elapsed();

    match result {
        Ok(Ok(mut response)) => {
            let mut logs = logs.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = write_combined(&mut logs.access_log, request, elapsed, &mut response) {
                warn!("could not write to access log: {e:#}")
            }
            response
        }
        Ok(Err(err)) => {
            let mut logs = logs.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = write_error(&mut logs.error_log, request, elapsed, &err) {
                warn!("could not write to error log: {e:#}")
            }
            errorpage_from_status(HttpResponseStatusCode::InternalServerError500)
        }
        Err(payload) => {
            write_panic_stderr(request, elapsed);
            // The panic handler will print the payload contents
            panic::resume_unwind(payload);
        }
    }
}

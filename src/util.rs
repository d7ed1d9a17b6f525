use std::{env::VarError, fs::create_dir_all};

use anyhow::{Result, anyhow, Context, bail};


/// Run the given statements in a closure returning `Result`, so that
/// `?` stops at the closure boundary.
#[macro_export]
macro_rules! try_result {
    ( $($b:tt)* ) => ( (|| -> Result<_, _> { $($b)* })() )
}


pub fn program_name() -> Result<String> {
    let path = std::env::args_os().next().ok_or_else(
        || anyhow!("missing program executable path in args_os"))?;
    let path = std::path::PathBuf::from(path);
    let fname = path.file_name().ok_or_else(
        || anyhow!("program executable path has no file name: {path:?}"))?;
    Ok(fname.to_str().ok_or_else(
        || anyhow!("cannot decode file name {:?}",
                   fname.to_string_lossy()))?
       .to_string())
}

/// `$HOME/log/$programname`, created if missing.
pub fn log_basedir() -> Result<String> {
    let logbasedir = format!("{}/log/{}",
                             std::env::var("HOME").with_context(
                                 || anyhow!("can't get HOME env var"))?,
                             program_name()?);
    create_dir_all(&logbasedir).with_context(
        || anyhow!("can't create log base directory {:?}",
                   logbasedir))?;
    Ok(logbasedir)
}

/// Get an env var as a String; decoding failures are reported as
/// errors. If the var is not set and no fallback was given, an error
/// is reported as well.
pub fn getenv_or(name: &str, fallbackvalue: Option<&str>) -> Result<String> {
    match std::env::var(name) {
        Ok(s) => Ok(s),
        Err(e) => match e {
            VarError::NotPresent =>
                match fallbackvalue {
                    Some(v) => Ok(v.to_string()),
                    None => bail!("{name:?} env var is missing and \
                                   no default provided"),
                },
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Get an env var as a String; decoding failures are reported as
/// errors. An empty value counts as not set.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(if s.is_empty() { None } else { Some(s) }),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Boolean env var: set and not one of "0", "false", "no".
pub fn getenv_bool(name: &str) -> Result<bool> {
    Ok(match getenv(name)? {
        None => false,
        Some(v) => {
            let v = v.to_lowercase();
            !(v == "0" || v == "false" || v == "no")
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_getenv_or() -> Result<()> {
        assert_eq!(getenv_or("KITROUTES_TEST_SURELY_UNSET", Some("x"))?, "x");
        assert!(getenv_or("KITROUTES_TEST_SURELY_UNSET", None).is_err());
        assert_eq!(getenv("KITROUTES_TEST_SURELY_UNSET")?, None);
        assert!(!getenv_bool("KITROUTES_TEST_SURELY_UNSET")?);
        Ok(())
    }

    #[test]
    fn t_try_result() {
        let r: Result<u32> = try_result!{
            let n: u32 = "12".parse()?;
            Ok(n + 1)
        };
        assert_eq!(r.unwrap(), 13);
    }
}

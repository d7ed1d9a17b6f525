use std::io::{BufWriter, ErrorKind};
use std::{path::{Path, PathBuf}, fs::File};

use anyhow::{Result, Context, anyhow};

/// Open `path` for appending, creating it (and its parent directory)
/// if missing.
pub fn open_log_output<P>(
    path: P
) -> Result<Box<BufWriter<File>>>
where PathBuf: From<P>
{
    let mut outp = File::options();
    outp.write(true).append(true).create(true);
    let pathb = PathBuf::from(path);
    if let Some(parent) = pathb.parent() {
        let _ignore = std::fs::create_dir_all(parent);
    }
    Ok(Box::new(BufWriter::new(outp.open(&pathb).with_context(
        || anyhow!("opening log for output: {:?}", pathb.to_string_lossy()))?)))
}

/// The file contents, `None` if the file does not exist.
pub fn read_to_string_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(e).with_context(
                || anyhow!("can't read file: {:?}", path.to_string_lossy()))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn t_open_log_output() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("kitroutes-easy-fs-{}", std::process::id()));
        let path = dir.join("sub").join("access.log");
        {
            let mut outp = open_log_output(path.clone())?;
            writeln!(outp, "one")?;
        }
        {
            let mut outp = open_log_output(path.clone())?;
            writeln!(outp, "two")?;
        }
        assert_eq!(read_to_string_if_exists(&path)?.as_deref(), Some("one\ntwo\n"));
        assert_eq!(read_to_string_if_exists(&dir.join("missing"))?, None);
        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}

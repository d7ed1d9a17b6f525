//! Printing statements to stderr, for warnings and for the few
//! informational lines the server emits.

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

/// Like `warn!` but prefixed with "I: " and without the source
/// location, for startup messages.
#[macro_export]
macro_rules! note {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "I: ");
        let _ = writeln!(&mut outp, $formatstr $(,$arg)*);
        let _ = outp.flush();
    } }
}

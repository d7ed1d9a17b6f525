//! Request paths, independent of the local file system.

/// Careful, this drops any empty segments, regardless whether at the
/// beginning, end or in the middle.
pub fn path_segments<'s>(s: &'s str) -> impl Iterator<Item = &'s str>
{
    s.split('/').filter(|s| !s.is_empty())
}

/// Resolve `.` and `..` and drop empty segments. `None` if `..` would
/// leave the root.
pub fn canonicalize_path<'s, S>(path: &'s [S]) -> Option<Vec<&'s str>>
where S: AsRef<str> + 's
{
    let mut out = Vec::new();
    for segment in path {
        match segment.as_ref() {
            "." => (),
            ".." =>
                if out.pop().is_none() {
                    return None
                },
            // multiple slashes to one
            "" => (),
            segment => out.push(segment)
        }
    }
    Some(out)
}

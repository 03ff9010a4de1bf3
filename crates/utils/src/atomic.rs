// standard library
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a file through a sibling temporary file
///
/// The `content` closure writes everything to a buffered, uniquely named
/// temporary file next to `path`, which is then renamed over the target. If
/// anything fails the temporary file is removed and the target is left
/// exactly as it was, so there is never a truncated output file on disk.
///
/// ```rust, no_run
/// # use nxgeom_utils::write_atomic;
/// # use std::io::Write;
/// write_atomic("./detector.off", |w| writeln!(w, "OFF")).unwrap();
/// ```
pub fn write_atomic<P, F>(path: P, content: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // removed on drop unless persisted
    let (file, temporary) = tempfile::Builder::new()
        .prefix(".nxgeom")
        .suffix(".tmp")
        .tempfile_in(directory)?
        .into_parts();

    let mut writer = BufWriter::new(file);
    content(&mut writer)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    drop(file);

    temporary.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<String>>();
        names.sort();
        names
    }

    #[test]
    fn writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, |w| write!(w, "hello")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(entries(dir.path()), vec!["out.txt"]);
    }

    #[test]
    fn failure_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let result = write_atomic(&path, |w| {
            write!(w, "partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert_eq!(entries(dir.path()), vec!["out.txt"]);
    }

    #[test]
    fn neighbouring_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let neighbour = dir.path().join(".out.txt.tmp");
        fs::write(&neighbour, "keep me").unwrap();

        let result = write_atomic(&path, |_| Err(io::Error::new(io::ErrorKind::Other, "boom")));
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "keep me");

        write_atomic(&path, |w| write!(w, "done")).unwrap();
        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "keep me");
        assert_eq!(entries(dir.path()), vec![".out.txt.tmp", "out.txt"]);
    }
}

use crate::error::{QaError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// File name → raw text, ordered by file name.
pub type Corpus = BTreeMap<String, String>;

/// File name → token sequence.
pub type TokenizedDocs = BTreeMap<String, Vec<String>>;

/// Read every `.txt` file directly inside `dir`.
///
/// Symlinks are followed. Subdirectories and other extensions are skipped.
/// A file that is not valid UTF-8, or a dangling link, fails the whole load.
pub fn load_files<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let meta = fs::metadata(dir).map_err(|source| QaError::io(dir, source))?;
    if !meta.is_dir() {
        return Err(QaError::NotADirectory { path: dir.to_path_buf() });
    }

    let mut files = Corpus::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            let source = err.into_io_error().unwrap_or_else(|| ErrorKind::Other.into());
            QaError::Io { path, source }
        })?;
        let p = entry.path();
        tracing::debug!(path = %p.display(), "found corpus entry");
        if !entry.file_type().is_file() { continue; }
        if p.extension().and_then(|s| s.to_str()) != Some("txt") { continue; }

        let bytes = fs::read(p).map_err(|source| QaError::io(p, source))?;
        let text = String::from_utf8(bytes).map_err(|_| QaError::NotUtf8 { path: p.to_path_buf() })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        files.insert(name, text);
    }

    tracing::info!(dir = %dir.display(), num_files = files.len(), "loaded corpus");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_only_top_level_txt_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "bee").unwrap();
        fs::write(dir.path().join("a.txt"), "ay").unwrap();
        fs::write(dir.path().join("notes.md"), "skip me").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "too deep").unwrap();

        let corpus = load_files(dir.path()).unwrap();
        let names: Vec<&str> = corpus.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(corpus["a.txt"], "ay");
    }

    #[cfg(unix)]
    #[test]
    fn reads_symlinked_txt_files() {
        let dir = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        let target = elsewhere.path().join("real.txt");
        fs::write(&target, "linked text").unwrap();
        fs::write(dir.path().join("plain.txt"), "plain text").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("linked.txt")).unwrap();

        let corpus = load_files(dir.path()).unwrap();
        let names: Vec<&str> = corpus.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["linked.txt", "plain.txt"]);
        assert_eq!(corpus["linked.txt"], "linked text");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_an_error() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("broken.txt")).unwrap();
        assert!(matches!(load_files(dir.path()), Err(QaError::Io { .. })));
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.txt"), "fine").unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let err = load_files(dir.path()).unwrap_err();
        assert!(matches!(err, QaError::NotUtf8 { ref path } if path.ends_with("bad.txt")));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_files(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, QaError::Io { .. }));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(load_files(&file), Err(QaError::NotADirectory { .. })));
    }

    #[test]
    fn empty_directory_is_empty_corpus() {
        let dir = tempdir().unwrap();
        assert!(load_files(dir.path()).unwrap().is_empty());
    }
}

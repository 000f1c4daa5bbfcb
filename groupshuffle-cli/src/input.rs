/// Contributor list loading: one text file per contributor, one song per line.
use groupshuffle_core::Song;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .txt song lists found in {}", .0.display())]
    NoContributors(PathBuf),
}

/// One contributor's songs, in file order.
#[derive(Debug)]
pub struct Contributor {
    /// File stem, used in log messages.
    pub name: String,
    pub songs: Vec<Song>,
    /// Non-blank lines that were not `title,owner`.
    pub skipped: usize,
}

/// Parse file content into songs. Blank lines are ignored; malformed lines are
/// counted and logged with their 1-based line number.
pub fn parse_songs(content: &str, source: &str) -> (Vec<Song>, usize) {
    let mut songs = Vec::new();
    let mut skipped = 0;

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Song::parse(line) {
            Some(song) => songs.push(song),
            None => {
                skipped += 1;
                warn!(source, line = idx + 1, "Skipping line, expected \"title,owner\": {line}");
            }
        }
    }

    (songs, skipped)
}

pub fn read_contributor(path: &Path) -> Result<Contributor, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let (songs, skipped) = parse_songs(&content, &name);
    debug!(contributor = %name, songs = songs.len(), skipped, "Loaded song list");

    Ok(Contributor { name, songs, skipped })
}

/// Find contributor files in `dir`: regular `.txt` files, sorted by name so
/// the contributor order is stable between runs. `exclude` (the output file)
/// is left out so a previous playlist is never read back in as a contributor.
pub fn discover(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>, InputError> {
    let read_err = |source: std::io::Error| InputError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        if excluded.is_some() && path.canonicalize().ok() == excluded {
            debug!(path = %path.display(), "Skipping output file");
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(InputError::NoContributors(dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_songs_skips_blank_and_malformed() {
        let content = "Hey Jude,The Beatles\n\n  \nJust a title\nHurt, Johnny Cash\na,b,c\n";
        let (songs, skipped) = parse_songs(content, "test");

        assert_eq!(songs, vec![
            Song::new("Hey Jude", "The Beatles"),
            Song::new("Hurt", "Johnny Cash"),
        ]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_read_contributor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.txt");
        fs::write(&path, "Creep,Radiohead\nJolene,Dolly Parton\n").unwrap();

        let contributor = read_contributor(&path).unwrap();
        assert_eq!(contributor.name, "alice");
        assert_eq!(contributor.songs.len(), 2);
        assert_eq!(contributor.skipped, 0);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_contributor(&dir.path().join("ghost.txt")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("ghost.txt"));
    }

    #[test]
    fn test_discover_sorted_txt_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("carol.txt"), "").unwrap();
        fs::write(dir.path().join("alice.txt"), "").unwrap();
        fs::write(dir.path().join("bob.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = discover(dir.path(), None).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alice.txt", "bob.txt", "carol.txt"]);
    }

    #[test]
    fn test_discover_excludes_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alice.txt"), "").unwrap();
        fs::write(dir.path().join("Playlist.txt"), "").unwrap();

        let files = discover(dir.path(), Some(&dir.path().join("Playlist.txt"))).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("alice.txt"));
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(dir.path(), None).unwrap_err();
        assert!(matches!(err, InputError::NoContributors(_)));
    }
}

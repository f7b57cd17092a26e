//! # Game Library
//!
//! Systems and their entries, scanned from ROM directories. A system is the
//! "collection" the jump index is built over; its stable id is the start path
//! it was scanned from. Entries at every level are kept sorted by clean name,
//! case-insensitively.
//!
//! ```text
//! Library
//! └── systems: Vec<System>
//!     ├── name / fullname
//!     ├── start_path        // stable id
//!     └── root: Vec<Entry>  // sorted
//!         └── Entry { name, path, kind: Game | Folder, children }
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::alphabet::canonical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Game,
    Folder,
}

#[derive(Debug, Clone)]
pub struct Entry {
    /// Clean display name; its first character is the sort and index key.
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn game(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Game,
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>, path: impl Into<PathBuf>, mut children: Vec<Entry>) -> Self {
        sort_entries(&mut children);
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Folder,
            children,
        }
    }

    pub fn leading_char(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn is_game(&self) -> bool {
        self.kind == EntryKind::Game
    }
}

/// Where to scan a system from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSource {
    pub name: String,
    pub fullname: Option<String>,
    pub path: PathBuf,
    /// Accepted file extensions, compared case-insensitively, dot optional.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct System {
    pub name: String,
    pub fullname: String,
    pub start_path: String,
    pub root: Vec<Entry>,
}

impl System {
    /// Creates a system, sorting its root entries.
    pub fn new(name: impl Into<String>, start_path: impl Into<String>, mut root: Vec<Entry>) -> Self {
        let name = name.into();
        sort_entries(&mut root);
        Self {
            fullname: name.clone(),
            name,
            start_path: start_path.into(),
            root,
        }
    }

    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = fullname.into();
        self
    }

    /// Scans a system's directory tree.
    pub fn scan(source: &SystemSource) -> Result<Self, LibraryError> {
        let extensions: Vec<String> = source
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        let root = scan_dir(&source.path, &extensions).map_err(|e| LibraryError::Io {
            path: source.path.clone(),
            source: e,
        })?;
        let system = Self::new(
            source.name.clone(),
            source.path.to_string_lossy().into_owned(),
            root,
        );
        Ok(match &source.fullname {
            Some(fullname) => system.with_fullname(fullname.clone()),
            None => system,
        })
    }

    pub fn id(&self) -> &str {
        &self.start_path
    }

    /// Number of games anywhere below the root.
    pub fn game_count(&self) -> usize {
        fn count(entries: &[Entry]) -> usize {
            entries
                .iter()
                .map(|e| if e.is_game() { 1 } else { count(&e.children) })
                .sum()
        }
        count(&self.root)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    pub systems: Vec<System>,
}

impl Library {
    pub fn new(systems: Vec<System>) -> Self {
        Self { systems }
    }

    /// Scans every source in order. A system whose directory can't be read is
    /// kept with no entries so ordinals stay stable.
    pub fn scan(sources: &[SystemSource]) -> Self {
        let systems = sources
            .iter()
            .map(|source| match System::scan(source) {
                Ok(system) => {
                    info!(
                        "Scanned system '{}': {} root entries, {} games",
                        system.name,
                        system.root.len(),
                        system.game_count()
                    );
                    system
                }
                Err(e) => {
                    warn!("{}", e);
                    let system = System::new(
                        source.name.clone(),
                        source.path.to_string_lossy().into_owned(),
                        Vec::new(),
                    );
                    match &source.fullname {
                        Some(fullname) => system.with_fullname(fullname.clone()),
                        None => system,
                    }
                }
            })
            .collect();
        Self { systems }
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.systems
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug)]
pub enum LibraryError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Io { path, source } => {
                write!(f, "failed to scan {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// Display name for a file or directory stem: tags in `()` or `[]` are
/// dropped and whitespace collapsed. Falls back to the trimmed stem if
/// nothing is left.
pub fn clean_name(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut depth = 0usize;
    for c in stem.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    let cleaned = out.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        stem.trim().to_string()
    } else {
        cleaned
    }
}

/// Folds case per character with [`canonical`], the same key the jump index
/// compares, so punctuation between `Z` and `a` sorts after the letters.
fn compare_names(a: &Entry, b: &Entry) -> Ordering {
    a.name
        .chars()
        .map(canonical)
        .cmp(b.name.chars().map(canonical))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sorts entries by clean name, case-insensitively, recursively.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_names);
    for entry in entries.iter_mut() {
        sort_entries(&mut entry.children);
    }
}

fn scan_dir(dir: &Path, extensions: &[String]) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir)? {
        let path = dirent?.path();
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        if stem.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            let children = match scan_dir(&path, extensions) {
                Ok(children) => children,
                Err(e) => {
                    warn!("Skipping unreadable folder {}: {}", path.display(), e);
                    continue;
                }
            };
            if !children.is_empty() {
                let name = path
                    .file_name()
                    .map(|n| clean_name(&n.to_string_lossy()))
                    .unwrap_or_else(|| clean_name(&stem));
                entries.push(Entry::folder(name, path, children));
            }
        } else if matches_extension(&path, extensions) {
            debug!("Found game {}", path.display());
            entries.push(Entry::game(clean_name(&stem), path));
        }
    }
    sort_entries(&mut entries);
    Ok(entries)
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.iter().any(|e| *e == ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_tags() {
        assert_eq!(clean_name("Super Metroid (USA) [!]"), "Super Metroid");
        assert_eq!(clean_name("  Tetris   (World) (Rev 1)"), "Tetris");
        assert_eq!(clean_name("Zelda"), "Zelda");
    }

    #[test]
    fn test_clean_name_falls_back_to_stem() {
        assert_eq!(clean_name(" (Beta) "), "(Beta)");
    }

    #[test]
    fn test_system_sorts_case_insensitively() {
        let system = System::new(
            "nes",
            "/roms/nes",
            vec![
                Entry::game("banana", "b"),
                Entry::game("Apple", "a"),
                Entry::game("Cherry", "c"),
            ],
        );
        let names: Vec<&str> = system.root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "Cherry"]);
        assert_eq!(system.id(), "/roms/nes");
    }

    #[test]
    fn test_punctuation_sorts_after_letters() {
        let system = System::new(
            "snes",
            "/roms/snes",
            vec![
                Entry::game("_Homebrew", "h"),
                Entry::game("banana", "b"),
                Entry::game("Apple", "a"),
            ],
        );
        let names: Vec<&str> = system.root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana", "_Homebrew"]);
    }

    #[test]
    fn test_game_count_includes_folders() {
        let system = System::new(
            "snes",
            "/roms/snes",
            vec![
                Entry::game("Alpha", "a"),
                Entry::folder("Hacks", "h", vec![Entry::game("X", "x"), Entry::game("Y", "y")]),
            ],
        );
        assert_eq!(system.game_count(), 3);
    }

    #[test]
    fn test_scan_directory_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Zelda (USA).sfc"), b"").unwrap();
        fs::write(dir.path().join("Actraiser.SMC"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("Hacks")).unwrap();
        fs::write(dir.path().join("Hacks").join("Mario X.sfc"), b"").unwrap();
        fs::create_dir(dir.path().join("Empty")).unwrap();

        let source = SystemSource {
            name: "snes".to_string(),
            fullname: Some("Super Nintendo".to_string()),
            path: dir.path().to_path_buf(),
            extensions: vec![".sfc".to_string(), "smc".to_string()],
        };
        let system = System::scan(&source).unwrap();

        let names: Vec<&str> = system.root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Actraiser", "Hacks", "Zelda"]);
        assert_eq!(system.root[1].kind, EntryKind::Folder);
        assert_eq!(system.root[1].children[0].name, "Mario X");
        assert_eq!(system.fullname, "Super Nintendo");
        assert_eq!(system.game_count(), 3);
    }

    #[test]
    fn test_library_scan_keeps_unreadable_system() {
        let sources = vec![SystemSource {
            name: "gone".to_string(),
            fullname: None,
            path: PathBuf::from("/definitely/not/a/rom/dir"),
            extensions: vec![],
        }];
        let library = Library::scan(&sources);
        assert_eq!(library.systems.len(), 1);
        assert!(library.systems[0].root.is_empty());
        assert_eq!(library.position_of("GONE"), Some(0));
    }
}

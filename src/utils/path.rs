//! Path utilities: expand ~, resolve relative paths against the config dir.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~/` and anchor relative paths under `base`.
pub fn resolve_in(path: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_land_under_base() {
        let base = Path::new("/srv/depot");
        assert_eq!(
            resolve_in("wheels.csv", base),
            PathBuf::from("/srv/depot/wheels.csv")
        );
        assert_eq!(
            resolve_in("/tmp/wheels.csv", base),
            PathBuf::from("/tmp/wheels.csv")
        );
    }
}

//! Import path resolution.

use std::path::{Component, Path, PathBuf};

/// Returns the path of an import relative to the document that declares it.
///
/// The path is normalized lexically: `.` segments are dropped and `..`
/// segments remove the preceding directory. The file system is not
/// consulted, so symbolic links are not followed.
pub fn resolve_import_path(importing_document: &Path, import: &str) -> PathBuf {
    let import = Path::new(import.trim());

    let joined = match importing_document.parent() {
        Some(parent) if import.is_relative() => parent.join(import),
        _ => import.to_path_buf(),
    };

    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` cannot climb above the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    normalized.push(Component::ParentDir);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_is_a_sibling_of_the_importing_document() {
        assert_eq!(
            resolve_import_path(Path::new("tests/login.yml"), "pages/home.yml"),
            PathBuf::from("tests/pages/home.yml")
        );
    }

    #[test]
    fn parent_segments_are_removed() {
        assert_eq!(
            resolve_import_path(Path::new("/suite/tests/login.yml"), "../pages/./home.yml"),
            PathBuf::from("/suite/pages/home.yml")
        );
    }

    #[test]
    fn leading_parent_segments_of_a_relative_path_are_kept() {
        assert_eq!(
            resolve_import_path(Path::new("login.yml"), "../../pages/home.yml"),
            PathBuf::from("../../pages/home.yml")
        );
    }

    #[test]
    fn parent_segments_stop_at_the_root() {
        assert_eq!(
            resolve_import_path(Path::new("/login.yml"), "../../home.yml"),
            PathBuf::from("/home.yml")
        );
    }

    #[test]
    fn absolute_import_ignores_the_importing_directory() {
        assert_eq!(
            resolve_import_path(Path::new("/suite/login.yml"), "/shared/steps/open.yml"),
            PathBuf::from("/shared/steps/open.yml")
        );
    }
}

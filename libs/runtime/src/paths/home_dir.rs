use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeDirError {
    #[error("cannot determine the user home directory")]
    NoHome,

    #[error("failed to create home directory '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the server home directory.
///
/// - `None` (or empty) → `<user home>/<default_subdir>`
/// - `~` / `~/x` → expanded against the user home
/// - relative paths → joined with the current working directory
///
/// When `create` is set the directory (and parents) is created.
pub fn resolve_home_dir(
    raw: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf, HomeDirError> {
    let user_home = dirs::home_dir();

    let resolved = match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => user_home.ok_or(HomeDirError::NoHome)?.join(default_subdir),
        Some("~") => user_home.ok_or(HomeDirError::NoHome)?,
        Some(p) if p.starts_with("~/") || p.starts_with("~\\") => {
            user_home.ok_or(HomeDirError::NoHome)?.join(&p[2..])
        }
        Some(p) => {
            let p = PathBuf::from(p);
            if p.is_absolute() {
                p
            } else {
                std::env::current_dir()
                    .map_err(|source| HomeDirError::Create {
                        path: p.clone(),
                        source,
                    })?
                    .join(p)
            }
        }
    };

    if create {
        std::fs::create_dir_all(&resolved).map_err(|source| HomeDirError::Create {
            path: resolved.clone(),
            source,
        })?;
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absolute_path_is_kept_and_created() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("nested/home");

        let out = resolve_home_dir(
            Some(target.to_string_lossy().to_string()),
            ".ignored",
            true,
        )
        .unwrap();

        assert_eq!(out, target);
        assert!(out.is_dir());
    }

    #[test]
    fn relative_path_becomes_absolute() {
        let out = resolve_home_dir(Some("some/relative".into()), ".ignored", false).unwrap();
        assert!(out.is_absolute());
        assert!(out.ends_with("some/relative"));
    }

    #[test]
    fn tilde_expands_to_user_home() {
        if let Some(home) = dirs::home_dir() {
            let out = resolve_home_dir(Some("~/.leads_probe".into()), ".ignored", false).unwrap();
            assert_eq!(out, home.join(".leads_probe"));
        }
    }

    #[test]
    fn empty_uses_default_subdir() {
        if dirs::home_dir().is_some() {
            let out = resolve_home_dir(Some("   ".into()), ".leads-default", false).unwrap();
            assert!(out.ends_with(".leads-default"));
        }
    }
}

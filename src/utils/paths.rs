use std::env;
use std::path::{Component, Path};

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use dirsearch::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, env::var("HOME").ok().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }
    path.to_string_lossy().into_owned()
}

/// Short form of a result path: `.../<parent>/<name>`
///
/// Paths with two or fewer normal components are shown in full.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dirsearch::utils::abbreviate_path;
///
/// assert_eq!(abbreviate_path(Path::new("/home/alice/docs/report.pdf")), ".../docs/report.pdf");
/// ```
pub fn abbreviate_path(path: &Path) -> String {
    let names: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect();

    if names.len() <= 2 {
        return path.to_string_lossy().into_owned();
    }
    format!(".../{}/{}", names[names.len() - 2], names[names.len() - 1])
}

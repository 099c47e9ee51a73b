//! Url handling for clones
//!
//! libgit2 is picky about two url shapes people commonly type:
//! SCP-style ssh (`git@host:owner/repo.git`) and relative `file://` urls.

use std::borrow::Cow;
use std::path::Path;

/// Whether `url` points at the local filesystem (no network, no shallow clone)
pub fn is_local(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}

/// Rewrite `git@host:path` to `ssh://git@host/path`
pub fn normalize_ssh(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }
    match url.split_once(':') {
        Some((host, path)) => {
            let path = path.strip_prefix('/').unwrap_or(path);
            Cow::Owned(format!("ssh://{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Give `file://` urls the three slashes libgit2 expects on Unix
pub fn normalize_file(url: &str) -> Cow<'_, str> {
    let Some(rest) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };
    #[cfg(not(windows))]
    {
        if rest.contains('\\') {
            return Cow::Owned(format!("file:///{}", rest.replace('\\', "/").trim_start_matches('/')));
        }
        if !rest.is_empty() && !rest.starts_with('/') {
            return Cow::Owned(format!("file:///{rest}"));
        }
    }
    #[cfg(windows)]
    let _ = rest;
    Cow::Borrowed(url)
}

/// Both normalizations, in the order clone applies them
pub fn for_clone(url: &str) -> String {
    normalize_file(&normalize_ssh(url)).into_owned()
}

//! Reading remote information from existing checkouts

use std::path::Path;

use git2::Repository;

/// Url of the `origin` remote of the checkout at `path`, if it is one
pub fn origin_url(path: &Path) -> Option<String> {
    let repo = Repository::open(path).ok()?;
    let remote = repo.find_remote("origin").ok()?;
    remote.url().map(ToString::to_string)
}

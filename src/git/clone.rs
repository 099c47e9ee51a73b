//! Repository cloning
//!
//! Clones are bounded two ways. libgit2's server timeouts (see
//! [`set_network_timeout`]) cover connecting and every read from the server,
//! so a server that goes silent fails the fetch. The transfer and sideband
//! progress callbacks stop a transfer that keeps trickling in past the
//! deadline.

use std::cell::Cell;
use std::path::Path;
use std::time::{Duration, Instant};

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::{FailureKind, classify, describe};
use super::url;
use crate::error::{self, Result};

/// Apply `timeout` to libgit2's connect and read timeouts
///
/// These are process-wide libgit2 options; call this once, before any fetch.
pub fn set_network_timeout(timeout: Duration) -> Result<()> {
    let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
    // SAFETY: libgit2 reads these options only when a network transport
    // connects or reads, and this runs before any fetch is started.
    unsafe {
        git2::opts::set_server_connect_timeout_in_milliseconds(millis)?;
        git2::opts::set_server_timeout_in_milliseconds(millis)?;
    }
    tracing::debug!(timeout_ms = millis, "network timeout set");
    Ok(())
}

/// Clone `url` into `target`
///
/// `target` must be missing or empty. Remote urls are cloned shallow
/// (depth 1); local repositories are cloned in full since libgit2 does not
/// support shallow local clones.
pub fn clone(url: &str, target: &Path, timeout: Duration) -> Result<Repository> {
    let deadline = Instant::now() + timeout;
    let timed_out = Cell::new(false);
    let past_deadline = || {
        if Instant::now() >= deadline {
            timed_out.set(true);
            false
        } else {
            true
        }
    };

    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);
    callbacks.transfer_progress(|_| past_deadline());
    callbacks.sideband_progress(|_| past_deadline());

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if !url::is_local(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let source = url::for_clone(url);
    tracing::debug!(url = %source, target = %target.display(), "cloning");

    builder.clone(&source, target).map_err(|e| {
        if timed_out.get() {
            return error::git::timed_out(url, timeout.as_secs());
        }
        match classify(&e) {
            FailureKind::TimedOut => error::git::timed_out(url, timeout.as_secs()),
            FailureKind::RepositoryNotFound => error::git::repository_not_found(url),
            FailureKind::Cancelled => error::git::operation_failed(format!("clone of {url} was cancelled")),
            _ => error::git::clone_failed(url, describe(&e)),
        }
    })
}

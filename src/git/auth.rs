//! Credentials for remote fetches
//!
//! Authentication is delegated to git's native mechanisms: the ssh agent,
//! keys in `~/.ssh/`, and configured credential helpers. libgit2 keeps
//! calling the credentials callback while the server rejects what it gets,
//! so each strategy is tried once and then the fetch fails instead of looping.

use std::path::PathBuf;

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_ecdsa", "id_rsa"];

/// Which strategies have been handed to libgit2 already
#[derive(Debug, Default)]
struct Attempts {
    default: bool,
    agent: bool,
    key_files: bool,
    helper: bool,
    anonymous: bool,
}

fn auth_failed(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn ssh_key_files() -> Vec<(PathBuf, Option<PathBuf>)> {
    let Some(ssh_dir) = dirs::home_dir().map(|home| home.join(".ssh")) else {
        return Vec::new();
    };
    SSH_KEY_NAMES
        .iter()
        .map(|name| {
            let private = ssh_dir.join(name);
            let public = ssh_dir.join(format!("{name}.pub"));
            (private, public.exists().then_some(public))
        })
        .filter(|(private, _)| private.exists())
        .collect()
}

fn ssh_credentials(attempts: &mut Attempts, username: &str) -> Result<Cred, Error> {
    if !attempts.agent {
        attempts.agent = true;
        if let Ok(cred) = Cred::ssh_key_from_agent(username) {
            return Ok(cred);
        }
    }
    if !attempts.key_files {
        attempts.key_files = true;
        for (private, public) in ssh_key_files() {
            if let Ok(cred) = Cred::ssh_key(username, public.as_deref(), &private, None) {
                return Ok(cred);
            }
        }
    }
    Err(auth_failed("no usable SSH key"))
}

fn plaintext_credentials(
    attempts: &mut Attempts,
    url: &str,
    username_from_url: Option<&str>,
) -> Result<Cred, Error> {
    if !attempts.helper {
        attempts.helper = true;
        if let Ok(config) = git2::Config::open_default() {
            if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
                return Ok(cred);
            }
        }
    }
    // Public repositories over https accept an empty login
    if !attempts.anonymous {
        attempts.anonymous = true;
        return Cred::userpass_plaintext(username_from_url.unwrap_or("git"), "");
    }
    Err(auth_failed("authentication failed"))
}

/// Install the credentials callback on `callbacks`
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks<'_>) {
    let mut attempts = Attempts::default();
    callbacks.credentials(move |url, username_from_url, allowed| {
        if allowed.contains(CredentialType::DEFAULT) && !attempts.default {
            attempts.default = true;
            return Cred::default();
        }
        if allowed.contains(CredentialType::USERNAME) {
            return Cred::username(username_from_url.unwrap_or("git"));
        }
        if allowed.contains(CredentialType::SSH_KEY) {
            return ssh_credentials(&mut attempts, username_from_url.unwrap_or("git"));
        }
        if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
            return plaintext_credentials(&mut attempts, url, username_from_url);
        }
        Err(auth_failed("no supported authentication method"))
    });
}

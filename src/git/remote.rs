use std::path::PathBuf;

use dirs::home_dir;
use git2::{Cred, Error, FetchOptions, RemoteCallbacks};

pub fn find_ssh_key() -> Result<PathBuf, Error> {
    let keys_name = vec![String::from("id_ed25519"), String::from("id_rsa")];
    for k in keys_name {
        let ssh_key_path = home_dir()
            .map(|h| h.join(".ssh/").join(k))
            .ok_or_else(|| Error::from_str("Failed to find HOME directory"))?;
        if ssh_key_path.exists() {
            return Ok(ssh_key_path);
        }
    }
    Err(git2::Error::from_str(
        "Failed to find ssh_key on your machine :/",
    ))
}

/// Fetch options with the usual credential chain: ssh key on disk, default
/// credentials, then ssh-agent. Local-path remotes never hit the callback.
pub fn fetch_options<'a>() -> FetchOptions<'a> {
    let mut callbacks = RemoteCallbacks::new();

    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(git2::CredentialType::SSH_KEY)
            && let Result::Ok(ssh_key_path) = find_ssh_key()
            && let Result::Ok(cred) = Cred::ssh_key(username, None, &ssh_key_path, None)
        {
            return Ok(cred);
        }

        if allowed_types.contains(git2::CredentialType::DEFAULT)
            && let Result::Ok(cred) = Cred::default()
        {
            return Ok(cred);
        }

        if allowed_types.contains(git2::CredentialType::SSH_KEY)
            && let Result::Ok(cred) = Cred::ssh_key_from_agent(username)
        {
            return Ok(cred);
        }

        Err(git2::Error::from_str("No authentication methods available"))
    });

    let mut fo = FetchOptions::new();
    fo.remote_callbacks(callbacks);
    fo
}

//! Credential profiles read from an OCI-style INI configuration file.
//!
//! ```ini
//! [DEFAULT]
//! tenancy=ocid1.tenancy.oc1..aaaa
//! user=ocid1.user.oc1..bbbb
//! fingerprint=4f:73:c3:a0:86:cf:f3:57:3d:1b:1b:ff:98:cf:e4:d4
//! key_file=~/.oci/oci_api_key.pem
//! region=eu-frankfurt-1
//!
//! [CHICAGO]
//! region=us-chicago-1
//! ```
//!
//! Entries missing from a named section are taken from `[DEFAULT]`, so the
//! `CHICAGO` profile above shares the key material of the default one.

use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};
use secrecy::SecretString;

use crate::Result;
use crate::error::Error;

/// Location used when [`CONFIG_FILE_VAR`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "~/.oci/config";

/// Section name that every other profile inherits from.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_FILE_VAR: &str = "OCI_CONFIG_FILE";

/// Environment variable overriding [`DEFAULT_PROFILE`].
pub const PROFILE_VAR: &str = "OCI_CLI_PROFILE";

const TENANCY: &str = "tenancy";
const USER: &str = "user";
const FINGERPRINT: &str = "fingerprint";
const KEY_FILE: &str = "key_file";
const PASS_PHRASE: &str = "pass_phrase";
const REGION: &str = "region";

/// Values are taken literally: key files may be Windows paths and pass phrases
/// may contain backslashes or quotes.
const PARSE_OPTION: ParseOption = ParseOption {
    enabled_quote: false,
    enabled_escape: false,
};

/// A named credential bundle for API-key authentication.
#[non_exhaustive]
#[derive(Debug)]
pub struct Profile {
    /// Section name the profile was loaded from.
    pub name: String,
    pub tenancy: String,
    pub user: String,
    /// Fingerprint of the public key registered with the user.
    pub fingerprint: String,
    /// Path to the PEM private key, with `~` already expanded.
    pub key_file: PathBuf,
    pub pass_phrase: Option<SecretString>,
    pub region: Option<String>,
}

impl Profile {
    /// The `keyId` presented in signed requests: `tenancy/user/fingerprint`.
    #[must_use]
    pub fn key_id(&self) -> String {
        format!("{}/{}/{}", self.tenancy, self.user, self.fingerprint)
    }
}

/// Loads `profile_name` from the INI file at `path`.
///
/// Section names are matched exactly. A profile that differs only in case is
/// accepted when it is the only such section in the file.
///
/// Fails with [`Kind::Configuration`](crate::error::Kind::Configuration) when
/// the file cannot be read or parsed, the profile does not exist, or one of
/// `tenancy`, `user`, `fingerprint` and `key_file` is missing.
pub fn load<P: AsRef<Path>>(path: P, profile_name: &str) -> Result<Profile> {
    let path = expand_home(path.as_ref())?;
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "config file {} does not exist",
            path.display()
        )));
    }

    let file = Ini::load_from_file_opt(&path, PARSE_OPTION)?;

    let section = find_section(&file, profile_name).ok_or_else(|| {
        Error::configuration(format!(
            "profile {profile_name} not found in {}",
            path.display()
        ))
    })?;

    let lookup = Lookup {
        profile_name,
        section,
        defaults: find_section(&file, DEFAULT_PROFILE),
    };

    let key_file = expand_home(Path::new(&lookup.required(KEY_FILE)?))?;
    let profile = Profile {
        name: profile_name.to_owned(),
        tenancy: lookup.required(TENANCY)?,
        user: lookup.required(USER)?,
        fingerprint: lookup.required(FINGERPRINT)?,
        key_file,
        pass_phrase: lookup.optional(PASS_PHRASE).map(SecretString::from),
        region: lookup.optional(REGION),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %path.display(),
        profile = profile_name,
        key_file = %profile.key_file.display(),
        "loaded credential profile"
    );

    Ok(profile)
}

/// Loads the profile named by [`PROFILE_VAR`] from the file named by
/// [`CONFIG_FILE_VAR`], falling back to [`DEFAULT_PROFILE`] in
/// [`DEFAULT_CONFIG_PATH`].
pub fn load_from_env() -> Result<Profile> {
    load_from_vars(
        std::env::var(CONFIG_FILE_VAR).ok(),
        std::env::var(PROFILE_VAR).ok(),
    )
}

/// Unset or empty values select the defaults.
fn load_from_vars(config_file: Option<String>, profile: Option<String>) -> Result<Profile> {
    let path = config_file
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let name = profile
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_owned());

    load(path, &name)
}

/// Replaces a leading `~` component with the current user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir()
        .ok_or_else(|| Error::configuration("unable to resolve the home directory"))?;
    Ok(home.join(rest))
}

fn find_section<'a>(file: &'a Ini, name: &str) -> Option<&'a Properties> {
    if let Some(section) = file.section(Some(name)) {
        return Some(section);
    }

    let mut matches = file.iter().filter_map(|(section, properties)| {
        section
            .filter(|section| section.eq_ignore_ascii_case(name))
            .map(|_| properties)
    });
    let found = matches.next()?;

    // [Dev] and [DEV] side by side are ambiguous for "dev".
    matches.next().is_none().then_some(found)
}

struct Lookup<'a> {
    profile_name: &'a str,
    section: &'a Properties,
    defaults: Option<&'a Properties>,
}

impl Lookup<'_> {
    fn optional(&self, key: &str) -> Option<String> {
        let value = self
            .section
            .get(key)
            .or_else(|| self.defaults.and_then(|defaults| defaults.get(key)))?
            .trim();

        (!value.is_empty()).then(|| value.to_owned())
    }

    fn required(&self, key: &str) -> Result<String> {
        self.optional(key).ok_or_else(|| {
            Error::configuration(format!(
                "profile {} is missing required entry {key}",
                self.profile_name
            ))
        })
    }
}

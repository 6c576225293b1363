#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Each test binary only uses part of the shared helpers"
)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone as _, Utc};
use oci_genai_client::auth::ApiKeySigner;
use oci_genai_client::profile::{self, Profile};
use tempfile::TempDir;

pub const TENANCY: &str = "ocid1.tenancy.oc1..aaaaaaaahqvb2kliqi35z57qalhpr4dyqbjprclszdcoar2wgc7q6nl36aba";
pub const USER: &str = "ocid1.user.oc1..aaaaaaaahty62xsrdprkvss3tw7rytnkepywqqwmfy5gpvqnrbu3w5napakq";
/// MD5 fingerprint of the public half of `fixtures/key.pem`.
pub const FINGERPRINT: &str = "98:a4:15:e9:be:97:1f:3c:2f:d7:60:0f:62:75:3c:92";
pub const PASS_PHRASE: &str = "secret";

pub const CHAT_URL: &str =
    "https://inference.generativeai.us-chicago-1.oci.oraclecloud.com/20231130/actions/chat";
pub const BODY: &str = r#"{"message":"hello"}"#;
pub const BODY_SHA256: &str = "my1Dr/v0mjZwKN8uFBT4TA4JmsmMPVSoqAFX/XdxryU=";
pub const DATE: &str = "Fri, 05 Jan 2024 21:31:40 GMT";

/// `openssl dgst -sha256 -sign fixtures/key.pem` over the signing string of a
/// POST of [`BODY`] to [`CHAT_URL`] at [`DATE`].
pub const POST_SIGNATURE: &str = "cO7dvW82yjTWJsvWxj/AOlYO75wG8eADR3B7Kh3KsQBIq589+cZ5upQAdkcNZT6u1hn/ssUt8RK10oGdgDxXdEpVQn0HJ1OKn3o3b5MCupX2t1QtI6RtT60m1HVwK/JOcdrYRf6U+xS38aN29eDZNvfhaXwvGGmCa4hb9rgrsUkax3gxvZZLOLQ+ArSt863D5oTNQ87E8Ex+eTFxdEqM2VZf6g5wr3sYFQbeN5B/tQEtSu8/L/qpwMTZrY601hvUsxdfzX5tzKE6wFJ3ynzamphhjup4HxwE8qEC3djpJvBBK3rQ8Tz23e1O/wGi24Aakcf7C0D98rfKHuRIk/qMog==";

/// Same as [`POST_SIGNATURE`] for `GET /20231130/models?compartmentId=abc`.
pub const GET_SIGNATURE: &str = "HwE58EN+H5tUnIRFzEUa3JD1DSDX95j4FAxVEAK6z7O/0iufIqb3jcuBDEW5mHshImVe0NNs/QVWbiaSZQBeDNQ1bbFTZH9WXAdsIGKqrtEfHg3YocqBF51f5snbL5e1PhNNLNhPgolZ0xgnvdV2xiLr1MgqYckVUJBiwY/o622V2HyJIn5vfFzEle205tYMuu4oLCgxCXk79ULECZniLGgq48VL0y0ARY3t1L3JD9cv1LAsBhuYDpJvTmPMn4P4jlioB0GrMGWufR62vYd2l0w06KBzqvpvaLu739gdi9HZRQ+IRMvwQxnD7tNnX8k3YzzZJ5jOwwTwa//UPHFgAA==";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn key_id() -> String {
    format!("{TENANCY}/{USER}/{FINGERPRINT}")
}

pub fn signed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 21, 31, 40).unwrap()
}

/// Writes `contents` as a config file inside a fresh temporary directory.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config");
    fs::write(&path, contents).unwrap();

    (dir, path)
}

pub fn default_config(key_file: &Path) -> String {
    format!(
        "[DEFAULT]\ntenancy={TENANCY}\nuser={USER}\nfingerprint={FINGERPRINT}\nkey_file={}\nregion=us-chicago-1\n",
        key_file.display()
    )
}

pub fn test_profile() -> Profile {
    let (_dir, path) = write_config(&default_config(&fixture("key.pem")));
    profile::load(&path, profile::DEFAULT_PROFILE).unwrap()
}

pub fn test_signer() -> ApiKeySigner {
    ApiKeySigner::from_profile(&test_profile()).unwrap()
}

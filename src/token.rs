use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use aws_sso_schema::cache::CachedTokenRecord;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::error::{Error, Result};

/// An SSO access token. Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(**redacted**)")
    }
}

impl<S: Into<String>> From<S> for AccessToken {
    fn from(s: S) -> Self {
        AccessToken(s.into())
    }
}

pub trait FindToken {
    /// `Ok(None)` means no unexpired token is cached, which is not an error.
    fn find_token(&self) -> Result<Option<AccessToken>>;
}

/// Parses `expiresAt` as written by the various AWS CLI versions:
/// RFC 3339, `2019-11-14T04:58:18UTC`, or a naive timestamp taken as UTC.
pub fn parse_expires_at(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix("UTC").unwrap_or(s).trim_end();
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Scans the SSO cache directory, one record per `*.json` file.
#[derive(Debug, Clone)]
pub struct CacheDirScanner {
    cache_dir: PathBuf,
}

impl CacheDirScanner {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> CacheDirScanner {
        CacheDirScanner {
            cache_dir: cache_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the first record, in directory order, that holds a token
    /// expiring strictly after `now`. Any unreadable record fails the scan.
    pub fn find_unexpired_token_at(&self, now: DateTime<Utc>) -> Result<Option<AccessToken>> {
        if !self.cache_dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: self.cache_dir.clone(),
            });
        }

        for path in json_files(&self.cache_dir)? {
            let record = read_record(&path)?;
            let Some((token, expires_at)) = record.candidate() else {
                debug!("skip {}: no accessToken/expiresAt", path.display());
                continue;
            };

            let expires_at = parse_expires_at(expires_at).ok_or_else(|| Error::CacheFileCorrupt {
                path: path.clone(),
                reason: format!("invalid expiresAt: {}", expires_at),
            })?;

            if expires_at > now {
                debug!("token found in {}, expires at {}", path.display(), expires_at);
                return Ok(Some(AccessToken::from(token)));
            }
            debug!("skip {}: expired at {}", path.display(), expires_at);
        }

        Ok(None)
    }
}

impl FindToken for CacheDirScanner {
    fn find_token(&self) -> Result<Option<AccessToken>> {
        self.find_unexpired_token_at(Utc::now())
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("json")) {
            files.push(path);
        }
    }
    Ok(files)
}

fn read_record(path: &Path) -> Result<CachedTokenRecord> {
    let corrupt = |reason: String| Error::CacheFileCorrupt {
        path: path.to_path_buf(),
        reason,
    };

    let json = fs::read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| corrupt(e.to_string()))
}

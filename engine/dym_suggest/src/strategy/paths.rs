//! Strategies that probe the filesystem around a path from the message.
//!
//! These are the only strategies that do I/O. Every probe is a metadata
//! lookup or a single directory listing; a failed probe means the
//! strategy does not apply.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use dym_ir::{fields, ErrorKind, SuggestionCandidate};
use regex::{Captures, Regex};

use super::{lazy, none, quoted, Candidates, Strategy, StrategyContext, StrategyError};

/// Names shown by [`DirectoryListing`] before the list is cut short.
pub const MAX_LISTED: usize = 5;
/// Directory entries read by [`DirectoryListing`].
pub const MAX_DIRECTORY_ENTRIES: usize = 4096;

/// `$NAME` or `${NAME}`.
static VARIABLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\$(?:(\w+)|\{([^}]*)\})").ok());

/// `path` with a leading `~` replaced by the home directory.
pub(crate) fn expand_user(path: &str) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_owned();
    };
    // `~user` is left alone.
    if !(rest.is_empty() || rest.starts_with(['/', '\\'])) {
        return path.to_owned();
    }
    match dirs::home_dir() {
        Some(home) => format!("{}{rest}", home.display()),
        None => path.to_owned(),
    }
}

/// `path` with every set environment variable substituted; unset ones are
/// left as written.
pub(crate) fn expand_vars(path: &str) -> String {
    let Some(pattern) = VARIABLE.as_ref() else {
        return path.to_owned();
    };
    pattern
        .replace_all(path, |caps: &Captures<'_>| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_else(|_| caps[0].to_owned())
        })
        .into_owned()
}

/// A path that exists once `~` or environment variables are expanded.
#[derive(Debug, Default)]
pub struct ExpandedPath;

impl Strategy for ExpandedPath {
    fn name(&self) -> &'static str {
        "expanded-path"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::FileNotFound]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let path = cx.field(fields::PATH)?;
        let user = expand_user(path);
        let vars = expand_vars(path);
        let both = expand_vars(&user);

        let mut found = Vec::new();
        if user != path && Path::new(&user).exists() {
            found.push(format!("{} (calling os.path.expanduser)", quoted(&user)));
        }
        if vars != path && Path::new(&vars).exists() {
            found.push(format!("{} (calling os.path.expandvars)", quoted(&vars)));
        }
        if both != user && both != vars && Path::new(&both).exists() {
            found.push(format!(
                "{} (calling os.path.expanduser and os.path.expandvars)",
                quoted(&both)
            ));
        }

        let source = self.name();
        Ok(lazy(
            found
                .into_iter()
                .map(move |text| SuggestionCandidate::new(text, source)),
        ))
    }
}

/// Opening a directory as a file: suggest what is inside it.
#[derive(Debug, Default)]
pub struct DirectoryListing;

impl Strategy for DirectoryListing {
    fn name(&self) -> &'static str {
        "directory-listing"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::IsADirectory]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let path = cx.field(fields::PATH)?;
        let dir = Path::new(path);
        let io_error = |source: std::io::Error| StrategyError::Io {
            path: dir.to_path_buf(),
            source,
        };

        if !fs::metadata(dir).map_err(io_error)?.is_dir() {
            return Ok(none());
        }
        let mut names: Vec<String> = fs::read_dir(dir)
            .map_err(io_error)?
            .take(MAX_DIRECTORY_ENTRIES)
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        let text = if names.is_empty() {
            format!("to add content to {path} first")
        } else {
            let shown: Vec<String> = names.iter().take(MAX_LISTED).map(|name| quoted(name)).collect();
            let more = if names.len() > MAX_LISTED { ", ..." } else { "" };
            format!(
                "any of the {} files in directory ({}{more})",
                names.len(),
                shown.join(", ")
            )
        };
        Ok(lazy(std::iter::once(SuggestionCandidate::new(text, self.name()))))
    }
}

/// Treating a file as a directory: suggest the directory it lives in.
#[derive(Debug, Default)]
pub struct ParentDirectory;

impl Strategy for ParentDirectory {
    fn name(&self) -> &'static str {
        "parent-directory"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NotADirectory]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let path = Path::new(cx.field(fields::PATH)?);
        let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
            return Ok(none());
        };
        if !(path.is_file() || parent.is_file()) {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            format!("{} (calling os.path.dirname)", quoted(&parent.display().to_string())),
            self.name(),
        ))))
    }
}

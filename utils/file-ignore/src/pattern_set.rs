//! The effective ignore-pattern set for one walk.

use std::fs;
use std::path::Path;

use globset::Glob;
use globset::GlobMatcher;

use crate::patterns;

/// Name of the project-local exclusion file read from the walk root.
pub const EXCLUSION_FILE_NAME: &str = ".gitignore";

/// One ignore pattern with its pre-compiled glob forms.
///
/// A token is matched in several ways, first hit wins:
/// 1. exact equality against the entry name;
/// 2. tokens with a leading `*` glob-match the entry name;
/// 3. tokens with a leading `/` glob-match the path from the walk root,
///    with the slash removed (root-anchored);
/// 4. any token glob-matches the entry name;
/// 5. for directories, `"<name>/"` is glob-matched against `"<token>/"`.
///
/// Negation (`!`) is not supported.
#[derive(Debug)]
pub struct IgnorePattern {
    raw: String,
    name_glob: GlobMatcher,
    rooted_glob: Option<GlobMatcher>,
    dir_glob: GlobMatcher,
}

impl IgnorePattern {
    /// Compile a single pattern token. Returns `None` (with a warning) when
    /// the token is not a valid glob; a bad line in an exclusion file must
    /// never abort the walk.
    pub fn parse(token: &str) -> Option<Self> {
        let compile = |pattern: &str| -> Option<GlobMatcher> {
            match Glob::new(pattern) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(err) => {
                    tracing::warn!("skipping invalid ignore pattern {pattern:?}: {err}");
                    None
                }
            }
        };

        let name_glob = compile(token)?;
        let rooted_glob = match token.strip_prefix('/') {
            Some(rest) => Some(compile(rest)?),
            None => None,
        };
        let dir_glob = compile(&format!("{token}/"))?;

        Some(Self {
            raw: token.to_string(),
            name_glob,
            rooted_glob,
            dir_glob,
        })
    }

    /// The original pattern token.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when this pattern matches the entry. Pure function of its inputs.
    pub fn matches(&self, name: &str, rel_path: &str, is_dir: bool) -> bool {
        if name == self.raw {
            return true;
        }
        if self.raw.starts_with('*') && self.name_glob.is_match(name) {
            return true;
        }
        if let Some(rooted) = &self.rooted_glob
            && rooted.is_match(rel_path)
        {
            return true;
        }
        if self.name_glob.is_match(name) {
            return true;
        }
        is_dir && self.dir_glob.is_match(format!("{name}/"))
    }
}

/// Immutable set of ignore patterns, built once per run.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<IgnorePattern>,
}

impl PatternSet {
    /// Build the effective set for a walk rooted at `root`: the built-in
    /// defaults plus any patterns from `<root>/.gitignore`.
    ///
    /// A missing or unreadable exclusion file is not an error; the defaults
    /// apply on their own.
    pub fn load(root: &Path) -> Self {
        let mut tokens: Vec<String> = patterns::default_patterns()
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        tokens.extend(read_exclusion_file(root));
        Self::from_tokens(tokens.iter().map(String::as_str))
    }

    /// Build a set from raw tokens. Trailing `/` is stripped so a
    /// directory-only pattern and a plain name pattern match identically
    /// (a deliberate simplification of gitignore directory semantics).
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = tokens
            .into_iter()
            .filter_map(|token| IgnorePattern::parse(token.trim_end_matches('/')))
            .collect();
        Self { patterns }
    }

    /// Decide whether an entry is excluded from the walk.
    ///
    /// `rel_path` is the `/`-separated path from the walk root. Duplicate
    /// patterns are harmless; the first match wins and there is no negation.
    pub fn is_ignored(&self, name: &str, rel_path: &str, is_dir: bool) -> bool {
        if patterns::HARD_EXCLUDE_FRAGMENTS
            .iter()
            .any(|fragment| rel_path.contains(fragment))
        {
            return true;
        }
        self.patterns
            .iter()
            .any(|pattern| pattern.matches(name, rel_path, is_dir))
    }

    /// Number of compiled patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn read_exclusion_file(root: &Path) -> Vec<String> {
    let Ok(contents) = fs::read_to_string(root.join(EXCLUSION_FILE_NAME)) else {
        return Vec::new();
    };
    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            Some(line.trim_end_matches('/').to_string())
        })
        .collect()
}

#[cfg(test)]
#[path = "pattern_set.test.rs"]
mod tests;

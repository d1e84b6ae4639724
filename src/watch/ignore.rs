//! Glob-based include/ignore filtering for watched paths.
//!
//! Compiles the `include`/`ignore` glob lists from `WatchConfig` into
//! regexes once at watcher startup, rather than re-parsing globs per event.

use regex::Regex;
use std::path::Path;

pub struct GlobSet {
    patterns: Vec<Regex>,
}

impl GlobSet {
    pub fn compile(globs: &[String]) -> Self {
        let patterns = globs.iter().filter_map(|g| glob_to_regex(g)).collect();
        Self { patterns }
    }

    pub fn is_match(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.patterns.iter().any(|re| re.is_match(&text))
    }
}

/// Translates a small, practical glob dialect (`*`, `**`, `?`) to a regex.
/// Not a full gitignore implementation; covers the patterns spec §6's
/// config table actually needs (`**/node_modules/**`, `**/*.ts`, etc).
fn glob_to_regex(glob: &str) -> Option<Regex> {
    let mut out = String::from("(?i)^");
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    // consume an optional following slash so `**/` matches zero dirs too
                    if chars.peek() == Some(&'/') {
                        chars.next();
                        out.push_str("(?:.*/)?");
                    } else {
                        out.push_str(".*");
                    }
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push_str("[^/]"),
            '.' | '(' | ')' | '+' | '|' | '^' | '$' | '[' | ']' | '{' | '}' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            other => out.push(other),
        }
    }
    out.push('$');
    Regex::new(&out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn matches_double_star_directory() {
        let set = GlobSet::compile(&["**/node_modules/**".to_string()]);
        assert!(set.is_match(&PathBuf::from("src/node_modules/pkg/index.js")));
        assert!(set.is_match(&PathBuf::from("node_modules/pkg/index.js")));
        assert!(!set.is_match(&PathBuf::from("src/index.js")));
    }

    #[test]
    fn matches_extension_glob() {
        let set = GlobSet::compile(&["**/*.ts".to_string()]);
        assert!(set.is_match(&PathBuf::from("src/deep/nested/a.ts")));
        assert!(!set.is_match(&PathBuf::from("src/a.js")));
    }

    #[test]
    fn empty_globset_matches_nothing() {
        let set = GlobSet::compile(&[]);
        assert!(!set.is_match(&PathBuf::from("anything.ts")));
    }
}

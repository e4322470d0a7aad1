//! Subprocess environment
//!
//! Build tools read `PIP_CONSTRAINT` while installing, and a constraint file
//! pinned by the caller's shell can make an editable install of the project
//! fail to resolve. Every command this crate spawns therefore receives a copy
//! of the process environment with such variables removed.
//!
//! The snapshot is taken once per top-level invocation and passed down
//! explicitly.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Variables removed from every subprocess environment, whatever the
/// configuration says
pub const DEFAULT_STRIPPED_VARS: &[&str] = &["PIP_CONSTRAINT"];

/// Snapshot of environment variables handed to subprocesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl SanitizedEnv {
    /// Snapshot the current process environment minus
    /// [DEFAULT_STRIPPED_VARS] and the extra names in `strip`.
    pub fn from_process(strip: &[String]) -> Self {
        Self::from_vars(std::env::vars_os(), strip)
    }

    /// Build from an explicit set of variables minus
    /// [DEFAULT_STRIPPED_VARS] and the extra names in `strip`.
    pub fn from_vars<I, K, V>(vars: I, strip: &[String]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut vars: BTreeMap<OsString, OsString> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let extra = strip.iter().map(String::as_str);
        for name in DEFAULT_STRIPPED_VARS.iter().copied().chain(extra) {
            vars.remove(OsStr::new(name));
        }

        SanitizedEnv { vars }
    }

    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(name)).map(OsString::as_os_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(OsStr::new(name))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_os_str(), value.as_os_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_pip_constraint() {
        let env = SanitizedEnv::from_vars(
            vec![
                ("PATH", "/usr/bin"),
                ("PIP_CONSTRAINT", "/tmp/constraints.txt"),
                ("HOME", "/home/dev"),
            ],
            &[],
        );

        assert!(!env.contains("PIP_CONSTRAINT"));
        assert_eq!(env.get("PATH"), Some(OsStr::new("/usr/bin")));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_missing_stripped_var_is_fine() {
        let env = SanitizedEnv::from_vars(vec![("PATH", "/usr/bin")], &[]);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_extra_stripped_vars() {
        let env = SanitizedEnv::from_vars(
            vec![("PIP_INDEX_URL", "https://mirror"), ("PATH", "/bin")],
            &["PIP_INDEX_URL".to_string()],
        );
        assert!(!env.contains("PIP_INDEX_URL"));
        assert!(env.contains("PATH"));
    }

    #[test]
    fn test_extra_names_do_not_replace_pip_constraint() {
        let env = SanitizedEnv::from_vars(
            vec![
                ("PIP_CONSTRAINT", "/c.txt"),
                ("PIP_INDEX_URL", "https://mirror"),
                ("PATH", "/bin"),
            ],
            &["PIP_INDEX_URL".to_string()],
        );
        assert!(!env.contains("PIP_CONSTRAINT"));
        assert!(!env.contains("PIP_INDEX_URL"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_from_process_keeps_path() {
        let env = SanitizedEnv::from_process(&[]);
        assert!(!env.contains("PIP_CONSTRAINT"));
        if std::env::var_os("PATH").is_some() {
            assert!(env.contains("PATH"));
        }
    }
}

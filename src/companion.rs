//! Finding the superplate executable.
//!
//! superplate is installed as an npm dependency of create-refine-app, so the
//! usual place to find it is a `node_modules/.bin` directory: either the one
//! our own binary lives in, or one further up the tree. Resolution order:
//!
//! 1. `CREATE_REFINE_APP_SUPERPLATE`, used as given;
//! 2. next to the running executable;
//! 3. `node_modules/.bin` in every ancestor of each search root
//!    (the executable's directory, then the working directory);
//! 4. `PATH`.

use crate::delegate::DelegateError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the companion scaffolding tool.
pub const COMPANION_NAME: &str = "superplate";

/// Environment variable overriding the companion path.
pub const OVERRIDE_ENV: &str = "CREATE_REFINE_APP_SUPERPLATE";

#[derive(Debug, Clone)]
pub struct CompanionLocator {
    name: String,
    override_path: Option<PathBuf>,
    sibling_dir: Option<PathBuf>,
    search_roots: Vec<PathBuf>,
    path_var: Option<OsString>,
    cwd: Option<PathBuf>,
}

impl CompanionLocator {
    /// A locator with nowhere to look yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            override_path: None,
            sibling_dir: None,
            search_roots: Vec::new(),
            path_var: None,
            cwd: None,
        }
    }

    /// The locator used by the binary, configured from this process.
    pub fn from_env() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().ok();
        Self::from_lookup(|key| std::env::var_os(key), exe_dir, cwd)
    }

    /// Build the standard locator from an environment lookup.
    pub fn from_lookup(
        env: impl Fn(&str) -> Option<OsString>,
        exe_dir: Option<PathBuf>,
        cwd: Option<PathBuf>,
    ) -> Self {
        let mut locator = Self::new(COMPANION_NAME);

        if let Some(path) = env(OVERRIDE_ENV).filter(|p| !p.is_empty()) {
            locator = locator.with_override(PathBuf::from(path));
        }
        if let Some(dir) = exe_dir {
            locator = locator.with_sibling_dir(dir.clone()).with_search_root(dir);
        }
        if let Some(dir) = &cwd {
            locator = locator.with_search_root(dir.clone());
        }
        if let Some(path_var) = env("PATH") {
            locator = locator.with_path_var(path_var);
        }
        locator.cwd = cwd;
        locator
    }

    pub fn with_override(mut self, path: PathBuf) -> Self {
        self.override_path = Some(path);
        self
    }

    pub fn with_sibling_dir(mut self, dir: PathBuf) -> Self {
        self.sibling_dir = Some(dir);
        self
    }

    pub fn with_search_root(mut self, dir: PathBuf) -> Self {
        self.search_roots.push(dir);
        self
    }

    pub fn with_path_var(mut self, path_var: OsString) -> Self {
        self.path_var = Some(path_var);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the companion's path.
    pub fn locate(&self) -> Result<PathBuf, DelegateError> {
        if let Some(path) = &self.override_path {
            tracing::debug!(path = %path.display(), "using {OVERRIDE_ENV}");
            return Ok(path.clone());
        }

        if let Some(dir) = &self.sibling_dir {
            if let Some(path) = self.find_in(dir) {
                tracing::debug!(path = %path.display(), "found next to executable");
                return Ok(path);
            }
        }

        for root in &self.search_roots {
            for ancestor in root.ancestors() {
                let bin_dir = ancestor.join("node_modules").join(".bin");
                tracing::trace!(dir = %bin_dir.display(), "searching");
                if let Some(path) = self.find_in(&bin_dir) {
                    tracing::debug!(path = %path.display(), "found in node_modules");
                    return Ok(path);
                }
            }
        }

        if let Some(path_var) = &self.path_var {
            let cwd = self.cwd.clone().unwrap_or_default();
            if let Ok(path) = which::which_in(&self.name, Some(path_var), cwd) {
                tracing::debug!(path = %path.display(), "found on PATH");
                return Ok(path);
            }
        }

        Err(DelegateError::CompanionNotFound {
            name: self.name.clone(),
        })
    }

    fn find_in(&self, dir: &Path) -> Option<PathBuf> {
        self.file_names()
            .into_iter()
            .map(|file_name| dir.join(file_name))
            .find(|candidate| candidate.is_file())
    }

    /// npm writes `.cmd` shims on Windows next to the plain script.
    fn file_names(&self) -> Vec<String> {
        if cfg!(windows) {
            vec![
                format!("{}.cmd", self.name),
                format!("{}.exe", self.name),
                self.name.clone(),
            ]
        } else {
            vec![self.name.clone()]
        }
    }
}

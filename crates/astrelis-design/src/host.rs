//! Queries against the host IDE's solution.
//!
//! The designer never drives the project system; it only asks which solution
//! is open, e.g. to resolve design-time resources.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;

/// A solution as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionInfo {
    pub file_name: PathBuf,
    pub projects: Vec<String>,
    /// Solution-level variables stored by add-ins, in file order.
    pub globals: IndexMap<String, String>,
}

/// Host service exposing the open solution.
pub trait ProjectService {
    fn open_solution(&self) -> Option<SolutionInfo>;
}

/// Read-only view of a solution, tied to the service it came from.
#[derive(Clone)]
pub struct Solution {
    service: Rc<dyn ProjectService>,
    solution: SolutionInfo,
}

impl std::fmt::Debug for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solution")
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

impl Solution {
    /// Snapshot the currently open solution, if any.
    pub fn open(service: Rc<dyn ProjectService>) -> Option<Self> {
        let solution = service.open_solution()?;
        Some(Self { service, solution })
    }

    pub fn file_name(&self) -> &Path {
        &self.solution.file_name
    }

    pub fn full_name(&self) -> &Path {
        self.file_name()
    }

    /// Whether this is still the solution the host has open.
    ///
    /// Solutions are identified by file name; edits to projects or globals
    /// do not close the snapshot.
    pub fn is_open(&self) -> bool {
        self.service
            .open_solution()
            .is_some_and(|open| open.file_name == self.solution.file_name)
    }

    pub fn projects(&self) -> &[String] {
        &self.solution.projects
    }

    pub fn globals(&self) -> &IndexMap<String, String> {
        &self.solution.globals
    }

    /// Value of one solution variable.
    pub fn global(&self, name: &str) -> Option<&str> {
        self.solution.globals.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeHost {
        open: RefCell<Option<SolutionInfo>>,
    }

    fn info(name: &str) -> SolutionInfo {
        SolutionInfo {
            file_name: PathBuf::from(name),
            projects: vec!["App".to_string(), "App.Tests".to_string()],
            globals: IndexMap::from([("StartupProject".to_string(), "App".to_string())]),
        }
    }

    impl ProjectService for FakeHost {
        fn open_solution(&self) -> Option<SolutionInfo> {
            self.open.borrow().clone()
        }
    }

    #[test]
    fn test_solution_tracks_host() {
        let host = Rc::new(FakeHost {
            open: RefCell::new(Some(info("/work/app.sln"))),
        });
        let solution = Solution::open(host.clone()).unwrap();
        assert_eq!(solution.full_name(), Path::new("/work/app.sln"));
        assert_eq!(solution.projects().len(), 2);
        assert!(solution.is_open());
        assert_eq!(solution.global("StartupProject"), Some("App"));
        assert_eq!(solution.global("Theme"), None);

        *host.open.borrow_mut() = Some(info("/work/other.sln"));
        assert!(!solution.is_open());
    }

    #[test]
    fn test_snapshot_keeps_globals_while_open() {
        let host = Rc::new(FakeHost {
            open: RefCell::new(Some(info("/work/app.sln"))),
        });
        let solution = Solution::open(host.clone()).unwrap();

        if let Some(open) = host.open.borrow_mut().as_mut() {
            open.globals.insert("StartupProject".to_string(), "App.Tests".to_string());
        }
        assert!(solution.is_open());
        assert_eq!(solution.global("StartupProject"), Some("App"));
        assert_eq!(solution.globals().len(), 1);
    }

    #[test]
    fn test_no_open_solution() {
        let host = Rc::new(FakeHost {
            open: RefCell::new(None),
        });
        assert!(Solution::open(host).is_none());
    }
}

//! The static universe of an election: the projects and the budget.

use log::debug;
use snafu::prelude::*;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::config::*;

/// A project that can be funded.
///
/// Projects are identified by their name: two projects with the same name are
/// equal, whatever their cost.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub cost: Numeric,
    /// Descriptive categories (e.g. "education"), not used by the data model.
    pub categories: BTreeSet<String>,
    /// Descriptive target groups (e.g. "seniors"), not used by the data model.
    pub targets: BTreeSet<String>,
}

impl Project {
    pub fn new(name: &str, cost: Numeric) -> Project {
        Project {
            name: name.to_string(),
            cost,
            categories: BTreeSet::new(),
            targets: BTreeSet::new(),
        }
    }

    pub fn with_categories(self, categories: &[&str]) -> Project {
        Project {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..self
        }
    }

    pub fn with_targets(self, targets: &[&str]) -> Project {
        Project {
            targets: targets.iter().map(|t| t.to_string()).collect(),
            ..self
        }
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Project) -> bool {
        self.name == other.name
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Project) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Project) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Sum of the costs of some projects.
pub fn total_cost<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Numeric {
    projects
        .into_iter()
        .fold(integer(0), |acc, p| acc + &p.cost)
}

/// An election: an ordered list of projects with distinct names and a budget limit.
///
/// Project costs must not be negative.
///
/// The budget limit lives in a `RefCell`. Profiles hold the instance behind an `Rc`
/// and read the limit each time they need it, so changing it through any handle
/// is seen by every profile at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    projects: Vec<Project>,
    budget_limit: RefCell<Numeric>,
    meta: BTreeMap<String, String>,
}

impl Instance {
    pub fn new(
        projects: impl IntoIterator<Item = Project>,
        budget_limit: Numeric,
    ) -> ElectionResult<Instance> {
        let projects: Vec<Project> = projects.into_iter().collect();
        let mut seen: HashSet<&str> = HashSet::new();
        for p in projects.iter() {
            ensure!(
                seen.insert(p.name.as_str()),
                DuplicateProjectSnafu {
                    name: p.name.clone()
                }
            );
            ensure!(
                p.cost >= integer(0),
                NegativeCostSnafu {
                    name: p.name.clone(),
                    cost: p.cost.to_string(),
                }
            );
        }
        debug!(
            "Instance::new: {} projects, budget limit {}",
            projects.len(),
            budget_limit
        );
        Ok(Instance {
            projects,
            budget_limit: RefCell::new(budget_limit),
            meta: BTreeMap::new(),
        })
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> Instance {
        self.meta.insert(key.to_string(), value.to_string());
        self
    }

    pub fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, project: &Project) -> bool {
        self.projects.iter().any(|p| p == project)
    }

    pub fn get_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn budget_limit(&self) -> Numeric {
        self.budget_limit.borrow().clone()
    }

    pub fn set_budget_limit(&self, budget_limit: Numeric) {
        let previous = self.budget_limit.replace(budget_limit);
        debug!(
            "set_budget_limit: {} -> {}",
            previous,
            self.budget_limit.borrow()
        );
    }

    /// True if all the given projects can be funded together.
    pub fn is_feasible<'a>(&self, projects: impl IntoIterator<Item = &'a Project>) -> bool {
        total_cost(projects) <= self.budget_limit()
    }

    /// True if the selection is feasible and no other project of the instance
    /// can be added to it without going over the budget.
    pub fn is_exhaustive(&self, selection: &[Project]) -> bool {
        let cost = total_cost(selection);
        let budget_limit = self.budget_limit();
        if cost > budget_limit {
            return false;
        }
        self.projects
            .iter()
            .filter(|p| !selection.contains(p))
            .all(|p| &cost + &p.cost > budget_limit)
    }
}

impl<'a> IntoIterator for &'a Instance {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

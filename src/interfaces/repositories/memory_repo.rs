use std::{collections::BTreeMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::entities::{
    education::Education, experience::Experience, profile::Profile, project::Project,
    seed::SeedData, skill::Skill,
};

/// One entity collection: the id counter and its rows, guarded together.
#[derive(Debug)]
pub(crate) struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Table { next_id: 1, rows: BTreeMap::new() }
    }

    /// Assigns the next id and stores the row built for it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub(crate) fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Rows in insertion order (ids are handed out in increasing order).
    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Default)]
struct Tables {
    profiles: RwLock<Table<Profile>>,
    skills: RwLock<Table<Skill>>,
    projects: RwLock<Table<Project>>,
    experiences: RwLock<Table<Experience>>,
    education: RwLock<Table<Education>>,
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Table::new()
    }
}

/// In-process store shared by every worker. Cloning is cheap and shares the data.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepo {
    tables: Arc<Tables>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub profiles: usize,
    pub skills: usize,
    pub projects: usize,
    pub experiences: usize,
    pub education: usize,
}

impl MemoryRepo {
    pub fn new() -> Self {
        MemoryRepo::default()
    }

    /// Inserts every seed record in fixture order. The caller validates first.
    pub fn seed(&self, seed: SeedData) -> EntityCounts {
        let now = Utc::now();

        {
            let mut profiles = self.profiles().write();
            for p in seed.profiles {
                profiles.insert_with(|id| p.prepare_for_insert(id, now));
            }
        }
        {
            let mut skills = self.skills().write();
            for s in seed.skills {
                skills.insert_with(|id| s.prepare_for_insert(id, now));
            }
        }
        {
            let mut projects = self.projects().write();
            for p in seed.projects {
                projects.insert_with(|id| p.prepare_for_insert(id, now));
            }
        }
        {
            let mut experiences = self.experiences().write();
            for e in seed.experiences {
                experiences.insert_with(|id| e.prepare_for_insert(id, now));
            }
        }
        {
            let mut education = self.education().write();
            for e in seed.education {
                education.insert_with(|id| e.prepare_for_insert(id, now));
            }
        }

        self.counts()
    }

    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            profiles: self.profiles().read().len(),
            skills: self.skills().read().len(),
            projects: self.projects().read().len(),
            experiences: self.experiences().read().len(),
            education: self.education().read().len(),
        }
    }

    pub(crate) fn profiles(&self) -> &RwLock<Table<Profile>> {
        &self.tables.profiles
    }

    pub(crate) fn skills(&self) -> &RwLock<Table<Skill>> {
        &self.tables.skills
    }

    pub(crate) fn projects(&self) -> &RwLock<Table<Project>> {
        &self.tables.projects
    }

    pub(crate) fn experiences(&self) -> &RwLock<Table<Experience>> {
        &self.tables.experiences
    }

    pub(crate) fn education(&self) -> &RwLock<Table<Education>> {
        &self.tables.education
    }
}

/// Current time, nudged forward so it is strictly after `previous`.
pub(crate) fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Newest `start_date` first. `sort_by` is stable, so equal dates keep insertion order.
pub(crate) fn newest_first<T>(rows: &mut [T], start_date: impl Fn(&T) -> DateTime<Utc>) {
    rows.sort_by(|a, b| start_date(b).cmp(&start_date(a)));
}

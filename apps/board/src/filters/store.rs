use crate::models::job::Job;

/// Ordered, duplicate-free set of active tag filters. Insertion order drives
/// the order of the chips in the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStore {
    filters: Vec<String>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` unless already active. Returns whether the set changed.
    pub fn add_filter(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.filters.push(tag.to_string());
        true
    }

    /// Removes `tag` if active. Returns whether the set changed.
    pub fn remove_filter(&mut self, tag: &str) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| f != tag);
        self.filters.len() != before
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.filters.iter().any(|f| f == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn visible_jobs<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        visible_jobs(jobs, &self.filters)
    }
}

/// Jobs carrying every tag in `filters`, in collection order. An empty filter
/// list keeps everything.
pub fn visible_jobs<'a>(jobs: &'a [Job], filters: &[String]) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| filters.iter().all(|tag| job.has_tag(tag)))
        .collect()
}

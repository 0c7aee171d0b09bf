// Filter state for a single board session: the active tag set and the
// derived subset of jobs that carry every active tag.

pub mod store;

pub use store::FilterStore;

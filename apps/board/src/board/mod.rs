// Presentation layer: owns one session's filter state, derives the view from
// it, and turns user intents into filter-store operations.

pub mod input;
pub mod render;
pub mod view;

use tracing::debug;

use crate::assets::LogoTable;
use crate::errors::InteractionError;
use crate::filters::FilterStore;
use crate::models::job::Job;

pub use input::{parse_command, Command};
pub use render::render;
pub use view::{BoardView, RenderState};

/// A state-changing user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Click on a tag chip of a job card.
    AddFilter(String),
    /// Click on the remove button of a filter-bar chip.
    RemoveFilter(String),
    /// Click on "Clear".
    ClearFilters,
}

/// A single view session over a fixed job collection.
pub struct Board {
    jobs: Vec<Job>,
    store: FilterStore,
    logos: LogoTable,
    tags_interactive: bool,
}

impl Board {
    pub fn new(jobs: Vec<Job>, logos: LogoTable, tags_interactive: bool) -> Self {
        Self {
            jobs,
            store: FilterStore::new(),
            logos,
            tags_interactive,
        }
    }

    pub fn tags_interactive(&self) -> bool {
        self.tags_interactive
    }

    pub fn filters(&self) -> &[String] {
        self.store.filters()
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView::derive(&self.jobs, &self.store, &self.logos, self.tags_interactive)
    }

    /// Applies `intent` to the filter state. `Ok(false)` means the intent was
    /// valid but changed nothing (repeat add, remove of an inactive tag).
    pub fn dispatch(&mut self, intent: Intent) -> Result<bool, InteractionError> {
        let changed = match &intent {
            Intent::AddFilter(tag) => {
                if !self.tags_interactive {
                    return Err(InteractionError::TagsReadOnly);
                }
                self.store.add_filter(tag)
            }
            Intent::RemoveFilter(tag) => self.store.remove_filter(tag),
            Intent::ClearFilters => {
                let had_filters = !self.store.is_empty();
                self.store.clear_filters();
                had_filters
            }
        };

        debug!(
            ?intent,
            changed,
            filters = ?self.store.filters(),
            "Dispatched intent"
        );
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::fixture;

    fn board(tags_interactive: bool) -> Board {
        let jobs = vec![
            fixture(1, "Frontend", "Junior", &["JavaScript"], &[]),
            fixture(2, "Backend", "Senior", &["Python"], &["Django"]),
        ];
        Board::new(jobs, LogoTable::default(), tags_interactive)
    }

    fn visible_ids(board: &Board) -> Vec<u32> {
        board.view().cards.iter().map(|c| c.job.id).collect()
    }

    #[test]
    fn test_dispatch_walks_both_render_states() {
        let mut board = board(true);
        assert_eq!(board.view().state, RenderState::Unfiltered);

        assert!(board.dispatch(Intent::AddFilter("Frontend".into())).unwrap());
        assert_eq!(board.view().state, RenderState::Filtered);
        assert_eq!(visible_ids(&board), vec![1]);

        assert!(board.dispatch(Intent::RemoveFilter("Frontend".into())).unwrap());
        assert_eq!(board.view().state, RenderState::Unfiltered);
        assert_eq!(visible_ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_same_chip_twice_inserts_once() {
        let mut board = board(true);
        board.dispatch(Intent::AddFilter("Python".into())).unwrap();
        let changed = board.dispatch(Intent::AddFilter("Python".into())).unwrap();

        assert!(!changed);
        assert_eq!(board.view().filter_bar.unwrap().chips, vec!["Python"]);
    }

    #[test]
    fn test_clear_reports_whether_anything_changed() {
        let mut board = board(true);
        assert!(!board.dispatch(Intent::ClearFilters).unwrap());

        board.dispatch(Intent::AddFilter("Senior".into())).unwrap();
        board.dispatch(Intent::AddFilter("Django".into())).unwrap();
        assert!(board.dispatch(Intent::ClearFilters).unwrap());
        assert!(board.filters().is_empty());
        assert_eq!(visible_ids(&board), vec![1, 2]);
    }

    #[test]
    fn test_static_tags_reject_add_but_allow_remove() {
        let mut board = board(false);
        assert_eq!(
            board.dispatch(Intent::AddFilter("Frontend".into())),
            Err(InteractionError::TagsReadOnly)
        );
        assert!(board.filters().is_empty());
        assert_eq!(board.dispatch(Intent::RemoveFilter("Frontend".into())), Ok(false));
        assert!(board.view().cards.iter().all(|c| !c.tags_clickable));
    }
}

use crate::assets::LogoTable;
use crate::filters::FilterStore;
use crate::models::job::Job;

/// The two coarse render states of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No active filters, filter bar hidden.
    Unfiltered,
    /// At least one active filter, filter bar shown.
    Filtered,
}

/// Active-filter chips in insertion order. Only exists while filtering, so
/// the "clear" affordance is present exactly when there is something to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarView<'a> {
    pub chips: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub job: &'a Job,
    pub logo_url: &'a str,
    pub tags: Vec<&'a str>,
    pub tags_clickable: bool,
}

/// Everything a renderer needs for one frame of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub state: RenderState,
    pub filter_bar: Option<FilterBarView<'a>>,
    pub cards: Vec<CardView<'a>>,
}

impl<'a> BoardView<'a> {
    /// Pure derivation from the job collection and the filter state.
    pub fn derive(
        jobs: &'a [Job],
        store: &'a FilterStore,
        logos: &'a LogoTable,
        tags_clickable: bool,
    ) -> Self {
        let (state, filter_bar) = if store.is_empty() {
            (RenderState::Unfiltered, None)
        } else {
            let chips = store.filters().iter().map(String::as_str).collect();
            (RenderState::Filtered, Some(FilterBarView { chips }))
        };

        let cards = store
            .visible_jobs(jobs)
            .into_iter()
            .map(|job| CardView {
                job,
                logo_url: logos.url_for(job.id),
                tags: job.tags(),
                tags_clickable,
            })
            .collect();

        Self {
            state,
            filter_bar,
            cards,
        }
    }

    /// Tag on chip `chip` of card `card`, both 1-based as rendered.
    pub fn card_chip(&self, card: usize, chip: usize) -> Option<&'a str> {
        let card = self.cards.get(card.checked_sub(1)?)?;
        card.tags.get(chip.checked_sub(1)?).copied()
    }

    pub fn has_card_chip(&self, tag: &str) -> bool {
        self.cards.iter().any(|c| c.tags.contains(&tag))
    }

    /// Active filter on filter-bar chip `n`, 1-based.
    pub fn filter_chip(&self, n: usize) -> Option<&'a str> {
        let bar = self.filter_bar.as_ref()?;
        bar.chips.get(n.checked_sub(1)?).copied()
    }
}

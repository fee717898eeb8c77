use contracts::domain::speakers::SpeakerSummary;
use leptos::prelude::*;

use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};

impl Searchable for SpeakerSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.model_name, filter)
            || contains_ignore_case(&self.manufacturer, filter)
    }
}

#[derive(Clone, Debug)]
pub struct SpeakersListState {
    pub items: Vec<SpeakerSummary>,
    pub filter: String,
    pub is_loaded: bool,
}

impl Default for SpeakersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            is_loaded: false,
        }
    }
}

impl SpeakersListState {
    /// The cards to render: the fetched list narrowed by the filter text.
    pub fn visible(&self) -> Vec<SpeakerSummary> {
        filter_list(&self.items, &self.filter)
    }
}

pub fn create_state() -> RwSignal<SpeakersListState> {
    RwSignal::new(SpeakersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, model: &str, maker: &str) -> SpeakerSummary {
        SpeakerSummary {
            id,
            model_name: model.into(),
            manufacturer: maker.into(),
            price: Some(999.0),
            image_url: None,
            avg_rating: 4.0,
            short_description: None,
        }
    }

    #[test]
    fn filter_matches_model_or_manufacturer() {
        let state = SpeakersListState {
            items: vec![
                summary(1, "Aurum", "Acme Audio"),
                summary(2, "Ethereal", "SoundForge"),
            ],
            filter: "acme".into(),
            is_loaded: true,
        };
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn empty_filter_shows_all() {
        let state = SpeakersListState {
            items: vec![summary(1, "Aurum", "Acme"), summary(2, "Ethereal", "Forge")],
            filter: String::new(),
            is_loaded: true,
        };
        assert_eq!(state.visible().len(), 2);
    }
}

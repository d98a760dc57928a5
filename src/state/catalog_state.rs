//! CatalogState - Active Story Selection

use crate::app::navigation::Story;

/// State for the catalog navigation
#[derive(Debug)]
pub struct CatalogState {
    /// Currently displayed story
    pub active_story: Story,
    /// Stories visited so far, in visit order
    visited: Vec<Story>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Story::default())
    }
}

impl CatalogState {
    pub fn new(story: Story) -> Self {
        Self {
            active_story: story,
            visited: vec![story],
        }
    }

    /// Set the active story (from sidebar click)
    pub fn set_active_story(&mut self, story: Story) {
        self.active_story = story;
        if !self.visited.contains(&story) {
            self.visited.push(story);
        }
    }

    /// Whether a story has already been displayed once
    pub fn was_visited(&self, story: Story) -> bool {
        self.visited.contains(&story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_active_story() {
        let mut state = CatalogState::new(Story::InputTextSimple);
        assert!(!state.was_visited(Story::PricingPage));

        state.set_active_story(Story::PricingPage);
        assert_eq!(state.active_story, Story::PricingPage);
        assert!(state.was_visited(Story::PricingPage));
        assert!(state.was_visited(Story::InputTextSimple));
    }
}

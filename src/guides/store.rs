use crate::guides::error::GuideError;
use crate::guides::model::Guide;
use std::fmt;

pub type ChangeListener = Box<dyn FnMut()>;

/// Ordered guide collection plus the hover/positioning indices that point into it.
///
/// Every mutation keeps both indices either `None` or inside `0..len`.
/// Listeners fire synchronously after each call that changed observable state.
#[derive(Default)]
pub struct GuideStore {
    guides: Vec<Guide>,
    hover_index: Option<usize>,
    positioning_index: Option<usize>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for GuideStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuideStore")
            .field("guides", &self.guides)
            .field("hover_index", &self.hover_index)
            .field("positioning_index", &self.positioning_index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GuideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guides(guides: Vec<Guide>) -> Self {
        Self {
            guides,
            ..Self::default()
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn get(&self, index: usize) -> Option<&Guide> {
        self.guides.get(index)
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn positioning_index(&self) -> Option<usize> {
        self.positioning_index
    }

    /// Appends `guide` on top of the stack and returns its index.
    pub fn add(&mut self, guide: Guide) -> usize {
        self.guides.push(guide);
        let index = self.guides.len() - 1;
        tracing::debug!(index, orientation = ?guide.orientation, position = guide.position, "guide added");
        self.notify();
        index
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Guide, GuideError> {
        self.check_index(index)?;
        let removed = self.guides.remove(index);
        self.positioning_index = reindex_after_removal(self.positioning_index, index);
        self.hover_index = reindex_after_removal(self.hover_index, index);
        tracing::debug!(index, remaining = self.guides.len(), "guide removed");
        self.notify();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.hover_index = None;
        self.positioning_index = None;
        if self.guides.is_empty() {
            return;
        }
        self.guides.clear();
        tracing::debug!("guides cleared");
        self.notify();
    }

    /// Bulk replacement; a freshly loaded set has no interaction context.
    pub fn replace_all(&mut self, guides: Vec<Guide>) {
        self.guides = guides;
        self.hover_index = None;
        self.positioning_index = None;
        tracing::debug!(count = self.guides.len(), "guides replaced");
        self.notify();
    }

    pub fn set_position_at(&mut self, index: usize, position: i32) -> Result<(), GuideError> {
        self.check_index(index)?;
        self.guides[index].position = position;
        self.notify();
        Ok(())
    }

    pub fn set_hover_index(&mut self, index: Option<usize>) -> Result<(), GuideError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        if self.hover_index != index {
            self.hover_index = index;
            self.notify();
        }
        Ok(())
    }

    pub fn set_positioning_index(&mut self, index: Option<usize>) -> Result<(), GuideError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        if self.positioning_index != index {
            self.positioning_index = index;
            self.notify();
        }
        Ok(())
    }

    /// Drops both interaction indices.
    pub fn clear_interaction(&mut self) {
        if self.hover_index.is_none() && self.positioning_index.is_none() {
            return;
        }
        self.hover_index = None;
        self.positioning_index = None;
        self.notify();
    }

    fn check_index(&self, index: usize) -> Result<(), GuideError> {
        if index < self.guides.len() {
            Ok(())
        } else {
            Err(GuideError::IndexOutOfRange {
                index,
                len: self.guides.len(),
            })
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

fn reindex_after_removal(current: Option<usize>, removed: usize) -> Option<usize> {
    match current {
        Some(idx) if idx == removed => None,
        Some(idx) if idx > removed => Some(idx - 1),
        other => other,
    }
}

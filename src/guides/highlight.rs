use crate::guides::model::{Guide, GuideColor};
use crate::guides::store::GuideStore;

pub const POSITIONING_HIGHLIGHT_COLOR: GuideColor = GuideColor::rgba(255, 255, 0, 200);
pub const HOVER_HIGHLIGHT_COLOR: GuideColor = GuideColor::rgba(255, 255, 0, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTier {
    Positioning,
    Hover,
}

impl HighlightTier {
    pub fn color(self) -> GuideColor {
        match self {
            Self::Positioning => POSITIONING_HIGHLIGHT_COLOR,
            Self::Hover => HOVER_HIGHLIGHT_COLOR,
        }
    }

    /// Width of the solid highlight pen drawn over a guide of `thickness`.
    pub fn width_for(self, thickness: u32) -> u32 {
        match self {
            Self::Positioning => (thickness + 6).max(6),
            Self::Hover => (thickness + 4).max(4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub index: usize,
    pub tier: HighlightTier,
    pub color: GuideColor,
    pub width: u32,
}

/// Highlight the renderer should draw over the guide list, if any.
pub fn resolve_highlight(store: &GuideStore, interactive: bool) -> Option<Highlight> {
    if !interactive {
        return None;
    }
    let (index, tier) = match (store.positioning_index(), store.hover_index()) {
        (Some(index), _) => (index, HighlightTier::Positioning),
        (None, Some(index)) => (index, HighlightTier::Hover),
        (None, None) => return None,
    };
    let guide: &Guide = store.get(index)?;
    Some(Highlight {
        index,
        tier,
        color: tier.color(),
        width: tier.width_for(guide.thickness),
    })
}

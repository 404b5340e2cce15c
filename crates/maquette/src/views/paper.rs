//! Paper sizes and automatic layout settings for views.

use serde::{Deserialize, Serialize};

/// Paper sizes available for views, with pixel dimensions at 300dpi.
///
/// The serialized names (`A5_Landscape`, ...) match the workspace file
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[serde(rename = "A6_Portrait")]
    A6Portrait,
    #[serde(rename = "A6_Landscape")]
    A6Landscape,
    #[serde(rename = "A5_Portrait")]
    A5Portrait,
    #[serde(rename = "A5_Landscape")]
    A5Landscape,
    #[serde(rename = "A4_Portrait")]
    A4Portrait,
    #[serde(rename = "A4_Landscape")]
    A4Landscape,
    #[serde(rename = "A3_Portrait")]
    A3Portrait,
    #[serde(rename = "A3_Landscape")]
    A3Landscape,
    #[serde(rename = "A2_Portrait")]
    A2Portrait,
    #[serde(rename = "A2_Landscape")]
    A2Landscape,
    #[serde(rename = "Letter_Portrait")]
    LetterPortrait,
    #[serde(rename = "Letter_Landscape")]
    LetterLandscape,
    #[serde(rename = "Legal_Portrait")]
    LegalPortrait,
    #[serde(rename = "Legal_Landscape")]
    LegalLandscape,
    #[serde(rename = "Slide_4_3")]
    Slide4x3,
    #[serde(rename = "Slide_16_9")]
    Slide16x9,
}

impl PaperSize {
    /// Pixel dimensions as (width, height).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::A6Portrait => (1240, 1748),
            Self::A6Landscape => (1748, 1240),
            Self::A5Portrait => (1748, 2480),
            Self::A5Landscape => (2480, 1748),
            Self::A4Portrait => (2480, 3508),
            Self::A4Landscape => (3508, 2480),
            Self::A3Portrait => (3508, 4961),
            Self::A3Landscape => (4961, 3508),
            Self::A2Portrait => (4961, 7016),
            Self::A2Landscape => (7016, 4961),
            Self::LetterPortrait => (2550, 3300),
            Self::LetterLandscape => (3300, 2550),
            Self::LegalPortrait => (2550, 4200),
            Self::LegalLandscape => (4200, 2550),
            Self::Slide4x3 => (3306, 2480),
            Self::Slide16x9 => (3508, 1973),
        }
    }

    /// Returns `true` if the width exceeds the height.
    pub fn is_landscape(self) -> bool {
        let (width, height) = self.dimensions();
        width > height
    }
}

/// Direction ranks are laid out in when automatic layout is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDirection {
    #[default]
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

/// Automatic layout settings for a view.
///
/// These are stored intent only; computing a layout is the responsibility of
/// whatever renders the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticLayout {
    rank_direction: RankDirection,
    rank_separation: u32,
    node_separation: u32,
    edge_separation: u32,
}

impl Default for AutomaticLayout {
    fn default() -> Self {
        Self {
            rank_direction: RankDirection::TopBottom,
            rank_separation: 300,
            node_separation: 300,
            edge_separation: 0,
        }
    }
}

impl AutomaticLayout {
    /// Creates automatic layout settings.
    pub fn new(
        rank_direction: RankDirection,
        rank_separation: u32,
        node_separation: u32,
        edge_separation: u32,
    ) -> Self {
        Self {
            rank_direction,
            rank_separation,
            node_separation,
            edge_separation,
        }
    }

    /// Get the rank direction.
    pub fn rank_direction(&self) -> RankDirection {
        self.rank_direction
    }

    /// Get the separation between ranks, in pixels.
    pub fn rank_separation(&self) -> u32 {
        self.rank_separation
    }

    /// Get the separation between nodes in a rank, in pixels.
    pub fn node_separation(&self) -> u32 {
        self.node_separation
    }

    /// Get the separation between edges, in pixels.
    pub fn edge_separation(&self) -> u32 {
        self.edge_separation
    }
}

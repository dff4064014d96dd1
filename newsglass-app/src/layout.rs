//! Compile-time UI constraints.
//!
//! The display surface is fixed: a selectable list region above a read-only
//! text region, 640 px wide, 350 px tall in total. There is no runtime
//! configuration; these constants are the whole config surface.

/// Maximum rows the list region can hold, pagination controls included.
pub const MAX_LIST_ITEMS: usize = 20;
/// Character budget for the text region.
pub const MAX_TEXT_CHARS: usize = 2000;
/// Character budget for one list label.
pub const MAX_ITEM_CHARS: usize = 64;
/// Story titles are pre-truncated tighter than the full label budget so the
/// position prefix always fits.
pub const MAX_TITLE_CHARS: usize = 60;
/// Deepest visual indent for nested comments; storage depth is uncapped.
pub const MAX_COMMENT_INDENT: usize = 4;

/// Surface width in pixels.
pub const SCREEN_WIDTH: u32 = 640;

const LIST_HEIGHT_DEFAULT: u32 = 250;
const TEXT_HEIGHT_DEFAULT: u32 = 100;
const LIST_HEIGHT_EXPANDED: u32 = 175;
const TEXT_HEIGHT_EXPANDED: u32 = 175;

/// Numeric id of the list region on the bridge side.
pub const LIST_REGION_ID: u8 = 1;
/// Numeric id of the text region on the bridge side.
pub const TEXT_REGION_ID: u8 = 2;

/// How the two regions split the screen.
///
/// The list view favors the list; story view trades list rows for text room,
/// since story and comment bodies need more space than story titles did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Default,
    Expanded,
}

impl Layout {
    /// `(list_height, text_height)` in pixels.
    pub fn heights(self) -> (u32, u32) {
        match self {
            Self::Default => (LIST_HEIGHT_DEFAULT, TEXT_HEIGHT_DEFAULT),
            Self::Expanded => (LIST_HEIGHT_EXPANDED, TEXT_HEIGHT_EXPANDED),
        }
    }
}

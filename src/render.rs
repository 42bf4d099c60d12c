//! Cell rendering: mapping a cell's owner to a blob color and pushing it
//! onto the cell's blob elements once they exist.

use web_sys::HtmlElement;

use crate::error::BoardError;
use crate::model::{BoardCellState, BoardProps};
use crate::palette::blob_color;
use crate::util::cerr;

/// CSS custom property read by the blob stylesheet.
pub const BLOB_COLOR_PROPERTY: &str = "--blob-color";

/// Markers drawn in every cell. Not sized from `blob_count`.
pub const BLOB_MARKERS_PER_CELL: usize = 3;

/// A visual sub-element of a cell that can take a display color.
pub trait CellSurface {
    fn set_display_color(&mut self, color: &str) -> Result<(), BoardError>;
}

impl CellSurface for HtmlElement {
    fn set_display_color(&mut self, color: &str) -> Result<(), BoardError> {
        self.style()
            .set_property(BLOB_COLOR_PROPERTY, color)
            .map_err(|err| {
                cerr(&format!("failed to set {BLOB_COLOR_PROPERTY}: {err:?}"));
                BoardError::DisplayColorRejected
            })
    }
}

/// Renderer state for one cell. Built with [`CellHandle::create`], colored by
/// the first [`CellHandle::attach_visuals`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellHandle {
    pos: (u32, u32),
    props: BoardProps,
    state: BoardCellState,
    applied: Option<&'static str>,
}

impl CellHandle {
    pub fn create(pos: (u32, u32), props: BoardProps, state: BoardCellState) -> Self {
        Self {
            pos,
            props,
            state,
            applied: None,
        }
    }

    pub fn pos(&self) -> (u32, u32) {
        self.pos
    }

    pub fn props(&self) -> BoardProps {
        self.props
    }

    pub fn state(&self) -> BoardCellState {
        self.state
    }

    pub fn color(&self) -> Result<&'static str, BoardError> {
        blob_color(self.state.player_index)
    }

    #[cfg(test)]
    pub fn applied_color(&self) -> Option<&'static str> {
        self.applied
    }

    /// Colors every element on the first call and returns the color used.
    /// Later calls leave the elements alone and return `Ok(None)`. An invalid
    /// owner fails before any element is touched; a rejected element leaves
    /// the handle unapplied.
    pub fn attach_visuals<S: CellSurface>(
        &mut self,
        elements: &mut [S],
    ) -> Result<Option<&'static str>, BoardError> {
        if self.applied.is_some() {
            return Ok(None);
        }
        let color = self.color()?;
        for elem in elements.iter_mut() {
            elem.set_display_color(color)?;
        }
        self.applied = Some(color);
        Ok(Some(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, BoardInitStrategy, GridSize};
    use crate::random::SeededRandom;

    #[derive(Default)]
    struct FakeBlob {
        colors: Vec<String>,
    }

    impl CellSurface for FakeBlob {
        fn set_display_color(&mut self, color: &str) -> Result<(), BoardError> {
            self.colors.push(color.to_string());
            Ok(())
        }
    }

    struct DetachedBlob;

    impl CellSurface for DetachedBlob {
        fn set_display_color(&mut self, _color: &str) -> Result<(), BoardError> {
            Err(BoardError::DisplayColorRejected)
        }
    }

    fn cell_markers() -> Vec<FakeBlob> {
        (0..BLOB_MARKERS_PER_CELL).map(|_| FakeBlob::default()).collect()
    }

    const PROPS: BoardProps = BoardProps { row_count: 9, col_count: 6 };

    fn handle(player_index: i32) -> CellHandle {
        CellHandle::create(
            (2, 3),
            PROPS,
            BoardCellState {
                player_index,
                blob_count: 2,
            },
        )
    }

    #[test]
    fn colors_every_blob_once() {
        let mut h = handle(1);
        let mut blobs: Vec<FakeBlob> = (0..3).map(|_| FakeBlob::default()).collect();
        assert_eq!(h.attach_visuals(&mut blobs), Ok(Some("#00dd63")));
        for b in &blobs {
            assert_eq!(b.colors, vec!["#00dd63".to_string()]);
        }
        assert_eq!(h.applied_color(), Some("#00dd63"));
    }

    #[test]
    fn second_attach_does_not_repaint() {
        let mut h = handle(0);
        let mut blobs = vec![FakeBlob::default()];
        h.attach_visuals(&mut blobs).unwrap();
        assert_eq!(h.attach_visuals(&mut blobs), Ok(None));
        assert_eq!(blobs[0].colors.len(), 1);
        assert_eq!(h.applied_color(), Some("#ff6600"));
    }

    #[test]
    fn color_is_stable_for_unchanged_state() {
        let h = handle(0);
        assert_eq!(h.color(), h.color());
        assert_eq!(h.color(), Ok("#ff6600"));
    }

    #[test]
    fn out_of_range_player_fails_without_mutation() {
        let mut h = handle(5);
        let mut blobs = vec![FakeBlob::default(), FakeBlob::default()];
        assert_eq!(
            h.attach_visuals(&mut blobs),
            Err(BoardError::PlayerIndexOutOfRange { index: 5 })
        );
        assert!(blobs.iter().all(|b| b.colors.is_empty()));
        assert_eq!(h.applied_color(), None);
    }

    #[test]
    fn cell_without_blobs_still_resolves_color() {
        let mut h = handle(1);
        let mut blobs: Vec<FakeBlob> = Vec::new();
        assert_eq!(h.attach_visuals(&mut blobs), Ok(Some("#00dd63")));
    }

    #[test]
    fn handle_keeps_its_inputs() {
        let h = handle(1);
        assert_eq!(h.pos(), (2, 3));
        assert_eq!(h.props(), PROPS);
        assert_eq!(h.state().blob_count, 2);
    }

    #[test]
    fn rejected_surface_is_reported_and_not_applied() {
        let mut h = handle(0);
        let mut blobs = vec![DetachedBlob];
        assert_eq!(
            h.attach_visuals(&mut blobs),
            Err(BoardError::DisplayColorRejected)
        );
        assert_eq!(h.applied_color(), None);
    }

    #[test]
    fn every_cell_gets_colored_regardless_of_blob_count() {
        let board = Board::new(
            GridSize::default(),
            BoardInitStrategy::Random(SeededRandom::new(1)),
        )
        .unwrap();
        assert!(board.cell_bindings().any(|b| b.state.blob_count == 0));
        for b in board.cell_bindings() {
            let mut h = CellHandle::create(b.pos, b.props, b.state);
            let mut markers = cell_markers();
            let color = h.attach_visuals(&mut markers).unwrap();
            assert!(color.is_some(), "cell {:?}", b.pos);
            assert!(markers.iter().all(|m| m.colors.len() == 1), "cell {:?}", b.pos);
        }
    }

    #[test]
    fn single_cell_board_gets_one_palette_color() {
        let board = Board::new(
            GridSize::new(1, 1),
            BoardInitStrategy::Random(SeededRandom::new(11)),
        )
        .unwrap();
        let bindings: Vec<_> = board.cell_bindings().collect();
        assert_eq!(bindings.len(), 1);
        let b = bindings[0];
        let mut h = CellHandle::create(b.pos, b.props, b.state);
        let mut markers = cell_markers();
        let color = h.attach_visuals(&mut markers).unwrap().unwrap();
        assert!(["#ff6600", "#00dd63"].contains(&color));
        for m in &markers {
            assert_eq!(m.colors, vec![color.to_string()]);
        }
    }
}

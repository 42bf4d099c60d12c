//! Board data model and board generation.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::random::RandomSource;

/// Host-facing board size, `rows x cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(9, 6)
    }
}

/// Board dimensions, fixed for the lifetime of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardProps {
    pub row_count: u32,
    pub col_count: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCellState {
    /// Owning player. Kept raw; checked against the palette when rendered.
    pub player_index: i32,
    pub blob_count: u32,
}

/// Row-major table of cells. Always rectangular when built by [`Board`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub rows: Vec<Vec<BoardCellState>>,
}

impl BoardState {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[cfg(test)]
    pub fn cell(&self, row: usize, col: usize) -> Option<&BoardCellState> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = ((usize, usize), &BoardCellState)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| ((r, c), cell)))
    }

    pub fn is_rectangular(&self) -> bool {
        let cols = self.col_count();
        self.rows.iter().all(|r| r.len() == cols)
    }

    pub fn matches(&self, props: &BoardProps) -> bool {
        self.is_rectangular()
            && self.row_count() == props.row_count as usize
            && self.col_count() == props.col_count as usize
    }
}

/// How a new board fills its cells.
#[derive(Clone, Debug)]
pub enum BoardInitStrategy<R> {
    Random(R),
    Zeroed,
}

/// Strategy selector exposed to the host page; the random source is
/// supplied when the board is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitMode {
    #[default]
    Random,
    Zeroed,
}

impl InitMode {
    pub fn strategy<R>(self, rng: R) -> BoardInitStrategy<R> {
        match self {
            InitMode::Random => BoardInitStrategy::Random(rng),
            InitMode::Zeroed => BoardInitStrategy::Zeroed,
        }
    }
}

/// Everything one cell renderer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBinding {
    pub pos: (u32, u32),
    pub props: BoardProps,
    pub state: BoardCellState,
}

/// The grid controller's data: props and state, generated once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    props: BoardProps,
    state: BoardState,
}

impl Board {
    pub fn new<R: RandomSource>(
        size: GridSize,
        strategy: BoardInitStrategy<R>,
    ) -> Result<Self, BoardError> {
        let props = board_props(size)?;
        let state = match strategy {
            BoardInitStrategy::Random(mut rng) => random_board_state(props, &mut rng),
            BoardInitStrategy::Zeroed => zeroed_board_state(props),
        };
        debug_assert!(state.matches(&props));
        Ok(Self { props, state })
    }

    pub fn props(&self) -> BoardProps {
        self.props
    }

    #[cfg(test)]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn cell_count(&self) -> usize {
        self.props.row_count as usize * self.props.col_count as usize
    }

    /// One binding per grid position, row-major.
    pub fn cell_bindings(&self) -> impl Iterator<Item = CellBinding> + '_ {
        let props = self.props;
        self.state.iter_cells().map(move |((r, c), cell)| CellBinding {
            pos: (r as u32, c as u32),
            props,
            state: *cell,
        })
    }
}

pub fn board_props(size: GridSize) -> Result<BoardProps, BoardError> {
    if size.rows == 0 || size.cols == 0 {
        return Err(BoardError::InvalidDimension {
            rows: size.rows,
            cols: size.cols,
        });
    }
    Ok(BoardProps {
        row_count: size.rows,
        col_count: size.cols,
    })
}

pub fn zeroed_board_state(props: BoardProps) -> BoardState {
    let row = vec![BoardCellState::default(); props.col_count as usize];
    BoardState {
        rows: vec![row; props.row_count as usize],
    }
}

/// Player is a fair coin; blob count is `round(u * 3)`, so 0 and 3 come up
/// about half as often as 1 and 2.
pub fn random_board_state<R: RandomSource>(props: BoardProps, rng: &mut R) -> BoardState {
    let rows = (0..props.row_count)
        .map(|_| {
            (0..props.col_count)
                .map(|_| {
                    let player_index = rng.next_unit().round() as i32;
                    let blob_count = (rng.next_unit() * 3.0).round() as u32;
                    BoardCellState {
                        player_index,
                        blob_count,
                    }
                })
                .collect()
        })
        .collect();
    BoardState { rows }
}

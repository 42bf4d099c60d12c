use web_sys::HtmlElement;
use yew::prelude::*;

use crate::error::BoardError;
use crate::model::{BoardCellState, BoardProps};
use crate::render::{BLOB_MARKERS_PER_CELL, CellHandle};
use crate::util::cerr;

#[derive(Properties, PartialEq, Clone)]
pub struct CellProps {
    pub pos: (u32, u32),
    pub props: BoardProps,
    pub state: BoardCellState,
}

#[function_component(Cell)]
pub fn cell(props: &CellProps) -> Html {
    let handle = use_mut_ref(|| CellHandle::create(props.pos, props.props, props.state));
    // Fixed marker template; the blob count is exposed as data only.
    let blob_refs = use_memo((), |_| {
        (0..BLOB_MARKERS_PER_CELL)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let failure = use_state(|| None::<BoardError>);

    {
        let handle = handle.clone();
        let blob_refs = blob_refs.clone();
        let failure = failure.clone();
        use_effect_with((), move |_| {
            let mut blobs: Vec<HtmlElement> = blob_refs
                .iter()
                .filter_map(|r| r.cast::<HtmlElement>())
                .collect();
            let mut handle = handle.borrow_mut();
            if let Err(err) = handle.attach_visuals(&mut blobs) {
                let (row, col) = handle.pos();
                cerr(&format!("cell ({row}, {col}): {err}"));
                failure.set(Some(err));
            }
            || ()
        });
    }

    if let Some(err) = *failure {
        return html! { <div class="cell cell-error" title={err.to_string()}>{"!"}</div> };
    }

    let handle = handle.borrow();
    let (row, col) = handle.pos();
    let board = handle.props();
    let label = format!(
        "row {} of {}, column {} of {}",
        row + 1,
        board.row_count,
        col + 1,
        board.col_count
    );
    html! {
        <div
            class="cell"
            aria-label={label}
            data-row={row.to_string()}
            data-col={col.to_string()}
            data-blobs={handle.state().blob_count.to_string()}
        >
            { for blob_refs.iter().map(|r| html! { <span class="blob" ref={r.clone()}></span> }) }
        </div>
    }
}

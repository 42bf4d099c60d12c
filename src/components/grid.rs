use yew::prelude::*;

use crate::model::{Board, GridSize, InitMode};
use crate::random::HostRandom;
use crate::util::{cerr, clog};

use super::cell::Cell;

#[derive(Properties, PartialEq, Clone)]
pub struct GridProps {
    #[prop_or_default]
    pub size: GridSize,
    #[prop_or_default]
    pub init: InitMode,
    /// Seeds the board; without it cells come from `Math.random()`.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    // Built once; later prop changes do not regenerate the board.
    let board = use_state(|| {
        let rng = HostRandom::from_seed(props.seed);
        let board = Board::new(props.size, props.init.strategy(rng));
        match &board {
            Ok(b) => match serde_json::to_string(&b.props()) {
                Ok(json) => clog(&format!(
                    "board generated: {json}, {} cells ({:?}, seed {:?})",
                    b.cell_count(),
                    props.init,
                    props.seed
                )),
                Err(err) => clog(&format!("board generated ({err})")),
            },
            Err(err) => cerr(&format!("board not generated: {err}")),
        }
        board
    });

    let board = match &*board {
        Ok(b) => b,
        Err(err) => {
            return html! { <div class="grid-error">{ err.to_string() }</div> };
        }
    };

    let style = format!("grid-template-columns: repeat({}, auto);", board.props().col_count);
    html! {
        <div class="grid" {style}>
            { for board.cell_bindings().map(|b| {
                let key = format!("{}-{}", b.pos.0, b.pos.1);
                html! { <Cell key={key} pos={b.pos} props={b.props} state={b.state} /> }
            }) }
        </div>
    }
}

use wasm_bindgen::JsValue;

pub const GAME_PATH: &str = "/game";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Game,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Show(Route),
    Redirect(&'static str),
}

impl Route {
    /// `/game` shows the board; every other path redirects there.
    pub fn resolve(path: &str) -> Resolution {
        match path.trim_end_matches('/') {
            GAME_PATH => Resolution::Show(Route::Game),
            _ => Resolution::Redirect(GAME_PATH),
        }
    }
}

/// Resolves the current page path, rewriting the URL in place when it has to
/// redirect. Query strings survive the redirect.
pub fn current_route() -> Route {
    let Some(win) = web_sys::window() else {
        return Route::Game;
    };
    let location = win.location();
    let path = location.pathname().unwrap_or_default();
    match Route::resolve(&path) {
        Resolution::Show(route) => route,
        Resolution::Redirect(target) => {
            let search = location.search().unwrap_or_default();
            let url = format!("{target}{search}");
            if let Ok(history) = win.history() {
                if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    crate::util::cerr(&format!("redirect to {url} failed: {err:?}"));
                }
            }
            Route::Game
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_path_is_shown() {
        assert_eq!(Route::resolve("/game"), Resolution::Show(Route::Game));
        assert_eq!(Route::resolve("/game/"), Resolution::Show(Route::Game));
    }

    #[test]
    fn everything_else_redirects() {
        for path in ["/", "", "/games", "/other/place", "/game/1"] {
            assert_eq!(Route::resolve(path), Resolution::Redirect(GAME_PATH), "{path}");
        }
    }
}

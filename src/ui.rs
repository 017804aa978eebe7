//! HUD collaborators: score text and the start/game-over menu

/// Score display in two places: the in-game HUD and the end-of-game summary
pub trait Scoreboard {
    fn show_score(&mut self, score: u64);
    fn show_final_score(&mut self, score: u64);
}

/// Overlay menu holding the start button
pub trait Menu {
    fn show_menu(&mut self);
    fn hide_menu(&mut self);
}

/// Everything the session controller talks to besides the renderer
pub trait Hud: Scoreboard + Menu {}

impl<T: Scoreboard + Menu> Hud for T {}

/// HUD that just remembers what it was told
#[derive(Debug, Clone, Default)]
pub struct HeadlessHud {
    pub score: u64,
    pub final_score: u64,
    pub menu_visible: bool,
    /// Number of `show_score` calls
    pub score_updates: u64,
}

impl Scoreboard for HeadlessHud {
    fn show_score(&mut self, score: u64) {
        self.score = score;
        self.score_updates += 1;
    }

    fn show_final_score(&mut self, score: u64) {
        self.final_score = score;
    }
}

impl Menu for HeadlessHud {
    fn show_menu(&mut self) {
        self.menu_visible = true;
    }

    fn hide_menu(&mut self) {
        self.menu_visible = false;
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement};

    use super::{Menu, Scoreboard};

    /// HUD backed by DOM elements
    pub struct DomHud {
        score: Element,
        big_score: Element,
        menu: HtmlElement,
    }

    impl DomHud {
        /// Look up `#scoreElement`, `#bigScoreElement` and `#gameMenu`
        pub fn from_document(document: &Document) -> Result<Self, JsValue> {
            let find = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
            };
            Ok(Self {
                score: find("scoreElement")?,
                big_score: find("bigScoreElement")?,
                menu: find("gameMenu")?.dyn_into::<HtmlElement>()?,
            })
        }
    }

    impl Scoreboard for DomHud {
        fn show_score(&mut self, score: u64) {
            self.score.set_text_content(Some(&score.to_string()));
        }

        fn show_final_score(&mut self, score: u64) {
            self.big_score.set_text_content(Some(&score.to_string()));
        }
    }

    impl Menu for DomHud {
        fn show_menu(&mut self) {
            let _ = self.menu.style().set_property("display", "flex");
        }

        fn hide_menu(&mut self) {
            let _ = self.menu.style().set_property("display", "none");
        }
    }
}

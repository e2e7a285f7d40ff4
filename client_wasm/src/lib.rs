//! Browser client for single-player Pong
//!
//! Canvas 2D rendering, `<audio>` playback and DOM controls wrapped around
//! the `game_core` driver. The page's script owns the event listeners and
//! the `requestAnimationFrame` loop and calls the exported functions below.
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod canvas;
mod dom;
mod input;
mod logger;

use std::cell::RefCell;

use audio::DomAudio;
use canvas::CanvasPresenter;
use dom::{element, DomControls};
use game_core::{Config, Game};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement};

/// Main client state
struct Client {
    game: Game,
    canvas: HtmlCanvasElement,
}

impl Client {
    fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let config = Config::new();
        let canvas: HtmlCanvasElement = element(&document, "pongCanvas")?;
        canvas.set_width(config.court_width as u32);
        canvas.set_height(config.court_height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let audio = DomAudio::new(
            element::<HtmlAudioElement>(&document, "hitSound")?,
            element::<HtmlAudioElement>(&document, "scoreSound")?,
            element::<HtmlAudioElement>(&document, "music")?,
        );
        let controls = DomControls::from_document(&document)?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            config,
            seed,
            Box::new(audio),
            Box::new(CanvasPresenter::new(ctx)),
            Box::new(controls),
        )
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        log::info!("client ready, seed={seed}");
        Ok(Self { game, canvas })
    }

    fn court_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        input::to_court(&self.canvas, self.game.config().court(), client_x, client_y)
    }
}

thread_local! {
    // Global client storage for WASM bindings
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Look up the page elements, build the game and draw the first frame
#[wasm_bindgen]
pub fn init_client() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let mut client = Client::new()?;
    client.game.render();
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

/// One display frame: advance the simulation if running, then draw
#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.game.frame())
}

#[wasm_bindgen]
pub fn start_match() -> Result<bool, JsValue> {
    with_client(|client| client.game.start())
}

#[wasm_bindgen]
pub fn toggle_pause() -> Result<bool, JsValue> {
    with_client(|client| client.game.toggle_pause())
}

#[wasm_bindgen]
pub fn toggle_music() -> Result<bool, JsValue> {
    with_client(|client| client.game.toggle_mute())
}

#[wasm_bindgen]
pub fn pointer_move(client_x: f64, client_y: f64) -> Result<(), JsValue> {
    with_client(|client| {
        let (_, y) = client.court_point(client_x, client_y);
        client.game.mouse_move(y);
    })
}

/// Returns true when the touch steers the paddle and the page should call
/// `preventDefault`
#[wasm_bindgen]
pub fn touch_start(client_x: f64, client_y: f64) -> Result<bool, JsValue> {
    with_client(|client| {
        let (x, y) = client.court_point(client_x, client_y);
        client.game.touch_start(x, y)
    })
}

#[wasm_bindgen]
pub fn touch_move(client_x: f64, client_y: f64) -> Result<bool, JsValue> {
    with_client(|client| {
        let (_, y) = client.court_point(client_x, client_y);
        client.game.touch_move(y)
    })
}

#[wasm_bindgen]
pub fn touch_end() -> Result<(), JsValue> {
    with_client(|client| client.game.touch_end())
}

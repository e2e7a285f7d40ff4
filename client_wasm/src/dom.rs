//! DOM lookups and the score/message/button controls

use game_core::{mute_label, pause_label, Message, Score, SinkError, UiControls};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

/// Fetch an element by id and cast it to the expected type
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{id} has the wrong type")))
}

pub struct DomControls {
    player_score: Element,
    ai_score: Element,
    message: Element,
    pause_btn: HtmlButtonElement,
    music_btn: HtmlButtonElement,
}

impl DomControls {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player_score: element(document, "playerScore")?,
            ai_score: element(document, "aiScore")?,
            message: element(document, "message")?,
            pause_btn: element(document, "pauseBtn")?,
            music_btn: element(document, "musicBtn")?,
        })
    }
}

impl UiControls for DomControls {
    fn set_scores(&mut self, score: Score) -> Result<(), SinkError> {
        self.player_score
            .set_text_content(Some(&score.player.to_string()));
        self.ai_score.set_text_content(Some(&score.ai.to_string()));
        Ok(())
    }

    fn set_message(&mut self, message: Message) -> Result<(), SinkError> {
        self.message.set_text_content(Some(message.text()));
        Ok(())
    }

    fn set_pause_control(&mut self, enabled: bool, paused: bool) -> Result<(), SinkError> {
        self.pause_btn.set_disabled(!enabled);
        self.pause_btn.set_text_content(Some(pause_label(paused)));
        Ok(())
    }

    fn set_mute_control(&mut self, enabled: bool, muted: bool) -> Result<(), SinkError> {
        self.music_btn.set_disabled(!enabled);
        self.music_btn.set_text_content(Some(mute_label(muted)));
        Ok(())
    }
}

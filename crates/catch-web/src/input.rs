//! DOM listeners that translate pointer, touch and keyboard input into `InputEvent`s.

use std::rc::Rc;

use catch_engine::input::keys;
use catch_engine::{Game, InputEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent, TouchEvent};

use crate::app::WebApp;
use crate::dom::client_to_world;

/// Keys whose default browser action (page scroll) is suppressed.
const CAPTURED_KEYS: [u32; 2] = [keys::ARROW_LEFT, keys::ARROW_RIGHT];

fn to_world(canvas: &HtmlCanvasElement, world: (f32, f32), client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    client_to_world(
        (client_x as f64, client_y as f64),
        (rect.left(), rect.top(), rect.width(), rect.height()),
        world,
    )
}

pub fn attach<G: Game + 'static>(app: &Rc<WebApp<G>>) -> Result<(), JsValue> {
    let canvas = app.canvas();
    let world = app.world_size();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    // Pointer move: absolute catcher targeting
    {
        let app = app.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            let (x, y) = to_world(&target, world, evt.client_x(), evt.client_y());
            app.push_input(InputEvent::PointerMove { x, y });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer down: also a user gesture for audio unlock
    {
        let app = app.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            let (x, y) = to_world(&target, world, evt.client_x(), evt.client_y());
            app.push_input(InputEvent::PointerDown { x, y });
            app.push_input(InputEvent::PointerMove { x, y });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch: follow the first finger and keep the page from scrolling
    for name in ["touchstart", "touchmove"] {
        let app = app.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            if let Some(touch) = evt.touches().get(0) {
                evt.prevent_default();
                let (x, y) = to_world(&target, world, touch.client_x(), touch.client_y());
                app.push_input(InputEvent::PointerMove { x, y });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard hold-state
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key_code = evt.key_code();
            if CAPTURED_KEYS.contains(&key_code) {
                evt.prevent_default();
            }
            if !evt.repeat() {
                app.push_input(InputEvent::KeyDown { key_code });
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            app.push_input(InputEvent::KeyUp { key_code: evt.key_code() });
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

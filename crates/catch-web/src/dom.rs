//! DOM helpers: canvas lookup, coordinate mapping, host-page events.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, HtmlCanvasElement};

/// Find the canvas the game draws into.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)))
}

/// Dispatch a `CustomEvent` on `window`. `detail` becomes `event.detail` (a JSON string).
pub fn dispatch(name: &str, detail: Option<&str>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(&JsValue::from_str(detail));
    }
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Client (CSS pixel) coordinates → world coordinates, given the canvas bounding rect.
pub fn client_to_world(
    client: (f64, f64),
    rect: (f64, f64, f64, f64),
    world: (f32, f32),
) -> (f32, f32) {
    let (left, top, width, height) = rect;
    let sx = if width > 0.0 { world.0 as f64 / width } else { 1.0 };
    let sy = if height > 0.0 { world.1 as f64 / height } else { 1.0 };
    (
        ((client.0 - left) * sx) as f32,
        ((client.1 - top) * sy) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_scaled_canvas() {
        // 400×600 world shown at 200×300 CSS pixels, offset by (10, 20)
        let (x, y) = client_to_world((110.0, 170.0), (10.0, 20.0, 200.0, 300.0), (400.0, 600.0));
        assert_eq!((x, y), (200.0, 300.0));
    }

    #[test]
    fn zero_sized_rect_does_not_divide_by_zero() {
        let (x, y) = client_to_world((5.0, 5.0), (0.0, 0.0, 0.0, 0.0), (400.0, 600.0));
        assert_eq!((x, y), (5.0, 5.0));
    }
}

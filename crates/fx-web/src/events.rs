use crate::dom::{self, DomSurface};
use fx_core::{AmbientField, BurstController, RegionId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct BurstWiring {
    pub surface: Rc<RefCell<DomSurface>>,
    pub bursts: Rc<RefCell<BurstController>>,
}

pub fn wire_trigger_regions(w: BurstWiring) {
    let ids: Vec<RegionId> = w.surface.borrow().region_ids().collect();
    for id in ids {
        let Some(el) = w.surface.borrow().region(id).cloned() else {
            continue;
        };
        wire_mouseenter(&w, &el, id);
        wire_mouseleave(&w, &el, id);
    }
}

fn wire_mouseenter(w: &BurstWiring, el: &web::HtmlElement, id: RegionId) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut surface = w.surface.borrow_mut();
        let n = w.bursts.borrow_mut().on_trigger_enter(id, &mut *surface);
        log::debug!("[burst] region {} spawned {}", id.0, n);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &BurstWiring, el: &web::HtmlElement, id: RegionId) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut surface = w.surface.borrow_mut();
        w.bursts.borrow_mut().on_trigger_leave(id, &mut *surface);
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Records the pointer for the camera. No camera math runs here; the frame
/// loop does that.
pub fn wire_pointer_move(document: &web::Document, field: Rc<RefCell<AmbientField>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        field
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<AmbientField>>) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        if let Some(window) = web::window() {
            let size = dom::viewport_size(&window);
            field.borrow_mut().on_resize(size.x, size.y);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

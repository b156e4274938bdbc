#![cfg(target_arch = "wasm32")]
use fx_core::{AmbientField, AnimationRegistry, BurstController, FrameClock, FxConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = FxConfig::default();

    // One registry per page, shared by every burst controller.
    let registry = Arc::new(AnimationRegistry::new());
    init_bursts(&document, &config, registry);
    init_field(&window, &document, &config).await;
    Ok(())
}

fn init_bursts(document: &web::Document, config: &FxConfig, registry: Arc<AnimationRegistry>) {
    let surface = dom::DomSurface::discover(document);
    if surface.is_empty() {
        log::info!("no trigger region on page; bursts disabled");
        return;
    }
    let bursts = BurstController::new(config.burst.clone(), registry);
    events::wire_trigger_regions(events::BurstWiring {
        surface: Rc::new(RefCell::new(surface)),
        bursts: Rc::new(RefCell::new(bursts)),
    });
}

async fn init_field(window: &web::Window, document: &web::Document, config: &FxConfig) {
    let Some(canvas) = document
        .get_element_by_id(constants::CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::info!("no #{} canvas; ambient field disabled", constants::CANVAS_ID);
        return;
    };
    dom::sync_canvas_backing_size(&canvas);
    let size = dom::viewport_size(window);
    let field = AmbientField::new(config, size.x, size.y);

    let Some(gpu) = frame::init_gpu(&canvas, field.points()).await else {
        return;
    };
    let field = Rc::new(RefCell::new(field));
    events::wire_pointer_move(document, field.clone());
    events::wire_resize(&canvas, field.clone());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        field,
        canvas,
        gpu,
        clock: FrameClock::start(),
    })));
}

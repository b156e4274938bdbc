use crate::constants::{PARTICLE_CLASS, PARTICLE_SELECTOR, TRIGGER_SELECTOR};
use fx_core::constants::{DRIFT_X_PROPERTY, DRIFT_Y_PROPERTY};
use fx_core::{
    AnimationBinding, AnimationDefinition, AnimationStyle, FxError, FxResult, Particle,
    ParticleSurface, RegionId,
};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS-pixel size of the window's layout viewport.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Vec2::new(w as f32, h as f32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Trigger regions found on the page, addressed by document order.
pub struct DomSurface {
    document: web::Document,
    regions: Vec<web::HtmlElement>,
}

impl DomSurface {
    pub fn discover(document: &web::Document) -> Self {
        let mut regions = Vec::new();
        if let Ok(list) = document.query_selector_all(TRIGGER_SELECTOR) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                    regions.push(el);
                }
            }
        }
        Self {
            document: document.clone(),
            regions,
        }
    }

    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> {
        (0..self.regions.len() as u32).map(RegionId)
    }

    pub fn region(&self, id: RegionId) -> Option<&web::HtmlElement> {
        self.regions.get(id.0 as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn build_particle(&self, particle: &Particle, bindings: &[AnimationBinding]) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<web::HtmlElement>()
            .map_err(wasm_bindgen::JsValue::from)?;
        el.class_list().add_1(PARTICLE_CLASS)?;
        let style = el.style();
        style.set_property("width", &format!("{}px", particle.size))?;
        style.set_property("height", &format!("{}px", particle.size))?;
        style.set_property("left", &format!("{}px", particle.position.x))?;
        style.set_property("top", &format!("{}px", particle.position.y))?;
        style.set_property(DRIFT_X_PROPERTY, &format!("{}px", particle.drift.x))?;
        style.set_property(DRIFT_Y_PROPERTY, &format!("{}px", particle.drift.y))?;

        let anim = AnimationStyle::from_bindings(bindings);
        style.set_property("animation-name", &anim.name)?;
        style.set_property("animation-duration", &anim.duration)?;
        style.set_property("animation-timing-function", &anim.timing_function)?;
        style.set_property("animation-iteration-count", &anim.iteration_count)?;
        style.set_property("animation-direction", &anim.direction)?;
        Ok(el)
    }
}

impl ParticleSurface for DomSurface {
    fn region_bounds(&self, region: RegionId) -> Option<Vec2> {
        self.region(region)
            .map(|el| Vec2::new(el.offset_width() as f32, el.offset_height() as f32))
    }

    fn install_animation(&mut self, definition: &AnimationDefinition) -> FxResult<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| FxError::StyleUnavailable(definition.name.to_string()))?;
        if self.document.get_element_by_id(definition.element_id).is_some() {
            return Ok(());
        }
        let install_err = |e: wasm_bindgen::JsValue| FxError::Install {
            name: definition.name.to_string(),
            reason: format!("{:?}", e),
        };
        let style_el = self.document.create_element("style").map_err(install_err)?;
        style_el.set_id(definition.element_id);
        style_el.set_text_content(Some(&definition.to_css()));
        head.append_child(&style_el).map_err(install_err)?;
        Ok(())
    }

    fn clear_particles(&mut self, region: RegionId) {
        let Some(el) = self.region(region) else {
            return;
        };
        if let Ok(list) = el.query_selector_all(PARTICLE_SELECTOR) {
            for i in 0..list.length() {
                if let Some(node) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    node.remove();
                }
            }
        }
    }

    fn attach_particle(&mut self, region: RegionId, particle: &Particle, bindings: &[AnimationBinding]) -> bool {
        let Some(parent) = self.region(region) else {
            return false;
        };
        match self
            .build_particle(particle, bindings)
            .and_then(|el| parent.append_child(&el))
        {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[burst] particle node failed: {:?}", e);
                false
            }
        }
    }
}

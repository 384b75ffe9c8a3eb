//! Browser entry: canvas effects, animation frames, event listeners

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use crate::config::{FieldConfig, FxConfig, OrbConfig};
use crate::error::{FxError, Result};
use crate::renderer::{CanvasPainter, scene};
use crate::resolve_surface_size;
use crate::sim::{LoopState, OrbMascot, ParticleField};

use super::widgets;

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub(crate) fn document() -> Result<Document> {
    window()?.document().ok_or(FxError::NoWindow)
}

/// Viewport size in CSS pixels
pub(crate) fn viewport_size(window: &Window) -> (u32, u32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Container client size, falling back to the viewport on zero axes
fn measure(container: &Element, window: &Window) -> (u32, u32) {
    let client = (
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    );
    resolve_surface_size(client, viewport_size(window))
}

pub(crate) fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<()> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// `requestAnimationFrame` loop that can be stopped.
///
/// Once `stop` returns, a frame that was already requested is cancelled, and
/// if the browser fires it anyway its body is skipped.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    state: RefCell<LoopState<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    /// `on_frame` receives the frame timestamp in milliseconds
    pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            state: RefCell::new(LoopState::Stopped),
            callback: RefCell::new(None),
        });

        // Weak so the closure doesn't keep its own owner alive
        let weak = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let run = inner.state.borrow_mut().frame_fired();
            if !run {
                return;
            }
            on_frame(time);
            inner.request();
        });
        *inner.callback.borrow_mut() = Some(closure);

        Self { inner }
    }

    pub fn start(&self) {
        let first = self.inner.state.borrow_mut().start();
        if first {
            self.inner.request();
        }
    }

    pub fn stop(&self) {
        let pending = self.inner.state.borrow_mut().stop();
        if let (Some(handle), Some(window)) = (pending, web_sys::window()) {
            if let Err(e) = window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.state.borrow().is_running()
    }
}

impl FrameLoopInner {
    fn request(&self) {
        if !self.state.borrow().is_running() {
            return;
        }
        let callback = self.callback.borrow();
        let (Some(cb), Some(window)) = (callback.as_ref(), web_sys::window()) else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.state.borrow_mut().scheduled(handle),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Event listener removed from its target on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn add(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Look up a container, style it, and append a fresh canvas to it
fn mount_canvas(
    document: &Document,
    id: &str,
    container_styles: &[(&str, &str)],
    canvas_styles: &[(&str, &str)],
) -> Result<Option<(HtmlElement, CanvasPainter)>> {
    let Some(container) = document.get_element_by_id(id) else {
        log::debug!("No #{} on page, effect disabled", id);
        return Ok(None);
    };
    let container: HtmlElement = container
        .dyn_into()
        .map_err(|_| FxError::Js(format!("#{} is not an HTML element", id)))?;
    set_styles(&container, container_styles)?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| FxError::Js("created element is not a canvas".to_string()))?;
    set_styles(&canvas, canvas_styles)?;
    container.append_child(&canvas)?;

    Ok(Some((container, CanvasPainter::new(canvas)?)))
}

struct FieldState {
    field: ParticleField,
    painter: CanvasPainter,
}

/// Particle field mounted in `#particles-js`
pub struct ParticleFieldView {
    frame: FrameLoop,
    painter_canvas: HtmlCanvasElement,
    _listeners: Vec<Listener>,
}

impl ParticleFieldView {
    pub const CONTAINER_ID: &'static str = "particles-js";

    /// `Ok(None)` when the page has no container
    pub fn mount(config: &FieldConfig, seed: u64) -> Result<Option<Self>> {
        let window = window()?;
        let document = document()?;
        let Some((container, painter)) = mount_canvas(
            &document,
            Self::CONTAINER_ID,
            &[
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("height", "100%"),
                ("z-index", "0"),
            ],
            &[("width", "100%"), ("height", "100%")],
        )?
        else {
            return Ok(None);
        };

        let (w, h) = measure(&container, &window);
        painter.resize(w, h);
        let painter_canvas = painter.canvas().clone();
        let field = ParticleField::from_seed(seed, w as f64, h as f64, config.clone());
        log::info!("Particle field mounted: {}x{}, {} particles", w, h, field.len());

        let state = Rc::new(RefCell::new(FieldState { field, painter }));

        let resize = {
            let state = state.clone();
            Listener::add(&window, "resize", move |_| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (w, h) = measure(&container, &window);
                let mut s = state.borrow_mut();
                s.painter.resize(w, h);
                s.field.resize(w as f64, h as f64);
            })?
        };

        let frame = FrameLoop::new(move |_time| {
            let s = &mut *state.borrow_mut();
            s.field.step();
            let cmds = scene::particle_field(&s.field);
            if let Err(e) = s.painter.paint(&cmds) {
                log::warn!("Particle frame failed: {}", e);
            }
        });
        frame.start();

        Ok(Some(Self {
            frame,
            painter_canvas,
            _listeners: vec![resize],
        }))
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }
}

impl Drop for ParticleFieldView {
    fn drop(&mut self) {
        self.frame.stop();
        self.painter_canvas.remove();
        log::info!("Particle field disposed");
    }
}

struct OrbState {
    mascot: OrbMascot,
    painter: CanvasPainter,
}

/// Orb mascot mounted in `#mascot-container`
pub struct OrbView {
    frame: FrameLoop,
    painter_canvas: HtmlCanvasElement,
    _listeners: Vec<Listener>,
}

impl OrbView {
    pub const CONTAINER_ID: &'static str = "mascot-container";

    /// `Ok(None)` when the page has no container
    pub fn mount(config: &OrbConfig) -> Result<Option<Self>> {
        let window = window()?;
        let document = document()?;
        let Some((container, painter)) = mount_canvas(
            &document,
            Self::CONTAINER_ID,
            &[
                ("position", "absolute"),
                ("right", "8%"),
                ("bottom", "8%"),
                ("width", "320px"),
                ("height", "320px"),
                ("z-index", "2"),
            ],
            &[],
        )?
        else {
            return Ok(None);
        };

        let (w, h) = measure(&container, &window);
        painter.resize(w, h);
        let painter_canvas = painter.canvas().clone();
        let mascot = OrbMascot::new(w as f64, h as f64, config.clone());
        log::info!("Orb mascot mounted: {}x{}", w, h);

        let state = Rc::new(RefCell::new(OrbState { mascot, painter }));
        let mut listeners = Vec::with_capacity(3);

        {
            let state = state.clone();
            let container = container.clone();
            listeners.push(Listener::add(&window, "resize", move |_| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (w, h) = measure(&container, &window);
                let mut s = state.borrow_mut();
                s.painter.resize(w, h);
                s.mascot.resize(w as f64, h as f64);
            })?);
        }

        {
            let state = state.clone();
            let target = container.clone();
            listeners.push(Listener::add(&container, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = target.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                state.borrow_mut().mascot.pointer_move(x, y);
            })?);
        }

        {
            let state = state.clone();
            listeners.push(Listener::add(&container, "mouseleave", move |_| {
                state.borrow_mut().mascot.pointer_leave();
            })?);
        }

        let frame = FrameLoop::new(move |time| {
            let s = &mut *state.borrow_mut();
            s.mascot.step();
            let pose = s.mascot.pose(time);
            let cmds = scene::orb(&s.mascot, &pose);
            if let Err(e) = s.painter.paint(&cmds) {
                log::warn!("Orb frame failed: {}", e);
            }
        });
        frame.start();

        Ok(Some(Self {
            frame,
            painter_canvas,
            _listeners: listeners,
        }))
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }
}

impl Drop for OrbView {
    fn drop(&mut self) {
        self.frame.stop();
        self.painter_canvas.remove();
        log::info!("Orb mascot disposed");
    }
}

/// Mounted canvas effects
#[derive(Default)]
pub struct Effects {
    pub particles: Option<ParticleFieldView>,
    pub orb: Option<OrbView>,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

/// Log a failed optional feature and keep going
pub(crate) fn report<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("{} unavailable: {}", what, e);
            None
        }
    }
}

/// Mount both canvas effects, replacing any already running
pub fn mount_effects(config: &FxConfig) -> Effects {
    let seed = js_sys::Date::now() as u64;
    Effects {
        particles: report("Particle field", ParticleFieldView::mount(&config.field, seed)).flatten(),
        orb: report("Orb mascot", OrbView::mount(&config.orb)).flatten(),
    }
}

/// Stop both animation loops and remove their canvases
#[wasm_bindgen(js_name = disposeEffects)]
pub fn dispose_effects() {
    let effects = EFFECTS.with(|e| e.borrow_mut().take());
    if effects.is_none() {
        log::debug!("No effects to dispose");
    }
}

/// Start page scripts: canvas effects and widgets
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from(format!("logger init failed: {}", e)));
    }

    log::info!("Portfolio FX starting...");

    let config = FxConfig::load();

    // Drop any previous mount first so its loops stop before new ones start
    dispose_effects();
    let effects = mount_effects(&config);
    EFFECTS.with(|e| *e.borrow_mut() = Some(effects));

    widgets::setup_all(&config);

    log::info!("Portfolio FX running!");
}

//! Browser runtime
//!
//! Wires a [`Session`] to the page: canvas drawing, keyboard listeners, the
//! spawn interval, `requestAnimationFrame` and the HUD elements.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, PageTransitionEvent,
    Window,
};

use super::Registration;
use crate::error::{Error, Result};
use crate::renderer::CanvasSurface;
use crate::session::{LoopState, Session};
use crate::tuning::Tuning;
use crate::ui::HudView;

const CANVAS_ID: &str = "canvas";
const TUNING_ID: &str = "tuning";

/// Everything the callbacks share
struct Runtime {
    window: Window,
    document: Document,
    surface: CanvasSurface,
    session: Session,
    /// Listeners and interval owned by the current session
    registrations: Vec<Registration>,
    /// Bumped on every teardown; frame callbacks from older sessions bail out
    generation: u32,
}

type Shared = Rc<RefCell<Runtime>>;

/// Boot the game on the current page
///
/// Fails without registering anything if there is no canvas to draw on.
pub fn run() -> Result<()> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Plane Simulator starting...");

    let window = web_sys::window().ok_or_else(|| Error::SurfaceUnavailable("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::SurfaceUnavailable("no document".into()))?;

    let tuning = read_tuning(&document);
    let ctx = canvas_context(&document, &tuning)?;

    let seed = js_sys::Date::now() as u64;
    let rt: Shared = Rc::new(RefCell::new(Runtime {
        window,
        document,
        surface: CanvasSurface::new(ctx),
        session: Session::new(tuning, seed),
        registrations: Vec::new(),
        generation: 0,
    }));

    start_session(&rt)?;
    setup_restart_button(&rt);
    setup_page_lifecycle(&rt);

    log::info!("Plane Simulator running!");
    Ok(())
}

/// Optional inline `<script id="tuning" type="application/json">`
fn read_tuning(document: &Document) -> Tuning {
    let json = document
        .get_element_by_id(TUNING_ID)
        .and_then(|el| el.text_content());
    Tuning::from_json_or_default(json.as_deref())
}

fn canvas_context(document: &Document, tuning: &Tuning) -> Result<CanvasRenderingContext2d> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| Error::SurfaceUnavailable(format!("no #{} element", CANVAS_ID)))?
        .dyn_into()
        .map_err(|_| Error::SurfaceUnavailable(format!("#{} is not a canvas", CANVAS_ID)))?;

    canvas.set_width(tuning.width as u32);
    canvas.set_height(tuning.height as u32);

    canvas
        .get_context("2d")
        .map_err(|e| Error::SurfaceUnavailable(format!("getContext failed: {:?}", e)))?
        .ok_or_else(|| Error::SurfaceUnavailable("2d context unsupported".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::SurfaceUnavailable("unexpected context type".into()))
}

/// Register the session's listeners and interval, then start the loop
fn start_session(rt: &Shared) -> Result<()> {
    // A failure part way drops the guards already built, releasing them
    let registrations = vec![
        listen_key(rt, "keydown", true)?,
        listen_key(rt, "keyup", false)?,
        spawn_interval(rt)?,
    ];

    let generation = {
        let mut r = rt.borrow_mut();
        r.registrations = registrations;
        update_hud(&r.document, &r.session.hud());
        r.generation
    };

    request_frame(rt.clone(), generation);
    Ok(())
}

/// Release the current session's listeners and interval and stop its loop
fn teardown(rt: &Shared) {
    let registrations = {
        let mut r = rt.borrow_mut();
        r.generation = r.generation.wrapping_add(1);
        std::mem::take(&mut r.registrations)
    };
    // Dropped outside the borrow: the handlers hold clones of `rt`
    drop(registrations);
}

/// Pick a torn-down session back up where it left off
fn resume(rt: &Shared) -> Result<()> {
    {
        let mut r = rt.borrow_mut();
        if !r.registrations.is_empty() {
            return Ok(());
        }
        r.session.release_keys();
    }
    start_session(rt)
}

fn restart(rt: &Shared) -> Result<()> {
    teardown(rt);
    rt.borrow_mut().session.restart(js_sys::Date::now() as u64);
    start_session(rt)
}

fn listen_key(rt: &Shared, event: &'static str, held: bool) -> Result<Registration> {
    let window = rt.borrow().window.clone();
    let handler = {
        let rt = rt.clone();
        Closure::<dyn FnMut(_)>::new(move |e: KeyboardEvent| {
            let code = e.code();
            let mut r = rt.borrow_mut();
            if held {
                r.session.key_down(&code);
            } else {
                r.session.key_up(&code);
            }
        })
    };

    window
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| Error::Platform(format!("add {} listener: {:?}", event, e)))?;

    Ok(Registration::new(event, move || {
        let _ = window.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }))
}

fn spawn_interval(rt: &Shared) -> Result<Registration> {
    let (window, interval_ms) = {
        let r = rt.borrow();
        (r.window.clone(), r.session.spawn_interval_ms())
    };
    let handler = {
        let rt = rt.clone();
        Closure::<dyn FnMut()>::new(move || rt.borrow_mut().session.on_spawn_timer())
    };

    let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            handler.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(|e| Error::Platform(format!("setInterval: {:?}", e)))?;

    Ok(Registration::new("spawn interval", move || {
        window.clear_interval_with_handle(handle);
        drop(handler);
    }))
}

fn request_frame(rt: Shared, generation: u32) {
    let window = rt.borrow().window.clone();
    let closure = Closure::once(move |_time: f64| {
        run_frame(rt, generation);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
        return;
    }
    closure.forget();
}

fn run_frame(rt: Shared, generation: u32) {
    let next = {
        let mut guard = rt.borrow_mut();
        let r = &mut *guard;
        if r.generation != generation {
            return;
        }
        let next = r.session.frame(&mut r.surface);
        update_hud(&r.document, &r.session.hud());
        next
    };

    match next {
        LoopState::Running => request_frame(rt, generation),
        LoopState::Stopped => log::info!("Loop stopped"),
    }
}

/// Push the HUD projection into the page
fn update_hud(document: &Document, hud: &HudView) {
    if let Some(el) = document.get_element_by_id("score") {
        el.set_text_content(Some(&hud.score_text()));
    }

    if let Some(el) = document.get_element_by_id("game-over") {
        let classes = el.class_list();
        let toggled = if hud.show_overlay() {
            classes.remove_1("hidden")
        } else {
            classes.add_1("hidden")
        };
        if let Err(e) = toggled {
            log::warn!("Overlay class update failed: {:?}", e);
        }
    }

    if let Some(overlay) = hud.overlay {
        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&overlay.final_score.to_string()));
        }
    }
}

fn setup_restart_button(rt: &Shared) {
    let document = rt.borrow().document.clone();
    let Some(btn) = document.get_element_by_id("restart-btn") else {
        log::warn!("No #restart-btn on the page; restart unavailable");
        return;
    };

    let rt = rt.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        if let Err(e) = restart(&rt) {
            log::error!("Restart failed: {}", e);
        }
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Tear down on `pagehide`; resume when the page comes back from the
/// back/forward cache
fn setup_page_lifecycle(rt: &Shared) {
    let window = rt.borrow().window.clone();

    {
        let rt = rt.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            teardown(&rt);
            log::info!("Page hidden (persisted: {}), session torn down", event.persisted());
        });
        if let Err(e) =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
        {
            log::warn!("Could not listen for pagehide: {:?}", e);
        }
        closure.forget();
    }

    {
        let rt = rt.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            if !event.persisted() {
                return;
            }
            log::info!("Page restored from cache, resuming session");
            if let Err(e) = resume(&rt) {
                log::error!("Resume failed: {}", e);
            }
        });
        if let Err(e) =
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())
        {
            log::warn!("Could not listen for pageshow: {:?}", e);
        }
        closure.forget();
    }
}

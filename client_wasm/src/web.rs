//! Browser entry points and DOM wiring

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Params};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::input::{
    command_from_name, handle_key_down, handle_key_up, pointer_to_canvas_y, CanvasRect, BUTTONS,
};
use crate::renderer::canvas::CanvasSurface;
use crate::renderer::draw_frame;
use crate::simulation::LocalGame;

const CANVAS_ID: &str = "pongCanvas";

struct App {
    game: LocalGame,
    surface: CanvasSurface,
    last_time: f64,
}

type Shared = Rc<RefCell<App>>;

thread_local! {
    static APP: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> Result<T, JsValue> {
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => Ok(f(&mut app.borrow_mut())),
        None => Err(JsValue::from_str("Game not started")),
    })
}

/// Boot the game on the `pongCanvas` element
///
/// `config_json` may override any config field.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second start keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Config::new(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no #pongCanvas element"))?
        .dyn_into()?;
    canvas.set_width(config.arena_width as u32);
    canvas.set_height(config.arena_height as u32);

    let surface = CanvasSurface::new(&canvas)?;
    let seed = js_sys::Date::now() as u64;
    let app = Rc::new(RefCell::new(App {
        game: LocalGame::new(seed, config),
        surface,
        last_time: 0.0,
    }));

    setup_pointer(&canvas, app.clone())?;
    setup_keyboard(&document, app.clone())?;
    setup_buttons(&document, app.clone())?;

    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));
    log::info!("Pong started with seed {}", seed);

    request_animation_frame(app);
    Ok(())
}

/// Session statistics as a JSON string
#[wasm_bindgen]
pub fn stats_json() -> Result<String, JsValue> {
    with_app(|app| app.game.stats.to_json())
}

/// Run a named command, the same ones the page buttons use
#[wasm_bindgen]
pub fn send_command(name: &str) -> Result<(), JsValue> {
    let command = command_from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown command: {}", name)))?;
    with_app(|app| app.game.apply(command))
}

fn setup_pointer(canvas: &HtmlCanvasElement, app: Shared) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let bounds = target.get_bounding_client_rect();
        let rect = CanvasRect {
            top: bounds.top() as f32,
            height: bounds.height() as f32,
        };
        let y = pointer_to_canvas_y(event.client_y() as f32, rect, target.height() as f32);
        app.borrow_mut().game.pointer_move(y);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_keyboard(document: &web_sys::Document, app: Shared) -> Result<(), JsValue> {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            let in_menu = app.game.fsm.in_menu();
            if let Some(command) = handle_key_down(&event.key(), in_menu) {
                event.prevent_default();
                app.game.apply(command);
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let Some(command) = handle_key_up(&event.key()) {
            app.borrow_mut().game.apply(command);
        }
    });
    document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_buttons(document: &web_sys::Document, app: Shared) -> Result<(), JsValue> {
    for (id, command) in BUTTONS {
        let Some(btn) = document.get_element_by_id(id) else {
            log::debug!("No #{} button on the page", id);
            continue;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().game.apply(command);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn request_animation_frame(app: Shared) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(app, time);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn game_loop(app: Shared, time: f64) {
    {
        let mut guard = app.borrow_mut();
        let app = &mut *guard;

        let dt = if app.last_time > 0.0 {
            ((time - app.last_time) / 1000.0) as f32
        } else {
            Params::FIXED_DT
        };
        app.last_time = time;

        app.game.frame(dt);
        if let Err(e) = draw_frame(&mut app.surface, &app.game.view()) {
            log::warn!("Render failed: {}", e);
        }
    }

    request_animation_frame(app);
}

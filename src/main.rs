use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use life_canvas::config::{self, Settings, WINDOW_HEIGHT, WINDOW_WIDTH};
use life_canvas::font::HudFont;
use life_canvas::graphics::GraphicsRenderer;
use life_canvas::input::InputHandler;
use life_canvas::pacing::FrameLimiter;
use life_canvas::session::{Flow, InputEvent, Session};
use life_canvas::viewport::ScreenRect;

const HUD_FONT_PX: f32 = 14.0;

fn create_window(event_loop: &EventLoop<()>) -> life_canvas::error::Result<Window> {
    let window = WindowBuilder::new()
        .with_title("Conway's Game of Life")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(event_loop)?;
    Ok(window)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::from_env();
    log::debug!("{:?}", settings);

    let event_loop = EventLoop::new();
    let window = create_window(&event_loop)?;

    let font = HudFont::load_or_builtin(&settings.font_path, HUD_FONT_PX);
    let mut renderer = GraphicsRenderer::new(&window, WINDOW_WIDTH, WINDOW_HEIGHT, font)?;
    let mut session = Session::new(settings.seed).with_probe(settings.probe);
    let mut input = InputHandler::new();
    let mut limiter = FrameLimiter::new(config::frame_interval(), Instant::now());
    // Overlay rectangles drawn last frame; clicks on them don't reach the board
    let mut hud_zones: Vec<ScreenRect> = Vec::new();

    log::info!(
        "Board {}x{}, press E to edit, Space to reset, Enter to play",
        session.grid().width(),
        session.grid().height()
    );

    event_loop.run(move |event, _, control_flow| {
        let mut discrete = None;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => discrete = Some(InputEvent::Quit),
                WindowEvent::Resized(size) => {
                    if let Err(err) = renderer.resize(size.width, size.height) {
                        log::error!("Failed to resize surface: {}", err);
                    }
                }
                WindowEvent::Focused(false) => input.clear_held(),
                WindowEvent::KeyboardInput { input: key, .. } => {
                    discrete = input.handle_keyboard_input(&key);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = renderer.window_to_buffer(position);
                    input.set_pointer(x, y);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    discrete = input.handle_mouse_input(state, button);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    discrete = input.handle_mouse_wheel(delta);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if limiter.ready(Instant::now()) {
                    session.update(&input.frame_input(), &hud_zones);
                    hud_zones = renderer.render(&session);

                    if let Err(err) = renderer.present() {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                *control_flow = ControlFlow::WaitUntil(limiter.deadline());
            }
            _ => {}
        }

        if let Some(event) = discrete {
            if session.handle_event(event) == Flow::Exit {
                log::info!("Exiting at generation {}", session.generation());
                *control_flow = ControlFlow::Exit;
            }
        }
    });
}

pub mod content;
pub mod light_controls;
pub mod light_manager;
pub mod lighting;
pub mod platform;
pub mod scene;
pub mod scene_loader;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use tracing::{debug, info, trace};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use crate::{
    light_controls::{LightController, LightKeyBindings},
    light_manager::{ActiveLightType, LightManager},
    scene::{Scene, SceneLights},
};

pub const DEFAULT_LIGHTS_FILE: &str = "content/lights.txt";
pub const DEFAULT_OBJECTS_FILE: &str = "content/objects.txt";

/// Command line options for the viewer binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerArgs {
    pub lights_path: PathBuf,
    pub objects_path: PathBuf,
    /// Stop after the scene has been loaded and validated.
    pub check_only: bool,
}

impl Default for ViewerArgs {
    fn default() -> Self {
        Self {
            lights_path: PathBuf::from(DEFAULT_LIGHTS_FILE),
            objects_path: PathBuf::from(DEFAULT_OBJECTS_FILE),
            check_only: false,
        }
    }
}

impl ViewerArgs {
    pub const USAGE: &'static str = "usage: lightbox [LIGHTS_FILE] [OBJECTS_FILE] [--check]";

    /// Parse arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut positional = 0;

        for arg in args.into_iter().map(Into::into) {
            match arg.as_str() {
                "--check" => parsed.check_only = true,
                flag if flag.starts_with("--") => {
                    anyhow::bail!("unknown option {flag:?}\n{}", Self::USAGE)
                }
                _ => {
                    match positional {
                        0 => parsed.lights_path = PathBuf::from(arg),
                        1 => parsed.objects_path = PathBuf::from(arg),
                        _ => anyhow::bail!("unexpected argument {arg:?}\n{}", Self::USAGE),
                    }

                    positional += 1;
                }
            }
        }

        Ok(parsed)
    }
}

/// Entry point for the viewer binary.
pub fn lightbox_main<I, S>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = ViewerArgs::parse(args)?;
    let scene = scene_loader::load_scene(&args.lights_path, &args.objects_path)
        .with_context(|| {
            format!(
                "failed to load scene from {} and {}",
                args.lights_path.display(),
                args.objects_path.display()
            )
        })?;

    if args.check_only {
        info!("scene files are valid");
        return Ok(());
    }

    run_light_viewer(scene)
}

/// Target time between viewer frames.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Opens a window and lets the user select and move the scene's lights until
/// the window is closed or escape is pressed.
pub fn run_light_viewer(mut scene: Scene) -> anyhow::Result<()> {
    info!("creating main window for the light viewer");

    let event_loop = EventLoop::new().context("failed to create main window event loop")?;
    let main_window = WindowBuilder::new()
        .with_title(window_title(&LightManager::new(), &scene.lights))
        .build(&event_loop)
        .context("failed to create main window")?;

    let mut controller = LightController::new(LightKeyBindings::default());
    let mut light_manager = LightManager::new();
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame + FRAME_TIME;

    info!("starting main window event loop");

    event_loop
        .run(move |event, control_flow| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.exit(),
                WindowEvent::KeyboardInput {
                    event: ref key_event,
                    ..
                } if key_event.state == ElementState::Pressed
                    && key_event.logical_key == Key::Named(NamedKey::Escape) =>
                {
                    control_flow.exit()
                }
                WindowEvent::RedrawRequested => {
                    let packed = scene.lights.packed();
                    trace!(
                        "uploading {} bytes of point and {} bytes of spot lights",
                        packed.point_bytes().len(),
                        packed.spot_bytes().len()
                    );
                }
                ref input => {
                    if let Some(command) = controller.process_input(input) {
                        light_manager.apply(command, &mut scene.lights);
                        main_window.set_title(&window_title(&light_manager, &scene.lights));
                    }
                }
            },
            Event::AboutToWait => {
                let now = Instant::now();

                if now >= next_frame {
                    light_manager.update_delta_time((now - last_frame).as_secs_f32());
                    last_frame = now;
                    next_frame = now + FRAME_TIME;

                    if controller.update_lights(&light_manager, &mut scene.lights) {
                        if let Some(position) = light_manager.current_light_position(&scene.lights)
                        {
                            debug!("selected light moved to {position}");
                        }

                        main_window.set_title(&window_title(&light_manager, &scene.lights));
                    }

                    main_window.request_redraw();
                }

                control_flow.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }
            _ => {}
        })
        .context("main window event loop processing failed")?;

    Ok(())
}

fn window_title(light_manager: &LightManager, lights: &SceneLights) -> String {
    let selection = match light_manager.active_type() {
        ActiveLightType::None => "no light selected".to_string(),
        ActiveLightType::Point => format!("point light {}", light_manager.cur_point_light()),
        ActiveLightType::Spot => format!("spot light {}", light_manager.cur_spot_light()),
    };

    let position = light_manager
        .current_light_position(lights)
        .map(|p| format!(" at ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z))
        .unwrap_or_default();

    format!(
        "lightbox - {selection}{position} - speed {}",
        light_manager.movement_speed()
    )
}

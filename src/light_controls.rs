use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::{
    light_manager::{ActiveLightType, LightCommand, LightManager, TranslateDirection},
    scene::SceneLights,
};

/// Which physical keys drive the light manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightKeyBindings {
    pub select_point: KeyCode,
    pub select_spot: KeyCode,
    pub previous: KeyCode,
    pub next: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub front: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub increase_speed: KeyCode,
    pub decrease_speed: KeyCode,
}

impl Default for LightKeyBindings {
    fn default() -> Self {
        Self {
            select_point: KeyCode::Digit1,
            select_spot: KeyCode::Digit2,
            previous: KeyCode::ArrowLeft,
            next: KeyCode::ArrowRight,
            up: KeyCode::KeyU,
            down: KeyCode::KeyO,
            front: KeyCode::KeyI,
            back: KeyCode::KeyK,
            left: KeyCode::KeyJ,
            right: KeyCode::KeyL,
            increase_speed: KeyCode::Equal,
            decrease_speed: KeyCode::Minus,
        }
    }
}

impl LightKeyBindings {
    /// Returns the selection or speed command bound to `key`. Only the initial
    /// press of a key produces a command; releases and key repeats do not.
    /// Movement keys are not commands, see `direction_for`.
    pub fn command_for(
        &self,
        key: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<LightCommand> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            k if k == self.select_point => {
                Some(LightCommand::SwitchLightType(ActiveLightType::Point))
            }
            k if k == self.select_spot => Some(LightCommand::SwitchLightType(ActiveLightType::Spot)),
            k if k == self.previous => Some(LightCommand::Previous),
            k if k == self.next => Some(LightCommand::Next),
            k if k == self.increase_speed => Some(LightCommand::IncreaseSpeed),
            k if k == self.decrease_speed => Some(LightCommand::DecreaseSpeed),
            _ => None,
        }
    }

    /// The movement direction bound to `key`, if any.
    pub fn direction_for(&self, key: KeyCode) -> Option<TranslateDirection> {
        match key {
            k if k == self.up => Some(TranslateDirection::Up),
            k if k == self.down => Some(TranslateDirection::Down),
            k if k == self.front => Some(TranslateDirection::Front),
            k if k == self.back => Some(TranslateDirection::Back),
            k if k == self.left => Some(TranslateDirection::Left),
            k if k == self.right => Some(TranslateDirection::Right),
            _ => None,
        }
    }
}

/// Turns window input into light manager actions.
///
/// Selection and speed keys become one `LightCommand` per press. Movement keys
/// are tracked as held or released and applied once per frame by
/// `update_lights`, scaled by the manager's frame time.
#[derive(Clone, Debug, Default)]
pub struct LightController {
    bindings: LightKeyBindings,
    /// Indexed like `TranslateDirection::ALL`.
    held: [bool; 6],
}

impl LightController {
    pub fn new(bindings: LightKeyBindings) -> Self {
        Self {
            bindings,
            held: [false; 6],
        }
    }

    pub fn bindings(&self) -> &LightKeyBindings {
        &self.bindings
    }

    /// Updates held movement keys from `event` and returns the command for a
    /// selection or speed key press.
    pub fn process_input(&mut self, event: &WindowEvent) -> Option<LightCommand> {
        match event {
            WindowEvent::KeyboardInput {
                event: keyboard_input_event,
                ..
            } => match keyboard_input_event.physical_key {
                PhysicalKey::Code(key) => self.process_key(
                    key,
                    keyboard_input_event.state,
                    keyboard_input_event.repeat,
                ),
                PhysicalKey::Unidentified(_) => None,
            },
            // Key releases are not delivered to an unfocused window.
            WindowEvent::Focused(false) => {
                self.release_all();
                None
            }
            _ => None,
        }
    }

    /// Like `process_input` for a single key event.
    pub fn process_key(
        &mut self,
        key: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<LightCommand> {
        if let Some(direction) = self.bindings.direction_for(key) {
            self.held[direction_index(direction)] = state == ElementState::Pressed;
            return None;
        }

        self.bindings.command_for(key, state, repeat)
    }

    pub fn is_moving(&self, direction: TranslateDirection) -> bool {
        self.held[direction_index(direction)]
    }

    pub fn release_all(&mut self) {
        self.held = [false; 6];
    }

    /// Moves the selected light once along every held direction. Returns true
    /// if any movement key is held.
    pub fn update_lights(&self, light_manager: &LightManager, lights: &mut SceneLights) -> bool {
        let mut moved = false;

        for direction in TranslateDirection::ALL {
            if self.is_moving(direction) {
                light_manager.translate_current_light(direction, lights);
                moved = true;
            }
        }

        moved
    }
}

fn direction_index(direction: TranslateDirection) -> usize {
    match direction {
        TranslateDirection::Up => 0,
        TranslateDirection::Down => 1,
        TranslateDirection::Front => 2,
        TranslateDirection::Back => 3,
        TranslateDirection::Left => 4,
        TranslateDirection::Right => 5,
    }
}

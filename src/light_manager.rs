use glam::Vec3;
use tracing::debug;

use crate::scene::SceneLights;

/// Which kind of light the manager is currently steering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveLightType {
    /// No light is selected. Movement commands are ignored.
    #[default]
    None,
    Point,
    Spot,
}

/// World space directions a light can be moved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslateDirection {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl TranslateDirection {
    pub const ALL: [TranslateDirection; 6] = [
        TranslateDirection::Up,
        TranslateDirection::Down,
        TranslateDirection::Front,
        TranslateDirection::Back,
        TranslateDirection::Left,
        TranslateDirection::Right,
    ];

    /// The unit world space vector for this direction.
    pub fn axis(&self) -> Vec3 {
        match self {
            TranslateDirection::Up => LightManager::UP,
            TranslateDirection::Down => -LightManager::UP,
            TranslateDirection::Front => LightManager::FRONT,
            TranslateDirection::Back => -LightManager::FRONT,
            TranslateDirection::Left => LightManager::LEFT,
            TranslateDirection::Right => -LightManager::LEFT,
        }
    }
}

/// A discrete request to change light selection, position or movement speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightCommand {
    SwitchLightType(ActiveLightType),
    Next,
    Previous,
    Translate(TranslateDirection),
    IncreaseSpeed,
    DecreaseSpeed,
}

/// Lets a user pick one of the scene's point or spot lights and move it around.
///
/// The manager only stores selection state. The lights themselves are owned by
/// the scene and passed in to every call that needs them, so an index is never
/// kept alive longer than the list it points into.
#[derive(Clone, Debug)]
pub struct LightManager {
    active_type: ActiveLightType,
    cur_point_light: usize,
    cur_spot_light: usize,
    /// World units per second.
    movement_speed: f32,
    /// Seconds since the previous frame.
    delta_time: f32,
}

impl LightManager {
    pub const LEFT: Vec3 = Vec3::X;
    pub const UP: Vec3 = Vec3::Y;
    pub const FRONT: Vec3 = Vec3::Z;

    pub const DEFAULT_MOVEMENT_SPEED: f32 = 5.0;
    pub const MIN_MOVEMENT_SPEED: f32 = 0.0;
    pub const MAX_MOVEMENT_SPEED: f32 = 10.0;
    pub const MOVEMENT_SPEED_STEP: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            active_type: ActiveLightType::None,
            cur_point_light: 0,
            cur_spot_light: 0,
            movement_speed: Self::DEFAULT_MOVEMENT_SPEED,
            delta_time: 0.0,
        }
    }

    pub fn active_type(&self) -> ActiveLightType {
        self.active_type
    }

    pub fn cur_point_light(&self) -> usize {
        self.cur_point_light
    }

    pub fn cur_spot_light(&self) -> usize {
        self.cur_spot_light
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Position of the selected light, or `None` when nothing is selected or
    /// the active list is empty.
    pub fn current_light_position(&self, lights: &SceneLights) -> Option<Vec3> {
        match self.active_type {
            ActiveLightType::None => None,
            ActiveLightType::Point => lights.point.get(self.cur_point_light).map(|l| l.position),
            ActiveLightType::Spot => lights.spot.get(self.cur_spot_light).map(|l| l.position),
        }
    }

    /// Run `command` against `lights`.
    pub fn apply(&mut self, command: LightCommand, lights: &mut SceneLights) {
        match command {
            LightCommand::SwitchLightType(light_type) => self.switch_light_type(light_type),
            LightCommand::Next => self.switch_to_next(lights),
            LightCommand::Previous => self.switch_to_previous(lights),
            LightCommand::Translate(direction) => self.translate_current_light(direction, lights),
            LightCommand::IncreaseSpeed => self.increase_speed(),
            LightCommand::DecreaseSpeed => self.decrease_speed(),
        }
    }

    /// Select `light_type`, or clear the selection if it is already selected.
    pub fn switch_light_type(&mut self, light_type: ActiveLightType) {
        self.active_type = if self.active_type == light_type {
            ActiveLightType::None
        } else {
            light_type
        };

        debug!("active light type is now {:?}", self.active_type);
    }

    /// Select the next light of the active type, wrapping around at the end.
    pub fn switch_to_next(&mut self, lights: &SceneLights) {
        match self.active_type {
            ActiveLightType::None => {}
            ActiveLightType::Point => {
                self.cur_point_light = wrap_next(self.cur_point_light, lights.point.len())
            }
            ActiveLightType::Spot => {
                self.cur_spot_light = wrap_next(self.cur_spot_light, lights.spot.len())
            }
        }
    }

    /// Select the previous light of the active type, wrapping around at the
    /// start.
    pub fn switch_to_previous(&mut self, lights: &SceneLights) {
        match self.active_type {
            ActiveLightType::None => {}
            ActiveLightType::Point => {
                self.cur_point_light = wrap_previous(self.cur_point_light, lights.point.len())
            }
            ActiveLightType::Spot => {
                self.cur_spot_light = wrap_previous(self.cur_spot_light, lights.spot.len())
            }
        }
    }

    /// Move the selected light along `direction` by `movement_speed *
    /// delta_time` world units. Does nothing if no light is selected.
    pub fn translate_current_light(&self, direction: TranslateDirection, lights: &mut SceneLights) {
        let delta = direction.axis() * self.movement_speed * self.delta_time;

        let position = match self.active_type {
            ActiveLightType::None => None,
            ActiveLightType::Point => lights
                .point
                .get_mut(self.cur_point_light)
                .map(|light| &mut light.position),
            ActiveLightType::Spot => lights
                .spot
                .get_mut(self.cur_spot_light)
                .map(|light| &mut light.position),
        };

        if let Some(position) = position {
            *position += delta;
        }
    }

    /// Set the movement speed, clamped to `[0, 10]`. NaN is ignored.
    pub fn set_movement_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }

        self.movement_speed = speed.clamp(Self::MIN_MOVEMENT_SPEED, Self::MAX_MOVEMENT_SPEED);
    }

    pub fn increase_speed(&mut self) {
        self.set_movement_speed(self.movement_speed + Self::MOVEMENT_SPEED_STEP);
        debug!("light movement speed is now {}", self.movement_speed);
    }

    pub fn decrease_speed(&mut self) {
        self.set_movement_speed(self.movement_speed - Self::MOVEMENT_SPEED_STEP);
        debug!("light movement speed is now {}", self.movement_speed);
    }

    /// Set the time elapsed since the previous frame, in seconds. Negative and
    /// non-finite values are treated as zero.
    pub fn update_delta_time(&mut self, delta_time: f32) {
        self.delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
    }
}

impl Default for LightManager {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        index
    } else {
        (index + 1) % len
    }
}

fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        index
    } else if index == 0 {
        len - 1
    } else {
        (index - 1) % len
    }
}

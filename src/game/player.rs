// Player entity and per-player effect state

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::core::math::{wrap_angle, wrap_position};
use crate::engine::input::InputState;

use super::config::{Controls, MatchSettings};
use super::effects::GlobalEffects;
use super::weapons::{GlobalEffect, WeaponKind, N_WEAPONS};

/// Charges and running timers for one player
#[derive(Debug, Clone, Default)]
pub struct PlayerEffectState {
    /// Remaining charges per weapon kind
    charges: [u32; N_WEAPONS],
    /// Milliseconds left for each running effect
    timers: [Option<u32>; N_WEAPONS],
    /// Milliseconds of invincibility left
    invincible_ms: u32,
}

impl PlayerEffectState {
    pub fn charges(&self, kind: WeaponKind) -> u32 {
        self.charges[kind.index()]
    }

    pub fn set_charges(&mut self, kind: WeaponKind, charges: u32) {
        self.charges[kind.index()] = charges;
    }

    pub fn is_active(&self, kind: WeaponKind) -> bool {
        self.timers[kind.index()].is_some()
    }

    /// Milliseconds left on a running effect
    pub fn remaining(&self, kind: WeaponKind) -> Option<u32> {
        self.timers[kind.index()]
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ms > 0
    }

    pub(crate) fn take_charge(&mut self, kind: WeaponKind) {
        let charges = &mut self.charges[kind.index()];
        *charges = charges.saturating_sub(1);
    }

    pub(crate) fn set_timer(&mut self, kind: WeaponKind, timer: Option<u32>) {
        self.timers[kind.index()] = timer;
    }

    pub(crate) fn grant_invincibility(&mut self, ms: u32) {
        self.invincible_ms = self.invincible_ms.max(ms);
    }

    pub(crate) fn wear_invincibility(&mut self, elapsed_ms: u32) {
        self.invincible_ms = self.invincible_ms.saturating_sub(elapsed_ms);
    }

    pub(crate) fn clear_invincibility(&mut self) {
        self.invincible_ms = 0;
    }
}

/// A player's worm: position, heading and what weapons have done to it
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index (0-7)
    pub id: usize,
    pub controls: Controls,
    /// Weapon picked for this match
    pub weapon: WeaponKind,

    pub position: Vec2,
    /// Heading in radians, 0 = +x
    pub heading: f32,
    pub alive: bool,

    // Weapon-driven modifiers
    pub speed_multiplier: f32,
    /// Next turn press snaps a right angle
    pub sharp_turn: bool,
    /// Tunnelling: no trail, no collisions
    pub underground: bool,
    /// Passes through trails and leaves none
    pub ghost: bool,
    /// Unaffected by these global effects (the player who fired them)
    exempt: [bool; GlobalEffect::COUNT],

    pub effects: PlayerEffectState,
}

impl Player {
    pub fn new(
        id: usize,
        controls: Controls,
        weapon: WeaponKind,
        position: Vec2,
        heading: f32,
    ) -> Self {
        let mut player = Self {
            id,
            controls,
            weapon,
            position,
            heading,
            alive: true,
            speed_multiplier: 1.0,
            sharp_turn: false,
            underground: false,
            ghost: false,
            exempt: [false; GlobalEffect::COUNT],
            effects: PlayerEffectState::default(),
        };
        player.reset_charges();
        player
    }

    /// Refill charges for the picked weapon, the only way charges increase
    pub fn reset_charges(&mut self) {
        for kind in WeaponKind::ALL {
            let charges = if kind == self.weapon {
                kind.descriptor().charges
            } else {
                0
            };
            self.effects.set_charges(kind, charges);
        }
    }

    pub fn is_exempt(&self, effect: GlobalEffect) -> bool {
        self.exempt[effect.index()]
    }

    pub(crate) fn set_exempt(&mut self, effect: GlobalEffect, exempt: bool) {
        self.exempt[effect.index()] = exempt;
    }

    /// Read by the trail renderer
    #[allow(dead_code)]
    pub fn trail_visible(&self) -> bool {
        !self.underground && !self.ghost
    }

    fn affected_by(&self, flags: GlobalEffects, effect: GlobalEffect) -> bool {
        flags.is_active(effect) && !self.is_exempt(effect)
    }

    /// Forward speed after weapon modifiers (units/second)
    pub fn speed(&self, flags: GlobalEffects, settings: &MatchSettings) -> f32 {
        let mut speed = settings.base_speed * self.speed_multiplier;
        if self.affected_by(flags, GlobalEffect::Freeze) {
            speed *= settings.freeze_factor;
        }
        if self.affected_by(flags, GlobalEffect::ChiliRun) {
            speed *= settings.chili_factor;
        }
        speed
    }

    /// Turn according to held controls.
    ///
    /// Under tron, or with a sharp turn pending, a press turns a right angle
    /// and is consumed so a held button turns only once.
    pub fn steer(
        &mut self,
        input: &mut InputState,
        flags: GlobalEffects,
        dt_ms: u32,
        settings: &MatchSettings,
    ) {
        let (mut left, mut right) = (self.controls.left, self.controls.right);
        if self.affected_by(flags, GlobalEffect::Confusion) {
            std::mem::swap(&mut left, &mut right);
        }

        let turn = match (input.is_down(left), input.is_down(right)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => return,
        };

        if flags.tron || self.sharp_turn {
            input.clear(if turn < 0.0 { left } else { right });
            self.heading = wrap_angle(self.heading + turn * FRAC_PI_2);
            self.sharp_turn = false;
        } else {
            let dt = dt_ms as f32 / 1000.0;
            self.heading = wrap_angle(self.heading + turn * settings.turn_rate * dt);
        }
    }

    /// Move forward along the heading
    pub fn advance(&mut self, dt_ms: u32, flags: GlobalEffects, settings: &MatchSettings) {
        let dt = dt_ms as f32 / 1000.0;
        let step = Vec2::from_angle(self.heading) * self.speed(flags, settings) * dt;
        self.position = wrap_position(
            self.position + step,
            settings.arena_width,
            settings.arena_height,
        );
    }
}

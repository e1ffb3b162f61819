// Per-weapon effect bodies
//
// Global effects only mark the firing player as exempt; the shared flag
// itself is owned by the effect engine.

use super::*;
use crate::core::math::wrap_position;
use crate::game::config::DEFAULT_SETTINGS;
use glam::Vec2;

pub fn lightning_speed(p: &mut Player, on: bool) -> u32 {
    p.speed_multiplier = if on {
        DEFAULT_SETTINGS.lightning_factor
    } else {
        1.0
    };
    DURATION_LIGHTNINGSPEED
}

pub fn frost_wave(p: &mut Player, on: bool) -> u32 {
    p.set_exempt(GlobalEffect::Freeze, on);
    DURATION_FROSTWAVE
}

pub fn confusion(p: &mut Player, on: bool) -> u32 {
    p.set_exempt(GlobalEffect::Confusion, on);
    DURATION_CONFUSION
}

pub fn sharp_turn(p: &mut Player, on: bool) -> u32 {
    p.sharp_turn = on;
    DURATION_SHARPTURN
}

pub fn time_step(p: &mut Player, on: bool) -> u32 {
    if on {
        let jump = Vec2::from_angle(p.heading) * DEFAULT_SETTINGS.timestep_distance;
        p.position = wrap_position(
            p.position + jump,
            DEFAULT_SETTINGS.arena_width,
            DEFAULT_SETTINGS.arena_height,
        );
    }
    0
}

pub fn mole(p: &mut Player, on: bool) -> u32 {
    p.underground = on;
    DURATION_MOLE
}

pub fn warp(p: &mut Player, on: bool) -> u32 {
    if on {
        let arena = Vec2::new(DEFAULT_SETTINGS.arena_width, DEFAULT_SETTINGS.arena_height);
        p.position = wrap_position(
            arena - p.position,
            DEFAULT_SETTINGS.arena_width,
            DEFAULT_SETTINGS.arena_height,
        );
    }
    0
}

pub fn ghost(p: &mut Player, on: bool) -> u32 {
    p.ghost = on;
    DURATION_GHOSTWALK
}

/// Tron affects everyone, the firing player included
pub fn tron(_p: &mut Player, _on: bool) -> u32 {
    DURATION_TRON
}

pub fn chili_run(p: &mut Player, on: bool) -> u32 {
    p.set_exempt(GlobalEffect::ChiliRun, on);
    DURATION_CHILIRUN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::KEYBOARD_CONTROLS;
    use approx::assert_relative_eq;

    fn player() -> Player {
        Player::new(
            0,
            KEYBOARD_CONTROLS[0],
            WeaponKind::LightningSpeed,
            Vec2::new(100.0, 200.0),
            0.0,
        )
    }

    #[test]
    fn test_every_effect_reverts_cleanly() {
        for weapon in WEAPONS.iter().filter(|w| w.duration > 0) {
            let mut p = player();
            let applied = (weapon.effect)(&mut p, true);
            assert_eq!(applied, weapon.duration, "{}", weapon.name);
            (weapon.effect)(&mut p, false);

            let fresh = player();
            assert_eq!(p.speed_multiplier, fresh.speed_multiplier, "{}", weapon.name);
            assert_eq!(p.trail_visible(), fresh.trail_visible(), "{}", weapon.name);
            assert_eq!(p.sharp_turn, fresh.sharp_turn, "{}", weapon.name);
            for g in GlobalEffect::ALL {
                assert!(!p.is_exempt(g), "{}", weapon.name);
            }
        }
    }

    #[test]
    fn test_lightning_speed() {
        let mut p = player();
        lightning_speed(&mut p, true);
        assert_relative_eq!(p.speed_multiplier, DEFAULT_SETTINGS.lightning_factor);
    }

    #[test]
    fn test_mole_and_ghost_hide_trail_independently() {
        let mut p = player();
        mole(&mut p, true);
        ghost(&mut p, true);
        mole(&mut p, false);
        assert!(!p.trail_visible());
        ghost(&mut p, false);
        assert!(p.trail_visible());
    }

    #[test]
    fn test_time_step_moves_forward() {
        let mut p = player();
        assert_eq!(time_step(&mut p, true), 0);
        assert_relative_eq!(p.position.x, 100.0 + DEFAULT_SETTINGS.timestep_distance);
        assert_relative_eq!(p.position.y, 200.0);
    }

    #[test]
    fn test_warp_mirrors_position() {
        let mut p = player();
        assert_eq!(warp(&mut p, true), 0);
        assert_relative_eq!(p.position.x, 700.0);
        assert_relative_eq!(p.position.y, 400.0);
    }

    #[test]
    fn test_hostile_globals_exempt_the_user() {
        let mut p = player();
        frost_wave(&mut p, true);
        confusion(&mut p, true);
        chili_run(&mut p, true);
        assert!(p.is_exempt(GlobalEffect::Freeze));
        assert!(p.is_exempt(GlobalEffect::Confusion));
        assert!(p.is_exempt(GlobalEffect::ChiliRun));
        assert!(!p.is_exempt(GlobalEffect::Tron));
    }
}

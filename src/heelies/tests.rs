//! Heelies domain: state machine tests against a recording host.

use bevy::math::Vec2;

use super::{
    ButtonState, CATCH_UP_SPEED, CameraTarget, DecayPolicy, DisengageCause, Facing, IconTier,
    ROLL_FRAMES, RollController, RollFrame, RollHost, RollSettings, SessionId, SpeedStatus,
    StatusEffect, animate_roll, camera_speed, can_roll, quantize,
};

const EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    ApplyStatus(SpeedStatus),
    ClearStatus,
    ShowFrame(RollFrame),
    Halt,
    Camera(CameraTarget),
}

struct FakeHost {
    free: bool,
    moved: bool,
    mounted: bool,
    statuses: Vec<StatusEffect>,
    directions: Vec<i32>,
    position: Vec2,
    base_speed: f32,
    bonus: f32,
    calls: Vec<HostCall>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            free: true,
            moved: true,
            mounted: false,
            statuses: Vec::new(),
            directions: Vec::new(),
            position: Vec2::new(64.0, 128.0),
            base_speed: 5.0,
            bonus: 0.0,
            calls: Vec::new(),
        }
    }
}

impl FakeHost {
    fn last_status(&self) -> Option<SpeedStatus> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ApplyStatus(status) => Some(*status),
            _ => None,
        })
    }

    fn frames(&self) -> Vec<RollFrame> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ShowFrame(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }
}

impl RollHost for FakeHost {
    fn player_name(&self) -> &str {
        "Farmer"
    }

    fn player_is_free(&self) -> bool {
        self.free
    }

    fn moved_last_tick(&self) -> bool {
        self.moved
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn has_status(&self, status: StatusEffect) -> bool {
        self.statuses.contains(&status)
    }

    fn movement_directions(&self) -> Vec<i32> {
        self.directions.clone()
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn base_speed(&self) -> f32 {
        self.base_speed
    }

    fn temporary_speed_bonus(&self) -> f32 {
        self.bonus
    }

    fn apply_speed_status(&mut self, status: SpeedStatus) {
        self.calls.push(HostCall::ApplyStatus(status));
    }

    fn clear_speed_status(&mut self) {
        self.calls.push(HostCall::ClearStatus);
    }

    fn show_frame(&mut self, frame: RollFrame) {
        self.calls.push(HostCall::ShowFrame(frame));
    }

    fn halt_animation(&mut self) {
        self.calls.push(HostCall::Halt);
    }

    fn move_camera(&mut self, target: CameraTarget) {
        self.calls.push(HostCall::Camera(target));
    }
}

const PLAYER: SessionId = SessionId(0);

fn engaged(settings: RollSettings) -> (RollController, FakeHost) {
    let mut controller = RollController::new(settings);
    let mut host = FakeHost::default();
    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert!(controller.is_rolling(PLAYER));
    host.calls.clear();
    (controller, host)
}

// -----------------------------------------------------------------------------
// Engagement
// -----------------------------------------------------------------------------

#[test]
fn test_sessions_start_idle() {
    let controller = RollController::default();
    for id in [SessionId(0), SessionId(1), SessionId(7)] {
        let session = controller.session(id);
        assert!(!session.is_rolling);
        assert_eq!(session.speed_modifier, 0.0);
    }
}

#[test]
fn test_engage_sets_initial_boost() {
    let mut controller = RollController::default();
    let mut host = FakeHost::default();

    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);

    assert!(controller.is_rolling(PLAYER));
    assert_eq!(controller.speed_modifier(PLAYER), 3.5);
    assert_eq!(host.last_status(), Some(SpeedStatus::for_modifier(3.5)));
}

#[test]
fn test_engage_requires_movement_last_tick() {
    let mut controller = RollController::default();
    let mut host = FakeHost {
        moved: false,
        ..Default::default()
    };

    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);

    assert!(!controller.is_rolling(PLAYER));
    assert!(host.calls.is_empty());
}

#[test]
fn test_engage_blocked_when_mounted_or_impaired() {
    let blocked = [
        FakeHost {
            mounted: true,
            ..Default::default()
        },
        FakeHost {
            statuses: vec![StatusEffect::Slimed],
            ..Default::default()
        },
        FakeHost {
            statuses: vec![StatusEffect::Tipsy],
            ..Default::default()
        },
    ];

    for mut host in blocked {
        assert!(!can_roll(&host));
        let mut controller = RollController::default();
        controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
        assert!(!controller.is_rolling(PLAYER));
    }
}

#[test]
fn test_engage_ignored_when_player_not_free() {
    let mut controller = RollController::default();
    let mut host = FakeHost {
        free: false,
        ..Default::default()
    };

    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert!(!controller.is_rolling(PLAYER));
}

#[test]
fn test_engage_needs_fresh_press() {
    let mut controller = RollController::default();
    let mut host = FakeHost::default();

    controller.on_input_changed(PLAYER, ButtonState::Held, &mut host);
    controller.on_input_changed(PLAYER, ButtonState::Idle, &mut host);
    assert!(!controller.is_rolling(PLAYER));
}

#[test]
fn test_release_ignored_while_player_not_free() {
    let (mut controller, mut host) = engaged(RollSettings::default());

    host.free = false;
    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);
    assert!(controller.is_rolling(PLAYER));
    assert!(!host.calls.contains(&HostCall::Halt));

    host.free = true;
    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert!(controller.is_rolling(PLAYER));
    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);
    assert!(!controller.is_rolling(PLAYER));
    assert!(host.calls.contains(&HostCall::Halt));
}

#[test]
fn test_eligibility_not_rechecked_while_rolling() {
    let (mut controller, mut host) = engaged(RollSettings::default());
    host.moved = false;
    host.statuses.push(StatusEffect::Tipsy);

    controller.on_tick(PLAYER, 1, &mut host);
    controller.on_input_changed(PLAYER, ButtonState::Held, &mut host);

    assert!(controller.is_rolling(PLAYER));
}

#[test]
fn test_engage_stacks_existing_bonus_when_enabled() {
    let mut host = FakeHost {
        bonus: 1.0,
        ..Default::default()
    };

    let mut plain = RollController::default();
    plain.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert_eq!(plain.speed_modifier(PLAYER), 3.5);

    let mut stacking = RollController::new(RollSettings {
        stack_existing_bonus: true,
        ..Default::default()
    });
    stacking.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert_eq!(stacking.speed_modifier(PLAYER), 4.5);
}

// -----------------------------------------------------------------------------
// Decay
// -----------------------------------------------------------------------------

#[test]
fn test_batched_decay_matches_closed_form() {
    let (mut controller, mut host) = engaged(RollSettings::default());
    let mut previous = controller.speed_modifier(PLAYER);

    for tick in 1..=600u64 {
        controller.on_tick(PLAYER, tick, &mut host);
        let modifier = controller.speed_modifier(PLAYER);
        let hundredths = (350 - 10 * (tick / 6) as i64).max(-500);
        let expected = hundredths as f32 / 100.0;

        assert_eq!(modifier, expected, "tick {}", tick);
        assert!(modifier <= previous);
        previous = modifier;
    }

    assert_eq!(controller.speed_modifier(PLAYER), -5.0);
}

#[test]
fn test_batched_decay_hits_tier_thresholds_exactly() {
    let (mut controller, mut host) = engaged(RollSettings::default());
    let mut decays = 0;

    for tick in 1..=(35 * 6) as u64 {
        controller.on_tick(PLAYER, tick, &mut host);
        if tick % 6 != 0 {
            continue;
        }
        decays += 1;

        let status = host.last_status().unwrap();
        match decays {
            15 => {
                assert_eq!(controller.speed_modifier(PLAYER), 2.0);
                assert_eq!(status.icon, IconTier::Gliding);
            }
            25 => {
                assert_eq!(controller.speed_modifier(PLAYER), 1.0);
                assert_eq!(status.icon, IconTier::Coasting);
            }
            35 => {
                assert_eq!(controller.speed_modifier(PLAYER), 0.0);
                assert_eq!(status.icon, IconTier::NeedsPush);
                assert_eq!(status.description(), "Looks like you need a push.");
            }
            _ => {}
        }
    }

    assert_eq!(decays, 35);
}

#[test]
fn test_batched_decay_republishes_on_quiet_ticks() {
    let (mut controller, mut host) = engaged(RollSettings::default());

    controller.on_tick(PLAYER, 1, &mut host);

    assert_eq!(controller.speed_modifier(PLAYER), 3.5);
    assert_eq!(host.last_status(), Some(SpeedStatus::for_modifier(3.5)));
}

#[test]
fn test_every_tick_decay_has_no_floor() {
    let (mut controller, mut host) = engaged(RollSettings {
        decay: DecayPolicy::every_tick(),
        ..Default::default()
    });

    for tick in 1..=500u64 {
        controller.on_tick(PLAYER, tick, &mut host);
        let expected = (350 - 2 * tick as i64) as f32 / 100.0;
        assert_eq!(controller.speed_modifier(PLAYER), expected);
    }

    assert!(controller.speed_modifier(PLAYER) < -5.0);
}

#[test]
fn test_quantize_snaps_to_hundredths() {
    assert_eq!(quantize(2.000_001_4), 2.0);
    assert_eq!(quantize(1.087_784_8e-6), 0.0);
    assert_eq!(quantize(-4.999_99), -5.0);
    assert_eq!(quantize(0.125_1), 0.13);
}

#[test]
fn test_decay_policy_treats_zero_interval_as_every_tick() {
    let policy = DecayPolicy::Batched {
        every: 0,
        step: 1.0,
        floor: -2.0,
    };

    assert!(policy.decays_on(5));
    assert_eq!(policy.apply(0.0, 5), -1.0);
    assert_eq!(policy.apply(-1.5, 6), -2.0);
}

// -----------------------------------------------------------------------------
// Animation
// -----------------------------------------------------------------------------

#[test]
fn test_animate_ignores_empty_and_out_of_range() {
    for directions in [vec![], vec![7], vec![-1, 2]] {
        let mut host = FakeHost::default();
        assert_eq!(animate_roll(&directions, &mut host), None);
        assert!(host.calls.is_empty());
    }
}

#[test]
fn test_animate_uses_primary_direction_and_mirrors_left() {
    for index in 0..4 {
        let mut host = FakeHost::default();
        let frame = animate_roll(&[index, 0], &mut host).unwrap();

        assert_eq!(frame.facing.index(), index as usize);
        assert_eq!(frame.frame, ROLL_FRAMES[index as usize]);
        assert_eq!(frame.flip_x, index == 3);
        assert_eq!(host.frames(), vec![frame]);
    }
}

#[test]
fn test_roll_keeps_facing_when_directions_empty() {
    let (mut controller, mut host) = engaged(RollSettings::default());
    host.directions = vec![3];
    controller.on_tick(PLAYER, 1, &mut host);
    assert_eq!(controller.session(PLAYER).facing, Facing::Left);

    host.directions.clear();
    host.calls.clear();
    controller.on_tick(PLAYER, 2, &mut host);

    assert_eq!(controller.session(PLAYER).facing, Facing::Left);
    assert!(host.frames().is_empty());
}

// -----------------------------------------------------------------------------
// Disengagement
// -----------------------------------------------------------------------------

#[test]
fn test_release_disengages_and_halts() {
    let (mut controller, mut host) = engaged(RollSettings::default());

    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);

    assert_eq!(controller.session(PLAYER), Default::default());
    assert!(host.calls.contains(&HostCall::ClearStatus));
    assert!(host.calls.contains(&HostCall::Halt));
    assert!(host.calls.contains(&HostCall::Camera(CameraTarget {
        position: host.position,
        speed: CATCH_UP_SPEED,
    })));
}

#[test]
fn test_disengage_is_idempotent() {
    let mut controller = RollController::default();
    let mut host = FakeHost::default();

    controller.disengage(PLAYER, &mut host, DisengageCause::Released);
    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);
    controller.on_area_changed(PLAYER, &mut host);

    assert!(!controller.is_rolling(PLAYER));
    assert!(host.calls.is_empty());

    let (mut controller, mut host) = engaged(RollSettings::default());
    controller.disengage(PLAYER, &mut host, DisengageCause::Released);
    host.calls.clear();
    controller.disengage(PLAYER, &mut host, DisengageCause::Released);
    assert!(host.calls.is_empty());
}

#[test]
fn test_area_change_forces_disengage_without_camera_snap() {
    let (mut controller, mut host) = engaged(RollSettings::default());

    controller.on_input_changed(PLAYER, ButtonState::Held, &mut host);
    controller.on_area_changed(PLAYER, &mut host);

    assert!(!controller.is_rolling(PLAYER));
    assert!(host.calls.contains(&HostCall::Halt));
    assert!(
        !host
            .calls
            .iter()
            .any(|call| matches!(call, HostCall::Camera(_)))
    );
}

#[test]
fn test_ticks_while_idle_do_nothing() {
    let mut controller = RollController::default();
    let mut host = FakeHost {
        directions: vec![1],
        ..Default::default()
    };

    for tick in 0..12 {
        controller.on_tick(PLAYER, tick, &mut host);
    }

    assert!(host.calls.is_empty());
}

// -----------------------------------------------------------------------------
// Sessions
// -----------------------------------------------------------------------------

#[test]
fn test_sessions_are_independent() {
    let mut controller = RollController::default();
    let mut first = FakeHost::default();
    let mut second = FakeHost::default();
    let other = SessionId(1);

    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut first);
    for tick in 1..=12 {
        controller.on_tick(PLAYER, tick, &mut first);
        controller.on_tick(other, tick, &mut second);
    }

    assert!(controller.is_rolling(PLAYER));
    assert!(!controller.is_rolling(other));
    assert!(second.calls.is_empty());

    controller.on_input_changed(other, ButtonState::Pressed, &mut second);
    controller.on_area_changed(PLAYER, &mut first);

    assert!(!controller.is_rolling(PLAYER));
    assert!(controller.is_rolling(other));
    assert_eq!(controller.speed_modifier(other), 3.5);
}

#[test]
fn test_end_session_forgets_state() {
    let (mut controller, _host) = engaged(RollSettings::default());
    controller.end_session(PLAYER);
    assert_eq!(controller.session(PLAYER), Default::default());
}

// -----------------------------------------------------------------------------
// Status and camera payloads
// -----------------------------------------------------------------------------

#[test]
fn test_icon_tiers() {
    assert_eq!(IconTier::for_modifier(3.5), IconTier::Cruising);
    assert_eq!(IconTier::for_modifier(2.0), IconTier::Gliding);
    assert_eq!(IconTier::for_modifier(1.5), IconTier::Gliding);
    assert_eq!(IconTier::for_modifier(1.0), IconTier::Coasting);
    assert_eq!(IconTier::for_modifier(0.1), IconTier::Coasting);
    assert_eq!(IconTier::for_modifier(0.0), IconTier::NeedsPush);
    assert_eq!(IconTier::for_modifier(-5.0).index(), 3);
}

#[test]
fn test_status_description_asks_for_push_when_spent() {
    assert_eq!(SpeedStatus::for_modifier(1.0).description(), "");
    assert_eq!(
        SpeedStatus::for_modifier(0.0).description(),
        "Looks like you need a push."
    );
}

#[test]
fn test_camera_speed_only_boosted_by_positive_modifier() {
    assert!((camera_speed(5.0, 3.5) - 8.075).abs() < EPSILON);
    assert_eq!(camera_speed(5.0, 0.0), 5.0);
    assert_eq!(camera_speed(5.0, -2.0), 5.0);
}

#[test]
fn test_roll_moves_camera_unless_disabled() {
    let (mut controller, mut host) = engaged(RollSettings::default());
    controller.on_tick(PLAYER, 1, &mut host);
    assert!(host.calls.contains(&HostCall::Camera(CameraTarget {
        position: host.position,
        speed: camera_speed(5.0, 3.5),
    })));

    let (mut controller, mut host) = engaged(RollSettings {
        camera_follow: false,
        ..Default::default()
    });
    controller.on_tick(PLAYER, 1, &mut host);
    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);
    assert!(
        !host
            .calls
            .iter()
            .any(|call| matches!(call, HostCall::Camera(_)))
    );
}

// -----------------------------------------------------------------------------
// End to end
// -----------------------------------------------------------------------------

#[test]
fn test_press_roll_release_scenario() {
    let mut controller = RollController::default();
    let mut host = FakeHost::default();

    controller.on_input_changed(PLAYER, ButtonState::Pressed, &mut host);
    assert!(controller.is_rolling(PLAYER));
    assert_eq!(controller.speed_modifier(PLAYER), 3.5);

    host.directions = vec![2];
    controller.on_tick(PLAYER, 6, &mut host);

    assert_eq!(controller.session(PLAYER).facing, Facing::Down);
    assert_eq!(
        host.frames().last(),
        Some(&RollFrame {
            facing: Facing::Down,
            frame: ROLL_FRAMES[2],
            flip_x: false,
        })
    );
    assert_eq!(controller.speed_modifier(PLAYER), 3.4);

    controller.on_input_changed(PLAYER, ButtonState::Released, &mut host);
    assert!(!controller.is_rolling(PLAYER));
    assert_eq!(host.calls.last().map(|c| matches!(c, HostCall::Camera(_))), Some(true));
    assert!(host.calls.contains(&HostCall::Halt));
}

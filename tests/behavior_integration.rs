//! Behavior state integration tests: lifecycle, arbitration, and the
//! pixelated spawn-in reveal.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;

use emberfield::components::behavior::{Behavior, BehaviorContext, BehaviorState};
use emberfield::components::entityshader::EntityShader;
use emberfield::components::pixelin::{PIXEL_IN_PRIORITY, PixelInState};
use emberfield::components::sprite::Sprite;
use emberfield::components::tint::Tint;
use emberfield::events::audio::{AudioCmd, AudioMessage, SfxType};
use emberfield::events::behavior::BehaviorChangeEvent;
use emberfield::resources::audio::create_audio_bridge;
use emberfield::resources::shaderstore::{ShaderEffect, ShaderStore, UniformValue};
use emberfield::resources::texturestore::TextureStore;
use emberfield::resources::worldtime::WorldTime;
use emberfield::systems::audio::{forward_audio_cmds, update_bevy_audio_cmds};
use emberfield::systems::behavior::{behavior_change_detector, behavior_update_system};
use emberfield::systems::time::update_world_time;

fn make_world(delta: f32) -> World {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    let mut textures = TextureStore::new();
    textures.register("navi_atlas", 512, 256);
    world.insert_resource(textures);
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn pixelation_shaders() -> ShaderStore {
    let mut shaders = ShaderStore::new();
    shaders.register(ShaderEffect::TexelPixelBlur, "texel_pixel_blur");
    shaders
}

fn tick_behavior(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((behavior_change_detector, behavior_update_system).chain());
    schedule.run(world);
}

fn spawn_revealing_entity(world: &mut World, state: PixelInState) -> Entity {
    world
        .spawn((
            Sprite::new("navi_atlas", 64.0, 64.0).with_offset(Vec2::new(128.0, 64.0)),
            Tint::default(),
            Behavior::with_initial(Box::new(state)),
        ))
        .id()
}

// =============================================================================
// Pixel-in reveal
// =============================================================================

#[test]
fn pixel_in_completes_in_a_single_large_tick() {
    // Scenario: enter, then one 0.7s update. 0.7 * 180 > 125, so the reveal
    // finishes inside the first update.
    let mut world = make_world(0.7);
    let finished = Arc::new(AtomicBool::new(false));
    let finished_flag = finished.clone();

    let state = PixelInState::new(
        &pixelation_shaders(),
        Box::new(move || finished_flag.store(true, Ordering::SeqCst)),
    );
    let entity = spawn_revealing_entity(&mut world, state);

    tick_behavior(&mut world);

    assert!(finished.load(Ordering::SeqCst));
    let tint = world.get::<Tint>(entity).unwrap();
    assert_eq!(*tint, Tint::white_with_alpha(255));
    assert!(
        world.get::<EntityShader>(entity).is_none(),
        "shader must be detached on completion"
    );
}

#[test]
fn pixel_in_enter_silences_the_sprite_and_cues_audio() {
    let mut world = make_world(0.0);
    let (bridge, host) = create_audio_bridge();
    world.insert_resource(bridge);

    let state = PixelInState::new(&pixelation_shaders(), Box::new(|| {}));
    let entity = spawn_revealing_entity(&mut world, state);

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            behavior_change_detector,
            behavior_update_system,
            forward_audio_cmds,
            update_bevy_audio_cmds,
        )
            .chain(),
    );
    schedule.run(&mut world);

    // With delta 0 the reveal has not progressed: alpha stays at 0.
    let tint = world.get::<Tint>(entity).unwrap();
    assert_eq!(*tint, Tint::white_with_alpha(0));

    assert!(matches!(
        host.rx_cmd.try_recv(),
        Ok(AudioCmd::PlayFx {
            fx: SfxType::Appear
        })
    ));
    assert!(host.rx_cmd.try_recv().is_err(), "exactly one cue expected");
}

#[cfg(feature = "pixelate-gfx")]
#[test]
fn pixel_in_attaches_shader_with_normalized_uniforms() {
    // 0.25s * 180 = 45 decay; factor 80 remains, alpha = round(255 * 45/125).
    let mut world = make_world(0.25);
    let state = PixelInState::new(&pixelation_shaders(), Box::new(|| {}));
    let entity = spawn_revealing_entity(&mut world, state);

    tick_behavior(&mut world);

    let tint = world.get::<Tint>(entity).unwrap();
    assert_eq!(tint.a, 92);

    let shader = world
        .get::<EntityShader>(entity)
        .expect("shader attached mid-reveal");
    assert_eq!(shader.shader_key.as_ref(), "texel_pixel_blur");

    // Sprite sub-rect (128, 64, 64x64) inside a 512x256 texture.
    assert_eq!(shader.uniform("x"), Some(&UniformValue::Float(0.25)));
    assert_eq!(shader.uniform("y"), Some(&UniformValue::Float(0.25)));
    assert_eq!(shader.uniform("w"), Some(&UniformValue::Float(0.125)));
    assert_eq!(shader.uniform("h"), Some(&UniformValue::Float(0.25)));
    assert_eq!(
        shader.uniform("pixel_threshold"),
        Some(&UniformValue::Float(80.0 / 400.0))
    );
}

#[test]
fn completion_fires_exactly_once_on_the_crossing_tick() {
    let mut world = make_world(0.2);
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();

    let state = PixelInState::new(
        &pixelation_shaders(),
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    spawn_revealing_entity(&mut world, state);

    // 125 / 180 = 0.694s: three 0.2s updates stay short, the fourth crosses.
    for _ in 0..3 {
        tick_behavior(&mut world);
    }
    assert_eq!(completions.load(Ordering::SeqCst), 0);

    tick_behavior(&mut world);
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    // Late ticks never re-fire the cleared callback.
    for _ in 0..3 {
        tick_behavior(&mut world);
    }
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}

#[test]
fn reveal_alpha_is_monotone_and_bounded() {
    let mut world = make_world(0.1);
    let state = PixelInState::new(&pixelation_shaders(), Box::new(|| {}));
    let entity = spawn_revealing_entity(&mut world, state);

    let mut previous = 0u8;
    for _ in 0..10 {
        tick_behavior(&mut world);
        let tint = world.get::<Tint>(entity).unwrap();
        assert!(tint.a >= previous, "alpha must never step backwards");
        previous = tint.a;
    }
    assert_eq!(previous, 255, "reveal must have completed after 1.0s");
}

#[test]
fn forced_early_pop_detaches_the_shader() {
    let mut world = make_world(0.1);
    let finished = Arc::new(AtomicBool::new(false));
    let finished_flag = finished.clone();

    let state = PixelInState::new(
        &pixelation_shaders(),
        Box::new(move || finished_flag.store(true, Ordering::SeqCst)),
    );
    let entity = spawn_revealing_entity(&mut world, state);

    tick_behavior(&mut world);
    if cfg!(feature = "pixelate-gfx") {
        assert!(world.get::<EntityShader>(entity).is_some());
    }

    world.get_mut::<Behavior>(entity).unwrap().pop();
    tick_behavior(&mut world);

    assert!(
        world.get::<EntityShader>(entity).is_none(),
        "leaving the state must never leave a lingering shader"
    );
    assert!(
        !finished.load(Ordering::SeqCst),
        "an interrupted reveal never completes"
    );
    assert!(!world.get::<Behavior>(entity).unwrap().is_active());
}

// =============================================================================
// Arbitration and transition events
// =============================================================================

/// Test state that records its name when entered.
struct NamedState {
    priority: i32,
    name: &'static str,
    entered: Arc<Mutex<Vec<&'static str>>>,
}

impl BehaviorState for NamedState {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn on_enter(&mut self, _entity: Entity, _ctx: &mut BehaviorContext<'_, '_, '_>) {
        self.entered.lock().unwrap().push(self.name);
    }

    fn on_update(&mut self, _elapsed: f32, _entity: Entity, _ctx: &mut BehaviorContext<'_, '_, '_>) {
    }

    fn on_leave(&mut self, _entity: Entity, _ctx: &mut BehaviorContext<'_, '_, '_>) {}
}

#[test]
fn highest_priority_concurrent_request_wins() {
    let mut world = make_world(0.1);
    let entered: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let entity = world.spawn((Tint::default(), Behavior::idle())).id();
    {
        let mut behavior = world.get_mut::<Behavior>(entity).unwrap();
        behavior.request(Box::new(NamedState {
            priority: 1,
            name: "low",
            entered: entered.clone(),
        }));
        behavior.request(Box::new(NamedState {
            priority: 5,
            name: "high",
            entered: entered.clone(),
        }));
        behavior.request(Box::new(NamedState {
            priority: 3,
            name: "mid",
            entered: entered.clone(),
        }));
    }

    tick_behavior(&mut world);

    assert_eq!(*entered.lock().unwrap(), vec!["high"]);
    assert_eq!(
        world.get::<Behavior>(entity).unwrap().active_priority(),
        Some(5)
    );
}

#[test]
fn later_request_wins_priority_ties() {
    let mut world = make_world(0.1);
    let entered: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let entity = world.spawn((Tint::default(), Behavior::idle())).id();
    {
        let mut behavior = world.get_mut::<Behavior>(entity).unwrap();
        for name in ["first", "second"] {
            behavior.request(Box::new(NamedState {
                priority: PIXEL_IN_PRIORITY,
                name,
                entered: entered.clone(),
            }));
        }
    }

    tick_behavior(&mut world);

    assert_eq!(*entered.lock().unwrap(), vec!["second"]);
}

#[test]
fn state_swap_triggers_change_event() {
    let mut world = make_world(0.1);
    let entered: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let changes = Arc::new(AtomicUsize::new(0));
    let changes_seen = changes.clone();

    world.add_observer(move |_trigger: On<BehaviorChangeEvent>| {
        changes_seen.fetch_add(1, Ordering::SeqCst);
    });

    let entity = world
        .spawn((
            Tint::default(),
            Behavior::with_initial(Box::new(NamedState {
                priority: 1,
                name: "spawn",
                entered: entered.clone(),
            })),
        ))
        .id();

    tick_behavior(&mut world);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    world
        .get_mut::<Behavior>(entity)
        .unwrap()
        .request(Box::new(NamedState {
            priority: 2,
            name: "battle",
            entered: entered.clone(),
        }));
    tick_behavior(&mut world);

    assert_eq!(changes.load(Ordering::SeqCst), 2);
    assert_eq!(*entered.lock().unwrap(), vec!["spawn", "battle"]);
}

// =============================================================================
// World time
// =============================================================================

#[test]
fn world_time_applies_time_scale() {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        time_scale: 0.5,
        ..WorldTime::default()
    });

    update_world_time(&mut world, 0.2);
    update_world_time(&mut world, 0.2);

    let time = world.resource::<WorldTime>();
    assert!((time.delta - 0.1).abs() < 1e-6);
    assert!((time.elapsed - 0.2).abs() < 1e-6);
    assert_eq!(time.frame_count, 2);
}

#[test]
fn audio_messages_flow_back_into_the_world() {
    let mut world = make_world(0.0);
    world.init_resource::<Messages<AudioMessage>>();
    let (bridge, host) = create_audio_bridge();
    world.insert_resource(bridge);

    host.tx_msg
        .send(AudioMessage::FxFinished {
            fx: SfxType::Appear,
        })
        .unwrap();

    let mut schedule = Schedule::default();
    schedule.add_systems(emberfield::systems::audio::poll_audio_messages);
    schedule.run(&mut world);

    let messages = world.resource::<Messages<AudioMessage>>();
    assert!(!messages.is_empty());
}

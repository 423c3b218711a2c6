//! Headless construct demo
//!
//! Plays a short scripted run through every construct form and prints what
//! the core decides at each step. Set `RUST_LOG=debug` to see transforms.

#[cfg(not(target_arch = "wasm32"))]
use construct_physics::consts::*;
#[cfg(not(target_arch = "wasm32"))]
use construct_physics::sim::{
    CollisionResult, ConstructSystem, ConstructType, InputState, PhaseBounds, PlayerEntity, Rect,
};
#[cfg(not(target_arch = "wasm32"))]
use construct_physics::tuning::ConstructTuning;
#[cfg(not(target_arch = "wasm32"))]
use glam::Vec2;

#[cfg(not(target_arch = "wasm32"))]
fn describe(result: CollisionResult) -> &'static str {
    match result {
        CollisionResult::Damage => "damage",
        CollisionResult::Destroy => "destroy",
        CollisionResult::Ignore => "ignore",
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => ConstructTuning::load_or_default(path),
        None => ConstructTuning::default(),
    };
    log::info!("Construct demo starting...");

    let mut system = ConstructSystem::with_tuning(PhaseBounds::default(), &tuning);
    let mut player = PlayerEntity::new(Vec2::new(120.0, 400.0), 32.0, 48.0);
    let tick_ms = (SIM_DT * 1000.0) as Millis;

    println!("\nTitan");
    system.transform_to(ConstructType::Titan, 1000);
    for t in [1000, 2999, 3000] {
        println!("  t={t}ms invulnerable={}", system.is_invulnerable(t));
    }
    let stomp = InputState::tap(player.pos.y);
    system.update(&mut player, SIM_DT, &stomp);
    println!("  stomp velocity={}", player.velocity);
    let crate_box = Rect::new(player.pos.x + player.width, player.pos.y, 24.0, 24.0);
    let far_box = Rect::new(player.pos.x + 400.0, player.pos.y, 24.0, 24.0);
    for (name, obstacle) in [("crate", crate_box), ("far crate", far_box)] {
        for from_above in [true, false] {
            let outcome = system
                .resolve_contact(&player, &obstacle, from_above, 3000)
                .map_or("no contact", describe);
            println!("  {name} from_above={from_above:<5} -> {outcome}");
        }
    }

    println!("\nPhase");
    let mut now: Millis = 5000;
    system.transform_to(ConstructType::Phase, now);
    let mut was_pressed = false;
    for pressed in [false, true, true, false, true, false] {
        let input = InputState::from_edges(was_pressed, pressed, 0.0);
        system.update(&mut player, SIM_DT, &input);
        println!(
            "  pressed={pressed:<5} y={} direction={:?}",
            player.pos.y,
            system.strategies().phase().gravity_direction()
        );
        was_pressed = pressed;
        now += tick_ms;
    }

    println!("\nBlink");
    now += INVULNERABILITY_MS;
    system.transform_to(ConstructType::Blink, now);
    let after_window = now + INVULNERABILITY_MS;
    for teleporting in [false, true, false] {
        system.set_teleporting(teleporting);
        println!(
            "  teleporting={teleporting:<5} hit -> {}",
            describe(system.resolve_hit(false, after_window))
        );
    }

    system.reset_for_new_life();
    log::info!("Demo finished in {}", system.active_construct().as_str());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library is embedded by the web host; nothing to run here
}

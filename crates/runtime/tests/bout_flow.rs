//! End-to-end bouts driven through the runtime.

use std::path::PathBuf;
use std::sync::Arc;

use duel_content::{ContentFactory, InputScript};
use duel_core::{ActionKind, Archetype, Buttons, InputSnapshot, Slot};
use duel_runtime::{
    Bout, BoutEvent, BoutOutcome, ChaseInputProvider, IdleInputProvider, InputContext,
    ScriptedInputProvider, TickReport,
};

fn data() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
}

fn scripted(p1: Archetype, p2: Archetype, script: &str, max_ticks: u64) -> Bout {
    let content = data();
    let script: Arc<InputScript> = Arc::new(content.load_script(script).expect("script"));
    Bout::builder()
        .config(content.load_config().expect("config"))
        .roster(content.load_roster().expect("roster"))
        .archetype(Slot::One, p1)
        .archetype(Slot::Two, p2)
        .provider(Slot::One, ScriptedInputProvider::new(script.clone()))
        .provider(Slot::Two, ScriptedInputProvider::new(script))
        .max_ticks(max_ticks)
        .build()
        .expect("bout")
}

fn collect(bout: &mut Bout) -> Vec<TickReport> {
    let mut reports = Vec::new();
    bout.run(|report| reports.push(report.clone())).expect("run");
    reports
}

#[test]
fn scripted_bout_is_deterministic() {
    let a = collect(&mut scripted(Archetype::SlimeDemon, Archetype::Trapper, "opening_exchange", 400));
    let b = collect(&mut scripted(Archetype::SlimeDemon, Archetype::Trapper, "opening_exchange", 400));
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.events, y.events);
        assert_eq!(x.views, y.views);
    }
}

#[test]
fn damage_events_account_for_all_health_lost() {
    let mut bout = scripted(Archetype::Warrior, Archetype::Tank, "opening_exchange", 400);
    let reports = collect(&mut bout);

    for slot in [Slot::One, Slot::Two] {
        let reported: i32 = reports
            .iter()
            .flat_map(|r| &r.events)
            .filter_map(|event| match event {
                BoutEvent::DamageTaken { slot: s, amount, .. } if *s == slot => Some(*amount),
                _ => None,
            })
            .sum();
        let fighter = bout.fighter(slot);
        assert_eq!(reported, fighter.health().damage_taken());
        assert_eq!(reported, bout.stats(slot).damage_taken);
    }
}

#[test]
fn health_invariants_hold_every_tick() {
    let mut bout = scripted(Archetype::Assassin, Archetype::Warrior, "opening_exchange", 400);
    let mut last_alive = [true, true];
    bout.run(|report| {
        for (i, view) in report.views.iter().enumerate() {
            assert!((0..=view.max_health).contains(&view.health));
            assert_eq!(view.alive, view.health > 0);
            assert!(last_alive[i] || !view.alive, "fighter revived");
            last_alive[i] = view.alive;
            let arena_width = 1400;
            assert!(view.body.x >= 0 && view.body.right() <= arena_width);
        }
    })
    .expect("run");
}

#[test]
fn attack_cues_surface_as_events() {
    let mut bout = scripted(Archetype::Warrior, Archetype::Tank, "opening_exchange", 60);
    let reports = collect(&mut bout);
    let started: Vec<_> = reports
        .iter()
        .flat_map(|r| &r.events)
        .filter(|event| matches!(event, BoutEvent::AttackStarted { .. }))
        .collect();
    assert!(!started.is_empty());
    assert_eq!(
        bout.stats(Slot::One).attacks_started + bout.stats(Slot::Two).attacks_started,
        started.len() as u32
    );
}

#[test]
fn closure_provider_attacks_on_the_first_tick() {
    let mut bout = Bout::builder()
        .archetype(Slot::One, Archetype::Tank)
        .archetype(Slot::Two, Archetype::Warrior)
        .provider(Slot::One, |ctx: &InputContext<'_>| {
            if ctx.tick == 0 {
                InputSnapshot::new(Buttons::ATTACK1)
            } else {
                InputSnapshot::IDLE
            }
        })
        .provider(Slot::Two, IdleInputProvider)
        .build()
        .expect("bout");

    let report = bout.step().expect("tick");
    assert!(report.events.contains(&BoutEvent::AttackStarted {
        slot: Slot::One,
        archetype: Archetype::Tank,
        kind: duel_core::AttackKind::First,
    }));
    assert_eq!(report.view(Slot::One).action, ActionKind::Attack1);
}

#[test]
fn chase_bout_ends_with_a_consistent_outcome() {
    let mut bout = Bout::builder()
        .archetype(Slot::One, Archetype::Tank)
        .archetype(Slot::Two, Archetype::Assassin)
        .provider(Slot::One, ChaseInputProvider::default())
        .provider(Slot::Two, ChaseInputProvider::default())
        .max_ticks(6_000)
        .build()
        .expect("bout");
    let reports = collect(&mut bout);
    let last = reports.last().expect("at least one tick");
    let outcome = last.outcome.expect("decided");
    assert_eq!(bout.outcome(), Some(outcome));

    match outcome {
        BoutOutcome::Knockout { winner, tick } => {
            let loser = winner.opponent();
            assert_eq!(tick, bout.tick());
            assert!(!last.view(loser).alive);
            assert!(last.view(loser).death_done);
            assert!(
                last.events
                    .contains(&BoutEvent::DeathAnimationDone { slot: loser })
            );
            let downs = reports
                .iter()
                .flat_map(|r| &r.events)
                .filter(|e| **e == BoutEvent::FighterDown { slot: loser })
                .count();
            assert_eq!(downs, 1);
        }
        BoutOutcome::TimeUp { tick, .. } => assert_eq!(tick, 6_000),
    }
}

//! Plain-text HUD for headless bouts.
use duel_core::{ControlScheme, FighterView, KeyCode};
use duel_runtime::{BoutEvent, BoutOutcome, TickReport};

const BAR_WIDTH: usize = 20;

/// Renders tick reports as text lines.
pub struct Hud {
    every: u64,
}

impl Hud {
    pub fn new(every: u64) -> Self {
        Self { every }
    }

    /// Lines for one report: every event, plus a status line on the
    /// periodic ticks and on the deciding tick.
    pub fn render(&self, report: &TickReport) -> Vec<String> {
        let mut lines: Vec<String> = report
            .events
            .iter()
            .filter(|event| !matches!(event, BoutEvent::ActionChanged { .. }))
            .map(|event| format!("t={:05} {}", report.tick, describe(event)))
            .collect();

        let periodic = self.every > 0 && report.tick % self.every == 0;
        if periodic || report.outcome.is_some() {
            lines.push(format!(
                "t={:05} {} | {}",
                report.tick,
                status(&report.views[0]),
                status(&report.views[1])
            ));
        }
        if let Some(outcome) = report.outcome {
            lines.push(verdict(&outcome));
        }
        lines
    }
}

/// `[####......]` scaled to the view's health ratio.
pub fn health_bar(view: &FighterView) -> String {
    let filled = (view.health_ratio() * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn status(view: &FighterView) -> String {
    let mut line = format!(
        "{} {:<11} {} {:>3}/{:<3} {:<7} f{:<2} x={:<4}",
        view.slot,
        view.archetype.as_ref(),
        health_bar(view),
        view.health,
        view.max_health,
        view.action.as_ref(),
        view.frame,
        view.body.x
    );
    if view.burn.is_some() {
        line.push_str(" burn");
    }
    if view.bleed.is_some() {
        line.push_str(" bleed");
    }
    let ordnance = view.projectiles.len() + view.traps.len();
    if ordnance > 0 {
        line.push_str(&format!(" ordnance={}", ordnance));
    }
    line
}

pub fn describe(event: &BoutEvent) -> String {
    match event {
        BoutEvent::AttackStarted {
            slot,
            archetype,
            kind,
        } => format!("{} {} starts attack {}", slot, archetype, kind.number()),
        BoutEvent::DamageTaken {
            slot,
            amount,
            hp_before,
            hp_after,
        } => format!("{} takes {} ({} -> {})", slot, amount, hp_before, hp_after),
        BoutEvent::HealthThresholdCrossed {
            slot,
            threshold,
            hp_percent,
        } => format!("{} is {:?} at {}%", slot, threshold, hp_percent),
        BoutEvent::FighterDown { slot } => format!("{} is down", slot),
        BoutEvent::DeathAnimationDone { slot } => format!("{} stays down", slot),
        BoutEvent::ActionChanged { slot, from, to } => {
            format!("{} {} -> {}", slot, from, to)
        }
        BoutEvent::StatusApplied {
            slot,
            kind,
            remaining_damage,
        } => format!("{} suffers {} ({} owed)", slot, kind, remaining_damage),
        BoutEvent::OrdnanceDeployed {
            slot,
            projectiles,
            traps,
        } => format!(
            "{} deploys {} projectile(s), {} trap(s)",
            slot, projectiles, traps
        ),
    }
}

pub fn verdict(outcome: &BoutOutcome) -> String {
    match outcome {
        BoutOutcome::Knockout { winner, tick } => {
            format!("KO: {} wins at tick {}", winner, tick)
        }
        BoutOutcome::TimeUp {
            leader: Some(leader),
            tick,
        } => format!("TIME: {} leads on health at tick {}", leader, tick),
        BoutOutcome::TimeUp { leader: None, tick } => {
            format!("TIME: draw at tick {}", tick)
        }
    }
}

/// `left/right/jump attack1/attack2/attack3` key names.
pub fn key_legend(scheme: &ControlScheme<KeyCode>) -> String {
    format!(
        "{}/{}/{} {}/{}/{}",
        scheme.left, scheme.right, scheme.jump, scheme.attack1, scheme.attack2, scheme.attack3
    )
}

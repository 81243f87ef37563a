//! Demo input: taps whenever a threat is about to land on an unguarded
//! player.

use cybercat_core::commands::PlayerCommand;
use cybercat_core::config::GameConfig;
use cybercat_core::enums::GamePhase;
use cybercat_core::geometry::Rect;
use cybercat_core::state::SimSnapshot;

/// Command to send for this snapshot, if any.
///
/// Taps when no shield is live and some threat overlapping the shield column
/// is within half a shield lifetime of the shield's top edge.
pub fn next_tap(snapshot: &SimSnapshot, config: &GameConfig) -> Option<PlayerCommand> {
    if snapshot.phase != GamePhase::Running || !snapshot.shields.is_empty() {
        return None;
    }

    let field = &config.field;
    let shield = Rect::from_position(field.shield_origin(snapshot.player), field.shield_extent());
    let ticks = config.shield_ttl_ms as f64 / config.update_interval_ms.max(1) as f64;
    let lookahead = snapshot.state.threat_speed * ticks / 2.0;

    let incoming = snapshot.threats.iter().any(|threat| {
        let body = Rect::from_position(threat.position, field.threat_extent());
        let in_column = body.max.x >= shield.min.x && body.min.x <= shield.max.x;
        let gap = shield.min.y - body.max.y;
        in_column && body.min.y <= shield.max.y && gap <= lookahead
    });

    incoming.then_some(PlayerCommand::PointerActivated {
        x: snapshot.player.x,
        y: snapshot.player.y,
    })
}

//! Grid game logic: movement, collision resolution, health accounting.

use super::types::*;

/// Something that happened while resolving a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// The move was accepted. `from == to` when the player bumped an edge.
    Moved { from: Position, to: Position },
    /// The player landed on an enemy and lost `penalty` extra health.
    Hit { penalty: u32 },
    /// The player reached the goal with `score` health left.
    Victory { score: u32 },
    /// Health ran out.
    Defeat,
}

/// Apply one move. Returns the events it produced, in order.
///
/// Does nothing once the game is over. The move cost is always paid, even
/// when the player is pressed against an edge and does not actually move.
/// Landing on an enemy and landing on the goal are mutually exclusive: the
/// enemy check runs first, and a goal landing ends the game immediately
/// without the health check.
pub fn apply_move(game: &mut GridGame, direction: Direction) -> Vec<MoveEvent> {
    if game.is_terminal() {
        return Vec::new();
    }

    let mut events = Vec::with_capacity(2);

    let from = game.player;
    game.player = from.step_clamped(direction, game.size);
    game.moves += 1;
    events.push(MoveEvent::Moved {
        from,
        to: game.player,
    });

    game.health = game.health.saturating_sub(game.move_cost);
    log::debug!(
        "move {:?}: {} -> {}, health {}",
        direction,
        from,
        game.player,
        game.health
    );

    if game.is_enemy(game.player) {
        game.health = game.health.saturating_sub(game.enemy_hit_penalty);
        events.push(MoveEvent::Hit {
            penalty: game.enemy_hit_penalty,
        });
    } else if game.player == game.goal {
        game.score = game.health;
        game.outcome = Some(GameOutcome::Victory);
        events.push(MoveEvent::Victory { score: game.score });
        return events;
    }

    if game.health == 0 {
        game.outcome = Some(GameOutcome::Defeat);
        events.push(MoveEvent::Defeat);
    }

    events
}

//! Five Twelve Demo Driver
//!
//! Plays a scripted, seeded game against the board core and logs every
//! event. Stands in for the controller/view layers: it issues move commands,
//! places a tile after each move, and renders nothing.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use five_twelve::{
    game::events::EventKind,
    Board, BoardConfig, Move, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Five Twelve Core v{}", VERSION);

    let config = BoardConfig {
        seed: 512,
        ..BoardConfig::default()
    };
    info!("Board: {}x{}, seed {}", config.rows, config.cols, config.seed);

    let mut board = Board::new(config);

    // Subscribe to the event stream the way a display would
    let created = Rc::new(Cell::new(0u32));
    let updated = Rc::new(Cell::new(0u32));
    let removed = Rc::new(Cell::new(0u32));
    {
        let created = Rc::clone(&created);
        let updated = Rc::clone(&updated);
        let removed = Rc::clone(&removed);
        board.add_listener(move |event| {
            match event.kind {
                EventKind::TileCreated => created.set(created.get() + 1),
                EventKind::TileUpdated => updated.set(updated.get() + 1),
                EventKind::TileRemoved => removed.set(removed.get() + 1),
            }
            tracing::debug!(?event, "board event");
        });
    }

    // Two starting tiles, as the game rules prescribe
    board.place_tile(None)?;
    board.place_tile(None)?;

    info!("Starting grid: {}", serde_json::to_string(&board.to_rows())?);

    // Cycle through moves until the board locks up
    let script = [Move::Left, Move::Down, Move::Right, Move::Up];
    let mut moves_played = 0u32;

    for mv in script.iter().cycle() {
        if !board.has_moves() {
            break;
        }
        let before = board.to_rows();
        board.apply(*mv);
        moves_played += 1;

        // Only spawn when the move changed something, like the real game
        if board.to_rows() != before && board.has_empty() {
            board.place_tile(None)?;
        }

        if moves_played.is_multiple_of(50) {
            info!(
                "Move {}: score {}, {} empty cells",
                moves_played,
                board.score(),
                board.empty_positions().len()
            );
        }

        if moves_played >= 10_000 {
            // Scripted cycles can stall on a board that never locks up
            info!("Reached move limit, stopping");
            break;
        }
    }

    info!("=== Game Over ===");
    info!("Moves played: {}", moves_played);
    info!("Final score: {}", board.score());
    info!("Final grid: {}", serde_json::to_string(&board.to_rows())?);
    info!(
        "Events: {} created, {} updated, {} removed",
        created.get(),
        updated.get(),
        removed.get()
    );

    Ok(())
}

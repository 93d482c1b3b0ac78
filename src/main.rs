#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{
    board_dims, draw, init_logging, init_terminal, read_command, required_dims, restore_terminal,
    Command, GameEngine, GameStatus, GRID_SIZE, TARGET_TILE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use crossterm::tty::IsTty;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Stdout};

/// Slide and merge tiles until one of them reaches the target.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = GRID_SIZE, help = "Grid size (this build supports 4 only)")]
    size: usize,

    #[arg(long, default_value_t = TARGET_TILE, help = "Winning tile value (power of two, at least 8)")]
    target: u32,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.size != GRID_SIZE {
        anyhow::bail!(
            "unsupported grid size {} (this build supports {} only)",
            cli.size,
            GRID_SIZE
        );
    }
    if !cli.target.is_power_of_two() || cli.target < 8 {
        anyhow::bail!("target must be a power of two of at least 8, got {}", cli.target);
    }

    let mut stdout = io::stdout();
    if !stdout.is_tty() {
        anyhow::bail!("stdout is not a terminal");
    }
    let (term_w, term_h) = crossterm::terminal::size()?;
    let (need_w, need_h) = required_dims();
    if term_w < need_w || term_h < need_h {
        let (box_w, box_h) = board_dims();
        anyhow::bail!(
            "terminal too small for a {}x{} board: need {}x{} (cols x rows), have {}x{}",
            box_w,
            box_h,
            need_w,
            need_h,
            term_w,
            term_h
        );
    }

    if let Some(s) = cli.seed {
        log::info!("using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::with_target(cli.target);
    engine.start(&mut rng);

    init_terminal(&mut stdout)?;
    let result = run(&mut stdout, &mut engine, &mut rng);
    restore_terminal(&mut stdout)?;

    log::info!("final score: {}", engine.score());
    result
}

#[cfg(feature = "std")]
fn run(stdout: &mut Stdout, engine: &mut GameEngine, rng: &mut SmallRng) -> anyhow::Result<()> {
    loop {
        draw(stdout, engine)?;
        match read_command()? {
            Command::Quit => return Ok(()),
            Command::Restart => {
                engine.restart(rng);
                log::debug!("game restarted");
            }
            Command::Move(direction) => {
                if !matches!(engine.status(), GameStatus::InProgress) {
                    continue;
                }
                let outcome = engine
                    .apply(direction, rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if outcome.score > 0 {
                    log::debug!("merged for {} points ({:?})", outcome.score, direction);
                }
                match engine.status() {
                    GameStatus::Won => {
                        log::debug!("reached the {} tile", engine.target());
                    }
                    GameStatus::Lost => {
                        log::debug!("no moves left, final score {}", engine.score());
                    }
                    GameStatus::InProgress => {}
                }
            }
        }
    }
}

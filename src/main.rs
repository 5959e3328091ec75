use chasmsweeper::{
    base::board::HiddenBoard,
    config::{GlobalConfig, OracleMode},
    engine::{DeductionEngine, oracle::Oracle},
    ui::{self, GameResult, prompt::StdinOracle},
};
use log::{info, warn};

fn main() -> chasmsweeper::error::Result<()> {
    env_logger::init();

    let config = match GlobalConfig::path() {
        Ok(path) => GlobalConfig::load_or_init(&path),
        Err(err) => {
            warn!("Failed to locate config ({err}), using default config.");
            GlobalConfig::default()
        },
    };

    let mut engine = DeductionEngine::new(config.grid_size);
    let mut oracle: Box<dyn Oracle> = match config.oracle {
        OracleMode::Interactive => {
            println!("Welcome to the treasure hunt!");
            println!("Enter what you found in each hole ({}):", ui::prompt::LEGEND);
            Box::new(StdinOracle::new(std::io::stdin().lock(), std::io::stdout()))
        },
        OracleMode::Simulated => {
            let board = HiddenBoard::random(config.grid_size, config.mines);
            info!("Simulating a {0}x{0} board with {1} barrels", board.size(), board.mines());
            Box::new(board)
        },
    };

    let result = ui::play(&mut engine, oracle.as_mut(), &mut std::io::stdout())?;
    print!("{}", ui::render::render_grid(&engine));
    info!(
        "Game over: {result:?}, {} barrels confirmed",
        engine.knowledge().confirmed_mines().len()
    );
    if let GameResult::NoMove = result {
        info!("Game ended without a result");
    }

    Ok(())
}

use anyhow::Result;
use tracing::info;

use patzer_cli::Session;
use patzer_core::Board;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("patzer starting");

    // An optional argument sets up a custom position, e.g.
    // `patzer "4k3/8/8/8/8/8/8/4K2R w"`. Without it the standard game starts.
    let session = match std::env::args().nth(1) {
        Some(setup) => {
            let board: Board = setup.parse()?;
            Session::with_board(board)
        }
        None => Session::new(),
    };

    session.run()?;
    Ok(())
}

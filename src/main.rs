use word2csv::app::App;
use word2csv::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr, gated on RUST_LOG; the alternate screen
    // keeps them out of the UI
    env_logger::init();

    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // Run the main TUI event loop
    // The command deck handles all user input including file loading
    tui.run_event_loop(&mut app)?;

    Ok(())
}

// satview: terminal viewer for SAT lessons and lectures

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use satview::config::Args;
use satview::content::ContentSource;
use satview::session::{self, FileStore, SessionStore};
use satview::ui::App;
use satview::viewer::{Domain, Viewer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = satview::logging::init(&args.log_path()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let source = match ContentSource::parse(&args.content) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut store = session::open_store(args.state_file.clone(), FileStore::default_path);
    if args.reset {
        if let Err(e) = store.clear() {
            eprintln!("Warning: {}", e);
        }
    }
    tracing::info!(content = %source.describe(), "starting");

    // Both domains load concurrently; failures are contained per domain
    let viewer = Viewer::start(source, store).await;

    if args.dump {
        for domain in [Domain::ReadingWriting, Domain::Math] {
            println!("=== {} ===", domain.name());
            for line in viewer.view(domain).to_plain_lines() {
                println!("{}", line);
            }
            println!();
        }
        return Ok(());
    }

    // Restore the terminal even if the UI panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(viewer, args.tab.into());
    let res = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal failure");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

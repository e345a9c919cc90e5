use std::io::Write;

use basket::logging::{self, LogTarget};
use basket::{AppError, Cli, ShoppingApp};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.app_config();

    if cli.print_html {
        logging::init_tracing(LogTarget::Stderr)?;
        let html = basket::initial_html(&config);
        std::io::stdout().lock().write_all(html.as_bytes())?;
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init_tracing(LogTarget::File(path.clone()))?;
    }

    info!(?config, "starting session");
    let app = basket::run_with::<ShoppingApp>(config, cli.program_options()).await?;
    info!(
        items = app.list().len(),
        checked = app.list().checked_count(),
        "session ended"
    );
    Ok(())
}

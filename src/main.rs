use chrono::Utc;
use clap::Parser;
use tasktrack::cli::commands::Cli;
use tasktrack::error::AppError;
use tasktrack::io::config_io::load_config;
use tasktrack::io::logging::init_logging;
use tasktrack::ops::TaskView;
use tasktrack::tui::app::App;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;

    let view = cli.view.unwrap_or(config.general.default_view);
    let task_view = if cli.no_welcome {
        TaskView::new(view)
    } else {
        TaskView::with_welcome_task(view, Utc::now())
    };

    tasktrack::tui::run(App::new(task_view, config))?;
    Ok(())
}

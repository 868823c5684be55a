use std::io;
use std::process::ExitCode;

use clap::Parser;
use movie_recs::{
    cli::{prompt_user_index, write_report, Cli},
    config::Config,
    data::{load_movie_names, load_ratings_matrix},
    error::AppError,
    report::build_report,
    services::{Pearson, RatingPredictor},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Recommendation run failed");
            eprintln!("Error: {e}");
            e.downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("movie_recs=warn"))?,
        )
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.apply(Config::from_env()?);
    tracing::debug!(?config, "Configuration loaded");

    let matrix = load_ratings_matrix(&config.ratings_path)?;
    let catalog = load_movie_names(&config.movies_path, config.movies_have_header)?;

    let user = match cli.user {
        Some(user) => user,
        None => prompt_user_index(io::stdin().lock(), io::stderr())?,
    };

    let predictor = RatingPredictor::new(Pearson, config.similarity_threshold);
    let report = build_report(&matrix, &catalog, &predictor, user, config.top_n)?;

    write_report(&report, cli.format, io::stdout().lock())
}

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match lightbox::lightbox_main(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e}");

            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }

            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> anyhow::Result<()> {
    tracing_log::LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lightbox=debug"));

    let stdout_subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(stdout_subscriber)?;

    Ok(())
}

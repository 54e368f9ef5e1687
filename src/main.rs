use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use reservation_list::component::reservation_list::ReservationList;
use reservation_list::config::Config;
use reservation_list::helpers::notifier::ConsoleNotifier;
use reservation_list::helpers::surface::TerminalSurface;
use reservation_list::repositories::reservation_api::ReservationApiRepo;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    info!("Starting reservation list in {} environment", config.environment);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build the runtime")?;
    let outcome = runtime.block_on(show_reservations(config));

    // an alert still waiting for Enter sits on the blocking pool
    runtime.shutdown_background();
    outcome
}

async fn show_reservations(config: Config) -> anyhow::Result<()> {
    let repo = Arc::new(ReservationApiRepo::new(&config.reservation_endpoint)?);
    let mut component = ReservationList::new(
        repo,
        TerminalSurface::stdout(),
        ConsoleNotifier,
    );

    let outcome = tokio::select! {
        res = component.run() => res,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    };
    component.unmount();

    outcome
}

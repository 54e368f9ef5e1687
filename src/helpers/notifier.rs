use std::future::Future;
use std::io::{BufRead, IsTerminal, Write};
use tracing::warn;

pub const SOMETHING_WENT_WRONG: &str = "something went wrong";

/// Blocking, user-facing notification. The component waits for `alert` to finish
/// before handling anything else, but the runtime thread stays free meanwhile.
pub trait Notifier {
    fn alert(&mut self, message: &str) -> impl Future<Output = ()>;
}

/// Writes the alert to stderr and, on an interactive terminal, waits for Enter.
///
/// The wait runs on the blocking pool, so Ctrl-C still reaches the runtime while
/// the alert is up. The binary shuts the runtime down without waiting for it.
#[derive(Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    async fn alert(&mut self, message: &str) {
        let interactive = std::io::stdin().is_terminal();
        if let Err(e) = show(message, interactive) {
            warn!("Failed to show alert due to: {}", e);
            return;
        }
        if !interactive {
            return;
        }

        let acknowledged = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| ())
        })
        .await;

        match acknowledged {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to wait for alert acknowledgement due to: {}", e),
            Err(e) => warn!("Alert acknowledgement was interrupted due to: {}", e),
        }
    }
}

fn show(message: &str, interactive: bool) -> std::io::Result<()> {
    let mut stderr = std::io::stderr().lock();
    if interactive {
        write!(stderr, "{} [press Enter] ", message)?;
    } else {
        writeln!(stderr, "{}", message)?;
    }
    stderr.flush()
}

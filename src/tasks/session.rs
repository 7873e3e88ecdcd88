use crate::config::{Action, SessionAction};
use crate::events::{NavCommand, VisibilitySample};
use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Replays the scripted interaction session from configuration, dispatching
/// each action at its offset from session start. Stands in for the user the
/// browser would supply.
pub async fn run(
    mut actions: Vec<SessionAction>,
    nav_tx: Sender<NavCommand>,
    visibility_tx: Sender<VisibilitySample>,
    cancel: CancellationToken,
) -> Result<()> {
    actions.sort_by_key(|entry| entry.at);
    let start = Instant::now();

    for entry in actions {
        select! {
            _ = cancel.cancelled() => return Ok(()),
            _ = sleep_until(start + entry.at) => {}
        }
        debug!(at = %humantime::format_duration(entry.at), action = ?entry.action, "session action");
        let sent = match entry.action {
            Action::Next => nav_tx.send(NavCommand::Next).await.is_ok(),
            Action::Previous => nav_tx.send(NavCommand::Previous).await.is_ok(),
            Action::GoTo { index } => nav_tx.send(NavCommand::GoTo(index)).await.is_ok(),
            Action::PointerEnter => nav_tx.send(NavCommand::PointerEnter).await.is_ok(),
            Action::PointerLeave => nav_tx.send(NavCommand::PointerLeave).await.is_ok(),
            Action::Reveal { id, fraction } => visibility_tx
                .send(VisibilitySample { id, fraction })
                .await
                .is_ok(),
        };
        if !sent {
            // Receiving task is gone; nothing left to drive.
            break;
        }
    }

    info!("session script complete");
    Ok(())
}

use crate::events::SurfaceUpdate;
use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Stand-in for the document surface: consumes render updates and reports
/// them through tracing. Holds the slide labels so slide activations log
/// something human-readable alongside the index.
pub async fn run(
    slide_labels: Vec<String>,
    mut rx: Receiver<SurfaceUpdate>,
    cancel: CancellationToken,
) -> Result<()> {
    loop {
        select! {
            _ = cancel.cancelled() => break,

            maybe_update = rx.recv() => {
                let Some(update) = maybe_update else { break };
                match update {
                    SurfaceUpdate::Slide(shown) => {
                        let label = slide_labels
                            .get(shown.index)
                            .map(String::as_str)
                            .unwrap_or("<unlabeled>");
                        info!(slide = shown.index, indicator = shown.index, label, "slide active");
                    }
                    SurfaceUpdate::Counter(frame) if frame.done => {
                        info!(id = %frame.id, text = %frame.text, "counter finished");
                    }
                    SurfaceUpdate::Counter(frame) => {
                        debug!(id = %frame.id, text = %frame.text, "counter frame");
                    }
                }
            }
        }
    }
    Ok(())
}

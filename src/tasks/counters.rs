use crate::config::CounterSpec;
use crate::counter::{Ramp, TICK};
use crate::events::{CounterFrame, SurfaceUpdate, VisibilitySample};
use anyhow::Result;
use std::collections::HashMap;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct ActiveRamp {
    spec: CounterSpec,
    ramp: Ramp,
}

/// Arms each configured counter for one-shot visibility triggering and steps
/// every live ramp on a shared 50 ms ticker.
///
/// A counter is removed from the armed set the moment it triggers, so later
/// visibility samples for it fall through to the unknown-id path and are
/// ignored; scrolling away and back never restarts a ramp. Samples below a
/// counter's threshold leave it armed. Samples naming an element no counter
/// was registered for are skipped silently.
///
/// The ticker is reset only when the first ramp starts; a counter that
/// triggers while other ramps are live joins the running cadence, so its
/// first increment can land less than a full tick after the trigger.
pub async fn run(
    specs: Vec<CounterSpec>,
    mut visibility_rx: Receiver<VisibilitySample>,
    to_surface: Sender<SurfaceUpdate>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut armed: HashMap<String, CounterSpec> =
        specs.into_iter().map(|s| (s.id.clone(), s)).collect();
    let mut active: Vec<ActiveRamp> = Vec::new();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        select! {
            _ = cancel.cancelled() => break,

            _ = ticker.tick(), if !active.is_empty() => {
                for entry in &mut active {
                    entry.ramp.step();
                    let frame = CounterFrame {
                        id: entry.spec.id.clone(),
                        text: entry.ramp.rendered(&entry.spec.suffix),
                        done: entry.ramp.is_finished(),
                    };
                    if to_surface.send(SurfaceUpdate::Counter(frame)).await.is_err() {
                        warn!("surface channel closed");
                        return Ok(());
                    }
                }
                active.retain(|entry| !entry.ramp.is_finished());
            }

            maybe_sample = visibility_rx.recv() => {
                let Some(sample) = maybe_sample else { break };
                match armed.get(&sample.id) {
                    Some(spec) if sample.fraction >= spec.threshold => {
                        if let Some(spec) = armed.remove(&sample.id) {
                            info!(id = %spec.id, target = spec.target, "counter triggered");
                            if active.is_empty() {
                                // Fresh cadence: first increment lands one tick
                                // from now, not on a stale missed tick.
                                ticker.reset();
                            }
                            active.push(ActiveRamp {
                                ramp: Ramp::new(spec.target, spec.duration),
                                spec,
                            });
                        }
                    }
                    Some(spec) => {
                        debug!(
                            id = %sample.id,
                            fraction = sample.fraction,
                            threshold = spec.threshold,
                            "below visibility threshold; still armed"
                        );
                    }
                    None => {
                        debug!(id = %sample.id, "visibility sample for unknown or consumed element; ignoring");
                    }
                }
            }
        }
    }
    Ok(())
}

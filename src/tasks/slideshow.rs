use crate::carousel::Carousel;
use crate::events::{NavCommand, SlideShown, SurfaceUpdate};
use anyhow::Result;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

fn auto_advance_timer(interval: Duration) -> Interval {
    // First tick a full interval away, not immediately.
    let mut timer = interval_at(Instant::now() + interval, interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

async fn next_tick(timer: Option<&mut Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Owns the carousel and its auto-advance timer.
///
/// Rules:
/// - At most one timer is ever scheduled; starting replaces, stopping drops.
/// - `PointerEnter` pauses auto-advance, `PointerLeave` resumes it with the
///   original interval; the pair is safe under rapid alternation.
/// - Manual navigation applies immediately and then pushes the next
///   auto-advance a full interval away.
/// - With zero slides the task is inert but keeps draining commands so
///   senders never block.
/// - A zero interval disables auto-advance entirely; manual navigation
///   still applies.
pub async fn run(
    slide_count: usize,
    advance_interval: Duration,
    mut nav_rx: Receiver<NavCommand>,
    to_surface: Sender<SurfaceUpdate>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut carousel = Carousel::new(slide_count);
    // interval_at rejects a zero period; treat it as auto-advance off.
    let auto_enabled = slide_count > 0 && !advance_interval.is_zero();
    let mut timer = auto_enabled.then(|| auto_advance_timer(advance_interval));

    // Slide 0 (and its indicator) start out active.
    if let Some(index) = carousel.current() {
        if to_surface
            .send(SurfaceUpdate::Slide(SlideShown {
                index,
                previous: None,
            }))
            .await
            .is_err()
        {
            warn!("surface channel closed before first slide");
            return Ok(());
        }
    }

    loop {
        select! {
            _ = cancel.cancelled() => break,

            _ = next_tick(timer.as_mut()), if timer.is_some() => {
                if let Some(t) = carousel.next() {
                    debug!(from = t.from, to = t.to, "auto-advance");
                    if to_surface
                        .send(SurfaceUpdate::Slide(SlideShown { index: t.to, previous: Some(t.from) }))
                        .await
                        .is_err()
                    {
                        warn!("surface channel closed");
                        break;
                    }
                }
            }

            maybe_cmd = nav_rx.recv() => {
                let Some(cmd) = maybe_cmd else { break };
                match cmd {
                    NavCommand::Next | NavCommand::Previous | NavCommand::GoTo(_) => {
                        let transition = match cmd {
                            NavCommand::Next => carousel.next(),
                            NavCommand::Previous => carousel.previous(),
                            NavCommand::GoTo(index) => {
                                let t = carousel.go_to(index);
                                if t.is_none() {
                                    debug!(index, "goto outside slide range; ignoring");
                                }
                                t
                            }
                            _ => None,
                        };
                        if let Some(t) = transition {
                            debug!(from = t.from, to = t.to, ?cmd, "manual navigation");
                            if to_surface
                                .send(SurfaceUpdate::Slide(SlideShown { index: t.to, previous: Some(t.from) }))
                                .await
                                .is_err()
                            {
                                warn!("surface channel closed");
                                break;
                            }
                            // Full interval until the next auto-advance.
                            if timer.is_some() {
                                timer = Some(auto_advance_timer(advance_interval));
                            }
                        }
                    }
                    NavCommand::PointerEnter => {
                        debug!("pointer enter; auto-advance paused");
                        timer = None;
                    }
                    NavCommand::PointerLeave => {
                        debug!("pointer leave; auto-advance resumed");
                        if auto_enabled {
                            timer = Some(auto_advance_timer(advance_interval));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

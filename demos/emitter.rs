//! # Emitter Example
//!
//! Shows both ways of getting event behaviour:
//! - owning an [`EventHub`] (a download queue),
//! - grafting it onto a type (a progress bar that is itself an emitter).
//!
//! The example covers:
//! - receiver binding (two bars share one handler)
//! - one-shot subscriptions
//! - a failing handler interrupting dispatch
//!
//! ## Run
//! ```bash
//! RUST_LOG=vent=trace cargo run --example emitter
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing_subscriber::EnvFilter;
use vent::{
    Bind, Context, Emitter, EventHub, HandlerError, HandlerFn, HandlerRef, HubConfig, HubSlot,
    LogWriter, graft,
};

/// Progress of one download, in percent.
type Progress = u32;

struct ProgressBar {
    title: &'static str,
    percent: AtomicU32,
    events: HubSlot<Progress>,
}

graft!(ProgressBar, events, Progress);

impl ProgressBar {
    fn new(title: &'static str) -> Arc<Self> {
        Arc::new(Self {
            title,
            percent: AtomicU32::new(0),
            events: HubSlot::with_config(HubConfig::default().with_label(title)),
        })
    }

    fn render(&self) {
        let p = self.percent.load(Ordering::Relaxed);
        let filled = (p / 10) as usize;
        println!(
            " ├─► {:<8} [{}{}] {p:>3}%",
            self.title,
            "#".repeat(filled),
            ".".repeat(10 - filled)
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queue: EventHub<Progress> = EventHub::with_config(HubConfig::default().with_label("queue"));

    // One handler, bound to two receivers.
    let update: HandlerRef<Progress> =
        HandlerFn::arc("update", |ctx: &Context<'_, Progress>, p: &Progress| {
            let Some(bar) = ctx.receiver::<ProgressBar>() else {
                return Err(HandlerError::fail("update needs a ProgressBar receiver"));
            };
            bar.percent.store(*p, Ordering::Relaxed);
            bar.render();
            bar.publish("changed", p)
                .map_err(|err| HandlerError::fail(err.as_message()))
        });

    let left = ProgressBar::new("left");
    let right = ProgressBar::new("right");
    let left_bind = Bind::object(Arc::clone(&left));
    let right_bind = Bind::object(Arc::clone(&right));

    queue.subscribe("progress", &update, Some(&left_bind));
    queue.subscribe("progress", &update, Some(&right_bind));
    queue.subscribe("progress", &LogWriter::handler(), None);

    // The left bar announces its first change, and only that one.
    let started: HandlerRef<Progress> =
        HandlerFn::arc("started", |ctx: &Context<'_, Progress>, p: &Progress| {
            println!(" ├─► {} started at {p}%", ctx.hub().config().label());
            Ok(())
        });
    left.subscribe_once("changed", &started, None);

    println!("Downloads:");
    for p in [30, 60, 100] {
        queue.publish("progress", &p)?;
    }
    println!(
        " └─► left still announces start: {}",
        left.is_subscribed("changed", &started, None)
    );

    // A handler without a receiver fails and stops the remaining subscribers.
    queue.subscribe("progress", &update, None);
    queue.unsubscribe("progress", &update, Some(&right_bind));
    match queue.publish("progress", &10) {
        Ok(()) => println!("unexpected success"),
        Err(err) => println!("publish failed: [{}] {}", err.as_label(), err),
    }

    Ok(())
}

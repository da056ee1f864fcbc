//! Boot sequence driver
//!
//! Prints the boot lines on a fixed interval, then hands over to the prompt.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{BOOT_INTERVAL_MS, BOOT_SEQUENCE};
use crate::core::{BootSequence, BootStep};
use crate::utils::log;

/// Run the boot sequence
///
/// Must be called inside a component so the timer is cancelled when the
/// owner is disposed.
pub fn run(ctx: AppContext) {
    log::info("boot started");
    let timer = StoredValue::new_local(None::<Interval>);
    let sequence = StoredValue::new(BootSequence::new(BOOT_SEQUENCE));

    let interval = Interval::new(BOOT_INTERVAL_MS, move || {
        match sequence.try_update_value(BootSequence::tick) {
            Some(BootStep::Line(line)) => ctx.terminal.push_boot_line(line),
            Some(BootStep::Done) => {
                if let Some(interval) = timer.try_update_value(Option::take).flatten() {
                    interval.cancel();
                }
                ctx.terminal.finish_boot();
                log::info("boot complete");
            }
            // Owner already disposed
            None => {}
        }
    });
    timer.set_value(Some(interval));

    on_cleanup(move || {
        if let Some(interval) = timer.try_update_value(Option::take).flatten() {
            interval.cancel();
        }
        if !sequence
            .try_with_value(BootSequence::is_finished)
            .unwrap_or(true)
        {
            log::warn("boot sequence interrupted");
        }
    });
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowing a 100,000 row list costs the same at every scroll position.
//!
//! Run:
//! - `cargo run -p understory_virtual_window_demos --example hundred_thousand`

use std::time::Instant;

use understory_virtual_window::{ScrollState, ViewportSpec, WindowError, compute_visible_range};
use understory_virtual_window_demos::init_logging;

const TOTAL_ITEMS: usize = 100_000;

fn main() -> Result<(), WindowError> {
    init_logging();

    let spec = ViewportSpec::new(50.0_f64, 200.0)?;
    let max_offset = spec.max_scroll_offset(TOTAL_ITEMS);
    log::info!(
        "{TOTAL_ITEMS} rows, spacer {} tall, max offset {max_offset}",
        spec.total_extent(TOTAL_ITEMS)
    );

    for offset in [0.0, 125.0, 2_500_000.0, max_offset, max_offset + 10_000.0] {
        let window = spec.visible_window(ScrollState::from_host(offset), TOTAL_ITEMS);
        println!(
            "offset {offset:>9}: rows {:?}, before {} / after {}",
            window.range.as_range_inclusive(),
            window.before_extent(),
            window.after_extent(),
        );
    }

    // Sweep the whole list one pixel at a time.
    let started = Instant::now();
    let mut rendered = 0_usize;
    let mut offset = 0.0;
    while offset <= max_offset {
        rendered += compute_visible_range(offset, 50.0, 200.0, TOTAL_ITEMS)?.range.len();
        offset += 1.0;
    }
    log::info!(
        "{rendered} row renders over {max_offset} scroll positions in {:?}",
        started.elapsed()
    );
    Ok(())
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A notifications feed rendered through a [`VirtualWindow`].
//!
//! Rows are 50 logical pixels tall inside a 400 pixel viewport. Each scroll
//! event prints the rows a host would materialize and where it would put them.
//!
//! Run:
//! - `cargo run -p understory_virtual_window_demos --example notifications`

use understory_virtual_window::{ScrollAlign, VirtualWindow, WindowError};
use understory_virtual_window_demos::{
    FeedState, Notification, NotificationKind, init_logging, sample_notifications,
};

const ROW_HEIGHT: f64 = 50.0;
const VIEWPORT_HEIGHT: f64 = 400.0;
const ROW_WIDTH: f64 = 320.0;

fn render(list: &mut VirtualWindow<f64>, items: &[Notification]) {
    let window = list.visible_window();
    if window.is_empty() {
        println!("No items to display.");
        return;
    }
    println!(
        "offset {:>6}: spacer {} tall, rows {:?}",
        list.scroll_offset(),
        window.spacer_rect(ROW_WIDTH).height(),
        window.range.as_range_inclusive(),
    );
    let rects = window.item_rects(ROW_WIDTH);
    for ((index, item), (_, rect)) in window.range.enumerate(items).zip(rects) {
        let marker = if item.kind == NotificationKind::Error { "!" } else { " " };
        println!("  {marker} [{index:>3}] y={:>6} {item}", rect.y0);
    }
}

fn main() -> Result<(), WindowError> {
    init_logging();

    // A failed fetch and a successful one; only the latter reaches the list.
    let fetches = [
        Err("Failed to load items".to_owned()),
        Ok(sample_notifications(200)),
    ];
    let mut feed = FeedState::Loading;
    for fetch in fetches {
        if let Some(placeholder) = feed.placeholder() {
            println!("{placeholder}");
        }
        feed = FeedState::from_fetch(fetch);
    }
    let FeedState::Ready(items) = feed else {
        return Ok(());
    };
    let mut list = VirtualWindow::with_extents(ROW_HEIGHT, VIEWPORT_HEIGHT, items.len())?;
    render(&mut list, &items);

    for offset in [125.0, 5_000.0, 4_100.0] {
        list.set_scroll_offset(offset);
        render(&mut list, &items);
    }

    // Rubber-band overscroll from the host is clamped at the top.
    list.scroll_by(-10_000.0);
    render(&mut list, &items);

    list.scroll_to_index(150, ScrollAlign::Center);
    render(&mut list, &items);

    // The feed shrinks while scrolled far down; the window clamps to what is left.
    let items = &items[..3];
    list.set_item_count(items.len());
    render(&mut list, items);
    list.clamp_scroll_to_content();
    render(&mut list, items);

    list.set_item_count(0);
    render(&mut list, &[]);

    // Geometry that cannot be windowed is refused up front.
    if let Err(err) = list.set_item_extent(0.0) {
        log::warn!("keeping previous row height: {err}");
    }
    Ok(())
}

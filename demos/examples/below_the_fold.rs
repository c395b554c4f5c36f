// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility trigger on a long page.
//!
//! Lays out a column of slots, binds each to `visible`, and scrolls down and back up.
//! Each slot is filled the first time it enters the viewport and never again.
//!
//! Run:
//! - `cargo run -p lazy_tag_demos --example below_the_fold`

use kurbo::{Point, Size, Vec2};
use lazy_tag::dispatcher::Dispatcher;
use lazy_tag::invokers::VisibilityOptions;
use lazy_tag::settings::Settings;
use lazy_tag::trigger::Signal;
use lazy_tag_page::{ElementFlags, ElementNode, Page};
use tracing_subscriber::EnvFilter;

const SLOT_H: f64 = 250.0;
const GAP: f64 = 400.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page::new(Size::new(800.0, 600.0));
    let body = page.body();
    let feed = page.insert(
        body,
        ElementNode::new("main")
            .with_box(Vec2::new(0.0, 100.0), Size::new(800.0, 6000.0))
            .with_flags(ElementFlags::RENDERED | ElementFlags::POSITIONED),
    );

    let settings = Settings {
        visibility: VisibilityOptions {
            margin: 100.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut lazy = Dispatcher::with_builtins(settings);

    for i in 0..8 {
        let y = f64::from(i) * (SLOT_H + GAP);
        page.insert(
            feed,
            ElementNode::new("div")
                .with_id(format!("slot-{i}"))
                .with_box(Vec2::new(0.0, y), Size::new(800.0, SLOT_H)),
        );
        let id = format!("embed-{i}");
        lazy.register_tag(id.as_str(), format!("#slot-{i}"), format!("<iframe src=embed/{i}>"))
            .unwrap();
        lazy.bind_tag_to_event("visible", &id, &mut page).unwrap();
    }

    let positions = [0.0, 700.0, 1400.0, 2800.0, 1000.0, 0.0, 4200.0];
    for y in positions {
        page.scroll_to(Point::new(0.0, y));
        let fired: Vec<String> = lazy
            .notify(Signal::Scroll, &mut page)
            .into_iter()
            .map(|i| i.tag.to_string())
            .collect();
        println!("scroll={y:>6.1} viewport={:?} -> fired {fired:?}", page.viewport());
    }
    println!("injections: {}", page.injections().len());
}

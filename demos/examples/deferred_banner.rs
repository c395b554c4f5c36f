// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready and load triggers.
//!
//! Registers a few tags against the built-in `domReady` and `load` triggers, then replays
//! the page lifecycle, including a tag bound after the document was already ready.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lazy_tag_demos --example deferred_banner`

use kurbo::{Size, Vec2};
use lazy_tag::dispatcher::{Dispatcher, Invocation};
use lazy_tag::settings::Settings;
use lazy_tag::trigger::Signal;
use lazy_tag_page::{ElementNode, Page};
use tracing_subscriber::EnvFilter;

fn report(label: &str, out: &[Invocation]) {
    println!("== {label} ==");
    for i in out {
        match &i.result {
            Ok(()) => println!("  {} via {}: injected", i.tag, i.trigger),
            Err(err) => println!("  {} via {}: {err}", i.tag, i.trigger),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page::new(Size::new(1024.0, 768.0));
    let body = page.body();
    let banner = page.insert(
        body,
        ElementNode::new("div")
            .with_id("ad-slot")
            .with_box(Vec2::new(148.0, 0.0), Size::new(728.0, 90.0)),
    );
    let chat = page.insert(body, ElementNode::new("aside").with_class("chat"));

    let mut lazy = Dispatcher::with_builtins(Settings::default());
    lazy.register_tag("banner", "#ad-slot", "<img src=x>").unwrap();
    lazy.register_tag("analytics", "body", "<script>track()</script>").unwrap();
    lazy.register_tag("chat", ".chat", "<script src=chat.js></script>").unwrap();
    lazy.register_tag("orphan", "#no-such-slot", "<p>never</p>").unwrap();

    lazy.bind_tag_to_event("load", "banner", &mut page).unwrap();
    lazy.bind_tag_to_event("load", "orphan", &mut page).unwrap();
    lazy.bind_tag_to_event("domReady", "analytics", &mut page).unwrap();

    if let Err(err) = lazy.register_tag("banner", "#elsewhere", "") {
        println!("rejected: {err}");
    }

    let out = lazy.notify(Signal::DomReady, &mut page);
    report("domReady", &out);

    // Bound after the trigger: fires right away.
    let out = lazy.bind_tag_to_event("domReady", "chat", &mut page).unwrap();
    report("late binding", &out);

    let out = lazy.notify(Signal::Load, &mut page);
    report("load", &out);

    let out = lazy.notify(Signal::Load, &mut page);
    report("load (repeated)", &out);

    println!("#ad-slot: {}", page.inner_html(banner));
    println!(".chat:    {}", page.inner_html(chat));
    println!("injections: {}", page.injections().len());
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless accordion driven by a scripted sequence of clicks and key presses.
//!
//! This example shows how a host:
//! - runs a registration pass per render,
//! - routes clicks and DOM key names to the accordion,
//! - applies `FocusRequest`s to its own notion of focus,
//! - renders the attribute values the accordion derives.
//!
//! Run:
//! - `cargo run -p understory_demos --example accordion_keyboard`
//! - `RUST_LOG` is not read; the subscriber logs everything at `TRACE`.

use understory_accordion::{
    Accordion, AccordionOptions, FocusRequest, Modifiers, NavKey, SectionId, SectionProps,
};

/// Host-side section data.
struct Section {
    id: SectionId,
    title: &'static str,
    disabled: bool,
}

enum Input {
    Click(usize),
    Key(&'static str, Modifiers),
}

fn render(accordion: &mut Accordion<usize>, sections: &[Section], focused: usize) {
    accordion.begin_pass();
    for (i, section) in sections.iter().enumerate() {
        let props = SectionProps::default().disabled(section.disabled);
        let ctx = accordion.register_section(section.id, props, i);
        let trigger = ctx.trigger_attrs();
        let panel = ctx.panel_attrs();
        println!(
            "{} [{}] {:<10} id={} aria-expanded={} aria-controls={}{}",
            if focused == i { '>' } else { ' ' },
            trigger.data_state,
            section.title,
            trigger.id,
            trigger.aria_expanded,
            trigger.aria_controls,
            if trigger.disabled { " disabled" } else { "" },
        );
        if !panel.hidden {
            println!("      panel {} (labelled by {})", panel.id, panel.aria_labelledby);
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let mut accordion: Accordion<usize> = Accordion::new(
        AccordionOptions::new()
            .id("faq")
            .multiple(true)
            .collapsible(true)
            .default_index([0]),
    );
    let titles = ["Shipping", "Returns", "Warranty", "Contact"];
    let sections: Vec<Section> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| Section {
            id: accordion.allocate_section_id(),
            title: *title,
            disabled: i == 2,
        })
        .collect();

    let script = [
        Input::Key("ArrowDown", Modifiers::NONE),
        Input::Click(1),
        Input::Key("ArrowDown", Modifiers::NONE),
        Input::Key("ArrowDown", Modifiers::NONE),
        Input::Key("PageUp", Modifiers::CTRL),
        Input::Key("End", Modifiers::NONE),
        Input::Click(3),
        Input::Key("Enter", Modifiers::NONE),
        Input::Click(2),
        Input::Click(0),
    ];

    let mut focused = 0;
    render(&mut accordion, &sections, focused);

    for input in script {
        let current = focused;
        let mut apply = |request: FocusRequest<usize>| focused = request.handle;
        let result = match input {
            Input::Click(i) => {
                println!("click {}", sections[i].title);
                accordion.click(sections[i].id, &mut apply)
            }
            Input::Key(name, modifiers) => {
                println!("key {name} (ctrl: {})", modifiers.ctrl);
                match NavKey::from_key_name(name) {
                    Some(key) => accordion
                        .key_down(sections[current].id, key, modifiers, &mut apply)
                        .map(|_| ()),
                    None => Ok(()),
                }
            }
        };
        if let Err(err) = result {
            eprintln!("error: {err}");
        }
        render(&mut accordion, &sections, focused);
    }
}

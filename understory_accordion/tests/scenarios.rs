// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end passes through the public accordion API.

use understory_accordion::{
    Accordion, AccordionOptions, FocusRequest, Modifiers, NavKey, Ordinal, SectionId,
    SectionProps, SectionState,
};

fn ignore(_: FocusRequest<usize>) {}

fn mount(accordion: &mut Accordion<usize>, n: usize, disabled: &[usize]) -> Vec<SectionId> {
    let ids: Vec<_> = (0..n).map(|_| accordion.allocate_section_id()).collect();
    accordion.begin_pass();
    for (i, id) in ids.iter().enumerate() {
        accordion.register_section(*id, SectionProps::default().disabled(disabled.contains(&i)), i);
    }
    ids
}

fn states(accordion: &Accordion<usize>, ids: &[SectionId]) -> Vec<SectionState> {
    ids.iter()
        .map(|id| accordion.section(*id).map(|s| s.state))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn multiple_collapsible_can_close_everything() {
    use SectionState::{Collapsed, Open};

    let mut accordion = Accordion::new(
        AccordionOptions::new()
            .multiple(true)
            .collapsible(true)
            .default_index([0, 2]),
    );
    let ids = mount(&mut accordion, 3, &[]);
    assert_eq!(states(&accordion, &ids), [Open, Collapsed, Open]);

    accordion.click(ids[0], &mut ignore).unwrap();
    assert_eq!(states(&accordion, &ids), [Collapsed, Collapsed, Open]);

    accordion.click(ids[2], &mut ignore).unwrap();
    assert_eq!(states(&accordion, &ids), [Collapsed, Collapsed, Collapsed]);
    assert!(ids.iter().all(|id| accordion.section(*id).unwrap().panel_attrs().hidden));
}

#[test]
fn defaults_keep_one_section_open() {
    use SectionState::{Collapsed, Open};

    let mut accordion = Accordion::new(AccordionOptions::new());
    let ids = mount(&mut accordion, 3, &[]);
    assert_eq!(states(&accordion, &ids), [Open, Collapsed, Collapsed]);

    accordion.click(ids[1], &mut ignore).unwrap();
    assert_eq!(states(&accordion, &ids), [Collapsed, Open, Collapsed]);

    accordion.click(ids[1], &mut ignore).unwrap();
    assert_eq!(states(&accordion, &ids), [Collapsed, Open, Collapsed]);
}

#[test]
fn arrow_down_skips_a_disabled_section() {
    let mut accordion = Accordion::new(AccordionOptions::new());
    let ids = mount(&mut accordion, 5, &[1]);
    let mut focused = Vec::new();
    let moved = accordion
        .key_down(ids[0], NavKey::Down, Modifiers::NONE, &mut |r: FocusRequest<usize>| {
            focused.push(r.handle);
        })
        .unwrap();
    assert_eq!(moved, Some(Ordinal(2)));
    assert_eq!(focused, [2]);
}

#[test]
fn unrecognized_keys_are_not_intercepted() {
    assert_eq!(NavKey::from_key_name("Tab"), None);
    assert_eq!(NavKey::from_key_name(" "), None);
    assert_eq!(NavKey::from_key_name("PageDown"), Some(NavKey::PageDown));
}

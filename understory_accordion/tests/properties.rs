// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the toggle policy, registry ordering, and roving focus.

use proptest::prelude::*;
use understory_accordion::{
    AccordionConfig, Modifiers, NavKey, OpenSelection, Ordinal, compute_target, transition,
};
use understory_descendants::{DescendantMeta, Descendants};

fn config(multiple: bool, collapsible: bool) -> AccordionConfig {
    AccordionConfig {
        multiple,
        collapsible,
        ..AccordionConfig::default()
    }
}

fn open_set() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::btree_set(0_usize..16, 0..6).prop_map(|s| s.into_iter().collect())
}

fn registry(disabled: &[bool]) -> Descendants<usize> {
    let mut registry = Descendants::new();
    let ids: Vec<_> = disabled.iter().map(|_| registry.allocate_id()).collect();
    registry.reset();
    for (i, (id, disabled)) in ids.into_iter().zip(disabled).enumerate() {
        registry.ordinal(id, DescendantMeta::new(i).disabled(*disabled));
    }
    registry
}

proptest! {
    #[test]
    fn exclusive_non_collapsible_keeps_open_section(open in 0_usize..16) {
        let current = OpenSelection::Single(Some(Ordinal(open)));
        prop_assert_eq!(transition(&current, Ordinal(open), &config(false, false)), current);
    }

    #[test]
    fn exclusive_switches_to_any_other_section(open in 0_usize..16, toggled in 0_usize..16, collapsible in any::<bool>()) {
        prop_assume!(open != toggled);
        let current = OpenSelection::Single(Some(Ordinal(open)));
        prop_assert_eq!(
            transition(&current, Ordinal(toggled), &config(false, collapsible)),
            OpenSelection::Single(Some(Ordinal(toggled)))
        );
    }

    #[test]
    fn multiple_closing_respects_last_open_guard(open in open_set(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!open.is_empty());
        let toggled = Ordinal(open[pick.index(open.len())]);
        let current = OpenSelection::multiple(open.iter().copied().map(Ordinal));
        let next = transition(&current, toggled, &config(true, false));
        if open.len() == 1 {
            prop_assert_eq!(&next, &current);
        } else {
            prop_assert!(!next.is_open(toggled));
            prop_assert_eq!(next.len(), open.len() - 1);
        }
        let next = transition(&current, toggled, &config(true, true));
        prop_assert!(!next.is_open(toggled));
    }

    #[test]
    fn multiple_opening_is_a_union(open in open_set(), toggled in 0_usize..16, collapsible in any::<bool>()) {
        prop_assume!(!open.contains(&toggled));
        let current = OpenSelection::multiple(open.iter().copied().map(Ordinal));
        let next = transition(&current, Ordinal(toggled), &config(true, collapsible));
        let expected = OpenSelection::multiple(
            open.iter().copied().chain([toggled]).map(Ordinal),
        );
        prop_assert_eq!(&next, &expected);
        prop_assert!(next.open_ordinals().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn registry_order_matches_registration_order(n in 0_usize..24) {
        let registry = registry(&vec![false; n]);
        let ordinals: Vec<_> = registry.entries().map(|e| e.ordinal).collect();
        let expected: Vec<_> = (0..n).map(|i| Some(Ordinal(i))).collect();
        prop_assert_eq!(ordinals, expected);
    }

    #[test]
    fn navigation_never_targets_disabled_sections(
        disabled in prop::collection::vec(any::<bool>(), 0..12),
        current in 0_usize..12,
        key in prop::sample::select(vec![
            NavKey::Up, NavKey::Down, NavKey::PageUp, NavKey::PageDown, NavKey::Home, NavKey::End,
        ]),
        ctrl in any::<bool>(),
    ) {
        let registry = registry(&disabled);
        let request = compute_target(key, Some(Ordinal(current)), Modifiers { ctrl }, registry.entries());
        match request {
            Some(request) => prop_assert!(!disabled[request.handle]),
            None => prop_assert!(disabled.iter().all(|d| *d)),
        }
    }

    #[test]
    fn down_then_up_returns_to_an_enabled_origin(
        disabled in prop::collection::vec(any::<bool>(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let enabled: Vec<_> = (0..disabled.len()).filter(|i| !disabled[*i]).collect();
        prop_assume!(!enabled.is_empty());
        let origin = enabled[pick.index(enabled.len())];
        let registry = registry(&disabled);
        let down = compute_target(NavKey::Down, Some(Ordinal(origin)), Modifiers::NONE, registry.entries())
            .map(|r| r.ordinal);
        prop_assert!(down.is_some());
        let back = compute_target(NavKey::Up, down, Modifiers::NONE, registry.entries())
            .map(|r| r.ordinal);
        prop_assert_eq!(back, Some(Ordinal(origin)));
    }
}

#[test]
fn navigation_wraps_over_sparse_selectable_set() {
    let registry = registry(&[false, true, false, true, false]);
    let target = |key, current| {
        compute_target(key, Some(Ordinal(current)), Modifiers::NONE, registry.entries())
            .map(|r| r.ordinal.get())
    };
    assert_eq!(target(NavKey::Down, 4), Some(0));
    assert_eq!(target(NavKey::Up, 0), Some(4));
    assert_eq!(target(NavKey::Home, 2), Some(0));
    assert_eq!(target(NavKey::End, 2), Some(4));
}

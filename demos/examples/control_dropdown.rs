// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown lifecycle with a host that logs callbacks and listener registrations.
//!
//! Walks a dropdown through open → select, open → outside click, a validation error,
//! and disable, printing each callback and the resulting state.
//!
//! Run:
//! - `cargo run -p tether_demos --example control_dropdown`

use tether_control::{
    Choice, Control, ControlCallbacks, ControlConfig, ControlState, ExternalState, ListenerHost,
    ParentLookup,
};

#[derive(Default)]
struct Page {
    log: Vec<String>,
    next_listener: u32,
}

impl ControlCallbacks<&'static str> for Page {
    fn on_change(&mut self, value: &&'static str) {
        self.log.push(format!("change({value})"));
    }
    fn on_focus(&mut self) {
        self.log.push("focus".into());
    }
    fn on_blur(&mut self) {
        self.log.push("blur".into());
    }
}

impl ListenerHost for Page {
    type Listener = u32;
    fn add_pointer_down_listener(&mut self) -> u32 {
        self.next_listener += 1;
        self.log.push(format!("add listener #{}", self.next_listener));
        self.next_listener
    }
    fn remove_pointer_down_listener(&mut self, listener: u32) {
        self.log.push(format!("remove listener #{listener}"));
    }
}

// Element ids: 1 = page, 10 = dropdown root, 11 = option list, 20 = submit button.
struct Dom;
impl ParentLookup<u32> for Dom {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        match node {
            11 => Some(10),
            10 | 20 => Some(1),
            _ => None,
        }
    }
}

fn report(step: &str, c: &mut Control<&'static str, Page>) {
    let log = std::mem::take(&mut c.host_mut().log);
    let state = format!("{:?}", c.state());
    println!(
        "{step:<22} state={state:<8} open={:<5} {log:?}",
        c.is_open()
    );
}

fn main() {
    let mut basis = Control::new(ControlConfig::click(), Page::default());
    report("initial", &mut basis);

    basis.toggle();
    report("click trigger", &mut basis);
    basis.select_option(Choice::disabled("Incurred"));
    report("click disabled option", &mut basis);
    basis.select_option("Paid");
    report("select Paid", &mut basis);
    assert_eq!(basis.state(), ControlState::Filled);

    basis.toggle();
    basis.pointer_down_on(11_u32, &10, &Dom);
    report("open, click inside", &mut basis);
    basis.pointer_down_on(20_u32, &10, &Dom);
    report("click submit button", &mut basis);
    assert!(!basis.is_open());

    basis.set_external_state(Some(ExternalState::Error));
    basis.toggle();
    report("error, then open", &mut basis);
    assert_eq!(basis.state(), ControlState::Error);
    assert!(basis.is_open());

    basis.set_disabled(true);
    report("disable", &mut basis);
    assert!(!basis.has_listener());
}

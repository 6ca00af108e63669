use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::DashboardState;

/// Handle the controller reads and mutates dashboard state through.
///
/// Both methods report whether the state was still reachable; a signal whose
/// component has unmounted yields `None`/`false` instead of panicking.
pub trait StateStore: Clone {
    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;
    fn update(&self, f: impl FnOnce(&mut DashboardState)) -> bool;
}

impl StateStore for Signal<DashboardState> {
    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        // peek: controller reads must not subscribe the calling scope
        self.try_peek().ok().map(|state| f(&*state))
    }

    fn update(&self, f: impl FnOnce(&mut DashboardState)) -> bool {
        let mut signal = *self;
        let written = match signal.try_write() {
            Ok(mut state) => {
                f(&mut *state);
                true
            }
            Err(_) => false,
        };
        written
    }
}

impl StateStore for Rc<RefCell<DashboardState>> {
    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        Some(f(&*self.borrow()))
    }

    fn update(&self, f: impl FnOnce(&mut DashboardState)) -> bool {
        f(&mut *self.borrow_mut());
        true
    }
}

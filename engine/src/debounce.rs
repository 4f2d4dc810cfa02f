use crate::event::{Button, ButtonEdge};

/// Accepts an event only if at least `interval_ms` have passed since the last
/// accepted one. Timestamps wrap.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    interval_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl Debouncer {
    pub const fn new(interval_ms: u32) -> Self {
        Debouncer {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: u32) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms.wrapping_sub(last) < self.interval_ms => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }
}

/// One debouncer per button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonFilter {
    a: Debouncer,
    b: Debouncer,
    joystick: Debouncer,
}

impl ButtonFilter {
    pub const fn new(a_ms: u32, b_ms: u32, joystick_ms: u32) -> Self {
        ButtonFilter {
            a: Debouncer::new(a_ms),
            b: Debouncer::new(b_ms),
            joystick: Debouncer::new(joystick_ms),
        }
    }

    /// Runs every edge of `button` through its debouncer and reports whether
    /// any was accepted.
    pub fn pressed(&mut self, edges: &[ButtonEdge], button: Button) -> bool {
        let debouncer = match button {
            Button::A => &mut self.a,
            Button::B => &mut self.b,
            Button::Joystick => &mut self.joystick,
        };
        let mut accepted = false;
        for edge in edges.iter().filter(|e| e.button == button) {
            if debouncer.accept(edge.at_ms) {
                accepted = true;
            } else {
                log::debug!("{:?} bounce at {} ms", button, edge.at_ms);
            }
        }
        accepted
    }
}

use crate::time;
use bitdoglab_engine::axis::{AxisReading, AxisSource};
use bitdoglab_engine::config::{X_AXIS, Y_AXIS};
use bitdoglab_engine::event::{drain_edges, Button, ButtonEdge, EdgeBuffer, FrameInput};
use core::cell::RefCell;
use cortex_m::interrupt::Mutex;
use embedded_hal::adc::OneShot;
use hal::gpio::bank0::{Gpio26, Gpio27};
use hal::gpio::{FloatingInput, Pin};
use heapless::Deque;
use pico::hal;
use rp2040_hal::gpio::dynpin::DynPin;

const EDGE_QUEUE_LEN: usize = 16;

/// Button edges recorded by the GPIO interrupt, drained once per frame.
static EDGES: Mutex<RefCell<Deque<ButtonEdge, EDGE_QUEUE_LEN>>> =
    Mutex::new(RefCell::new(Deque::new()));

/// Called from interrupt context. A full queue drops the edge.
pub fn push_edge(button: Button) {
    let edge = ButtonEdge::new(button, time::time_ms());
    cortex_m::interrupt::free(|cs| {
        // Logging here would re-enter the USB logger from the GPIO interrupt.
        let _ = EDGES.borrow(cs).borrow_mut().push_back(edge);
    });
}

/// Removes queued edges, oldest first, up to one frame's worth.
pub fn take_edges() -> EdgeBuffer {
    cortex_m::interrupt::free(|cs| drain_edges(&mut EDGES.borrow(cs).borrow_mut()))
}

/// The analog stick. The Y channel sits on ADC0 and X on ADC1.
pub struct Joystick {
    adc: hal::Adc,
    x_pin: Pin<Gpio27, FloatingInput>,
    y_pin: Pin<Gpio26, FloatingInput>,
}

impl Joystick {
    pub fn new(
        adc: hal::Adc,
        x_pin: Pin<Gpio27, FloatingInput>,
        y_pin: Pin<Gpio26, FloatingInput>,
    ) -> Self {
        Joystick { adc, x_pin, y_pin }
    }
}

impl AxisSource for Joystick {
    /// A failed conversion reads as the resting position.
    fn read_axes(&mut self) -> AxisReading {
        let y: u16 = self.adc.read(&mut self.y_pin).unwrap_or(Y_AXIS.center);
        let x: u16 = self.adc.read(&mut self.x_pin).unwrap_or(X_AXIS.center);
        AxisReading::new(x, y)
    }
}

/// An active-low push button. Presses arrive through the edge queue.
pub struct ButtonPin {
    _pin: DynPin,
}

impl ButtonPin {
    pub fn new(mut pin: DynPin) -> ButtonPin {
        pin.into_pull_up_input();
        ButtonPin { _pin: pin }
    }
}

pub struct Input {
    pub joystick: Joystick,
    pub button_a: ButtonPin,
    pub button_b: ButtonPin,
    pub joystick_button: ButtonPin,
}

impl Input {
    pub fn new(
        joystick: Joystick,
        button_a_pin: DynPin,
        button_b_pin: DynPin,
        joystick_button_pin: DynPin,
    ) -> Self {
        Input {
            joystick,
            button_a: ButtonPin::new(button_a_pin),
            button_b: ButtonPin::new(button_b_pin),
            joystick_button: ButtonPin::new(joystick_button_pin),
        }
    }

    /// Samples the stick and collects the edges queued since the last call.
    pub fn sample(&mut self) -> FrameInput {
        let mut input = FrameInput::new(time::time_ms(), self.joystick.read_axes());
        for edge in take_edges() {
            input.push_edge(edge);
        }
        input
    }
}

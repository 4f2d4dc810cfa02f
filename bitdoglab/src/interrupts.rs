use crate::hardware::{BUTTON_A_GPIO, BUTTON_B_GPIO, JOYSTICK_BUTTON_GPIO};
use crate::input;
use bitdoglab_engine::bank::{self, BANK_WORDS};
use bitdoglab_engine::event::Button;
use pico::hal::pac;
use pico::hal::pac::interrupt;

const BUTTONS: [(usize, Button); 3] = [
    (BUTTON_A_GPIO, Button::A),
    (BUTTON_B_GPIO, Button::B),
    (JOYSTICK_BUTTON_GPIO, Button::Joystick),
];

#[allow(clippy::missing_safety_doc)]
pub unsafe fn enable_falling_edge_interrupt(gpio: usize) {
    let regs = &*pac::IO_BANK0::PTR;
    regs.proc0_inte[gpio / 8].modify(|r, w| w.bits(r.bits() | bank::edge_low_bit(gpio)));
}

/// Arms a falling-edge interrupt on every button and unmasks the bank IRQ.
#[allow(clippy::missing_safety_doc)]
pub unsafe fn enable_button_interrupts() {
    acknowledge(&bank::edge_mask(&BUTTONS));
    for (gpio, _) in BUTTONS {
        enable_falling_edge_interrupt(gpio);
    }
    unmask_gpio_interrupt();
}

#[allow(clippy::missing_safety_doc)]
pub unsafe fn unmask_gpio_interrupt() {
    pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
}

fn interrupt_status() -> [u32; BANK_WORDS] {
    let regs = unsafe { &*pac::IO_BANK0::PTR };
    let mut status = [0; BANK_WORDS];
    for (i, word) in status.iter_mut().enumerate() {
        *word = regs.proc0_ints[i].read().bits();
    }
    status
}

/// Clears the given raw interrupt bits. Bits not set are left latched.
pub fn acknowledge(bits: &[u32; BANK_WORDS]) {
    let regs = unsafe { &*pac::IO_BANK0::PTR };
    for (i, &mask) in bits.iter().enumerate() {
        if mask != 0 {
            regs.intr[i].write(|w| unsafe { w.bits(mask) });
        }
    }
}

#[allow(non_snake_case)]
#[interrupt]
fn IO_IRQ_BANK0() {
    let latched = bank::latched_edges(&interrupt_status(), &BUTTONS);
    acknowledge(&latched.acknowledge);
    for button in latched.buttons {
        input::push_edge(button);
    }
}

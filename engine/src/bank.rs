//! Button decoding for the RP2040 GPIO bank interrupt status.
//!
//! The bank reports its 30 pins in four 32-bit words, eight pins per word and
//! four event bits per pin. Status bits are cleared by writing them back.

use crate::event::Button;
use heapless::Vec;

pub const BANK_WORDS: usize = 4;
pub const MAX_BUTTONS: usize = 3;

/// Falling-edge bit of `gpio` within its status word.
pub const fn edge_low_bit(gpio: usize) -> u32 {
    4 << (4 * (gpio % 8))
}

/// Buttons with a latched falling edge, and the bits that acknowledge exactly
/// those edges.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LatchedEdges {
    pub buttons: Vec<Button, MAX_BUTTONS>,
    pub acknowledge: [u32; BANK_WORDS],
}

pub fn latched_edges(status: &[u32; BANK_WORDS], pins: &[(usize, Button)]) -> LatchedEdges {
    let mut latched = LatchedEdges::default();
    for &(gpio, button) in pins {
        let bit = edge_low_bit(gpio);
        if status[gpio / 8] & bit != 0 && latched.buttons.push(button).is_ok() {
            latched.acknowledge[gpio / 8] |= bit;
        }
    }
    latched
}

/// Bits that clear any stale falling edge on `pins`.
pub fn edge_mask(pins: &[(usize, Button)]) -> [u32; BANK_WORDS] {
    let mut mask = [0; BANK_WORDS];
    for &(gpio, _) in pins {
        mask[gpio / 8] |= edge_low_bit(gpio);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINS: [(usize, Button); 3] = [(5, Button::A), (6, Button::B), (22, Button::Joystick)];

    #[test]
    fn test_edge_low_bit() {
        assert_eq!(edge_low_bit(0), 0x4);
        assert_eq!(edge_low_bit(5), 0x40_0000);
        assert_eq!(edge_low_bit(22), 0x400_0000);
    }

    #[test]
    fn test_nothing_latched() {
        let latched = latched_edges(&[0; BANK_WORDS], &PINS);
        assert!(latched.buttons.is_empty());
        assert_eq!(latched.acknowledge, [0; BANK_WORDS]);
    }

    #[test]
    fn test_acknowledges_only_seen_edges() {
        // A and the joystick latched, plus a rising edge on A and activity on
        // an unrelated pin.
        let mut status = [0; BANK_WORDS];
        status[0] = edge_low_bit(5) | (8 << 20) | edge_low_bit(1);
        status[2] = edge_low_bit(22);
        let latched = latched_edges(&status, &PINS);
        assert_eq!(latched.buttons.as_slice(), &[Button::A, Button::Joystick]);
        assert_eq!(latched.acknowledge, [edge_low_bit(5), 0, edge_low_bit(22), 0]);
    }

    #[test]
    fn test_edge_after_read_stays_latched() {
        // B latches after the status was read; acknowledging what was seen
        // leaves it pending for the next interrupt.
        let seen = [edge_low_bit(5), 0, 0, 0];
        let latched = latched_edges(&seen, &PINS);
        let mut intr = [edge_low_bit(5) | edge_low_bit(6), 0, 0, 0];
        for (word, ack) in intr.iter_mut().zip(latched.acknowledge.iter()) {
            *word &= !ack;
        }
        assert_eq!(latched_edges(&intr, &PINS).buttons.as_slice(), &[Button::B]);
    }

    #[test]
    fn test_edge_mask() {
        assert_eq!(
            edge_mask(&PINS),
            [edge_low_bit(5) | edge_low_bit(6), 0, edge_low_bit(22), 0]
        );
    }
}

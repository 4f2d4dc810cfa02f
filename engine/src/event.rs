use crate::axis::{AxisReading, JoystickSignals};
use heapless::{Deque, Vec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    Joystick,
}

/// A falling edge on a button, stamped with the board time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEdge {
    pub button: Button,
    pub at_ms: u32,
}

impl ButtonEdge {
    pub fn new(button: Button, at_ms: u32) -> Self {
        ButtonEdge { button, at_ms }
    }
}

pub const MAX_EDGES_PER_FRAME: usize = 8;

pub type EdgeBuffer = Vec<ButtonEdge, MAX_EDGES_PER_FRAME>;

/// Everything a frame consumes: the time, one joystick sample and the button
/// edges queued since the previous frame.
#[derive(Debug, Clone)]
pub struct FrameInput {
    pub now_ms: u32,
    pub axes: AxisReading,
    pub edges: EdgeBuffer,
}

impl FrameInput {
    pub fn new(now_ms: u32, axes: AxisReading) -> Self {
        FrameInput {
            now_ms,
            axes,
            edges: Vec::new(),
        }
    }

    pub fn with_edge(mut self, button: Button) -> Self {
        let at_ms = self.now_ms;
        self.push_edge(ButtonEdge::new(button, at_ms));
        self
    }

    /// Edges past the frame capacity are dropped.
    pub fn push_edge(&mut self, edge: ButtonEdge) {
        if self.edges.push(edge).is_err() {
            log::warn!("dropped {:?} edge", edge.button);
        }
    }

    pub fn signals(&self) -> JoystickSignals {
        JoystickSignals::from_reading(self.axes)
    }
}

/// Moves queued edges, oldest first, into a frame buffer. Edges that do not
/// fit stay queued for the next frame.
pub fn drain_edges<const N: usize>(queue: &mut Deque<ButtonEdge, N>) -> EdgeBuffer {
    let mut edges = EdgeBuffer::new();
    while !edges.is_full() {
        match queue.pop_front() {
            Some(edge) => {
                let _ = edges.push(edge);
            }
            None => break,
        }
    }
    edges
}

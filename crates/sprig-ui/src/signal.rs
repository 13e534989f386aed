use crate::tree::NodeId;

/// Notification raised by a widget during dispatch or update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UiSignal {
    /// A press was released on the widget.
    Clicked(NodeId),
    /// A value-bearing widget changed its value.
    ValueChanged { node: NodeId, value: f32 },
}

impl UiSignal {
    pub fn node(&self) -> NodeId {
        match *self {
            UiSignal::Clicked(node) => node,
            UiSignal::ValueChanged { node, .. } => node,
        }
    }
}

/// FIFO of signals raised during a frame, drained once by the application.
#[derive(Debug, Default)]
pub struct Signals {
    queue: Vec<UiSignal>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: UiSignal) {
        self.queue.push(signal);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and yields every queued signal in emission order.
    pub fn drain(&mut self) -> impl Iterator<Item = UiSignal> + '_ {
        self.queue.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn drains_in_emission_order_and_names_the_source() {
        let mut ids: SlotMap<NodeId, ()> = SlotMap::with_key();
        let (a, b) = (ids.insert(()), ids.insert(()));

        let mut signals = Signals::new();
        signals.push(UiSignal::ValueChanged { node: b, value: 0.5 });
        signals.push(UiSignal::Clicked(a));
        assert_eq!(signals.len(), 2);

        let sources: Vec<NodeId> = signals.drain().map(|s| s.node()).collect();
        assert_eq!(sources, vec![b, a]);
        assert!(signals.is_empty());
    }
}

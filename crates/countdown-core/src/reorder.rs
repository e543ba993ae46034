//! Drag Working Copy
//!
//! While a drag is in flight the list renders from a scratch copy of the id
//! order. The store only sees the final permutation, once, on drop. Keyboard
//! moves go through the same session, one step per key press.

/// Move the element at `from` to `to`, shifting the ones in between
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

/// In-progress reorder gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    active: String,
    order: Vec<String>,
    original: Vec<String>,
}

impl DragSession {
    /// Begin dragging `active`; `None` if it is not in `order`
    pub fn start(order: Vec<String>, active: &str) -> Option<Self> {
        if !order.iter().any(|id| id == active) {
            return None;
        }
        Some(Self {
            active: active.to_string(),
            original: order.clone(),
            order,
        })
    }

    /// The dragged item hovers over `over`: move it to that slot.
    ///
    /// Returns whether the working order changed.
    pub fn drag_over(&mut self, over: &str) -> bool {
        if over == self.active {
            return false;
        }
        let from = self.order.iter().position(|id| *id == self.active);
        let to = self.order.iter().position(|id| id == over);
        match (from, to) {
            (Some(from), Some(to)) => {
                array_move(&mut self.order, from, to);
                true
            }
            _ => false,
        }
    }

    /// Keyboard move: shift the active item one slot up (`forward == false`)
    /// or down. Returns false at either end of the list.
    pub fn step(&mut self, forward: bool) -> bool {
        let Some(from) = self.order.iter().position(|id| *id == self.active) else {
            return false;
        };
        let to = if forward {
            from + 1
        } else if from == 0 {
            return false;
        } else {
            from - 1
        };
        match self.order.get(to).cloned() {
            Some(neighbour) => self.drag_over(&neighbour),
            None => false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Working order differs from where the drag started
    pub fn is_changed(&self) -> bool {
        self.order != self.original
    }

    /// Final order to hand to the store
    pub fn finish(self) -> Vec<String> {
        self.order
    }
}

/// Per-property image carousel position. Each property's index is tracked
/// independently and wraps modulo its image count.
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    indices: HashMap<u32, usize>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self, id: u32) -> usize {
        self.indices.get(&id).copied().unwrap_or(0)
    }

    pub fn advance(&mut self, id: u32, image_count: usize) {
        if image_count == 0 {
            return;
        }
        let next = (self.current(id) + 1) % image_count;
        self.indices.insert(id, next);
    }

    pub fn retreat(&mut self, id: u32, image_count: usize) {
        if image_count == 0 {
            return;
        }
        let prev = (self.current(id) + image_count - 1) % image_count;
        self.indices.insert(id, prev);
    }
}

/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Binary heap with decrease-key.

use super::ItemPriQueue;

/// A slot holding one element.
struct Slot<K, V> {
    key: K,
    value: V,
    /// Position of the element on the heap. If the slot is unused, the
    /// index of the next unused slot (or the slot itself if it is the last
    /// one).
    pos: usize,
}

/// Binary min-heap whose elements are referenced by slot indices.
pub struct BinHeap<K, V> {
    /// Slot indices in heap order.
    heap: Vec<usize>,
    slots: Vec<Slot<K, V>>,
    /// First unused slot.
    free: Option<usize>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            slots: vec![],
            free: None,
        }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    K: Clone,
    V: PartialOrd + Clone,
{
    type Item = usize;

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.free = None;
    }

    fn value(&self, item: &usize) -> &V {
        &self.slots[*item].value
    }

    fn push(&mut self, key: K, value: V) -> usize {
        let slot = Slot {
            key,
            value,
            pos: self.heap.len(),
        };
        let item = match self.free {
            Some(item) => {
                let next = self.slots[item].pos;
                self.free = if next == item { None } else { Some(next) };
                self.slots[item] = slot;
                item
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.heap.push(item);
        self.upheap(item);
        item
    }

    fn decrease_key(&mut self, item: &mut usize, value: V) -> bool {
        if self.slots[*item].value > value {
            self.slots[*item].value = value;
            self.upheap(*item);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let min_item = self.heap.swap_remove(0);
        self.slots[min_item].pos = self.free.unwrap_or(min_item);
        self.free = Some(min_item);

        if let Some(&item) = self.heap.first() {
            self.downheap(item);
        }

        let slot = &self.slots[min_item];
        Some((slot.key.clone(), slot.value.clone()))
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd + Clone,
{
    /// Move `item` up until its parent is not larger.
    fn upheap(&mut self, item: usize) {
        let value = self.slots[item].value.clone();
        let mut cur_pos = self.slots[item].pos;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            let parent = self.heap[parent_pos];
            if value > self.slots[parent].value {
                break;
            }
            self.heap[cur_pos] = parent;
            self.slots[parent].pos = cur_pos;
            cur_pos = parent_pos;
        }
        self.slots[item].pos = cur_pos;
        self.heap[cur_pos] = item;
    }

    /// Move `item`, which must be at the root, down until no child is
    /// smaller.
    fn downheap(&mut self, item: usize) {
        let n = self.heap.len();
        let value = self.slots[item].value.clone();
        let mut cur_pos = 0;
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.slots[self.heap[left_pos]].value < self.slots[self.heap[right_pos]].value
            {
                left_pos
            } else {
                right_pos
            };

            let next = self.heap[next_pos];
            if value <= self.slots[next].value {
                break;
            }

            self.heap[cur_pos] = next;
            self.slots[next].pos = cur_pos;
            cur_pos = next_pos;
        }
        self.heap[cur_pos] = item;
        self.slots[item].pos = cur_pos;
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::ItemPriQueue;

    #[test]
    fn test_pop_order() {
        let mut heap = BinHeap::new();
        for (i, &v) in [7, 3, 9, 1, 5, 8, 2].iter().enumerate() {
            heap.push(i, v);
        }
        assert_eq!(heap.len(), 7);

        let mut values = vec![];
        while let Some((_, v)) = heap.pop_min() {
            values.push(v);
        }
        assert_eq!(values, vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_decrease_key() {
        let mut heap = BinHeap::new();
        let _a = heap.push("a", 4.0);
        let mut b = heap.push("b", 6.0);
        let _c = heap.push("c", 5.0);

        assert!(!heap.decrease_key(&mut b, 7.0));
        assert!(heap.decrease_key(&mut b, 1.0));
        assert_eq!(*heap.value(&b), 1.0);

        assert_eq!(heap.pop_min(), Some(("b", 1.0)));
        assert_eq!(heap.pop_min(), Some(("a", 4.0)));

        // the freed slots are reused
        let d = heap.push("d", 0.5);
        assert!(d < 3);
        assert_eq!(heap.pop_min(), Some(("d", 0.5)));
        assert_eq!(heap.pop_min(), Some(("c", 5.0)));
        assert_eq!(heap.pop_min(), None);
    }
}

//! Generational arena backing the Pokedex node chain.
//!
//! The chain is a doubly-linked list in spirit, but nodes live in an
//! owned slot arena and link to each other through stable [`NodeId`]
//! handles instead of pointers. A handle carries the generation of the
//! slot it was issued for, so a handle to a removed node resolves to
//! nothing even if the slot has been reused.

use super::node::PokeNode;

/// Stable handle to a node slot.
///
/// Internal to the crate; the public API identifies entries by
/// [`PokemonId`](crate::pokemon::PokemonId) instead.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

/// One arena slot; `node` is `None` while the slot sits on the free list.
#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<PokeNode>,
}

/// Owned slot arena with free-list reuse.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Stores `node` and returns its handle, reusing a free slot if any.
    pub fn insert(&mut self, node: PokeNode) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.node.is_none(), "free list pointed at a live slot");
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    /// Removes and returns the node behind `id`, if the handle is live.
    ///
    /// The slot's generation is bumped so outstanding handles to the
    /// removed node (evolution links, a stale cursor) stop resolving.
    pub fn remove(&mut self, id: NodeId) -> Option<PokeNode> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&PokeNode> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut PokeNode> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    /// Whether `id` resolves to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(NodeId, u64);
}

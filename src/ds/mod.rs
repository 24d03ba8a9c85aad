pub mod slot_ring;

pub use slot_ring::{Iter, Placement, Probe, SlotRing};

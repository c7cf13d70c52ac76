//! Event system for host nodes
//!
//! The event system provides:
//! - The recognized event allow-list that turns `on<Event>` keys into listeners
//! - Per-node listener tables
//! - Bubbling dispatch from a target node up through its ancestors

pub mod allow_list;
pub mod event;
pub mod listeners;

pub use allow_list::EventSet;
pub use event::Event;
pub use listeners::ListenerTable;

//! Collaborators the engine talks to: snapshot persistence and sound cues.

pub mod snapshot_store;
pub mod sound;

pub use snapshot_store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore, STORAGE_KEY};
pub use sound::{LogCue, MutedCue, SoundCue};

//! Best-effort local snapshot of the game, keyed by a fixed identifier.
//!
//! Only `GameState` is stored. Phase and turn-holder are re-derived on load.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::GameState;
use crate::error::AppError;

/// Fixed key the snapshot is stored under.
pub const STORAGE_KEY: &str = "cardGameState";

/// Load/save/clear of the single persisted game.
pub trait SnapshotStore: Send {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<GameState>, AppError>;
    fn save(&self, state: &GameState) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    key: String,
    #[serde(with = "time::serde::rfc3339")]
    saved_at: OffsetDateTime,
    state: GameState,
}

/// JSON file `<dir>/cardGameState.json`, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.lock"))
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json.tmp"))
    }

    /// Time of the last successful save, if a snapshot exists.
    pub fn saved_at(&self) -> Result<Option<OffsetDateTime>, AppError> {
        Ok(self.read_envelope()?.map(|env| env.saved_at))
    }

    fn read_envelope(&self) -> Result<Option<Envelope>, AppError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let envelope: Envelope = serde_json::from_str(&raw).map_err(|e| {
            AppError::corruption(format!("unreadable snapshot {}: {e}", path.display()))
        })?;
        if envelope.key != STORAGE_KEY {
            return Err(AppError::corruption(format!(
                "snapshot key {:?} does not match {STORAGE_KEY:?}",
                envelope.key
            )));
        }
        Ok(Some(envelope))
    }

    /// Run `f` while holding an exclusive lock on the sibling lock file.
    fn with_lock<T>(&self, f: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
        use fs4::fs_std::FileExt;

        fs::create_dir_all(&self.dir)?;
        let lock = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(self.lock_path())?;

        FileExt::lock_exclusive(&lock)?;
        let result = f();
        FileExt::unlock(&lock)?;
        result
    }
}

fn write_atomically(tmp: &Path, dest: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(tmp, dest)?;
    Ok(())
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<GameState>, AppError> {
        Ok(self.read_envelope()?.map(|env| env.state))
    }

    fn save(&self, state: &GameState) -> Result<(), AppError> {
        let envelope = Envelope {
            key: STORAGE_KEY.to_string(),
            saved_at: OffsetDateTime::now_utc(),
            state: state.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&envelope)?;
        let dest = self.path();
        self.with_lock(|| write_atomically(&self.tmp_path(), &dest, &bytes))?;
        debug!(path = %dest.display(), round = state.current_round, "Snapshot saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let path = self.path();
        self.with_lock(|| match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        })
    }
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    slot: Arc<Mutex<Option<GameState>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the stored game, for inspection.
    pub fn peek(&self) -> Option<GameState> {
        self.slot.lock().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<GameState>, AppError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, state: &GameState) -> Result<(), AppError> {
        *self.slot.lock() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.slot.lock().take();
        Ok(())
    }
}

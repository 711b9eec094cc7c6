use crate::calendar::VisitStore;
use crate::error::{AppError, Result};
use crate::models::VisitRecord;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Visit list persisted as a single JSON array on disk.
///
/// Writes go to a sibling temp file first and are renamed into place. The
/// lock only keeps concurrent saves off the shared temp file; read-modify-write
/// sequences are serialized by [`VisitCalendar`](crate::calendar::VisitCalendar).
pub struct JsonFileVisitStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileVisitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "visits.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl VisitStore for JsonFileVisitStore {
    async fn load(&self) -> Result<Vec<VisitRecord>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) if json.trim().is_empty() => Ok(Vec::new()),
            Ok(json) => serde_json::from_str(&json).map_err(|e| {
                AppError::Storage(format!("corrupt visit file {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No visit file yet, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(AppError::Storage(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, visits: &[VisitRecord]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let json = serde_json::to_string_pretty(visits)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, json).await.map_err(|e| {
            AppError::Storage(format!("failed to write {}: {}", temp.display(), e))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::Storage(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), visits = visits.len(), "Saved visits");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json_file"
    }
}

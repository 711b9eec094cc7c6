use crate::calendar::VisitStore;
use crate::error::Result;
use crate::models::VisitRecord;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process visit store, mostly for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryVisitStore {
    visits: RwLock<Vec<VisitRecord>>,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visits(visits: Vec<VisitRecord>) -> Self {
        Self {
            visits: RwLock::new(visits),
        }
    }
}

#[async_trait]
impl VisitStore for MemoryVisitStore {
    async fn load(&self) -> Result<Vec<VisitRecord>> {
        Ok(self.visits.read().await.clone())
    }

    async fn save(&self, visits: &[VisitRecord]) -> Result<()> {
        *self.visits.write().await = visits.to_vec();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

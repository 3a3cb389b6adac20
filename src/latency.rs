use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Pause applied before a search resolves, standing in for backend response time
#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self);
}

#[async_trait]
impl<L: Latency + ?Sized> Latency for Box<L> {
    async fn wait(&self) {
        (**self).wait().await
    }
}

/// Sleeps for a fixed duration on the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency(pub Duration);

impl SimulatedLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        sleep(self.0).await;
    }
}

/// Resolves immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

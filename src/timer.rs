use std::future::Future;
use std::time::Duration;

use welfare_portal_common::Timer;

/// tokio のタイマーで待つ
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

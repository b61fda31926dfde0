use std::time::Duration;

/// Simulated round-trip time for each service operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDelays {
    pub get_all: u64,
    pub get_by_id: u64,
    pub create: u64,
    pub update: u64,
    pub delete: u64,
}

impl OperationDelays {
    pub const FILES: Self = Self {
        get_all: 300,
        get_by_id: 200,
        create: 400,
        update: 300,
        delete: 250,
    };

    pub const UPLOADS: Self = Self {
        get_all: 200,
        get_by_id: 150,
        create: 300,
        update: 200,
        delete: 200,
    };

    pub const COLLECTIONS: Self = Self {
        get_all: 250,
        get_by_id: 200,
        create: 350,
        update: 300,
        delete: 250,
    };
}

/// Scales (or disables) the artificial service delays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f32,
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

impl Latency {
    pub fn simulated() -> Self {
        Self { scale: 1.0 }
    }

    pub fn instant() -> Self {
        Self { scale: 0.0 }
    }

    /// Negative and non-finite factors are treated as zero.
    pub fn scaled(scale: f32) -> Self {
        let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        Self { scale }
    }

    pub fn delay(&self, millis: u64) -> Duration {
        Duration::from_millis((millis as f64 * f64::from(self.scale)).round() as u64)
    }

    pub async fn wait(&self, millis: u64) {
        let delay = self.delay(millis);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_applies_to_every_delay() {
        assert_eq!(Latency::simulated().delay(400), Duration::from_millis(400));
        assert_eq!(Latency::scaled(0.5).delay(400), Duration::from_millis(200));
        assert!(Latency::instant().delay(400).is_zero());
    }

    #[test]
    fn invalid_scales_fall_back_to_instant() {
        assert!(Latency::scaled(-2.0).delay(300).is_zero());
        assert!(Latency::scaled(f32::NAN).delay(300).is_zero());
    }
}

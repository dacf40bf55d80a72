//! Simulated I/O latency per store operation.

use std::time::Duration;

/// Operations exposed by an [`EntityStore`](crate::store::EntityStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl StoreOperation {
    pub const ALL: [StoreOperation; 5] = [
        StoreOperation::GetAll,
        StoreOperation::GetById,
        StoreOperation::Create,
        StoreOperation::Update,
        StoreOperation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::GetAll => "get_all",
            StoreOperation::GetById => "get_by_id",
            StoreOperation::Create => "create",
            StoreOperation::Update => "update",
            StoreOperation::Delete => "delete",
        }
    }

    pub(crate) fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Delay applied before each store operation touches its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    const fn from_millis(get_all: u64, get_by_id: u64, create: u64, update: u64, delete: u64) -> Self {
        Self {
            get_all: Duration::from_millis(get_all),
            get_by_id: Duration::from_millis(get_by_id),
            create: Duration::from_millis(create),
            update: Duration::from_millis(update),
            delete: Duration::from_millis(delete),
        }
    }

    pub const GOALS: LatencyProfile = LatencyProfile::from_millis(300, 200, 400, 300, 250);
    pub const COMPLETIONS: LatencyProfile = LatencyProfile::from_millis(250, 200, 300, 250, 200);
    pub const BADGES: LatencyProfile = LatencyProfile::from_millis(300, 200, 350, 250, 200);

    /// A profile with no delay at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            get_all: delay,
            get_by_id: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }

    /// Multiplies every delay by `factor`. Non-positive or non-finite factors
    /// yield [`LatencyProfile::none`].
    pub fn scaled(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::none();
        }
        let scale = |delay: Duration| {
            Duration::from_nanos((delay.as_nanos() as f64 * factor).round() as u64)
        };
        Self {
            get_all: scale(self.get_all),
            get_by_id: scale(self.get_by_id),
            create: scale(self.create),
            update: scale(self.update),
            delete: scale(self.delete),
        }
    }

    pub fn for_operation(&self, operation: StoreOperation) -> Duration {
        match operation {
            StoreOperation::GetAll => self.get_all,
            StoreOperation::GetById => self.get_by_id,
            StoreOperation::Create => self.create,
            StoreOperation::Update => self.update,
            StoreOperation::Delete => self.delete,
        }
    }
}

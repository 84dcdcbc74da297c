#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("progress thresholds must not be empty")]
    EmptyThresholds,

    #[error("progress thresholds must be strictly ascending and start above zero: {0:?}")]
    UnorderedThresholds(Vec<u32>),

    #[error("target count {target} exceeds the slot cap {max_slots}")]
    TargetAboveSlotCap { target: usize, max_slots: usize },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

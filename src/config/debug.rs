//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every fetch request as it is dispatched, and its latency when it completes.
    pub log_fetches: bool,

    /// Anything about instrument / window selection changes
    pub log_selection: bool,

    /// Log history outcomes dropped because a newer request superseded them
    pub log_stale_discards: bool,

    /// Log catalog contents on arrival
    pub log_catalog: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_selection: true,
    log_stale_discards: true,
    log_catalog: false,
};

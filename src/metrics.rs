//! Counters for sidecar traffic and pub/sub deliveries.

use metrics::{counter, describe_counter};

// === Metric Name Constants ===

/// State writes counter metric name.
pub const METRIC_STATE_WRITES: &str = "state_writes_total";
/// State reads counter metric name.
pub const METRIC_STATE_READS: &str = "state_reads_total";
/// Topic messages counter metric name.
pub const METRIC_TOPIC_MESSAGES: &str = "topic_messages_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_STATE_WRITES,
        "Total number of state writes forwarded to the sidecar"
    );
    describe_counter!(
        METRIC_STATE_READS,
        "Total number of state reads forwarded to the sidecar"
    );
    describe_counter!(
        METRIC_TOPIC_MESSAGES,
        "Total number of pub/sub messages received, labelled by topic"
    );
}

/// Increment the state writes counter.
pub fn inc_state_writes() {
    counter!(METRIC_STATE_WRITES).increment(1);
}

/// Increment the state reads counter.
pub fn inc_state_reads() {
    counter!(METRIC_STATE_READS).increment(1);
}

/// Increment the topic messages counter for a topic.
pub fn inc_topic_messages(topic: &'static str) {
    counter!(METRIC_TOPIC_MESSAGES, "topic" => topic).increment(1);
}

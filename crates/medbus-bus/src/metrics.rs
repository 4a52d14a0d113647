//! Tracing hooks for mediation rounds.
//!
//! Expands to nothing unless the `tracing` feature is on. Subscribers are
//! configured by the binary layer.

#[cfg(feature = "tracing")]
pub fn emit_event(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::trace_span!(target: "medbus", "mediation", event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(target: "medbus", %k, %v, "{}", event);
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_event(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}

//! Solver trace sink.

/// Sink for the solver's trace output.
///
/// When a tracer is installed, the solver reports every major search event
/// (decide, propagate, conflict, learn, backjump) and each ingestion step as
/// one formatted line. Tracing never changes solver behavior.
pub trait Tracer {
    /// Receives one trace line.
    fn line(&mut self, line: &str);
}

/// A [`Tracer`] that forwards lines to the `tracing` crate at TRACE level.
#[derive(Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn line(&mut self, line: &str) {
        tracing::trace!(target: "lodestar", "{line}");
    }
}

/// Emits a trace line if a tracer is installed. Formatting only happens when
/// one is.
macro_rules! trace {
    ($solver:expr, $($arg:tt)*) => {
        if $solver.tracer.is_some() {
            $solver.emit_trace(&format!($($arg)*));
        }
    };
}

pub(crate) use trace;

/// Turns axis positions and sample values into display strings.
///
/// Any `Fn(f64) -> String` closure is a formatter.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;

    /// Formats a raw integer sample, e.g. for the point-info overlay.
    fn format_sample(&self, value: i64) -> String {
        self.format(value as f64)
    }
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

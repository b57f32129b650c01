use std::io::{self, Write};

/// Receives a computed histogram for display.
///
/// Rendering is a side channel: callers get the numeric result whether or
/// not a sink draws anything with it.
pub trait HistogramSink {
    fn render(
        &mut self,
        counts: &[u64],
        edges: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()>;
}

/// Sink that discards the histogram
pub struct NullSink;

impl HistogramSink for NullSink {
    fn render(&mut self, _: &[u64], _: &[f64], _: &str, _: &str, _: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Renders the histogram as horizontal text bars to any writer.
pub struct TextHistogram<W: Write> {
    writer: W,
    bar_width: usize,
}

impl<W: Write> TextHistogram<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bar_width: 40,
        }
    }

    /// Width, in characters, of the longest bar
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HistogramSink for TextHistogram<W> {
    fn render(
        &mut self,
        counts: &[u64],
        edges: &[f64],
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> io::Result<()> {
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{y_label} per {x_label}:")?;

        let max = counts.iter().copied().max().unwrap_or(0);
        for (bounds, &count) in edges.windows(2).zip(counts) {
            let bar_len = if max == 0 {
                0
            } else {
                (count as usize).saturating_mul(self.bar_width) / max as usize
            };
            writeln!(
                self.writer,
                "{:>5}-{:<5} | {:<width$} {}",
                bounds[0],
                bounds[1],
                "#".repeat(bar_len),
                count,
                width = self.bar_width
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_histogram_renders_labels_and_counts() {
        let mut sink = TextHistogram::new(Vec::new()).with_bar_width(10);
        sink.render(
            &[2, 4],
            &[0.0, 10.0, 20.0],
            "Age Distribution",
            "Bins",
            "Number of People",
        )
        .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("Age Distribution\n"));
        assert!(out.contains("Number of People per Bins"));
        // the fuller bucket gets the longer bar
        assert!(out.contains("#####"));
        assert!(out.lines().count() >= 4);
    }

    #[test]
    fn test_text_histogram_all_zero_counts() {
        let mut sink = TextHistogram::new(Vec::new());
        sink.render(&[0, 0], &[0.0, 10.0, 20.0], "t", "x", "y")
            .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!out.contains('#'));
    }

    #[test]
    fn test_null_sink_is_a_no_op() {
        let mut sink = NullSink;
        assert!(sink.render(&[1], &[0.0, 10.0], "t", "x", "y").is_ok());
    }
}

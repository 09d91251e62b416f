//! Observing the chart while it is built.
//!
//! A [`ChartObserver`] is handed every column right after its closure.
//! Observers only read the chart, so they cannot change a verdict.

use std::io::{self, Write};

use colored::*;

use crate::recognizer::{Chart, Head, Lookahead};

pub trait ChartObserver {
    /// Called once per column, in order, after the column reached its fixpoint.
    fn column_closed(&mut self, chart: &Chart<'_>, index: usize, lookahead: Lookahead<'_>);
}

/// Observer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ChartObserver for NoopObserver {
    fn column_closed(&mut self, _chart: &Chart<'_>, _index: usize, _lookahead: Lookahead<'_>) {}
}

/// Per-column item counts, recorded as columns close.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnLog {
    pub sizes: Vec<usize>,
    pub completed: Vec<usize>,
}

impl ChartObserver for ColumnLog {
    fn column_closed(&mut self, chart: &Chart<'_>, index: usize, _lookahead: Lookahead<'_>) {
        let column = &chart.columns()[index];
        self.sizes.push(column.len());
        self.completed.push(
            column
                .items()
                .iter()
                .filter(|item| chart.is_complete(item))
                .count(),
        );
    }
}

/// Renders each closed column, one item per line. Completed items are
/// green, the synthetic root item is bold.
///
/// Write errors do not interrupt recognition; the first one is kept and
/// returned by [`ChartPrinter::finish`].
pub struct ChartPrinter<W: Write> {
    out: W,
    plain: bool,
    error: Option<io::Error>,
}

impl ChartPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ChartPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plain: false,
            error: None,
        }
    }

    /// Same layout without colour codes.
    pub fn plain(out: W) -> Self {
        Self {
            plain: true,
            ..Self::new(out)
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn paint(&self, text: ColoredString) -> ColoredString {
        if self.plain {
            text.clear()
        } else {
            text
        }
    }

    /// Writes one column. The header names the lookahead when it is known.
    pub fn write_column(
        &mut self,
        chart: &Chart<'_>,
        index: usize,
        lookahead: Option<Lookahead<'_>>,
    ) -> io::Result<()> {
        let header = self.paint(format!("== {} ==", index).as_str().blue().bold());
        match lookahead {
            Some(lookahead) => {
                let next = self.paint(format!("next: {}", lookahead).as_str().dimmed());
                writeln!(self.out, "{} {}", header, next)?;
            }
            None => writeln!(self.out, "{}", header)?,
        }
        for item in chart.columns()[index].items() {
            let text = chart.format_item(item);
            let text = if chart.head(item.prod) == Head::Root {
                text.as_str().bold()
            } else if chart.is_complete(item) {
                text.as_str().green()
            } else {
                text.as_str().normal()
            };
            let text = self.paint(text);
            writeln!(self.out, "  {}", text)?;
        }
        Ok(())
    }
}

impl<W: Write> ChartObserver for ChartPrinter<W> {
    fn column_closed(&mut self, chart: &Chart<'_>, index: usize, lookahead: Lookahead<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_column(chart, index, Some(lookahead)) {
            self.error = Some(e);
        }
    }
}

impl Chart<'_> {
    /// Writes every column of a built chart. Lookaheads are not kept in
    /// the chart, so headers show only the column index.
    pub fn write_chart<W: Write>(&self, printer: &mut ChartPrinter<W>) -> io::Result<()> {
        for index in 0..self.len() {
            printer.write_column(self, index, None)?;
        }
        Ok(())
    }

    pub fn print_chart(&self) -> io::Result<()> {
        self.write_chart(&mut ChartPrinter::stdout())
    }
}

use std::io::{self, Write};

use super::{RenderedBlock, ResultsView};

/// Results view that prints to a terminal or any other writer.
///
/// Blocks are collected during a render pass and printed together on
/// [`ResultsView::present`], so the header can state how many recipes
/// follow. A terminal cannot take back earlier output; clearing starts a
/// fresh section instead.
pub struct TerminalResultsView<W: Write + Send> {
    out: W,
    pending: Vec<RenderedBlock>,
}

impl<W: Write + Send> TerminalResultsView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalResultsView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ResultsView for TerminalResultsView<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn append(&mut self, block: RenderedBlock) -> io::Result<()> {
        self.pending.push(block);
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let recipes = self
            .pending
            .iter()
            .filter(|b| matches!(b, RenderedBlock::Recipe { .. }))
            .count();
        if recipes > 0 {
            writeln!(
                self.out,
                "\nFound {} recipe(s) with similar ingredients:",
                recipes
            )?;
        }

        let mut index = 0;
        for block in self.pending.drain(..) {
            match block {
                RenderedBlock::Recipe {
                    title,
                    ingredients,
                    similarity,
                } => {
                    index += 1;
                    writeln!(self.out, "\nRecipe {}: {}", index, title)?;
                    writeln!(self.out, "{}", ingredients)?;
                    writeln!(self.out, "{}", similarity)?;
                }
                RenderedBlock::Notice(text) => writeln!(self.out, "\n{}", text)?,
            }
        }
        self.out.flush()
    }
}

use std::io::Write;
use anyhow::Context;
use crate::component::renderer::RenderedList;

/// Where the component puts its frames.
pub trait Surface {
    fn draw(&mut self, frame: &RenderedList) -> anyhow::Result<()>;
}

pub struct TerminalSurface<W: Write> {
    out: W,
    frames_drawn: usize,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_drawn: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw(&mut self, frame: &RenderedList) -> anyhow::Result<()> {
        if self.frames_drawn > 0 {
            writeln!(self.out).context("Failed to write frame separator")?;
        }
        write!(self.out, "{}", frame).context("Failed to write frame")?;
        self.out.flush().context("Failed to flush frame")?;
        self.frames_drawn += 1;
        Ok(())
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};
use vivarium_core::Grid;

/// Read-only widget drawing one buffer cell per grid cell, clipped to
/// the available area.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    generation: u64,
    fps: u64,
    elapsed_secs: u64,
    paused: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(
        grid: &'a Grid,
        generation: u64,
        fps: u64,
        elapsed_secs: u64,
        paused: bool,
    ) -> Self {
        Self {
            grid,
            generation,
            fps,
            elapsed_secs,
            paused,
        }
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " generation {} | alive {} | {} f/s | {}s{} ",
            self.generation,
            self.grid.live_count(),
            self.fps,
            self.elapsed_secs,
            if self.paused { " | PAUSED" } else { "" },
        );
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        for cell in self.grid.iter() {
            if !cell.is_alive() {
                continue;
            }
            if cell.col() >= inner.width as usize || cell.row() >= inner.height as usize {
                continue;
            }
            buf.get_mut(inner.x + cell.col() as u16, inner.y + cell.row() as u16)
                .set_symbol("█")
                .set_style(Style::default().fg(Color::Green));
        }
    }
}

use std::{
    io::{self, stdout, Write},
    mem, panic, thread,
};

use amaze_core::dims::Dims;
use crossterm::{
    cursor,
    event::Event,
    execute,
    style::{self, ContentStyle},
    terminal, QueueableCommand, SynchronizedUpdate,
};

/// One cell buffer of the terminal, a character with its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    size: Dims,
    rows: Vec<Vec<(char, ContentStyle)>>,
}

impl Frame {
    pub fn new(size: Dims) -> Self {
        let row = vec![(' ', ContentStyle::default()); size.0.max(0) as usize];
        Frame {
            size,
            rows: vec![row; size.1.max(0) as usize],
        }
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn resize(&mut self, size: Dims) {
        if self.size != size {
            *self = Frame::new(size);
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill((' ', ContentStyle::default()));
        }
    }

    pub fn contains(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size.0 && 0 <= pos.1 && pos.1 < self.size.1
    }

    /// Puts one character, quietly clipped at the frame edge.
    pub fn set(&mut self, pos: Dims, character: char, style: ContentStyle) {
        if self.contains(pos) {
            self.rows[pos.1 as usize][pos.0 as usize] = (character, style);
        }
    }

    pub fn draw_str(&mut self, pos: Dims, text: &str, style: ContentStyle) {
        for (i, character) in text.chars().enumerate() {
            self.set(pos + Dims(i as i32, 0), character, style);
        }
    }

    fn row(&self, y: i32) -> &[(char, ContentStyle)] {
        &self.rows[y as usize]
    }
}

/// Double-buffered terminal output. The hidden frame is drawn into and
/// [`show`](Renderer::show) sends the rows that differ from what is already
/// on screen, inside one synchronized update.
///
/// Construction switches the terminal to raw mode on the alternate screen
/// with the cursor hidden; dropping the renderer switches it all back, and a
/// panic hook does the same before any panic report prints.
pub struct Renderer {
    size: Dims,
    shown: Frame,
    hidden: Frame,
    full_redraw: bool,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let size: Dims = terminal::size()?.into();

        let mut ren = Renderer {
            size,
            shown: Frame::new(size),
            hidden: Frame::new(size),
            full_redraw: true,
        };

        ren.turn_on()?;

        Ok(ren)
    }

    fn turn_on(&mut self) -> io::Result<()> {
        self.register_panic_hook();

        terminal::enable_raw_mode()?;
        execute!(stdout(), cursor::Hide, terminal::EnterAlternateScreen)?;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        self.unregister_panic_hook();

        execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        Ok(())
    }

    fn register_panic_hook(&self) {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = stdout();

            execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show).unwrap();
            terminal::disable_raw_mode().unwrap();

            prev(info)
        }));
    }

    fn unregister_panic_hook(&self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }
    }

    fn on_resize(&mut self, size: Dims) {
        self.size = size;
        self.shown.resize(size);
        self.hidden.resize(size);
        self.full_redraw = true;
    }

    pub fn on_event(&mut self, event: &Event) {
        if let Event::Resize(x, y) = event {
            self.on_resize((*x, *y).into());
        }
    }

    pub fn frame(&mut self) -> &mut Frame {
        &mut self.hidden
    }

    pub fn frame_size(&self) -> Dims {
        self.size
    }

    pub fn show(&mut self) -> io::Result<()> {
        let mut tty = stdout();

        tty.sync_update(|tty| {
            let mut current = ContentStyle::default();
            tty.queue(style::ResetColor)?;

            for y in 0..self.size.1 {
                if !self.full_redraw && self.hidden.row(y) == self.shown.row(y) {
                    continue;
                }

                tty.queue(cursor::MoveTo(0, y as u16))?;

                for &(character, cell_style) in self.hidden.row(y) {
                    if current != cell_style {
                        if current.background_color != cell_style.background_color {
                            tty.queue(style::SetBackgroundColor(
                                cell_style.background_color.unwrap_or(style::Color::Reset),
                            ))?;
                        }
                        if current.foreground_color != cell_style.foreground_color {
                            tty.queue(style::SetForegroundColor(
                                cell_style.foreground_color.unwrap_or(style::Color::Reset),
                            ))?;
                        }
                        current = cell_style;
                    }
                    tty.queue(style::Print(character))?;
                }
            }

            tty.flush()?;
            self.full_redraw = false;

            io::Result::Ok(())
        })??;

        mem::swap(&mut self.shown, &mut self.hidden);
        self.hidden.clear();

        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clips_at_the_edges() {
        let mut frame = Frame::new(Dims(4, 2));
        frame.set(Dims(-1, 0), 'x', ContentStyle::default());
        frame.set(Dims(0, 2), 'x', ContentStyle::default());
        frame.set(Dims(3, 1), 'y', ContentStyle::default());

        assert_eq!(frame.row(0)[0].0, ' ');
        assert_eq!(frame.row(1)[3].0, 'y');
    }

    #[test]
    fn draw_str_runs_off_the_right_edge() {
        let mut frame = Frame::new(Dims(3, 1));
        frame.draw_str(Dims(1, 0), "abc", ContentStyle::default());

        assert_eq!(frame.row(0)[0].0, ' ');
        assert_eq!(frame.row(0)[1].0, 'a');
        assert_eq!(frame.row(0)[2].0, 'b');
    }

    #[test]
    fn resize_drops_stale_content() {
        let mut frame = Frame::new(Dims(2, 2));
        frame.set(Dims(1, 1), 'x', ContentStyle::default());

        frame.resize(Dims(3, 3));
        assert_eq!(frame.size(), Dims(3, 3));
        assert_eq!(frame.row(1)[1].0, ' ');
    }
}

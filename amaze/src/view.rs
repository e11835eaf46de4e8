use std::{
    io,
    time::{Duration, Instant},
};

use amaze_core::dims::Dims;
use amaze_core::maze::Maze;
use amaze_core::trace::Tracer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use log::warn;

use crate::helpers::{box_center, from_maze_to_real, maze_render_size, wall_char};
use crate::renderer::Renderer;
use crate::settings::{ColorScheme, Settings};

/// Animated view of the maze, plugged into the algorithms as their
/// [`Tracer`]. Every animation step redraws the maze as it currently stands
/// and replays the recorded traversal on top, then paces itself by polling
/// input for the step delay. `q`, Esc and Ctrl-C abort the animation; the
/// algorithms still run to completion, just without drawing.
pub struct MazeView {
    renderer: Renderer,
    scheme: ColorScheme,
    delay: Duration,
    status: &'static str,
    moves: Vec<(Dims, Dims, bool)>,
    aborted: bool,
    clipped: bool,
    error: Option<io::Error>,
}

impl MazeView {
    pub fn new(settings: &Settings, delay: Duration) -> io::Result<Self> {
        Ok(MazeView {
            renderer: Renderer::new()?,
            scheme: settings.get_color_scheme(),
            delay,
            status: "",
            moves: Vec::new(),
            aborted: false,
            clipped: false,
            error: None,
        })
    }

    pub fn set_status(&mut self, status: &'static str) {
        self.status = status;
    }

    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Draws the finished maze one last time and holds it until a key is
    /// pressed, then reports any terminal error the animation ran into.
    /// Dropping the view restores the terminal.
    pub fn finish(mut self, maze: &Maze) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        if self.aborted {
            return Ok(());
        }

        self.redraw(maze)?;
        loop {
            match event::read()? {
                Event::Key(_) => return Ok(()),
                event => {
                    self.renderer.on_event(&event);
                    self.redraw(maze)?;
                }
            }
        }
    }

    fn redraw(&mut self, maze: &Maze) -> io::Result<()> {
        let frame_size = self.renderer.frame_size();
        let render_size = maze_render_size(maze);

        if !self.clipped && (render_size.0 > frame_size.0 || render_size.1 > frame_size.1) {
            warn!(
                "maze needs {} characters, the terminal only has {}",
                render_size, frame_size
            );
            self.clipped = true;
        }

        let origin = box_center(Dims::ZERO, frame_size, render_size);
        let walls = self.scheme.walls();
        let paths = self.scheme.paths();
        let undos = self.scheme.undos();
        let texts = self.scheme.texts();
        let status = self.status;

        let frame = self.renderer.frame();

        for y in 0..render_size.1 {
            for x in 0..render_size.0 {
                let pos = Dims(x, y);
                frame.set(origin + pos, wall_char(maze, pos), walls);
            }
        }

        // replaying in order leaves exactly the surviving path solid
        for &(from, to, undo) in &self.moves {
            let a = origin + from_maze_to_real(from);
            let b = origin + from_maze_to_real(to);
            let mid = (a + b) / 2;

            if undo {
                frame.set(mid, '░', undos);
                frame.set(b, '░', undos);
            } else {
                frame.set(a, '█', paths);
                frame.set(mid, '█', paths);
                frame.set(b, '█', paths);
            }
        }

        frame.draw_str(Dims(0, frame_size.1 - 1), status, texts);

        self.renderer.show()
    }

    fn pace(&mut self) -> io::Result<()> {
        let deadline = Instant::now() + self.delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(());
            }

            self.handle_event(event::read()?);

            if left.is_zero() {
                return Ok(());
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code, modifiers, ..
            }) => match code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.aborted = true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.aborted = true;
                }
                _ => {}
            },
            event => self.renderer.on_event(&event),
        }
    }
}

impl Tracer for MazeView {
    fn step(&mut self, maze: &Maze) {
        if self.aborted || self.error.is_some() {
            return;
        }

        if let Err(err) = self.redraw(maze).and_then(|_| self.pace()) {
            self.error = Some(err);
        }
    }

    fn moved(&mut self, _maze: &Maze, from: Dims, to: Dims, undo: bool) {
        self.moves.push((from, to, undo));
    }
}

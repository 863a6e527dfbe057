/// Terminal front end: shows a projected cuboid until the user dismisses it
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use cubes_core::{draw_wireframe, Canvas, Dimensions, Wireframe};
use std::io::{self, stdout, Write};
use tracing::debug;

pub mod renderer;

pub use renderer::AsciiCanvas;

/// Blocking viewer for a single wireframe
pub struct TerminalApp {
    dimensions: Dimensions,
    wireframe: Wireframe,
    canvas: Canvas,
    renderer: AsciiCanvas,
    running: bool,
}

impl TerminalApp {
    pub fn new(dimensions: Dimensions, wireframe: Wireframe, canvas: Canvas) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            dimensions,
            wireframe,
            canvas,
            renderer: Self::renderer_for(canvas, width, height),
            running: true,
        })
    }

    // Bottom row is kept for the status line
    fn renderer_for(canvas: Canvas, width: u16, height: u16) -> AsciiCanvas {
        AsciiCanvas::new(canvas, width as usize, height.saturating_sub(1) as usize)
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        // Blocks until the user acknowledges the drawing
        while self.running {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.renderer = Self::renderer_for(self.canvas, width, height);
                    self.render()?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, KeyEvent { code, kind, .. }: KeyEvent) {
        if kind != KeyEventKind::Press {
            return;
        }
        if let KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') = code {
            self.running = false;
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        draw_wireframe(&mut self.renderer, &self.wireframe);

        let mut stdout = stdout();
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        self.renderer.draw(&mut stdout)?;

        // Status line
        let Dimensions { x, y, z } = self.dimensions;
        queue!(
            stdout,
            cursor::MoveTo(0, self.renderer.rows() as u16),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "cubes {x}x{y}x{z} on {}x{} | Press Enter to close",
                self.canvas.width, self.canvas.height
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

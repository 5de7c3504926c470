use std::io;
use std::time::{Duration, Instant};

use banjak_canvas::paint_scene;
use banjak_config::Config;
use banjak_core::{CANVAS_HEIGHT, CANVAS_WIDTH, MarkerStyle, Rgb, TICK_INTERVAL, cell_to_scene};
use banjak_scene::Scene;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::canvas::Canvas,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

/// Run the app while holding mouse capture, so capture is released before the
/// terminal is restored even if the loop errors out.
fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let _capture = MouseCapture::enable()?;
    App::new(config).run(terminal)
}

/// Mouse capture for the app's lifetime, released on drop.
struct MouseCapture;

impl MouseCapture {
    fn enable() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated scene.
    scene: Scene,
    /// Canvas background color.
    background: Rgb,
    /// Current canvas marker style.
    marker: MarkerStyle,
    /// Is the help line visible?
    show_hud: bool,
    /// Area the canvas covered in the last frame, for mapping mouse cells
    /// into scene coordinates.
    canvas_area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            scene: Scene::new(),
            background: config.background,
            marker: config.marker,
            show_hud: config.show_hud,
            canvas_area: Rect::default(),
        }
    }

    /// Run the application's main loop.
    ///
    /// Each pass draws a frame, waits for input up to the remainder of the
    /// current tick, and advances the scene once the tick interval has
    /// elapsed. Input bursts between ticks all land on the same frame.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_tick = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
            self.handle_crossterm_events(timeout)?;

            if last_tick.elapsed() >= TICK_INTERVAL {
                self.scene.tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (canvas_area, hud_area) = if self.show_hud {
            let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };
        self.canvas_area = canvas_area;

        let scene = &self.scene;
        let background = self.background;
        let canvas = Canvas::default()
            .marker(self.marker.marker())
            .background_color(background.to_color())
            .x_bounds([0.0, CANVAS_WIDTH])
            .y_bounds([0.0, CANVAS_HEIGHT])
            .paint(|ctx| paint_scene(ctx, scene, background));
        frame.render_widget(canvas, canvas_area);

        if let Some(hud_area) = hud_area {
            frame.render_widget(self.help_line(), hud_area);
        }
    }

    /// One-line HUD with key hints and the live particle count.
    fn help_line(&self) -> Line<'_> {
        Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "m".bold(),
            format!(" marker: {}  ", self.marker.name()).dark_gray(),
            "h".bold(),
            " hide help  ".dark_gray(),
            format!("particles: {}", self.scene.particles().len()).dark_gray(),
        ])
        .centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    ///
    /// Waits up to `timeout` for the first event, then drains whatever else
    /// is already queued so a burst of mouse moves cannot starve the tick.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.cycle_marker(),
            (_, KeyCode::Char('h')) => self.toggle_hud(),
            _ => {}
        }
    }

    /// Routes a mouse event into the scene.
    ///
    /// The cell is mapped through the canvas area of the last frame; events
    /// outside it (the help line, or a resize race) are dropped. Any button
    /// counts as a press, and dragging counts as moving.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(point) = cell_to_scene(self.canvas_area, mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.scene.pointer_moved(point),
            MouseEventKind::Down(_) => self.scene.pointer_pressed(point),
            _ => {}
        }
    }

    /// Cycle through the available canvas marker styles.
    fn cycle_marker(&mut self) {
        self.marker = self.marker.next();
    }

    /// Show or hide the help line.
    fn toggle_hud(&mut self) {
        self.show_hud = !self.show_hud;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

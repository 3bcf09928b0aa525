//! Main UI Application
//!
//! Draws the scene viewport, the HUD and the victory overlay, and turns
//! key/mouse events into camera pans and taps.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Game, GameState};
use crate::render::{
    detect_render_mode, sprite_glyph, Camera, RenderMode, Viewport,
};
use crate::scene::{AnimationController, Layer, Position, Searchable, SpriteKey};

/// Camera movement per arrow-key press, in world units.
const PAN_STEP: f32 = 64.0;

/// Main UI application
pub struct App {
    /// Current render mode (ASCII or Unicode)
    render_mode: RenderMode,
    /// Screen area of the scene viewport from the last draw, for mouse mapping
    scene_area: Rect,
    /// Last mouse position while dragging
    drag_last: Option<(u16, u16)>,
    /// Whether the current press moved far enough to count as a drag
    dragged: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            render_mode: detect_render_mode(),
            scene_area: Rect::default(),
            drag_last: None,
            dragged: false,
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.scene_area.width, self.scene_area.height)
    }

    // === Rendering ===

    pub fn render(&mut self, frame: &mut Frame, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_hud(frame, chunks[0], game);
        self.scene_area = chunks[1];
        self.render_scene(frame, chunks[1], game);
        self.render_help_bar(frame, chunks[2]);

        if let GameState::Victory { elapsed } = game.state() {
            self.render_victory(frame, game, elapsed.as_secs());
        }
    }

    fn render_hud(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, counter) in game.counters().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let glyph = sprite_glyph(&counter.kind, self.render_mode);
            spans.push(Span::styled(
                glyph.symbol.to_string(),
                Style::default().fg(glyph.color),
            ));
            let done = counter.found >= counter.total;
            spans.push(Span::styled(
                format!(" {}/{}", counter.found, counter.total),
                if done {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                },
            ));
        }

        let secs = game.elapsed().as_secs();
        spans.push(Span::styled(
            format!("   {}:{:02}", secs / 60, secs % 60),
            Style::default().fg(Color::Gray),
        ));

        let hud = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(game.level().name.clone()),
        );
        frame.render_widget(hud, area);
    }

    fn render_scene(&self, frame: &mut Frame, area: Rect, game: &Game) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let viewport = Viewport::new(area.width, area.height);
        let camera = game.camera();
        let palette = background_palette(&game.level().background);

        self.paint_background(frame, area, viewport, camera, palette);
        self.paint_sprites(frame, area, viewport, camera, game);
    }

    /// Sky above the horizon, ground below, per world row.
    fn paint_background(
        &self,
        frame: &mut Frame,
        area: Rect,
        viewport: Viewport,
        camera: Camera,
        palette: BackgroundPalette,
    ) {
        let horizon_y = crate::scene::WORLD_HEIGHT * 0.55;
        let buf = frame.buffer_mut();

        for row in 0..area.height {
            let world_y = viewport.unproject(camera, 0, row).y;
            let bg = if world_y > horizon_y {
                palette.sky
            } else {
                palette.ground
            };
            for col in 0..area.width {
                let cell = &mut buf[(area.x + col, area.y + row)];
                cell.set_char(' ');
                cell.set_bg(bg);
            }
        }
    }

    /// Draw every visible sprite back-to-front.
    fn paint_sprites(
        &self,
        frame: &mut Frame,
        area: Rect,
        viewport: Viewport,
        camera: Camera,
        game: &Game,
    ) {
        struct Drawn {
            layer: f32,
            col: u16,
            row: u16,
            kind: String,
        }

        let world = game.world();
        let mut drawn: Vec<Drawn> = Vec::new();

        for (_, (pos, key, layer, anim, searchable)) in world
            .query::<(
                &Position,
                &SpriteKey,
                &Layer,
                &AnimationController,
                Option<&Searchable>,
            )>()
            .iter()
        {
            if searchable.is_some_and(|s| s.found) {
                continue;
            }
            if !anim.visible() {
                continue;
            }

            let offset = anim.offset();
            let at = crate::level::Point::new(pos.0.x + offset.x, pos.0.y + offset.y);
            if let Some((col, row)) = viewport.project(camera, at) {
                drawn.push(Drawn {
                    layer: layer.0,
                    col,
                    row,
                    kind: key.0.clone(),
                });
            }
        }

        drawn.sort_by(|a, b| a.layer.total_cmp(&b.layer));

        let buf = frame.buffer_mut();
        for sprite in drawn {
            let glyph = sprite_glyph(&sprite.kind, self.render_mode);
            let cell = &mut buf[(area.x + sprite.col, area.y + sprite.row)];
            cell.set_char(glyph.symbol);
            cell.set_fg(glyph.color);
        }
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(" arrows/drag: pan   click: find   m: mute   q: quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }

    fn render_victory(&self, frame: &mut Frame, game: &Game, secs: u64) {
        let area = centered_rect(40, 9, frame.area());
        frame.render_widget(Clear, area);

        let button = if game.is_last_level() {
            "[r] Restart"
        } else {
            "[n] Next Level"
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "ALL FOUND!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Time: {}:{:02}", secs / 60, secs % 60)),
            Line::from(""),
            Line::from(Span::styled(
                button,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ];

        let panel = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(panel, area);
    }

    // === Input ===

    /// Handle a key press. Returns true when the game should quit.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                game.quit();
                return Ok(true);
            }
            KeyCode::Char('m') => game.toggle_audio(),

            KeyCode::Left | KeyCode::Char('h') => self.pan(game, -PAN_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.pan(game, PAN_STEP, 0.0),
            // Up on screen is +y in world units
            KeyCode::Up | KeyCode::Char('k') => self.pan(game, 0.0, PAN_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.pan(game, 0.0, -PAN_STEP),

            KeyCode::Char('n') => {
                if matches!(game.state(), GameState::Victory { .. }) && !game.is_last_level() {
                    game.next_level();
                }
            }
            KeyCode::Char('r') => {
                if matches!(game.state(), GameState::Victory { .. }) {
                    game.restart();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle a mouse event: drag pans the camera, a click is a tap.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, game: &mut Game) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_last = Some((mouse.column, mouse.row));
                self.dragged = false;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((last_col, last_row)) = self.drag_last {
                    let dx = mouse.column as f32 - last_col as f32;
                    let dy = mouse.row as f32 - last_row as f32;
                    if dx != 0.0 || dy != 0.0 {
                        self.dragged = true;
                        // Camera moves against the drag, grab-and-pull style
                        self.pan(
                            game,
                            -dx * crate::render::viewport::UNITS_PER_CELL_X,
                            dy * crate::render::viewport::UNITS_PER_CELL_Y,
                        );
                    }
                }
                self.drag_last = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.dragged {
                    self.tap_at(mouse.column, mouse.row, game);
                }
                self.drag_last = None;
                self.dragged = false;
            }
            _ => {}
        }
    }

    fn pan(&self, game: &mut Game, dx: f32, dy: f32) {
        let viewport = self.viewport();
        game.camera_mut().pan(dx, dy, Game::world_bounds(), viewport);
    }

    /// Map a terminal click inside the scene area to a world tap.
    fn tap_at(&self, column: u16, row: u16, game: &mut Game) {
        let area = self.scene_area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return;
        }

        let point = self
            .viewport()
            .unproject(game.camera(), column - area.x, row - area.y);
        let outcome = game.tap(point);
        log::debug!("Tap at ({:.0}, {:.0}) -> {:?}", point.x, point.y, outcome);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Sky/ground colors for a background asset key.
#[derive(Debug, Clone, Copy)]
struct BackgroundPalette {
    sky: Color,
    ground: Color,
}

fn background_palette(background: &str) -> BackgroundPalette {
    if background.contains("forest") || background.contains("evening") {
        BackgroundPalette {
            sky: Color::Rgb(50, 45, 80),
            ground: Color::Rgb(30, 60, 35),
        }
    } else {
        BackgroundPalette {
            sky: Color::Rgb(135, 206, 235),
            ground: Color::Rgb(110, 170, 110),
        }
    }
}

/// Center a width x height box inside the given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

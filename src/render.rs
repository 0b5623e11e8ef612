use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::{GameState, GameStatus, Point};

pub const BACKGROUND: Color = Color::Black;
pub const SNAKE_COLOR: Color = Color::Red;
pub const FOOD_COLOR: Color = Color::Yellow;
pub const WALL_COLOR: Color = Color::Cyan;
pub const TEXT_COLOR: Color = Color::Yellow;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press space to start again or ESC to exit.";

/// Paints a whole frame of the board. Each logical cell covers two terminal
/// columns so that cells come out roughly square.
pub struct BoardView<'a> {
    game: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self { game }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND));

        for seg in self.game.snake().segments() {
            paint_cell(area, buf, seg.pos, SNAKE_COLOR);
        }
        paint_cell(area, buf, self.game.food().pos, FOOD_COLOR);

        let cfg = self.game.config();
        for x in 0..cfg.width {
            paint_cell(area, buf, Point::new(x, 0), WALL_COLOR);
            paint_cell(area, buf, Point::new(x, cfg.height - 1), WALL_COLOR);
        }
        for y in 0..cfg.height {
            paint_cell(area, buf, Point::new(0, y), WALL_COLOR);
            paint_cell(area, buf, Point::new(cfg.width - 1, y), WALL_COLOR);
        }

        let score = format!(" Score: {} ", self.game.score());
        put_str(area, buf, area.x.saturating_add(3), area.y, &score);

        if self.game.status() == GameStatus::GameOver {
            let len = GAME_OVER_MESSAGE.len() as u16;
            let x = area.x + (area.width / 2).saturating_sub(len / 2 + 1);
            let y = area.y + (area.height / 2).saturating_sub(1);
            put_str(area, buf, x, y, GAME_OVER_MESSAGE);
        }
    }
}

/// Out-of-area cells are clipped.
fn paint_cell(area: Rect, buf: &mut Buffer, p: Point, color: Color) {
    let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) else {
        return;
    };
    let col = area.x.saturating_add(x.saturating_mul(2));
    let row = area.y.saturating_add(y);
    for pos in [Position::new(col, row), Position::new(col.saturating_add(1), row)] {
        if !area.contains(pos) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ').set_bg(color);
        }
    }
}

fn put_str(area: Rect, buf: &mut Buffer, x: u16, y: u16, s: &str) {
    for (i, ch) in s.chars().enumerate() {
        let pos = Position::new(x.saturating_add(i as u16), y);
        if !area.contains(pos) {
            break;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(ch).set_fg(TEXT_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    fn rendered(game: &GameState) -> Buffer {
        let cfg = game.config();
        let area = Rect::new(0, 0, cfg.width as u16 * 2, cfg.height as u16);
        let mut buf = Buffer::empty(area);
        BoardView::new(game).render(area, &mut buf);
        buf
    }

    fn bg(buf: &Buffer, x: u16, y: u16) -> Color {
        buf.cell(Position::new(x, y)).unwrap().bg
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell(Position::new(x, y)).unwrap().symbol().to_owned())
            .collect()
    }

    #[test]
    fn paints_entities_two_columns_wide() {
        let game = GameState::with_seed(GameConfig { width: 20, height: 10 }, 5);
        let buf = rendered(&game);

        let head = game.snake().head().pos;
        let (hx, hy) = (head.x as u16 * 2, head.y as u16);
        assert_eq!(bg(&buf, hx, hy), SNAKE_COLOR);
        assert_eq!(bg(&buf, hx + 1, hy), SNAKE_COLOR);

        let food = game.food().pos;
        assert_eq!(bg(&buf, food.x as u16 * 2, food.y as u16), FOOD_COLOR);
        assert_eq!(bg(&buf, food.x as u16 * 2 + 1, food.y as u16), FOOD_COLOR);

        assert_eq!(bg(&buf, 0, 5), WALL_COLOR);
        assert_eq!(bg(&buf, 39, 5), WALL_COLOR);
        assert_eq!(bg(&buf, 10, 9), WALL_COLOR);
        assert_eq!(bg(&buf, 2, 1), BACKGROUND);
    }

    #[test]
    fn shows_score_on_top_wall() {
        let game = GameState::with_seed(GameConfig { width: 20, height: 10 }, 5);
        let buf = rendered(&game);
        assert!(row_text(&buf, 0).starts_with("    Score: 0 "));
    }

    #[test]
    fn game_over_banner_only_after_losing() {
        let mut game = GameState::with_seed(GameConfig { width: 40, height: 10 }, 5);
        let banner_row = 4;
        assert!(!row_text(&rendered(&game), banner_row).contains("Game Over!"));

        game.handle_key(crate::Key::Up);
        while game.status() == GameStatus::Playing {
            game.tick();
        }
        assert!(row_text(&rendered(&game), banner_row).contains(GAME_OVER_MESSAGE));
    }

    #[test]
    fn small_area_is_clipped() {
        let game = GameState::with_seed(GameConfig { width: 20, height: 10 }, 5);
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        BoardView::new(&game).render(area, &mut buf);
        assert_eq!(bg(&buf, 0, 0), WALL_COLOR);
    }
}

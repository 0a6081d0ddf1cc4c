//! User interface rendering functions for the terminal interface.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{
    messages::MAP_HEADING,
    types::{Coordinate, Screen},
    App,
};

/// Key reminder drawn at the bottom of the screen.
const TOOLTIP: &str = "(w/a/s/d) move / (m) map / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// This function renders the maze in a bordered block centered on screen, followed by the status
/// line and the key tooltip. The maze block shows the player view or, after the map command, the
/// map.
///
/// # Errors
///
/// This function may return errors if the maze dimensions do not fit terminal coordinates.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let [content_area, status_area, tooltip_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let (title, lines) = match &app.screen {
        Screen::Maze => (
            app.title.as_str(),
            maze_lines(app.session.view(), app.session.player()),
        ),
        Screen::Map(lines) => (
            MAP_HEADING,
            lines.iter().map(|line| Line::raw(line.clone())).collect(),
        ),
    };

    let maze_area = center(app, title, content_area)?;

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        maze_area,
    );

    let status = Line::raw(app.status.unwrap_or_default())
        .centered()
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(status, status_area);

    let tooltip = Line::raw(TOOLTIP)
        .centered()
        .style(Style::default().fg(Color::Green));
    frame.render_widget(tooltip, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for rendering
/// new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Computes the area of the bordered maze block, centered within `area`.
///
/// The block is sized to the maze plus its border, widened when the title would not fit.
///
/// # Errors
///
/// This function returns an error if the maze is too large for terminal coordinates.
fn center(app: &App, title: &str, area: Rect) -> Result<Rect> {
    let maze = app.session.maze();
    let width = u16::try_from(maze.width().max(title.chars().count()))?.saturating_add(2);
    let height = u16::try_from(maze.height())?.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    Ok(space)
}

/// Turns the player view into styled lines, highlighting the player's cell.
fn maze_lines(view: Vec<String>, player: Coordinate) -> Vec<Line<'static>> {
    view.into_iter()
        .enumerate()
        .map(|(row, line)| {
            if row == player.row {
                highlight(&line, player.column)
            } else {
                Line::raw(line)
            }
        })
        .collect()
}

/// Splits a line around the character at `column` and styles that character.
fn highlight(line: &str, column: usize) -> Line<'static> {
    let Some((offset, marker)) = line.char_indices().nth(column) else {
        return Line::raw(line.to_owned());
    };

    let (before, rest) = line.split_at(offset);
    let (cell, after) = rest.split_at(marker.len_utf8());

    Line::from(vec![
        Span::raw(before.to_owned()),
        Span::styled(cell.to_owned(), Style::default().fg(Color::Black).bg(Color::Red)),
        Span::raw(after.to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};

    use super::*;
    use crate::{
        events,
        file_loader::{self, Bounds},
        session::Session,
        types::{Command, Direction, RenderMode},
    };

    /// Creates a test app over the walled 5x5 test maze.
    fn create_test_app() -> App {
        let maze = file_loader::load("#####\n#S..#\n#.#.#\n#..E#\n#####", Bounds::default())
            .expect("test maze should load");
        App::new(Session::new(maze, RenderMode::Plain), "test_map".to_owned())
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Draws the app once and returns the whole screen as a single string.
    fn render_screen(app: &App) -> String {
        let mut terminal = create_test_terminal();
        let _frame = terminal
            .draw(|frame| draw(app, frame).expect("drawing should succeed in test"))
            .expect("test backend should not fail");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_player_view() {
        let app = create_test_app();
        let screen = render_screen(&app);

        assert!(screen.contains("#X..#"), "player should be drawn on start");
        assert!(screen.contains("test_map"), "title should be drawn");
        assert!(screen.contains(TOOLTIP), "tooltip should be drawn");
    }

    #[test]
    fn test_draw_after_move() {
        let mut app = create_test_app();
        events::apply_command(&mut app, Command::Move(Direction::Right));
        let screen = render_screen(&app);

        assert!(screen.contains("#SX.#"), "player should follow the move");
    }

    #[test]
    fn test_draw_status_message() {
        let mut app = create_test_app();
        events::apply_command(&mut app, Command::Move(Direction::Up));
        let screen = render_screen(&app);

        assert!(screen.contains("Can't move through walls!"));
    }

    #[test]
    fn test_draw_map_screen() {
        let mut app = create_test_app();
        events::apply_command(&mut app, Command::ShowMap);
        let screen = render_screen(&app);

        assert!(screen.contains("#S..#"), "map should show the raw grid");
        assert!(!screen.contains('X'), "map should not show the player");
        assert!(screen.contains(MAP_HEADING));
    }

    #[test]
    fn test_draw_small_terminal() {
        let app = create_test_app();
        let mut terminal =
            Terminal::new(TestBackend::new(4, 3)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing into a tiny terminal should not fail");
    }

    #[test]
    fn test_highlight_splits_line() {
        let line = highlight("#SX.#", 2);

        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.to_string(), "#SX.#");
    }

    #[test]
    fn test_highlight_out_of_range() {
        let line = highlight("#S.#", 9);

        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.to_string(), "#S.#");
    }
}

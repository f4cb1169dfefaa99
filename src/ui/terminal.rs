//! Terminal front end: raw mode, drawing, and the blocking input loop.

use std::io::{self, Write};
use std::thread;

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{debug, info, warn};

use super::input::{map_key, Input};
use super::palette::Rgb;
use super::view::{Frame, Presentation};
use crate::core::Score;
use crate::session::Session;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// Puts the terminal back the way it was, even on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if let Err(err) = execute!(out, ResetColor, Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
    }
}

/// Write a frame to the terminal, replacing what was there.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in &frame.lines {
        for span in line {
            queue!(
                out,
                SetForegroundColor(span.fg.into()),
                SetBackgroundColor(span.bg.into()),
                Print(&span.text)
            )?;
        }
        queue!(out, ResetColor, MoveToNextLine(1))?;
    }
    out.flush()
}

/// Play `session` in the terminal until the game ends or the player quits.
///
/// Returns the final score.
pub fn run(session: &mut Session, presentation: &Presentation) -> io::Result<Score> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    event_loop(&mut out, session, presentation)
}

fn event_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    presentation: &Presentation,
) -> io::Result<Score> {
    draw(out, &presentation.render(session.board(), session.score()))?;

    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                draw(out, &presentation.render(session.board(), session.score()))?;
                continue;
            }
            _ => continue,
        };

        match map_key(key) {
            Input::Ignored => continue,
            Input::Quit => {
                info!("player quit after {} moves with score {}", session.moves(), session.score());
                return Ok(session.score());
            }
            Input::Move(direction) => {
                if let Some(report) = session.apply(direction) {
                    debug!("turn: {report:?}");
                }

                if session.is_over() {
                    draw(out, &presentation.render_game_over(session.board(), session.score()))?;
                    thread::sleep(presentation.game_over_pause);
                    return Ok(session.score());
                }
                draw(out, &presentation.render(session.board(), session.score()))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_rgb_to_color() {
        assert_eq!(Color::from(Rgb(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_draw_writes_every_span() {
        let presentation = Presentation::default();
        let frame = presentation.render(&Board::from_rows(&[[2, 0], [0, 1024]]), 7);

        let mut buf = Vec::new();
        draw(&mut buf, &frame).unwrap();
        let written = String::from_utf8(buf).unwrap();

        assert!(written.contains("Score: 7"));
        assert!(written.contains("1024"));
    }
}

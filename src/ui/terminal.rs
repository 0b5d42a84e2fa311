use crate::app::{mode::AppMode, App};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    render_command_line, render_help, render_preview, render_save_hint, render_status,
    render_title, render_upload_prompt,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    _guard: TerminalGuard,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            _guard: guard,
            terminal,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let render_tick = Duration::from_millis(1000 / 30);
        let mut last_tick: Option<Instant> = None;

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            // Finished extractions arrive between input events
            app.poll_extractions();

            if last_tick.is_none_or(|tick| tick.elapsed() >= render_tick) {
                self.render_frame(app)?;
                last_tick = Some(Instant::now());
            }

            match event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            Self::dispatch_key(app, key.code);
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch_key(app: &mut App, code: KeyCode) {
        if app.mode == AppMode::Help {
            app.close_help();
            return;
        }

        match code {
            KeyCode::Char(c) => app.push_input(c),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Esc => app.clear_input(),
            KeyCode::Enter => {
                let input = app.take_input();
                if !input.trim().is_empty() {
                    let event = command_to_app_event(parse_command(&input));
                    app.handle_event(event);
                }
            }
            KeyCode::Up => app.scroll_preview_up(),
            KeyCode::Down => app.scroll_preview_down(),
            _ => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            if render_state.mode == AppMode::Help {
                frame.render_widget(render_help(), area);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // title
                    Constraint::Length(3), // document box
                    Constraint::Min(3),    // preview
                    Constraint::Length(1), // status line
                    Constraint::Length(1), // save hint
                    Constraint::Length(1), // command line
                ])
                .split(area);

            frame.render_widget(render_title(), chunks[0]);
            frame.render_widget(
                render_upload_prompt(render_state.file_name.as_deref()),
                chunks[1],
            );

            // Window the preview to the pane interior (minus the borders)
            let preview_height = chunks[2].height.saturating_sub(2) as usize;
            let preview_width = chunks[2].width.saturating_sub(2) as usize;
            frame.render_widget(
                render_preview(
                    &render_state.preview_rows,
                    render_state.scroll,
                    preview_height,
                    preview_width,
                ),
                chunks[2],
            );

            frame.render_widget(render_status(&render_state), chunks[3]);
            frame.render_widget(
                render_save_hint(render_state.can_save, render_state.output_name.as_deref()),
                chunks[4],
            );
            frame.render_widget(render_command_line(&render_state.command_buffer), chunks[5]);
        })?;

        Ok(())
    }
}

//! Terminal player view
//!
//! Renders one session's playback: current instruction, step position,
//! elapsed time, and a progress gauge. Keys: space toggles play/pause,
//! n/right and p/left move between steps, r restarts, q quits.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;
use stillpoint_core::domain::catalog::SessionDetail;
use stillpoint_core::domain::player::{PlayerMachine, PlayerMode, PlayerRunner};

/// Run the player view for one session until the user quits
pub async fn run(detail: SessionDetail, poll_interval_ms: u64) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_player(&mut terminal, &detail, poll_interval_ms).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_player(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    detail: &SessionDetail,
    poll_interval_ms: u64,
) -> anyhow::Result<()> {
    let mut runner = PlayerRunner::new(detail.instructions.clone());
    let poll_interval = Duration::from_millis(poll_interval_ms);

    loop {
        runner.poll_fired();

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(4), // Session header
                    Constraint::Min(7),    // Current instruction
                    Constraint::Length(3), // Progress gauge
                    Constraint::Length(3), // Footer
                ])
                .split(frame.area());

            let session = &detail.session;
            let machine = runner.machine();

            // Header
            let header = Paragraph::new(format!(
                "{}\n{} · {} · {} min",
                session.title,
                session.meditation_type.label(),
                session.difficulty_level.label(),
                session.duration_minutes
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title("Stillpoint"));
            frame.render_widget(header, chunks[0]);

            // Current instruction
            let instruction = Paragraph::new(instruction_text(machine))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(step_title(machine)),
                );
            frame.render_widget(instruction, chunks[1]);

            // Progress
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title("Progress"))
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(machine.progress().clamp(0.0, 1.0))
                .label(machine.elapsed_display());
            frame.render_widget(gauge, chunks[2]);

            // Footer
            let footer = Paragraph::new(
                "space: Play/Pause | n/→: Next | p/←: Previous | r: Restart | q: Quit",
            )
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[3]);
        })?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => runner.play_pause(),
                    KeyCode::Char('n') | KeyCode::Right => runner.next(),
                    KeyCode::Char('p') | KeyCode::Left => runner.previous(),
                    KeyCode::Char('r') => runner.restart(),
                    _ => {}
                }
            }
        }
    }
}

fn instruction_text(machine: &PlayerMachine) -> String {
    match machine.mode() {
        PlayerMode::Complete => {
            "Meditation complete. Take a moment to notice how you feel.".to_string()
        }
        PlayerMode::Idle if machine.current_index() == 0 => {
            "Press space to begin your meditation.".to_string()
        }
        _ => machine
            .current_instruction()
            .map(|i| i.instruction_text.clone())
            .unwrap_or_default(),
    }
}

fn step_title(machine: &PlayerMachine) -> String {
    if machine.is_complete() {
        format!("Complete · {} steps", machine.total_steps())
    } else {
        format!(
            "Step {} of {} · {}",
            machine.current_index() + 1,
            machine.total_steps(),
            machine.mode()
        )
    }
}

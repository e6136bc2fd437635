use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use std::io;

use crate::mechanics::rolling::final_disk_speed;
use crate::metrics::{DataPoint, export_csv, plot_results, snapshot};

const LENGTH: f64 = 10.0; // meters
const INCLINE: f64 = 30.0; // degrees
const MASS: f64 = 2.0; // kilograms
const FRICTION: f64 = 0.3;

pub fn start() -> anyhow::Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // State
    let mut height: f64 = 5.0; // meters
    let mut radius: f64 = 0.5; // meters
    let mut log: Vec<DataPoint> = Vec::new();

    loop {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints(
                    [
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                    ]
                    .as_ref(),
                )
                .split(size);

            let speed = final_disk_speed(height, LENGTH, INCLINE, MASS, FRICTION, radius);

            let height_text = format!("Drop height (←/→): {height:.2} m");
            let disk_text = format!("Disk: mass {MASS:.1} kg | radius (↑/↓) {radius:.2} m");
            let speed_text = match speed {
                Some(v) => format!("Final speed: {v:.4} m/s (radius cancels out)"),
                None => "Final speed: invalid input".to_string(),
            };
            let energy_text = match speed {
                Some(v) => format!(
                    "Energy at bottom: translational {:.2} J | rotational {:.2} J",
                    0.5 * MASS * v * v,
                    0.25 * MASS * v * v,
                ),
                None => "Energy at bottom: n/a".to_string(),
            };

            let blocks = vec![
                Paragraph::new(height_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(disk_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(speed_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(energy_text).block(Block::default().borders(Borders::ALL)),
            ];

            for (i, b) in blocks.into_iter().enumerate() {
                f.render_widget(b, chunks[i]);
            }
        })?;

        // Input handling
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Right => {
                        height += 0.25;
                        push_snapshot(&mut log, height, radius);
                    }
                    KeyCode::Left => {
                        if height > 0.25 {
                            height -= 0.25;
                        }
                        push_snapshot(&mut log, height, radius);
                    }
                    KeyCode::Up => {
                        radius += 0.05;
                        push_snapshot(&mut log, height, radius);
                    }
                    KeyCode::Down => {
                        if radius > 0.05 {
                            radius -= 0.05;
                        }
                        push_snapshot(&mut log, height, radius);
                    }
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;

                        export_csv(&log, "realtime.csv")?;
                        plot_results(&log, "plot.png")?;

                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn push_snapshot(log: &mut Vec<DataPoint>, height: f64, radius: f64) {
    if let Some(dp) = snapshot(height, LENGTH, INCLINE, MASS, FRICTION, radius) {
        log.push(dp);
    }
}

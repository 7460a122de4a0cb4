//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{EntropyStrategy, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, EntropyStrategy>,
    pub universe: &'a [Code],
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualCode,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub code: String,
    pub feedback: Feedback,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub code: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 11],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(universe: &'a [Code]) -> Self {
        let solver = Solver::new(EntropyStrategy, universe);

        Self {
            solver,
            universe,
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Think of a 4-digit number with unique digits - I'll deduce it."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as 'bulls cows', e.g. '2 1' (or 'w' for win)"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_code: String::new(),
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.solver.next_guess(&self.history_for_solver()) {
            Ok(guess) => {
                // Get remaining candidates for metrics
                let candidates = self.solver.candidates(&self.history_for_solver());
                let metrics = calculate_metrics(guess, &candidates);

                self.current_guess = Some(GuessInfo {
                    code: guess.text().to_string(),
                    entropy: metrics.entropy,
                    expected_remaining: metrics.expected_remaining,
                    max_partition: metrics.max_partition,
                });
            }
            Err(e) => {
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn history_for_solver(&self) -> Vec<(Code, Feedback)> {
        self.history
            .iter()
            .filter_map(|entry| Code::new(&entry.code).ok().map(|c| (c, entry.feedback)))
            .collect()
    }

    pub fn handle_feedback(&mut self, input: &str) {
        if input.trim() == "w" || input.trim() == "win" {
            self.apply_feedback(Feedback::WIN);
        } else if let Some(feedback) = Feedback::parse(input) {
            self.apply_feedback(feedback);
        } else {
            self.add_message(
                "Invalid feedback! Enter 'bulls cows' with sum at most 4, e.g. '2 1'",
                MessageStyle::Error,
            );
        }
    }

    pub fn apply_feedback(&mut self, feedback: Feedback) {
        let Some(guess_info) = self.current_guess.clone() else {
            return;
        };

        let candidates_before = self.solver.count_candidates(&self.history_for_solver());

        // Add to history
        self.history.push(HistoryEntry {
            code: guess_info.code,
            feedback,
            entropy: guess_info.entropy,
            candidates_before,
            candidates_after: 0, // Updated below
        });

        let candidates_after = self.solver.count_candidates(&self.history_for_solver());
        if let Some(last) = self.history.last_mut() {
            last.candidates_after = candidates_after;
        }

        if feedback.is_win() {
            self.stats.games_won += 1;
            self.stats.total_games += 1;
            let guess_count = self.history.len();
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] += 1;
            }

            self.input_mode = InputMode::WinCelebration;

            let celebration = match guess_count {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2..=4 => "🔥 MAGNIFICENT! Cracked it fast! 🔥",
                5 | 6 => "✨ SOLVED! Right on the expected pace! ✨",
                _ => "🎊 SOLVED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if candidates_after == 0 {
            self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            if candidates_after == 1 {
                self.add_message(
                    "Only one possibility remains - the next guess is your number!",
                    MessageStyle::Success,
                );
            } else {
                self.add_message(
                    &format!("{candidates_after} candidates remaining"),
                    MessageStyle::Info,
                );
            }
            // Compute next suggestion
            self.compute_suggestion();
        }

        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! Think of a code and report my feedback.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.history.pop().is_some() {
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.solver.count_candidates(&self.history_for_solver())
    }

    #[must_use]
    pub fn current_candidates(&self) -> Vec<&'a Code> {
        self.solver.candidates(&self.history_for_solver())
    }

    pub fn use_manual_code(&mut self) {
        let code = self.manual_code.clone();

        match Code::new(&code) {
            Ok(code_obj) => {
                // Any valid code is a legal guess; compute its metrics
                let candidates = self.current_candidates();
                let metrics = calculate_metrics(&code_obj, &candidates);

                // Compare with suggested guess if available
                if let Some(ref suggested) = self.current_guess
                    && metrics.entropy < suggested.entropy
                {
                    self.add_message(
                        &format!(
                            "Note: Suggested guess had {:.2} bits ({:.2} more)",
                            suggested.entropy,
                            suggested.entropy - metrics.entropy
                        ),
                        MessageStyle::Info,
                    );
                }

                // Set the manual code as current guess
                self.current_guess = Some(GuessInfo {
                    code: code.clone(),
                    entropy: metrics.entropy,
                    expected_remaining: metrics.expected_remaining,
                    max_partition: metrics.max_partition,
                });

                self.add_message(
                    &format!(
                        "Using: {code} (entropy: {:.2} bits, {:.1}x reduction)",
                        metrics.entropy,
                        metrics.entropy.exp2()
                    ),
                    MessageStyle::Success,
                );

                // Switch back to feedback mode
                self.input_mode = InputMode::Feedback;
                self.manual_code.clear();
            }
            Err(e) => {
                self.add_message(&format!("Invalid code: {e}"), MessageStyle::Error);
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Compute initial suggestion
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In celebration mode, ignore other keys
                    }
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Char('w') => {
                        // Win shortcut
                        app.apply_feedback(Feedback::WIN);
                    }
                    KeyCode::Tab => {
                        // Switch to manual code mode
                        if app.candidates_count() > 0 {
                            app.input_mode = InputMode::ManualCode;
                            app.add_message(
                                "Enter your own guess (4 unique digits)",
                                MessageStyle::Info,
                            );
                        }
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualCode => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                        app.add_message("Cancelled manual guess entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        // Toggle back to feedback mode
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_code.len() < 4 && c.is_ascii_digit() {
                            app.manual_code.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_code.pop();
                    }
                    KeyCode::Enter => {
                        if app.manual_code.len() == 4 {
                            app.use_manual_code();
                        } else {
                            app.add_message(
                                "Code must be exactly 4 digits!",
                                MessageStyle::Error,
                            );
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

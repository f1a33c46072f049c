//! Interactive terminal game: one event loop, tick-driven countdowns.
//!
//! All engine state is mutated on this single thread, either from a key
//! event or from the periodic tick. Leaving a level drops its session,
//! which takes the pending countdown with it.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use shiksha::bank::{standard_bank, Language, QuestionBank};
use shiksha::constants::TICK_INTERVAL_MS;
use shiksha::engine::{
    combined_completion_percent, LevelSession, ProgressTracker, SessionEnd, SessionMode,
};
use shiksha::matching::{MatchGame, MatchInput};
use shiksha::ui::home_scene::{render_home, HomeView};
use shiksha::ui::{battle_scene, level_select_scene, match_scene, results_scene, GameMode};

enum Screen {
    Home,
    LevelSelect,
    Battle,
    Match,
    Results,
}

struct App {
    bank: QuestionBank,
    language: Language,
    mode: GameMode,
    battle_progress: ProgressTracker,
    match_progress: ProgressTracker,

    screen: Screen,
    selected_mode: usize,
    selected_language: usize,
    picking_language: bool,
    selected_level: usize,
    highlighted_option: usize,

    session: Option<LevelSession>,
    match_game: Option<MatchGame>,
    last_end: Option<SessionEnd>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let bank = standard_bank();
        let level_count = bank.level_count();
        Self {
            bank,
            language: Language::English,
            mode: GameMode::QuizBattle,
            battle_progress: ProgressTracker::new(level_count),
            match_progress: ProgressTracker::new(level_count),
            screen: Screen::Home,
            selected_mode: 0,
            selected_language: 0,
            picking_language: false,
            selected_level: 0,
            highlighted_option: 0,
            session: None,
            match_game: None,
            last_end: None,
            should_quit: false,
        }
    }

    fn progress(&self) -> &ProgressTracker {
        match self.mode {
            GameMode::QuizBattle => &self.battle_progress,
            GameMode::TileMatch => &self.match_progress,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match self.screen {
            Screen::Home => self.handle_home_key(code),
            Screen::LevelSelect => self.handle_level_select_key(code),
            Screen::Battle => self.handle_battle_key(code),
            Screen::Match => self.handle_match_key(code),
            Screen::Results => self.handle_results_key(code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.picking_language = !self.picking_language,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.picking_language {
                    self.selected_language = self.selected_language.saturating_sub(1);
                } else {
                    self.selected_mode = self.selected_mode.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.picking_language {
                    self.selected_language = (self.selected_language + 1).min(Language::ALL.len() - 1);
                } else {
                    self.selected_mode = (self.selected_mode + 1).min(GameMode::ALL.len() - 1);
                }
            }
            KeyCode::Enter => {
                self.mode = GameMode::ALL[self.selected_mode];
                self.language = Language::from_index(self.selected_language);
                self.selected_level = 0;
                self.screen = Screen::LevelSelect;
            }
            _ => {}
        }
    }

    fn handle_level_select_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.screen = Screen::Home,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_level = self.selected_level.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_level = (self.selected_level + 1).min(self.bank.level_count() - 1);
            }
            KeyCode::Enter => {
                let level_number = self.selected_level as u32 + 1;
                if self.progress().is_level_unlocked(level_number) {
                    self.start_level(level_number);
                }
            }
            _ => {}
        }
    }

    fn start_level(&mut self, level_number: u32) {
        let level = self.bank.level(level_number);
        self.highlighted_option = 0;
        self.last_end = None;
        match self.mode {
            GameMode::QuizBattle => {
                self.session = Some(LevelSession::start(level, &self.bank, SessionMode::Battle));
                self.screen = Screen::Battle;
            }
            GameMode::TileMatch => {
                self.match_game = Some(MatchGame::start(level, &self.bank));
                self.screen = Screen::Match;
            }
        }
    }

    fn handle_battle_key(&mut self, code: KeyCode) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                // Abandoning the level drops the session and its countdown.
                self.session = None;
                self.screen = Screen::LevelSelect;
            }
            KeyCode::Char('p') => {
                if session.is_paused() {
                    session.resume();
                } else {
                    session.pause();
                }
            }
            KeyCode::Char('r') => {
                session.reset();
                self.highlighted_option = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlighted_option = self.highlighted_option.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = session
                    .current_question()
                    .map(|q| q.option_count() - 1)
                    .unwrap_or(0);
                self.highlighted_option = (self.highlighted_option + 1).min(max);
            }
            KeyCode::Enter => {
                session.submit_answer(Some(self.highlighted_option));
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let in_range = session
                    .current_question()
                    .map(|q| index < q.option_count())
                    .unwrap_or(false);
                if in_range {
                    session.submit_answer(Some(index));
                }
            }
            _ => {}
        }
    }

    fn handle_match_key(&mut self, code: KeyCode) {
        let Some(game) = self.match_game.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.match_game = None;
                self.screen = Screen::LevelSelect;
            }
            KeyCode::Char('p') => {
                let session = game.session_mut();
                if session.is_paused() {
                    session.resume();
                } else {
                    session.pause();
                }
            }
            KeyCode::Char('r') => game.session_mut().reset(),
            KeyCode::Up => game.process_input(MatchInput::Up),
            KeyCode::Down => game.process_input(MatchInput::Down),
            KeyCode::Left => game.process_input(MatchInput::Left),
            KeyCode::Right => game.process_input(MatchInput::Right),
            KeyCode::Char(' ') | KeyCode::Enter => game.process_input(MatchInput::Drop),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.session = None;
                self.match_game = None;
                self.screen = Screen::LevelSelect;
            }
            KeyCode::Char('r') => {
                if let Some(end) = self.last_end.take() {
                    self.start_level(end.level_number);
                }
            }
            _ => {}
        }
    }

    fn on_tick(&mut self, dt_ms: u64) {
        match self.screen {
            Screen::Battle => {
                if let Some(session) = self.session.as_mut() {
                    let tick = session.tick(dt_ms, &mut self.battle_progress);
                    if tick.advanced {
                        self.highlighted_option = 0;
                    }
                    if let Some(end) = tick.session_end {
                        self.last_end = Some(end);
                        self.screen = Screen::Results;
                    }
                }
            }
            Screen::Match => {
                if let Some(game) = self.match_game.as_mut() {
                    let tick = game.tick(dt_ms, &mut self.match_progress);
                    if let Some(end) = tick.session_end {
                        self.last_end = Some(end);
                        self.screen = Screen::Results;
                    }
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        match self.screen {
            Screen::Home => {
                let view = HomeView {
                    selected_mode: self.selected_mode,
                    selected_language: self.selected_language,
                    picking_language: self.picking_language,
                    combined_completion: combined_completion_percent(&[
                        &self.battle_progress,
                        &self.match_progress,
                    ]),
                };
                render_home(frame, area, &view);
            }
            Screen::LevelSelect => {
                level_select_scene::render_level_select(
                    frame,
                    area,
                    &self.bank,
                    self.progress(),
                    self.mode,
                    self.language,
                    self.selected_level,
                );
            }
            Screen::Battle => {
                if let Some(session) = &self.session {
                    battle_scene::render_battle(
                        frame,
                        area,
                        session,
                        self.language,
                        self.highlighted_option,
                    );
                }
            }
            Screen::Match => {
                if let Some(game) = &self.match_game {
                    match_scene::render_match(frame, area, game, self.language);
                }
            }
            Screen::Results => {
                level_select_scene::render_level_select(
                    frame,
                    area,
                    &self.bank,
                    self.progress(),
                    self.mode,
                    self.language,
                    self.selected_level,
                );
                if let Some(end) = &self.last_end {
                    results_scene::render_results(frame, area, end);
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            let dt_ms = last_tick.elapsed().as_millis() as u64;
            app.on_tick(dt_ms);
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the session's `DayPlan`,
//! handles key presses, and renders the planner: stats cards across the top,
//! tasks and time blocks side by side, and the reflection panel underneath.
//! Statistics are recomputed on every frame.

use std::io;
use std::time::Duration;

use chrono::{Local, NaiveTime};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::{
    plan::DayPlan,
    stats::{format_minutes, Stats},
    tui::{
        colors::{block_color, energy_color, text_on, DARK_GREEN, DARK_PURPLE, DARK_RED, GOLD},
        enums::{AppState, ConfirmAction, InputMode, Pane},
        forms::{
            BlockForm, ReflectionForm, TaskForm, BLOCK_KIND_ORDER, BLOCK_MINUTES_ORDER,
            BLOCK_TITLE_ORDER, NEXT_ORDER, STUCK_ORDER, TASK_ENERGY_ORDER, TASK_MINUTES_ORDER,
            TASK_PRIORITY_ORDER, TASK_TITLE_ORDER, WINS_ORDER,
        },
        input::InputField,
        utils::{centered_rect, centered_rect_rows},
    },
};

fn local_time_of_day() -> NaiveTime {
    Local::now().time()
}

/// Main application state for the terminal user interface.
pub struct App {
    state: AppState,
    plan: DayPlan,
    focus: Pane,
    task_table: TableState,
    block_table: TableState,
    task_form: TaskForm,
    block_form: BlockForm,
    reflection_form: ReflectionForm,
    input_mode: InputMode,
    status_message: String,
    confirm_action: Option<ConfirmAction>,
    clock: fn() -> NaiveTime,
}

impl App {
    /// Create an App around an existing plan.
    pub fn new(plan: DayPlan) -> Self {
        let mut app = App {
            state: AppState::Planner,
            plan,
            focus: Pane::Tasks,
            task_table: TableState::default(),
            block_table: TableState::default(),
            task_form: TaskForm::new(),
            block_form: BlockForm::new(),
            reflection_form: ReflectionForm::new(),
            input_mode: InputMode::None,
            status_message: String::new(),
            confirm_action: None,
            clock: local_time_of_day,
        };
        app.sync_selection();
        app
    }

    /// Replace the time source used for reflection timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    /// Read-only view of the session's plan.
    pub fn plan(&self) -> &DayPlan {
        &self.plan
    }

    /// Keep table selections inside their lists after a mutation.
    fn sync_selection(&mut self) {
        clamp_selection(&mut self.task_table, self.plan.tasks.len());
        clamp_selection(&mut self.block_table, self.plan.blocks.len());
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn pane_color(&self) -> Color {
        match self.focus {
            Pane::Tasks => DARK_GREEN,
            Pane::Blocks => GOLD,
            Pane::Reflection => DARK_PURPLE,
        }
    }

    fn open_state(&mut self, state: AppState) {
        self.state = state;
        self.input_mode = match state {
            AppState::AddTask | AppState::AddBlock | AppState::Reflection => InputMode::Text,
            _ => InputMode::None,
        };
    }

    fn close_to_planner(&mut self) {
        self.state = AppState::Planner;
        self.input_mode = InputMode::None;
    }

    fn toggle_selected_task(&mut self) {
        let Some(index) = self.task_table.selected() else {
            self.set_status_message("No task selected");
            return;
        };
        match self.plan.toggle_done(index) {
            Ok(true) => self.set_status_message("Task done"),
            Ok(false) => self.set_status_message("Task reopened"),
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    fn remove_selected(&mut self) {
        let result = match self.focus {
            Pane::Tasks => self
                .task_table
                .selected()
                .map(|i| self.plan.remove_task(i).map(|t| format!("Removed task '{}'", t.title))),
            Pane::Blocks => self
                .block_table
                .selected()
                .map(|i| self.plan.remove_block(i).map(|b| format!("Removed block '{}'", b.title))),
            Pane::Reflection => return,
        };
        match result {
            Some(Ok(msg)) => self.set_status_message(msg),
            Some(Err(e)) => self.set_status_message(e.to_string()),
            None => self.set_status_message("Nothing selected"),
        }
        self.sync_selection();
    }

    fn reset_day(&mut self) {
        self.plan.clear_all();
        self.sync_selection();
        self.set_status_message("New day started");
    }

    fn load_sample(&mut self) {
        self.plan.load_sample();
        self.task_table.select(Some(0));
        self.block_table.select(Some(0));
        self.set_status_message("Sample day loaded");
    }

    fn submit_task_form(&mut self) {
        match self.task_form.submit() {
            Ok(task) => {
                self.plan.add_task(task);
                self.task_table.select(Some(self.plan.tasks.len() - 1));
                self.task_form = TaskForm::new();
                self.focus = Pane::Tasks;
                self.close_to_planner();
                self.set_status_message("Task added");
            }
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    fn submit_block_form(&mut self) {
        match self.block_form.submit() {
            Ok(block) => {
                self.plan.add_block(block);
                self.block_table.select(Some(self.plan.blocks.len() - 1));
                self.block_form = BlockForm::new();
                self.focus = Pane::Blocks;
                self.close_to_planner();
                self.set_status_message("Block added");
            }
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    fn save_reflection(&mut self) {
        let reflection = self.reflection_form.reflection();
        let status = self.plan.save_reflection(&reflection, (self.clock)());
        self.close_to_planner();
        self.set_status_message(status.to_string());
    }

    /// Ask for confirmation only when the action would discard planned items.
    fn request(&mut self, action: ConfirmAction) {
        if self.plan.tasks.is_empty() && self.plan.blocks.is_empty() {
            self.apply(action);
        } else {
            self.confirm_action = Some(action);
            self.open_state(AppState::Confirm);
        }
    }

    fn apply(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::NewDay => self.reset_day(),
            ConfirmAction::LoadSample => self.load_sample(),
        }
    }

    /// Handle keyboard input on the main planner screen.
    ///
    /// Returns true if the application should quit.
    fn handle_planner_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Pane::Tasks => select_prev(&mut self.task_table, self.plan.tasks.len()),
                Pane::Blocks => select_prev(&mut self.block_table, self.plan.blocks.len()),
                Pane::Reflection => {}
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Pane::Tasks => select_next(&mut self.task_table, self.plan.tasks.len()),
                Pane::Blocks => select_next(&mut self.block_table, self.plan.blocks.len()),
                Pane::Reflection => {}
            },
            KeyCode::Char('a') => match self.focus {
                Pane::Tasks => self.open_state(AppState::AddTask),
                Pane::Blocks => self.open_state(AppState::AddBlock),
                Pane::Reflection => self.open_state(AppState::Reflection),
            },
            KeyCode::Char('t') => {
                self.focus = Pane::Tasks;
                self.open_state(AppState::AddTask);
            }
            KeyCode::Char('b') => {
                self.focus = Pane::Blocks;
                self.open_state(AppState::AddBlock);
            }
            KeyCode::Char('r') => {
                self.focus = Pane::Reflection;
                self.open_state(AppState::Reflection);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => match self.focus {
                Pane::Tasks => self.toggle_selected_task(),
                Pane::Reflection if key == KeyCode::Enter => self.open_state(AppState::Reflection),
                _ => {}
            },
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('s') => self.request(ConfirmAction::LoadSample),
            KeyCode::Char('n') => self.request(ConfirmAction::NewDay),
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => self.open_state(AppState::Help),
            _ => {}
        }
        false
    }

    fn handle_task_form_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.close_to_planner(),
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Enter => self.submit_task_form(),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
    }

    fn handle_block_form_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.close_to_planner(),
            KeyCode::Tab | KeyCode::Down => self.block_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.block_form.prev_field(),
            KeyCode::Left => self.block_form.handle_left_right(false),
            KeyCode::Right => self.block_form.handle_left_right(true),
            KeyCode::Backspace => self.block_form.handle_backspace(),
            KeyCode::Delete => self.block_form.handle_delete(),
            KeyCode::Enter => self.submit_block_form(),
            KeyCode::Char(c) => self.block_form.handle_char(c),
            _ => {}
        }
    }

    fn handle_reflection_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.close_to_planner(),
            KeyCode::Tab | KeyCode::Down => self.reflection_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.reflection_form.prev_field(),
            KeyCode::Left => self.reflection_form.active_input().move_cursor_left(),
            KeyCode::Right => self.reflection_form.active_input().move_cursor_right(),
            KeyCode::Home => self.reflection_form.active_input().move_home(),
            KeyCode::End => self.reflection_form.active_input().move_end(),
            KeyCode::Backspace => self.reflection_form.active_input().handle_backspace(),
            KeyCode::Delete => self.reflection_form.active_input().handle_delete(),
            KeyCode::Enter => self.save_reflection(),
            KeyCode::Char(c) => self.reflection_form.active_input().handle_char(c),
            _ => {}
        }
    }

    fn handle_confirm_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(action) = self.confirm_action.take() {
                    self.close_to_planner();
                    self.apply(action);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_action = None;
                self.close_to_planner();
                self.set_status_message("Cancelled");
            }
            _ => {}
        }
    }

    /// Dispatch a key press based on the current application state.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.clear_status_message();
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.state {
            AppState::Planner => return self.handle_planner_input(key, modifiers),
            AppState::AddTask => self.handle_task_form_input(key),
            AppState::AddBlock => self.handle_block_form_input(key),
            AppState::Reflection => self.handle_reflection_input(key),
            AppState::Help => self.close_to_planner(),
            AppState::Confirm => self.handle_confirm_input(key),
        }
        false
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                debug!(code = ?key.code, state = ?self.state, "key");
                return Ok(self.handle_key(key.code, key.modifiers));
            }
        }
        Ok(false)
    }

    /// Render the four stats cards.
    fn render_stats(&self, f: &mut Frame, area: Rect, stats: &Stats) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let intentions = stats.intentions.to_string();
        let deep = stats.deep_work_display();
        let recovery = stats.recovery_display();
        let help = stats.help.to_string();
        let score = stats.focus_score.to_string();
        let entries = [
            ("Focus score", score.as_str(), help.as_str()),
            ("Intentions", intentions.as_str(), "tasks planned"),
            ("Deep work", deep.as_str(), "in focus blocks"),
            ("Recovery", recovery.as_str(), "in recovery blocks"),
        ];

        for (chunk, (title, value, caption)) in cards.iter().zip(entries) {
            let text = vec![
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    caption.to_string(),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )),
            ];
            let card = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title(title))
                .alignment(Alignment::Center);
            f.render_widget(card, *chunk);
        }
    }

    fn pane_block(&self, pane: Pane, title: String) -> Block<'static> {
        let border = if self.focus == pane {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Block::default().borders(Borders::ALL).border_style(border).title(title)
    }

    /// Render the task list.
    fn render_tasks(&mut self, f: &mut Frame, area: Rect) {
        let header = Row::new(["Task", "Time", "Energy", "Pri", ""].map(|h| {
            Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
        }))
        .style(Style::default().bg(DARK_GREEN).fg(text_on(DARK_GREEN)));

        let rows: Vec<Row> = self
            .plan
            .tasks
            .iter()
            .map(|task| {
                let style = if task.done {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                let energy_style = if task.done {
                    style
                } else {
                    Style::default().fg(energy_color(task.energy))
                };
                Row::new(vec![
                    Cell::from(task.title.clone()),
                    Cell::from(format_minutes(task.minutes)),
                    Cell::from(format!("{} energy", task.energy)).style(energy_style),
                    Cell::from(task.priority.to_string()),
                    Cell::from(if task.done { "[Undo]" } else { "[Done]" }),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(13),
            Constraint::Length(4),
            Constraint::Length(7),
        ];

        let title = format!("Tasks ({})", self.plan.tasks.len());
        let table = Table::new(rows, widths)
            .header(header)
            .block(self.pane_block(Pane::Tasks, title))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.task_table);
    }

    /// Render the time block list.
    fn render_blocks(&mut self, f: &mut Frame, area: Rect) {
        let header = Row::new(["Block", "Time", "Type"].map(|h| {
            Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
        }))
        .style(Style::default().bg(GOLD).fg(text_on(GOLD)));

        let rows: Vec<Row> = self
            .plan
            .blocks
            .iter()
            .map(|block| {
                let color = block_color(block.kind);
                Row::new(vec![
                    Cell::from(block.title.clone()),
                    Cell::from(format_minutes(block.minutes)),
                    Cell::from(block.kind.to_string())
                        .style(Style::default().bg(color).fg(text_on(color))),
                ])
            })
            .collect();

        let widths = [Constraint::Min(16), Constraint::Length(7), Constraint::Length(10)];

        let title = format!("Time blocks ({})", self.plan.blocks.len());
        let table = Table::new(rows, widths)
            .header(header)
            .block(self.pane_block(Pane::Blocks, title))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.block_table);
    }

    /// Render the reflection notes and their save acknowledgment.
    fn render_reflection(&self, f: &mut Frame, area: Rect) {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(vec![Span::styled("Wins:  ", label), Span::raw(self.reflection_form.wins.value.clone())]),
            Line::from(vec![Span::styled("Stuck: ", label), Span::raw(self.reflection_form.stuck.value.clone())]),
            Line::from(vec![Span::styled("Next:  ", label), Span::raw(self.reflection_form.next.value.clone())]),
            Line::from(Span::styled(
                self.plan.save_status.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(self.pane_block(Pane::Reflection, "Reflection".to_string()))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// Render the main planner screen.
    fn render_planner(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(6),
            ])
            .split(area);

        let stats = self.plan.stats();
        self.render_stats(f, chunks[0], &stats);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[1]);
        self.render_tasks(f, lists[0]);
        self.render_blocks(f, lists[1]);

        self.render_reflection(f, chunks[2]);
    }

    /// Render one labelled form row; the active row gets a yellow border.
    fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
        let border = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let paragraph = Paragraph::new(value.to_string())
            .block(Block::default().borders(Borders::ALL).border_style(border).title(label.to_string()));
        f.render_widget(paragraph, area);
    }

    fn selector_text(value: &str) -> String {
        format!("◀ {} ▶", value)
    }

    /// Render a popup form made of bordered rows.
    fn render_form(
        f: &mut Frame,
        area: Rect,
        title: &str,
        rows: &[(&str, String, bool)],
        cursor: Option<(usize, &InputField)>,
    ) {
        let height = rows.len() as u16 * 3 + 2;
        let popup = centered_rect_rows(60, height, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} - Enter to save, Esc to cancel", title));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); rows.len()])
            .split(inner);

        for (chunk, (label, value, active)) in chunks.iter().zip(rows) {
            Self::render_field(f, *chunk, label, value, *active);
        }

        if let Some((row, field)) = cursor {
            if let Some(chunk) = chunks.get(row) {
                let x = chunk.x.saturating_add(field.cursor_column()).saturating_add(1);
                f.set_cursor_position((x, chunk.y + 1));
            }
        }
    }

    fn render_task_form(&self, f: &mut Frame, area: Rect) {
        let form = &self.task_form;
        let current = form.current_field;
        let rows = [
            ("Title", form.title.value.clone(), current == TASK_TITLE_ORDER),
            ("Minutes", form.minutes.value.clone(), current == TASK_MINUTES_ORDER),
            ("Energy", Self::selector_text(form.selected_energy().as_str()), current == TASK_ENERGY_ORDER),
            ("Priority", Self::selector_text(form.selected_priority().label()), current == TASK_PRIORITY_ORDER),
        ];
        let cursor = match current {
            TASK_TITLE_ORDER => Some((0, &form.title)),
            TASK_MINUTES_ORDER => Some((1, &form.minutes)),
            _ => None,
        }
        .filter(|_| self.input_mode == InputMode::Text);
        Self::render_form(f, area, "Add Task", &rows, cursor);
    }

    fn render_block_form(&self, f: &mut Frame, area: Rect) {
        let form = &self.block_form;
        let current = form.current_field;
        let rows = [
            ("Title", form.title.value.clone(), current == BLOCK_TITLE_ORDER),
            ("Minutes", form.minutes.value.clone(), current == BLOCK_MINUTES_ORDER),
            ("Type", Self::selector_text(form.selected_kind().as_str()), current == BLOCK_KIND_ORDER),
        ];
        let cursor = match current {
            BLOCK_TITLE_ORDER => Some((0, &form.title)),
            BLOCK_MINUTES_ORDER => Some((1, &form.minutes)),
            _ => None,
        }
        .filter(|_| self.input_mode == InputMode::Text);
        Self::render_form(f, area, "Add Time Block", &rows, cursor);
    }

    fn render_reflection_form(&self, f: &mut Frame, area: Rect) {
        let form = &self.reflection_form;
        let current = form.current_field;
        let rows = [
            ("Wins", form.wins.value.clone(), current == WINS_ORDER),
            ("Stuck", form.stuck.value.clone(), current == STUCK_ORDER),
            ("Next", form.next.value.clone(), current == NEXT_ORDER),
        ];
        let field = match current {
            WINS_ORDER => &form.wins,
            STUCK_ORDER => &form.stuck,
            _ => &form.next,
        };
        let cursor = Some((current, field)).filter(|_| self.input_mode == InputMode::Text);
        Self::render_form(f, area, "Reflection", &rows, cursor);
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Day Planner Help", heading)),
            Line::from(""),
            Line::from(Span::styled("Planner:", heading)),
            Line::from("  Tab/Shift+Tab  Switch between tasks, blocks and reflection"),
            Line::from("  ↑/↓, k/j       Move selection"),
            Line::from("  a              Add to the focused panel"),
            Line::from("  t / b / r      Add task / add block / edit reflection"),
            Line::from("  Enter/Space/c  Toggle task done (Undo when done)"),
            Line::from("  d/Delete       Remove selected task or block"),
            Line::from("  s              Load sample day"),
            Line::from("  n              Start a new day"),
            Line::from("  h/?/F1         Show this help"),
            Line::from("  q/Esc/Ctrl+C   Quit"),
            Line::from(""),
            Line::from(Span::styled("Forms:", heading)),
            Line::from("  Tab/↑/↓        Move between fields"),
            Line::from("  ←/→            Move cursor or change energy/priority/type"),
            Line::from("  Enter          Save"),
            Line::from("  Esc            Cancel"),
            Line::from(""),
            Line::from(Span::styled("Focus score:", heading)),
            Line::from("  Completed energy-weighted minutes as a share of planned ones."),
            Line::from("  Weights: high 1.0, medium 0.7, low 0.4."),
            Line::from(""),
            Line::from("Nothing is saved when you quit."),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render a confirmation dialog for destructive actions.
    fn render_confirm(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Confirm Action")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure you want to:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.confirm_action.map(ConfirmAction::prompt).unwrap_or("")),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Planner => match self.focus {
                    Pane::Tasks => "Tasks | a add  c done/undo  d remove | h help".to_string(),
                    Pane::Blocks => "Time blocks | a add  d remove | h help".to_string(),
                    Pane::Reflection => "Reflection | Enter edit | h help".to_string(),
                },
                AppState::AddTask => "Add Task".to_string(),
                AppState::AddBlock => "Add Time Block".to_string(),
                AppState::Reflection => "Reflection (Enter to save, Esc to close)".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm Action".to_string(),
            }
        };

        let color = self.pane_color();
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(color).fg(text_on(color)))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function; always redraws the whole screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.state {
            AppState::Help => self.render_help(f, chunks[0]),
            state => {
                self.render_planner(f, chunks[0]);
                match state {
                    AppState::AddTask => self.render_task_form(f, chunks[0]),
                    AppState::AddBlock => self.render_block_form(f, chunks[0]),
                    AppState::Reflection => self.render_reflection_form(f, chunks[0]),
                    AppState::Confirm => self.render_confirm(f, chunks[0]),
                    _ => {}
                }
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                info!(tasks = self.plan.tasks.len(), blocks = self.plan.blocks.len(), "quit requested");
                break;
            }
        }
        Ok(())
    }
}

fn clamp_selection(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}

fn select_prev(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = state.selected().map_or(0, |i| i.saturating_sub(1));
    state.select(Some(i));
}

fn select_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = state.selected().map_or(0, |i| (i + 1).min(len - 1));
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BlockKind, Energy};
    use crate::reflection::SaveStatus;
    use ratatui::backend::TestBackend;

    fn five_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(17, 0, 0).unwrap()
    }

    fn press(app: &mut App, key: KeyCode) -> bool {
        app.handle_key(key, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen_text(app: &mut App) -> String {
        let backend = TestBackend::new(160, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_add_task_through_form() {
        let mut app = App::new(DayPlan::default());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state, AppState::AddTask);

        type_text(&mut app, "Write retro");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "25");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Planner);
        assert_eq!(app.plan().tasks.len(), 1);
        let task = &app.plan().tasks[0];
        assert_eq!(task.title, "Write retro");
        assert_eq!(task.minutes, 25);
        assert_eq!(task.energy, Energy::Medium);
        assert_eq!(app.task_table.selected(), Some(0));
        assert!(app.task_form.title.value.is_empty());
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut app = App::new(DayPlan::default());
        press(&mut app, KeyCode::Char('t'));
        type_text(&mut app, "Write retro");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "0");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::AddTask);
        assert!(app.plan().tasks.is_empty());
        assert!(app.status_message.contains("whole number of minutes"));
        assert_eq!(app.task_form.title.value, "Write retro");
    }

    #[test]
    fn test_add_block_through_form() {
        let mut app = App::new(DayPlan::default());
        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "Walk");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "30");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Pane::Blocks);
        assert_eq!(app.plan().blocks.len(), 1);
        assert_eq!(app.plan().blocks[0].kind, BlockKind::Recovery);
        assert_eq!(app.plan().stats().recovery_display(), "0.5h");
    }

    #[test]
    fn test_toggle_and_remove_selected_task() {
        let mut app = App::new(DayPlan::sample());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.plan().tasks[1].done);
        assert_eq!(app.plan().stats().help.to_string(), "All tasks done. Nice.");

        press(&mut app, KeyCode::Char('c'));
        assert!(!app.plan().tasks[1].done);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.plan().tasks.len(), 2);
        assert_eq!(app.task_table.selected(), Some(1));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.plan().tasks.is_empty());
        assert_eq!(app.task_table.selected(), None);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status_message, "Nothing selected");
    }

    #[test]
    fn test_remove_block_in_blocks_pane() {
        let mut app = App::new(DayPlan::sample());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.plan().blocks.len(), 2);
        assert_eq!(app.plan().tasks.len(), 3);
        assert_eq!(app.plan().stats().deep_minutes, 0);
    }

    #[test]
    fn test_new_day_requires_confirmation() {
        let mut app = App::new(DayPlan::sample());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Confirm);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Planner);
        assert_eq!(app.plan().tasks.len(), 3);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.plan().tasks.is_empty());
        assert!(app.plan().blocks.is_empty());
        assert_eq!(app.plan().save_status, SaveStatus::NotSaved);
    }

    #[test]
    fn test_sample_on_empty_day_needs_no_confirmation() {
        let mut app = App::new(DayPlan::default());
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state, AppState::Planner);
        assert_eq!(app.plan(), &DayPlan::sample());
        assert_eq!(app.task_table.selected(), Some(0));
    }

    #[test]
    fn test_reflection_save() {
        let mut app = App::new(DayPlan::default()).with_clock(five_pm);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.plan().save_status, SaveStatus::NothingToSave);
        assert_eq!(app.status_message, "Nothing to save yet.");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Reflection);
        type_text(&mut app, "Shipped the deck");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.plan().save_status, SaveStatus::SavedAt(five_pm()));
        assert_eq!(app.status_message, "Saved at 17:00:00");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(DayPlan::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));

        press(&mut app, KeyCode::Char('a'));
        // 'q' is text inside a form.
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.task_form.title.value, "q");
    }

    #[test]
    fn test_render_sample_day() {
        let mut app = App::new(DayPlan::sample());
        let text = screen_text(&mut app);
        assert!(text.contains("Focus score"));
        assert!(text.contains("76"));
        assert!(text.contains("2h completed today."));
        assert!(text.contains("2.0h"));
        assert!(text.contains("0.5h"));
        assert!(text.contains("Client strategy deck"));
        assert!(text.contains("[Undo]"));
        assert!(text.contains("medium energy"));
        assert!(text.contains("Not saved yet."));
    }

    #[test]
    fn test_render_forms_and_help() {
        let mut app = App::new(DayPlan::default());
        assert!(screen_text(&mut app).contains("Plan tasks to calculate."));

        press(&mut app, KeyCode::Char('b'));
        assert!(screen_text(&mut app).contains("Add Time Block"));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('h'));
        assert!(screen_text(&mut app).contains("Day Planner Help"));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state, AppState::Planner);
    }
}

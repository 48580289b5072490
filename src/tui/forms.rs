//! Entry forms for the terminal user interface.
//!
//! `TaskForm` and `BlockForm` collect the raw values for a new record and hand
//! them to the input layer for validation. `ReflectionForm` holds the three
//! free-text reflection fields. Text fields and selectors share one tab order.

use crate::{
    error::PlanError,
    fields::{BlockKind, Energy, Priority},
    reflection::Reflection,
    submit::{submit_block, submit_task},
    task::{Task, TimeBlock},
    tui::input::InputField,
};

/// Tab order for the task form.
pub const TASK_TITLE_ORDER: usize = 0;
pub const TASK_MINUTES_ORDER: usize = 1;
pub const TASK_ENERGY_ORDER: usize = 2;
pub const TASK_PRIORITY_ORDER: usize = 3;
const TASK_FIELD_COUNT: usize = 4;

/// Tab order for the block form.
pub const BLOCK_TITLE_ORDER: usize = 0;
pub const BLOCK_MINUTES_ORDER: usize = 1;
pub const BLOCK_KIND_ORDER: usize = 2;
const BLOCK_FIELD_COUNT: usize = 3;

/// Tab order for the reflection form.
pub const WINS_ORDER: usize = 0;
pub const STUCK_ORDER: usize = 1;
pub const NEXT_ORDER: usize = 2;
const REFLECTION_FIELD_COUNT: usize = 3;

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

fn move_cursor(field: &mut InputField, right: bool) {
    if right {
        field.move_cursor_right()
    } else {
        field.move_cursor_left()
    }
}

/// Form for adding a task.
#[derive(Debug)]
pub struct TaskForm {
    pub title: InputField,
    pub minutes: InputField,
    pub energy: usize,
    pub priority: usize,
    pub current_field: usize,
}

impl TaskForm {
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            minutes: InputField::new(),
            energy: 0,   // high
            priority: 0, // "1"
            current_field: TASK_TITLE_ORDER,
        };
        form.update_active_field();
        form
    }

    pub fn selected_energy(&self) -> Energy {
        Energy::ALL[self.energy]
    }

    pub fn selected_priority(&self) -> Priority {
        Priority::new(Priority::CHOICES[self.priority])
    }

    pub fn next_field(&mut self) {
        self.current_field = cycle(self.current_field, TASK_FIELD_COUNT, true);
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = cycle(self.current_field, TASK_FIELD_COUNT, false);
        self.update_active_field();
    }

    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TASK_TITLE_ORDER;
        self.minutes.active = self.current_field == TASK_MINUTES_ORDER;
    }

    /// The text field under the cursor, if the current field is not a selector.
    pub fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TASK_TITLE_ORDER => Some(&mut self.title),
            TASK_MINUTES_ORDER => Some(&mut self.minutes),
            _ => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            field.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_delete();
        }
    }

    /// Left/right move the cursor in text fields and change selector values.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TASK_ENERGY_ORDER => self.energy = cycle(self.energy, Energy::ALL.len(), right),
            TASK_PRIORITY_ORDER => {
                self.priority = cycle(self.priority, Priority::CHOICES.len(), right)
            }
            _ => {
                if let Some(field) = self.active_input() {
                    move_cursor(field, right);
                }
            }
        }
    }

    /// Validate the form and build a task.
    pub fn submit(&self) -> Result<Task, PlanError> {
        submit_task(
            &self.title.value,
            &self.minutes.value,
            self.selected_energy(),
            self.selected_priority(),
        )
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Form for adding a time block.
#[derive(Debug)]
pub struct BlockForm {
    pub title: InputField,
    pub minutes: InputField,
    pub kind: usize,
    pub current_field: usize,
}

impl BlockForm {
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            minutes: InputField::new(),
            kind: 0, // focus
            current_field: BLOCK_TITLE_ORDER,
        };
        form.update_active_field();
        form
    }

    pub fn selected_kind(&self) -> BlockKind {
        BlockKind::ALL[self.kind]
    }

    pub fn next_field(&mut self) {
        self.current_field = cycle(self.current_field, BLOCK_FIELD_COUNT, true);
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = cycle(self.current_field, BLOCK_FIELD_COUNT, false);
        self.update_active_field();
    }

    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == BLOCK_TITLE_ORDER;
        self.minutes.active = self.current_field == BLOCK_MINUTES_ORDER;
    }

    pub fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            BLOCK_TITLE_ORDER => Some(&mut self.title),
            BLOCK_MINUTES_ORDER => Some(&mut self.minutes),
            _ => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            field.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_delete();
        }
    }

    pub fn handle_left_right(&mut self, right: bool) {
        if self.current_field == BLOCK_KIND_ORDER {
            self.kind = cycle(self.kind, BlockKind::ALL.len(), right);
        } else if let Some(field) = self.active_input() {
            move_cursor(field, right);
        }
    }

    /// Validate the form and build a time block.
    pub fn submit(&self) -> Result<TimeBlock, PlanError> {
        submit_block(&self.title.value, &self.minutes.value, self.selected_kind())
    }
}

impl Default for BlockForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Wins / stuck / next notes. The text outlives the editor and a new day;
/// only the save acknowledgment is reset.
#[derive(Debug)]
pub struct ReflectionForm {
    pub wins: InputField,
    pub stuck: InputField,
    pub next: InputField,
    pub current_field: usize,
}

impl ReflectionForm {
    pub fn new() -> Self {
        let mut form = Self {
            wins: InputField::new(),
            stuck: InputField::new(),
            next: InputField::new(),
            current_field: WINS_ORDER,
        };
        form.update_active_field();
        form
    }

    pub fn next_field(&mut self) {
        self.current_field = cycle(self.current_field, REFLECTION_FIELD_COUNT, true);
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = cycle(self.current_field, REFLECTION_FIELD_COUNT, false);
        self.update_active_field();
    }

    pub fn update_active_field(&mut self) {
        self.wins.active = self.current_field == WINS_ORDER;
        self.stuck.active = self.current_field == STUCK_ORDER;
        self.next.active = self.current_field == NEXT_ORDER;
    }

    pub fn active_input(&mut self) -> &mut InputField {
        match self.current_field {
            WINS_ORDER => &mut self.wins,
            STUCK_ORDER => &mut self.stuck,
            _ => &mut self.next,
        }
    }

    /// Current notes as a reflection value.
    pub fn reflection(&self) -> Reflection {
        Reflection::new(
            self.wins.value.as_str(),
            self.stuck.value.as_str(),
            self.next.value.as_str(),
        )
    }
}

impl Default for ReflectionForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.handle_char(c);
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(3, 4, true), 0);
        assert_eq!(cycle(0, 4, false), 3);
        assert_eq!(cycle(1, 4, false), 0);
    }

    #[test]
    fn test_task_form_tab_order_and_selectors() {
        let mut form = TaskForm::new();
        assert!(form.title.active);

        form.next_field();
        assert!(form.minutes.active && !form.title.active);

        form.next_field();
        assert_eq!(form.current_field, TASK_ENERGY_ORDER);
        form.handle_left_right(true);
        assert_eq!(form.selected_energy(), Energy::Medium);
        form.handle_left_right(false);
        form.handle_left_right(false);
        assert_eq!(form.selected_energy(), Energy::Low);

        form.next_field();
        form.handle_left_right(true);
        assert_eq!(form.selected_priority(), Priority::new("2"));

        // Typing on a selector is ignored.
        form.handle_char('x');
        assert!(form.title.value.is_empty() && form.minutes.value.is_empty());

        form.next_field();
        assert_eq!(form.current_field, TASK_TITLE_ORDER);
    }

    #[test]
    fn test_task_form_submit() {
        let mut form = TaskForm::new();
        type_into(&mut form.title, " Review PRs ");
        type_into(&mut form.minutes, "40");
        form.energy = 1;
        form.priority = 2;

        let task = form.submit().unwrap();
        assert_eq!(task.title, "Review PRs");
        assert_eq!(task.minutes, 40);
        assert_eq!(task.energy, Energy::Medium);
        assert_eq!(task.priority, Priority::new("3"));
    }

    #[test]
    fn test_task_form_rejects_bad_minutes() {
        let mut form = TaskForm::new();
        type_into(&mut form.title, "Review PRs");
        type_into(&mut form.minutes, "forty");
        assert!(matches!(form.submit(), Err(PlanError::InvalidMinutes { .. })));
    }

    #[test]
    fn test_block_form_submit() {
        let mut form = BlockForm::new();
        form.handle_char('S');
        form.handle_char('y');
        form.handle_char('n');
        form.handle_char('c');
        form.next_field();
        form.handle_char('3');
        form.handle_char('0');
        form.next_field();
        form.handle_left_right(true);

        let block = form.submit().unwrap();
        assert_eq!(block, TimeBlock::new("Sync", 30, BlockKind::Meeting));
    }

    #[test]
    fn test_reflection_form() {
        let mut form = ReflectionForm::new();
        assert!(form.reflection().is_blank());
        form.next_field();
        type_into(form.active_input(), "Waiting on review");
        assert!(form.stuck.active);
        assert_eq!(form.reflection().stuck, "Waiting on review");
        assert!(!form.reflection().is_blank());
    }
}

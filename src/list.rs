//! The in-memory task collection.
//!
//! `TaskList` owns every task on the screen and is the only place tasks are
//! mutated. Operations never fail: a blank title or an unknown id is simply
//! ignored.

use tracing::debug;

use crate::fields::IdStrategy;
use crate::task::Task;

/// Ordered, in-memory collection of tasks.
#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    id_strategy: IdStrategy,
    added: u64,
}

impl TaskList {
    /// Create an empty list using the given id strategy.
    pub fn new(id_strategy: IdStrategy) -> Self {
        TaskList {
            tasks: Vec::new(),
            id_strategy,
            added: 0,
        }
    }

    /// Id the next added task will receive.
    pub fn next_id(&self) -> u64 {
        match self.id_strategy {
            IdStrategy::Length => self.tasks.len() as u64 + 1,
            IdStrategy::Monotonic => self.added + 1,
        }
    }

    /// Append a new due task. Returns its id, or `None` when the title is blank.
    ///
    /// The title is stored as entered; trimming only decides acceptance.
    pub fn add(&mut self, title: &str) -> Option<u64> {
        if title.trim().is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, title));
        self.added += 1;
        debug!(id, title, "task added");
        Some(id)
    }

    /// Flip the status of every task with this id.
    pub fn toggle_status(&mut self, id: u64) {
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.status = !task.status;
            debug!(id, done = task.status, "task toggled");
        }
    }

    /// Remove every task with this id, keeping the rest in order.
    pub fn delete(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!(id, removed = before - self.tasks.len(), "task deleted");
        }
    }

    /// Replace the title of every task with this id. No validation is applied.
    pub fn rename(&mut self, id: u64, title: &str) {
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.title = title.to_string();
            debug!(id, title, "task renamed");
        }
    }

    /// Get the first task with this id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks currently marked done.
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tasks() -> TaskList {
        let mut list = TaskList::default();
        list.add("Buy milk");
        list.add("Walk dog");
        list
    }

    #[test]
    fn test_add_appends_due_task() {
        let mut list = TaskList::default();
        assert_eq!(list.add("  Buy milk "), Some(1));
        assert_eq!(list.len(), 1);
        let task = &list.tasks()[0];
        assert_eq!(task.title, "  Buy milk ");
        assert!(!task.status);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut list = two_tasks();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_scenario() {
        let list = two_tasks();
        assert_eq!(
            list.tasks(),
            &[
                Task { id: 1, title: "Buy milk".to_string(), status: false },
                Task { id: 2, title: "Walk dog".to_string(), status: false },
            ]
        );
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = two_tasks();
        list.toggle_status(1);
        assert!(list.get(1).unwrap().status);
        assert!(!list.get(2).unwrap().status);

        list.toggle_status(1);
        assert!(!list.get(1).unwrap().status);
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].id, 1);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = two_tasks();
        let before = list.tasks().to_vec();
        list.toggle_status(42);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_keeps_order_and_ids() {
        let mut list = two_tasks();
        list.add("Call mum");
        list.delete(2);
        let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let mut list = two_tasks();
        list.delete(1);
        assert_eq!(
            list.tasks(),
            &[Task { id: 2, title: "Walk dog".to_string(), status: false }]
        );
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = two_tasks();
        list.delete(9);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_length_ids_can_repeat_after_delete() {
        let mut list = two_tasks();
        list.delete(1);
        // Length is 1 again, so the next id collides with the surviving task.
        assert_eq!(list.add("Feed cat"), Some(2));
        assert_eq!(list.iter().filter(|t| t.id == 2).count(), 2);

        // Both rows sharing the id respond to toggle.
        list.toggle_status(2);
        assert_eq!(list.done_count(), 2);
    }

    #[test]
    fn test_monotonic_ids_are_never_reused() {
        let mut list = TaskList::new(IdStrategy::Monotonic);
        list.add("a");
        list.add("b");
        list.delete(1);
        list.delete(2);
        assert_eq!(list.add("c"), Some(3));
    }

    #[test]
    fn test_rename_allows_empty_title() {
        let mut list = two_tasks();
        list.rename(2, "");
        assert_eq!(list.get(2).unwrap().title, "");
        list.rename(7, "ghost");
        assert_eq!(list.len(), 2);
    }
}

use crate::error::{Result, TodoError};
use crate::models::{Task, TaskId, TaskInput};
use crate::persistence::Persistence;
use crate::rank;
use crate::storage::Storage;
use chrono::NaiveDate;
use tracing::{debug, info};

/// The task collection plus the id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TodoState {
    fn default() -> Self {
        TodoState {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoState {
    /// Rebuild a state from stored parts. The counter is raised past the
    /// highest id present so ids never collide. `None` when that counter
    /// would overflow.
    pub fn from_parts(tasks: Vec<Task>, next_id: TaskId) -> Option<Self> {
        let floor = tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)?;
        Some(TodoState {
            tasks,
            next_id: next_id.max(floor),
        })
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks ordered for display, most urgent first
    pub fn ranked(&self, today: NaiveDate) -> Vec<&Task> {
        rank::rank(&self.tasks, today)
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::TaskNotFound(id))
    }
}

/// A mutation requested by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(TaskInput),
    Remove { id: TaskId },
    Clear,
    ToggleCompleted { id: TaskId },
    Edit { id: TaskId, input: TaskInput },
}

/// What a committed command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Added(Task),
    Removed(Task),
    Cleared { count: usize },
    Toggled(Task),
    Edited(Task),
}

impl Event {
    /// Transient notification text, if this event shows one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Event::Added(_) => Some("Task added successfully"),
            Event::Removed(_) => Some("Task deleted successfully"),
            Event::Cleared { .. } => Some("All tasks have been cleared"),
            Event::Toggled(_) | Event::Edited(_) => None,
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: TodoState,
    pub event: Event,
}

/// Apply `command` to `state`, producing the next state. `state` is left
/// untouched; a command naming a missing id fails with `TaskNotFound`.
pub fn reduce(state: &TodoState, command: Command) -> Result<Transition> {
    let mut next = state.clone();

    let event = match command {
        Command::Add(input) => {
            let following = next.next_id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
            let task = Task {
                id: next.next_id,
                task: input.task,
                due_date: input.due_date,
                priority: input.priority,
                completed: false,
            };
            next.next_id = following;
            next.tasks.push(task.clone());
            Event::Added(task)
        }
        Command::Remove { id } => {
            let index = next.position(id)?;
            Event::Removed(next.tasks.remove(index))
        }
        Command::Clear => {
            let count = next.tasks.len();
            next.tasks.clear();
            Event::Cleared { count }
        }
        Command::ToggleCompleted { id } => {
            let index = next.position(id)?;
            let task = &mut next.tasks[index];
            task.completed = !task.completed;
            Event::Toggled(task.clone())
        }
        Command::Edit { id, input } => {
            let index = next.position(id)?;
            let task = &mut next.tasks[index];
            task.task = input.task;
            task.due_date = input.due_date;
            task.priority = input.priority;
            Event::Edited(task.clone())
        }
    };

    Ok(Transition { state: next, event })
}

type Subscriber = Box<dyn Fn(&TodoState, &Event)>;

/// Owns the state, writes it through on every change and notifies views
pub struct TodoStore<S: Storage> {
    state: TodoState,
    persistence: Persistence<S>,
    subscribers: Vec<Subscriber>,
}

impl<S: Storage> TodoStore<S> {
    /// Load the saved state once and take ownership of it
    pub fn open(persistence: Persistence<S>) -> Self {
        let state = persistence.load();
        info!(tasks = state.len(), "task store opened");
        TodoStore {
            state,
            persistence,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.state.get(id)
    }

    pub fn ranked(&self, today: NaiveDate) -> Vec<&Task> {
        self.state.ranked(today)
    }

    /// Register a view. Called after each committed mutation.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&TodoState, &Event) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Reduce, persist, commit, then notify
    pub fn dispatch(&mut self, command: Command) -> Result<Event> {
        debug!(?command, "dispatching");
        let Transition { state, event } = reduce(&self.state, command)?;

        self.persistence.save(&state)?;
        self.state = state;

        for subscriber in &self.subscribers {
            subscriber(&self.state, &event);
        }
        Ok(event)
    }

    pub fn add(&mut self, input: TaskInput) -> Result<TaskId> {
        match self.dispatch(Command::Add(input))? {
            Event::Added(task) => Ok(task.id),
            _ => unreachable!("add always yields Added"),
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        match self.dispatch(Command::Remove { id })? {
            Event::Removed(task) => Ok(task),
            _ => unreachable!("remove always yields Removed"),
        }
    }

    /// Returns how many tasks were dropped
    pub fn clear(&mut self) -> Result<usize> {
        match self.dispatch(Command::Clear)? {
            Event::Cleared { count } => Ok(count),
            _ => unreachable!("clear always yields Cleared"),
        }
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Result<Task> {
        match self.dispatch(Command::ToggleCompleted { id })? {
            Event::Toggled(task) => Ok(task),
            _ => unreachable!("toggle always yields Toggled"),
        }
    }

    /// Update text, due date and priority. Id and completion are kept.
    pub fn edit(&mut self, id: TaskId, input: TaskInput) -> Result<Task> {
        match self.dispatch(Command::Edit { id, input })? {
            Event::Edited(task) => Ok(task),
            _ => unreachable!("edit always yields Edited"),
        }
    }
}

use crate::cli::{Commands, TaskFields};
use crate::config::Config;
use crate::core::{Command, Event, TodoStore};
use crate::error::TodoError;
use crate::models::TaskInput;
use crate::persistence::Persistence;
use crate::render;
use crate::storage::{SqliteStorage, Storage};
use chrono::{Local, NaiveDate};

/// Open the task store configured for this run
pub fn open_store(config: &Config) -> Result<TodoStore<SqliteStorage>, TodoError> {
    let storage = SqliteStorage::open(&config.db_path)?;
    Ok(TodoStore::open(Persistence::new(storage)))
}

impl From<TaskFields> for TaskInput {
    fn from(fields: TaskFields) -> Self {
        TaskInput {
            task: fields.task,
            due_date: fields.due,
            priority: fields.priority,
        }
    }
}

/// Handle the add command
pub fn handle_add<S: Storage>(
    store: &mut TodoStore<S>,
    fields: TaskFields,
) -> Result<Event, TodoError> {
    let event = store.dispatch(Command::Add(fields.into()))?;
    if let Event::Added(task) = &event {
        println!("Created task #{}: {}", task.id, task.task);
    }
    Ok(event)
}

/// Handle the edit command
pub fn handle_edit<S: Storage>(
    store: &mut TodoStore<S>,
    id: i64,
    fields: TaskFields,
) -> Result<Event, TodoError> {
    let task = store.edit(id, fields.into())?;
    println!("Updated task #{}: {}", task.id, task.task);
    Ok(Event::Edited(task))
}

/// Handle the delete command
pub fn handle_delete<S: Storage>(store: &mut TodoStore<S>, id: i64) -> Result<Event, TodoError> {
    let task = store.remove(id)?;
    println!("Deleted task #{}: {}", task.id, task.task);
    Ok(Event::Removed(task))
}

/// Handle the toggle command
pub fn handle_toggle<S: Storage>(store: &mut TodoStore<S>, id: i64) -> Result<Event, TodoError> {
    let task = store.toggle_completed(id)?;
    println!("Task #{} is now {}", task.id, task.status_label());
    Ok(Event::Toggled(task))
}

/// Handle the clear command
pub fn handle_clear<S: Storage>(store: &mut TodoStore<S>) -> Result<Event, TodoError> {
    let count = store.clear()?;
    println!("Removed {count} task(s)");
    Ok(Event::Cleared { count })
}

/// Handle the list command
pub fn handle_list<S: Storage>(
    store: &TodoStore<S>,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<(), TodoError> {
    let today = today.unwrap_or_else(today_local);
    let ranked = store.ranked(today);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{}", render::table(&ranked));
    }

    Ok(())
}

/// The local calendar date used for ranking
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Run one subcommand against an open store. `Shell` is started by the
/// caller and rejected here.
pub fn handle_command<S: Storage>(
    store: &mut TodoStore<S>,
    command: Commands,
) -> Result<Option<Event>, TodoError> {
    match command {
        Commands::Add(fields) => handle_add(store, fields).map(Some),
        Commands::Edit { id, fields } => handle_edit(store, id, fields).map(Some),
        Commands::Delete { id } => handle_delete(store, id).map(Some),
        Commands::Toggle { id } => handle_toggle(store, id).map(Some),
        Commands::Clear => handle_clear(store).map(Some),
        Commands::List { today, json } => handle_list(store, today, json).map(|()| None),
        Commands::Shell => {
            println!("Already in the shell");
            Ok(None)
        }
    }
}

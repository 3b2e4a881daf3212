use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{parse_date, Priority, Status, DATE_FORMAT},
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: i64,
}

/// Edits a task by full replacement: every field is prompted with the
/// current value as default.
///
/// Edit-time parsing is deliberately lenient: unrecognized priority or
/// status text keeps the previous value instead of aborting the edit.
pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let Some(mut task) = tasks.get_by_id(args.id)? else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };
    let original = task.clone();

    msg_print!(Message::EditingTask(args.id), true);

    task.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTitle.to_string())
        .default(task.title.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::EmptyTitle.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    task.description = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let due_text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .default(task.due_date.format(DATE_FORMAT).to_string())
        .interact_text()?;
    match parse_date(&due_text) {
        Ok(date) => task.due_date = date,
        Err(_) => msg_warning!(Message::InvalidDateKept(due_text, task.due_date.format(DATE_FORMAT).to_string())),
    }

    let priority_text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPriority.to_string())
        .default(task.priority.to_string())
        .interact_text()?;
    match priority_text.parse::<Priority>() {
        Ok(priority) => task.priority = priority,
        Err(_) => msg_warning!(Message::InvalidPriorityKept(priority_text, task.priority.to_string())),
    }

    let status_text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStatus.to_string())
        .default(task.status.to_string())
        .interact_text()?;
    match status_text.parse::<Status>() {
        Ok(status) => task.status = status,
        Err(_) => msg_warning!(Message::InvalidStatusKept(status_text, task.status.to_string())),
    }

    let category_text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategory.to_string())
        .default(task.category.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    task.category = if category_text.trim().is_empty() { None } else { Some(category_text) };

    if task == original {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if tasks.update(&task)? {
        msg_success!(Message::TaskUpdated(args.id));
    } else {
        msg_error!(Message::TaskNotFound(args.id));
    }
    Ok(())
}

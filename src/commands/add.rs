use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{parse_date, Priority, Status, Task},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(short, long)]
    title: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(short = 'u', long)]
    due: Option<String>,
    /// Priority: LOW, MEDIUM or HIGH
    #[arg(short, long)]
    priority: Option<String>,
    /// Status: TODO, IN_PROGRESS or COMPLETED
    #[arg(short, long)]
    status: Option<String>,
    /// Optional category label
    #[arg(short, long)]
    category: Option<String>,
}

/// Creates a task. Fields not given as flags are prompted interactively;
/// invalid flag text aborts the command before anything is persisted.
pub fn cmd(args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTitle.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::EmptyTitle.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let due_date = match args.due {
        Some(due) => parse_date(&due)?,
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDueDate.to_string())
                .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
                .interact_text()?;
            parse_date(&text)?
        }
    };

    let priority = match args.priority {
        Some(priority) => priority.parse()?,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPriority.to_string())
                .items(&Priority::ALL)
                .default(1)
                .interact()?;
            Priority::ALL[selection]
        }
    };

    let status = match args.status {
        Some(status) => status.parse()?,
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStatus.to_string())
                .items(&Status::ALL)
                .default(0)
                .interact()?;
            Status::ALL[selection]
        }
    };

    let category = args.category.filter(|c| !c.trim().is_empty());

    let task = Task::new(&title, &description, due_date, priority, status, category)?;
    let id = Tasks::new()?.create(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}

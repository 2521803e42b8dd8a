//! Interactive menu loop.
//!
//! The shell owns no task state: it is handed a `SharedTaskStore` and only
//! translates between console lines and store operations.

use std::str::FromStr;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use taskdesk_core::domain::parse_due_date;
use taskdesk_core::{ErrorKind, Priority, SharedTaskStore, ValidationError};

use crate::config::ShellConfig;
use crate::render::{task_block, task_line};

const MENU: &str = "\nMenu:\n\
1. Add new task\n\
2. Mark task as complete\n\
3. View all tasks\n\
4. View most urgent task\n\
5. View completed tasks\n\
6. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Complete,
    ListAll,
    MostUrgent,
    ListCompleted,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Complete),
            "3" => Ok(MenuChoice::ListAll),
            "4" => Ok(MenuChoice::MostUrgent),
            "5" => Ok(MenuChoice::ListCompleted),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

fn priority_prompt() -> String {
    format!(
        "Enter priority ({} = {}, {} = {}): ",
        Priority::High,
        Priority::High.label(),
        Priority::Low,
        Priority::Low.label()
    )
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    store: SharedTaskStore,
    config: ShellConfig,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, store: SharedTaskStore, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            store,
            config,
        }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run(&mut self) -> Result<()> {
        info!("shell started");
        if self.config.banner {
            self.say("\nWelcome to the Office Task Manager!").await?;
        }

        loop {
            self.output.write_all(MENU.as_bytes()).await?;
            let Some(line) = self.prompt("Enter your choice (1-6): ").await? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice).await?
                }
                Err(()) => {
                    self.say("Invalid choice. Please select a number from 1 to 6.")
                        .await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush().await?;
        let counts = self.store.counts().await;
        info!(?counts, "shell finished");
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_task().await,
            MenuChoice::Complete => self.complete_task().await,
            MenuChoice::ListAll => self.show_all().await,
            MenuChoice::MostUrgent => self.show_most_urgent().await,
            MenuChoice::ListCompleted => self.show_completed().await,
            MenuChoice::Exit => {
                self.say("Exiting Task Manager. Goodbye!").await?;
                Ok(Flow::Exit)
            }
        }
    }

    async fn add_task(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter task title: ").await? else {
            return Ok(Flow::Exit);
        };
        if title.is_empty() {
            self.report(&ValidationError::EmptyTitle).await?;
            return Ok(Flow::Continue);
        }

        let Some(due_date_text) = self
            .prompt("Enter due date (e.g., 2025-04-17 or 4/17/25): ")
            .await?
        else {
            return Ok(Flow::Exit);
        };
        // Check the date before asking for priority.
        if let Err(err) = parse_due_date(&due_date_text) {
            self.report(&err).await?;
            return Ok(Flow::Continue);
        }

        let Some(priority_text) = self.prompt(&priority_prompt()).await? else {
            return Ok(Flow::Exit);
        };
        let Ok(priority) = priority_text.parse::<i64>() else {
            self.say(&format!(
                "Error: invalid priority {priority_text:?}, expected 1, 2 or 3"
            ))
            .await?;
            return Ok(Flow::Continue);
        };

        match self
            .store
            .create_task(&title, &due_date_text, priority)
            .await
        {
            Ok(id) => {
                self.say(&format!("\nTask '{title}' added successfully with ID {id}."))
                    .await?
            }
            Err(err) => self.report(&err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn complete_task(&mut self) -> Result<Flow> {
        let Some(id) = self
            .prompt("Enter Task ID to mark complete (e.g., T1): ")
            .await?
        else {
            return Ok(Flow::Exit);
        };

        match self.store.complete_task(&id).await {
            Ok(done) => {
                self.say(&format!("\nTask '{}' marked complete.", done.title))
                    .await?
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => self.say("\nWarning: Task ID not found.").await?,
                ErrorKind::Validation => self.report(&err).await?,
            },
        }
        Ok(Flow::Continue)
    }

    async fn show_all(&mut self) -> Result<Flow> {
        let views = self.store.list_all_tasks().await;
        if views.is_empty() {
            self.say("\nNo tasks available.").await?;
        } else {
            let block = task_block(&views, self.config.output)?;
            self.say(&format!("\nAll Tasks:\n{}", block.trim_end()))
                .await?;
        }
        Ok(Flow::Continue)
    }

    async fn show_most_urgent(&mut self) -> Result<Flow> {
        match self.store.most_urgent_task().await {
            Some(view) => {
                let line = task_line(&view, self.config.output)?;
                self.say(&format!("\nMost Urgent Task:\n{line}")).await?;
            }
            None => self.say("No tasks available.").await?,
        }
        Ok(Flow::Continue)
    }

    async fn show_completed(&mut self) -> Result<Flow> {
        let views = self.store.list_completed_tasks().await;
        if views.is_empty() {
            self.say("\nNo tasks have been completed yet.").await?;
        } else {
            let block = task_block(&views, self.config.output)?;
            self.say(&format!(
                "\nCompleted Tasks (in order):\n{}",
                block.trim_end()
            ))
            .await?;
        }
        Ok(Flow::Continue)
    }

    /// Print `text` without a newline, then read one trimmed line.
    /// `None` means input is exhausted.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }

    async fn report(&mut self, err: &dyn std::error::Error) -> Result<()> {
        self.say(&format!("Error: {err}")).await
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::args::SuggestionKind;
use crate::output;
use chrono::{Duration, Utc};
use larder_application::{
    Assistant, AssistantState, InventoryService, PlannerService, SuggestionService,
};
use larder_domain::UserProfile;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl {
    assistant: Assistant,
    suggestions: SuggestionService,
    inventory: Arc<dyn InventoryService>,
    planner: Arc<dyn PlannerService>,
    profile: UserProfile,
    /// Transcript messages already echoed to the terminal.
    printed: usize,
}

impl ChatRepl {
    pub fn new(
        assistant: Assistant,
        suggestions: SuggestionService,
        inventory: Arc<dyn InventoryService>,
        planner: Arc<dyn PlannerService>,
        profile: UserProfile,
    ) -> Self {
        Self {
            assistant,
            suggestions,
            inventory,
            planner,
            profile,
            printed: 0,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("larder").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Larder - Chat Mode               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask about your pantry, or tell me what to do.");
        println!();
        println!("Commands:");
        println!("  /confirm                 - Run the pending action");
        println!("  /cancel                  - Discard the pending action");
        println!("  /suggest meals|plan|grocery");
        println!("  /clear                   - Start a fresh conversation");
        println!("  /help                    - Show this help");
        println!("  /quit                    - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let head = parts.next().unwrap_or(cmd);
        match head {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
                false
            }
            "/confirm" | "/y" => {
                match self.assistant.confirm_pending().await {
                    Ok(()) => self.print_new_messages(),
                    Err(e) => println!("{e}"),
                }
                false
            }
            "/cancel" | "/n" => {
                match self.assistant.cancel_pending() {
                    Ok(()) => self.print_new_messages(),
                    Err(e) => println!("{e}"),
                }
                false
            }
            "/suggest" => {
                let kind = match parts.next() {
                    Some("meals") => SuggestionKind::Meals,
                    Some("plan") => SuggestionKind::Plan,
                    Some("grocery") => SuggestionKind::Grocery,
                    _ => {
                        println!("Usage: /suggest meals|plan|grocery");
                        return false;
                    }
                };
                match self.run_suggestion(kind).await {
                    Ok(text) => println!("\n{text}\n"),
                    Err(e) => eprintln!("Error: {e}"),
                }
                false
            }
            "/clear" => {
                self.assistant.clear_conversation();
                self.printed = 0;
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, text: &str) {
        // The user's own line is already on screen; skip echoing it back.
        self.printed = self.assistant.transcript().len() + 1;

        if let Err(e) = self.assistant.send_message(text).await {
            println!("{e}");
            return;
        }
        self.print_new_messages();

        if self.assistant.state() == AssistantState::WaitingForConfirmation {
            println!("(reply /confirm to proceed or /cancel to discard)");
        }
    }

    fn print_new_messages(&mut self) {
        let transcript = self.assistant.transcript();
        for message in &transcript[self.printed.min(transcript.len())..] {
            println!("{}", output::format_message(message));
        }
        self.printed = transcript.len();
    }

    /// Single-message mode: one turn, confirming on stdin if the
    /// assistant asks before acting.
    pub async fn send_once(&mut self, text: &str) -> anyhow::Result<()> {
        self.printed = self.assistant.transcript().len() + 1;

        if let Err(e) = self.assistant.send_message(text).await {
            anyhow::bail!("{e}");
        }
        self.print_new_messages();

        if self.assistant.state() == AssistantState::WaitingForConfirmation {
            if crate::prompt_confirmation()? {
                if let Err(e) = self.assistant.confirm_pending().await {
                    println!("{e}");
                }
            } else if let Err(e) = self.assistant.cancel_pending() {
                println!("{e}");
            }
            self.print_new_messages();
        }
        Ok(())
    }

    pub async fn run_suggestion(&self, kind: SuggestionKind) -> anyhow::Result<String> {
        let today = Utc::now().date_naive();
        match kind {
            SuggestionKind::Meals => {
                let inventory = self.inventory.fetch_all_items().await?;
                let meals = self.suggestions.suggest_meals(&inventory, &self.profile).await?;
                Ok(output::format_meal_suggestions(&meals))
            }
            SuggestionKind::Plan => {
                let plan = self
                    .suggestions
                    .generate_weekly_plan(today, &self.profile, 3)
                    .await?;
                Ok(output::format_weekly_plan(&plan))
            }
            SuggestionKind::Grocery => {
                let planned = self
                    .planner
                    .fetch_planned_meals(today, today + Duration::days(6))
                    .await?;
                let inventory = self.inventory.fetch_all_items().await?;
                let low_stock = self.inventory.fetch_low_stock_items().await?;
                let items = self
                    .suggestions
                    .suggest_grocery_items(&planned, &inventory, &low_stock)
                    .await?;
                Ok(output::format_grocery_suggestions(&items))
            }
        }
    }
}

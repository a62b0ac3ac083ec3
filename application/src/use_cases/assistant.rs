//! Assistant orchestrator: the conversational tool-call state machine.
//!
//! One instance per conversation. A turn moves
//! `idle → thinking → {executing_tool | waiting_for_confirmation} → idle`;
//! new user input is accepted only while idle. Every failure path ends in
//! a user-visible transcript message and the state machine back at idle.

use crate::guard::{GuardError, StructuredOutputGuard};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::tools::context::ToolExecutionContext;
use crate::tools::registry::ToolRegistry;
use chrono::{Duration, Utc};
use larder_domain::prompt::assistant::{
    ENVELOPE_SCHEMA, context_prompt, system_instruction, tool_result_prompt,
};
use larder_domain::tool::{ToolArgs, ToolName};
use larder_domain::{AssistantEnvelope, ChatMessage, PendingToolCall, ToolCallRequest, ToolResult};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

/// Where the conversation currently is. Exposed so callers can render
/// spinners and gate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantState {
    Idle,
    Thinking,
    ExecutingTool,
    WaitingForConfirmation,
}

/// Errors returned to the caller instead of being absorbed into the
/// transcript: misuse of the turn protocol, not turn failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssistantError {
    #[error("A turn is already in progress")]
    Busy,

    #[error("No tool call is awaiting confirmation")]
    NothingPending,
}

const TRANSPORT_FAILURE_MESSAGE: &str =
    "I couldn't reach the assistant service. Please check your connection and try again.";
const DECODE_FAILURE_MESSAGE: &str =
    "I had trouble understanding the assistant's response. Please try rephrasing your request.";
const CANCELLED_MESSAGE: &str = "Okay, I've cancelled that action.";

pub struct Assistant {
    guard: StructuredOutputGuard,
    registry: ToolRegistry,
    ctx: ToolExecutionContext,
    logger: Arc<dyn ConversationLogger>,
    state: AssistantState,
    transcript: Vec<ChatMessage>,
    pending: Option<PendingToolCall>,
}

impl Assistant {
    pub fn new(
        guard: StructuredOutputGuard,
        registry: ToolRegistry,
        ctx: ToolExecutionContext,
        logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            guard,
            registry,
            ctx,
            logger,
            state: AssistantState::Idle,
            transcript: Vec::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> AssistantState {
        self.state
    }

    /// Append-only conversation transcript.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The validated tool call awaiting user confirmation, if any.
    pub fn pending_call(&self) -> Option<&PendingToolCall> {
        self.pending.as_ref()
    }

    pub fn clear_conversation(&mut self) {
        self.transcript.clear();
        self.pending = None;
        self.state = AssistantState::Idle;
    }

    /// Run one conversational turn. Refused while a previous turn is in
    /// flight or a confirmation is outstanding.
    pub async fn send_message(&mut self, text: &str) -> Result<(), AssistantError> {
        if self.state != AssistantState::Idle {
            return Err(AssistantError::Busy);
        }
        self.state = AssistantState::Thinking;
        self.append(ChatMessage::user(text));
        self.logger.log(ConversationEvent::new(
            "user_message",
            json!({ "content": text }),
        ));

        let prompt = match self.build_context_prompt(text).await {
            Ok(prompt) => prompt,
            Err(message) => {
                tracing::warn!(%message, "failed to build context prompt");
                return Ok(self.finish_with(message));
            }
        };

        let envelope = self
            .guard
            .fetch_structured::<AssistantEnvelope>(
                ENVELOPE_SCHEMA,
                &prompt,
                Some(&system_instruction()),
            )
            .await;

        match envelope {
            Ok(AssistantEnvelope::Message { content }) => {
                self.logger.log(ConversationEvent::new(
                    "assistant_message",
                    json!({ "content": content }),
                ));
                Ok(self.finish_with(content))
            }
            Ok(AssistantEnvelope::ToolCall(call)) => {
                self.handle_tool_call(call).await;
                Ok(())
            }
            Err(error) => Ok(self.fail_turn(error)),
        }
    }

    /// Execute the pending tool call after user confirmation.
    pub async fn confirm_pending(&mut self) -> Result<(), AssistantError> {
        if self.state != AssistantState::WaitingForConfirmation {
            return Err(AssistantError::NothingPending);
        }
        let pending = self.pending.take().ok_or(AssistantError::NothingPending)?;
        self.logger.log(ConversationEvent::new(
            "tool_confirmed",
            json!({ "requestId": pending.request_id, "tool": pending.tool.as_str() }),
        ));
        self.execute_tool(pending.tool, pending.args, pending.request_id)
            .await;
        Ok(())
    }

    /// Discard the pending tool call. Never executes it.
    pub fn cancel_pending(&mut self) -> Result<(), AssistantError> {
        if self.state != AssistantState::WaitingForConfirmation {
            return Err(AssistantError::NothingPending);
        }
        if let Some(pending) = self.pending.take() {
            self.logger.log(ConversationEvent::new(
                "tool_cancelled",
                json!({ "requestId": pending.request_id, "tool": pending.tool.as_str() }),
            ));
        }
        self.finish_with(CANCELLED_MESSAGE.to_string());
        Ok(())
    }

    async fn handle_tool_call(&mut self, call: ToolCallRequest) {
        let tool = match self.registry.validate(&call.tool, &call.args) {
            Ok(tool) => tool,
            Err(error) => {
                tracing::info!(%error, tool = %call.tool, "tool call rejected by validation");
                self.logger.log(ConversationEvent::new(
                    "tool_rejected",
                    json!({ "tool": call.tool, "error": error.to_string() }),
                ));
                // Discarded, not retried: explain and return to idle.
                self.finish_with(format!("I can't do that: {error}"));
                return;
            }
        };

        if call.confirmation_required {
            let message = call
                .confirmation_message
                .clone()
                .unwrap_or_else(|| format!("Do you want me to run {tool}?"));
            self.pending = Some(PendingToolCall {
                request_id: call.request_id,
                tool,
                args: call.args,
                confirmation_message: call.confirmation_message,
            });
            self.append(ChatMessage::assistant(message));
            self.state = AssistantState::WaitingForConfirmation;
            return;
        }

        self.execute_tool(tool, call.args, call.request_id).await;
    }

    async fn execute_tool(&mut self, tool: ToolName, args: ToolArgs, request_id: String) {
        self.state = AssistantState::ExecutingTool;

        // Failures past this point are captured into the result, never thrown.
        let result = match self.registry.execute(tool.as_str(), &args, &self.ctx).await {
            Ok(payload) => ToolResult::success(request_id, tool, payload),
            Err(error) => {
                tracing::info!(%error, tool = %tool, "tool execution failed");
                ToolResult::failure(request_id, tool, error.to_string())
            }
        };
        self.logger.log(ConversationEvent::new(
            "tool_executed",
            serde_json::to_value(&result).unwrap_or_default(),
        ));

        let content = self.explain_result(&result).await;
        self.finish_with(content);
    }

    /// Second guard pass: ask the model to narrate the tool result, with a
    /// generic fallback when that call itself fails.
    async fn explain_result(&self, result: &ToolResult) -> String {
        let prompt = tool_result_prompt(result);
        let reply = self
            .guard
            .fetch_structured::<AssistantEnvelope>(
                ENVELOPE_SCHEMA,
                &prompt,
                Some(&system_instruction()),
            )
            .await;

        match reply {
            Ok(AssistantEnvelope::Message { content }) => content,
            Ok(AssistantEnvelope::ToolCall(_)) | Err(_) => {
                if result.success {
                    format!("Done, the {} action completed successfully.", result.tool)
                } else {
                    format!(
                        "The {} action failed: {}",
                        result.tool,
                        result.error.as_deref().unwrap_or("unknown error")
                    )
                }
            }
        }
    }

    async fn build_context_prompt(&self, user_message: &str) -> Result<String, String> {
        let inventory = self
            .ctx
            .inventory
            .fetch_all_items()
            .await
            .map_err(|e| format!("I couldn't read your inventory right now: {e}"))?;
        let today = Utc::now().date_naive();
        let meals = self
            .ctx
            .planner
            .fetch_planned_meals(today, today + Duration::days(6))
            .await
            .map_err(|e| format!("I couldn't read your meal plan right now: {e}"))?;
        let grocery = self
            .ctx
            .grocery
            .fetch_active_list()
            .await
            .map_err(|e| format!("I couldn't read your grocery list right now: {e}"))?;

        Ok(context_prompt(
            self.ctx.profile.as_ref(),
            &inventory,
            &meals,
            grocery.as_ref(),
            user_message,
        ))
    }

    fn fail_turn(&mut self, error: GuardError) {
        let message = match &error {
            GuardError::Client(client_error) => {
                tracing::warn!(%client_error, "model transport failed");
                TRANSPORT_FAILURE_MESSAGE
            }
            GuardError::MalformedOutput { .. } => {
                tracing::warn!("model output stayed malformed after retry");
                DECODE_FAILURE_MESSAGE
            }
        };
        self.finish_with(message.to_string());
    }

    fn finish_with(&mut self, content: String) {
        self.append(ChatMessage::assistant(content));
        self.state = AssistantState::Idle;
    }

    fn append(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::dish_log_service::DishLogService;
    use crate::ports::grocery_service::GroceryService;
    use crate::ports::inventory_service::{InventoryService, NewInventoryItem};
    use crate::ports::model_client::{ModelClient, ModelClientError};
    use crate::ports::planner_service::PlannerService;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use larder_domain::{
        Dish, DomainError, GroceryList, IngredientDraft, InventoryItem, MealType, MessageRole,
        PlannedMeal, StorageLocation, ToolName,
    };
    use std::sync::{Arc, Mutex};

    struct ScriptedClient {
        responses: Mutex<Vec<Result<String, ModelClientError>>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String, ModelClientError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedClient {
        async fn generate_content(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<String, ModelClientError> {
            let mut responses = self.responses.lock().unwrap();
            assert!(!responses.is_empty(), "more model calls than scripted");
            responses.remove(0)
        }
    }

    struct MemInventory {
        items: Mutex<Vec<InventoryItem>>,
    }

    impl MemInventory {
        fn with_items(items: Vec<InventoryItem>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(items),
            })
        }
    }

    fn rice(quantity: f64) -> InventoryItem {
        InventoryItem {
            id: "rice-1".to_string(),
            name: "Rice".to_string(),
            category: "grains".to_string(),
            quantity,
            unit: "g".to_string(),
            location: StorageLocation::Pantry,
            purchase_date: Utc::now(),
            expiry_date: None,
            low_stock_threshold: 0.0,
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl InventoryService for MemInventory {
        async fn create_item(&self, new: NewInventoryItem) -> Result<InventoryItem, DomainError> {
            let created = InventoryItem {
                id: format!("item-{}", self.items.lock().unwrap().len() + 1),
                name: new.name,
                category: new.category,
                quantity: new.quantity,
                unit: new.unit,
                location: new.location,
                purchase_date: new.purchase_date,
                expiry_date: new.expiry_date,
                low_stock_threshold: new.low_stock_threshold,
                updated_at: Utc::now(),
            };
            self.items.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update_quantity(
            &self,
            item_id: &str,
            delta: f64,
        ) -> Result<InventoryItem, DomainError> {
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| i.id == item_id)
                .ok_or_else(|| DomainError::ItemNotFound(item_id.to_string()))?;
            item.quantity += delta;
            Ok(item.clone())
        }

        async fn consume_item(
            &self,
            _item_id: &str,
            _amount: f64,
            _unit: &str,
        ) -> Result<(), DomainError> {
            unimplemented!("not exercised here")
        }

        async fn fetch_all_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn delete_item(&self, _item_id: &str) -> Result<(), DomainError> {
            unimplemented!("not exercised here")
        }

        async fn fetch_low_stock_items(&self) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(Vec::new())
        }

        async fn fetch_expiring_soon_items(
            &self,
            _days_ahead: u32,
        ) -> Result<Vec<InventoryItem>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct MemPlanner;

    #[async_trait]
    impl PlannerService for MemPlanner {
        async fn create_planned_meal(
            &self,
            date: NaiveDate,
            meal_type: MealType,
            title: String,
            dish_id: Option<String>,
            ingredient_names: Vec<String>,
        ) -> Result<PlannedMeal, DomainError> {
            Ok(PlannedMeal {
                id: "meal-1".to_string(),
                date,
                meal_type,
                title,
                dish_id,
                ingredient_names,
            })
        }

        async fn fetch_planned_meals(
            &self,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Vec<PlannedMeal>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct MemGrocery;

    #[async_trait]
    impl GroceryService for MemGrocery {
        async fn generate_grocery_list(
            &self,
            days_ahead: u32,
            _include_planned_meals: bool,
            _include_low_stock: bool,
        ) -> Result<GroceryList, DomainError> {
            Ok(GroceryList {
                id: "list-1".to_string(),
                created_at: Utc::now(),
                days_ahead,
                items: Vec::new(),
            })
        }

        async fn create_grocery_list(&self, _days_ahead: u32) -> Result<GroceryList, DomainError> {
            unimplemented!("not exercised here")
        }

        async fn add_item_to_list(
            &self,
            _list_id: &str,
            _name: String,
            _quantity: f64,
            _unit: String,
            _reason: String,
            _priority: u8,
        ) -> Result<GroceryList, DomainError> {
            unimplemented!("not exercised here")
        }

        async fn fetch_active_list(&self) -> Result<Option<GroceryList>, DomainError> {
            Ok(None)
        }
    }

    struct MemDishLog;

    #[async_trait]
    impl DishLogService for MemDishLog {
        async fn log_dish(
            &self,
            name: String,
            servings: u32,
            date_cooked: chrono::DateTime<Utc>,
            steps: Option<String>,
            _ingredients: Vec<IngredientDraft>,
        ) -> Result<Dish, DomainError> {
            Ok(Dish {
                id: "dish-1".to_string(),
                name,
                servings,
                date_cooked,
                steps,
                ingredients: Vec::new(),
                updated_at: Utc::now(),
            })
        }

        async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, DomainError> {
            Ok(Vec::new())
        }

        async fn delete_dish(&self, _dish_id: &str) -> Result<(), DomainError> {
            unimplemented!("not exercised here")
        }
    }

    fn assistant_with(
        client: Arc<ScriptedClient>,
        inventory: Arc<MemInventory>,
    ) -> Assistant {
        let guard = StructuredOutputGuard::new(client as Arc<dyn ModelClient>);
        let registry = ToolRegistry::with_default_executors();
        let ctx = ToolExecutionContext::new(
            inventory,
            Arc::new(MemPlanner),
            Arc::new(MemGrocery),
            Arc::new(MemDishLog),
            None,
        );
        Assistant::new(guard, registry, ctx, Arc::new(NoConversationLogger))
    }

    fn message_envelope(content: &str) -> Result<String, ModelClientError> {
        Ok(format!(
            r#"{{ "type": "message", "content": "{content}" }}"#
        ))
    }

    fn last_assistant_content(assistant: &Assistant) -> &str {
        assistant
            .transcript()
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
            .expect("no assistant message")
    }

    #[tokio::test]
    async fn test_message_envelope_appends_and_returns_to_idle() {
        let client = ScriptedClient::new(vec![message_envelope("You have rice and milk.")]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![rice(500.0)]));

        assistant.send_message("what do I have?").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(assistant.transcript().len(), 2);
        assert_eq!(assistant.transcript()[0].role, MessageRole::User);
        assert_eq!(last_assistant_content(&assistant), "You have rice and milk.");
    }

    #[tokio::test]
    async fn test_unconfirmed_tool_call_executes_immediately() {
        let client = ScriptedClient::new(vec![
            Ok(r#"{ "type": "toolCall", "tool": "updateInventoryQuantity",
                    "args": { "itemId": "rice-1", "delta": -100.0 }, "requestId": "r1" }"#
                .to_string()),
            message_envelope("Removed 100 g of rice."),
        ]);
        let inventory = MemInventory::with_items(vec![rice(500.0)]);
        let mut assistant = assistant_with(client, Arc::clone(&inventory));

        assistant.send_message("use 100g of rice").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(last_assistant_content(&assistant), "Removed 100 g of rice.");
        let items = inventory.fetch_all_items().await.unwrap();
        assert_eq!(items[0].quantity, 400.0);
    }

    #[tokio::test]
    async fn test_confirmation_gates_execution() {
        let client = ScriptedClient::new(vec![
            Ok(r#"{ "type": "toolCall", "tool": "updateInventoryQuantity",
                    "args": { "itemId": "rice-1", "delta": -400.0 }, "requestId": "r2",
                    "confirmationRequired": true,
                    "confirmationMessage": "Remove 400 g of rice?" }"#
                .to_string()),
            message_envelope("Removed 400 g of rice."),
        ]);
        let inventory = MemInventory::with_items(vec![rice(500.0)]);
        let mut assistant = assistant_with(client, Arc::clone(&inventory));

        assistant.send_message("use up most of the rice").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::WaitingForConfirmation);
        let pending = assistant.pending_call().unwrap();
        assert_eq!(pending.tool, ToolName::UpdateInventoryQuantity);
        // Nothing executed yet.
        assert_eq!(inventory.fetch_all_items().await.unwrap()[0].quantity, 500.0);

        assistant.confirm_pending().await.unwrap();
        assert_eq!(assistant.state(), AssistantState::Idle);
        assert!(assistant.pending_call().is_none());
        assert_eq!(inventory.fetch_all_items().await.unwrap()[0].quantity, 100.0);
    }

    #[tokio::test]
    async fn test_cancel_discards_pending_call_without_executing() {
        let client = ScriptedClient::new(vec![Ok(
            r#"{ "type": "toolCall", "tool": "updateInventoryQuantity",
                 "args": { "itemId": "rice-1", "delta": -400.0 }, "requestId": "r3",
                 "confirmationRequired": true }"#
                .to_string(),
        )]);
        let inventory = MemInventory::with_items(vec![rice(500.0)]);
        let mut assistant = assistant_with(client, Arc::clone(&inventory));

        assistant.send_message("clear out the rice").await.unwrap();
        assistant.cancel_pending().unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert!(assistant.pending_call().is_none());
        assert_eq!(last_assistant_content(&assistant), CANCELLED_MESSAGE);
        assert_eq!(inventory.fetch_all_items().await.unwrap()[0].quantity, 500.0);
    }

    #[tokio::test]
    async fn test_user_input_refused_while_waiting_for_confirmation() {
        let client = ScriptedClient::new(vec![Ok(
            r#"{ "type": "toolCall", "tool": "generateGroceryList",
                 "args": { "daysAhead": 7 }, "requestId": "r4",
                 "confirmationRequired": true }"#
                .to_string(),
        )]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("make a grocery list").await.unwrap();
        assert_eq!(assistant.state(), AssistantState::WaitingForConfirmation);

        let err = assistant.send_message("another request").await.unwrap_err();
        assert_eq!(err, AssistantError::Busy);
    }

    #[tokio::test]
    async fn test_validation_failure_discards_call_and_returns_to_idle() {
        // delta = 0 fails schema validation; no execution, no retry.
        let client = ScriptedClient::new(vec![Ok(
            r#"{ "type": "toolCall", "tool": "updateInventoryQuantity",
                 "args": { "itemId": "rice-1", "delta": 0.0 }, "requestId": "r5" }"#
                .to_string(),
        )]);
        let inventory = MemInventory::with_items(vec![rice(500.0)]);
        let mut assistant = assistant_with(client, Arc::clone(&inventory));

        assistant.send_message("change rice by zero").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert!(last_assistant_content(&assistant).contains("Delta cannot be zero"));
        assert_eq!(inventory.fetch_all_items().await.unwrap()[0].quantity, 500.0);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_explained_not_executed() {
        let client = ScriptedClient::new(vec![Ok(
            r#"{ "type": "toolCall", "tool": "formatDisk", "args": {}, "requestId": "r6" }"#
                .to_string(),
        )]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("format the disk").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert!(last_assistant_content(&assistant).contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_and_returns_to_idle() {
        let client = ScriptedClient::new(vec![Err(ModelClientError::Network(
            "connection refused".to_string(),
        ))]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("hello").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(last_assistant_content(&assistant), TRANSPORT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_output_after_retry_surfaces_decode_failure() {
        let client = ScriptedClient::new(vec![
            Ok("definitely not json".to_string()),
            Ok("still not json".to_string()),
        ]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("hello").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(last_assistant_content(&assistant), DECODE_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_failed_execution_becomes_tool_result_not_a_crash() {
        let client = ScriptedClient::new(vec![
            Ok(r#"{ "type": "toolCall", "tool": "updateInventoryQuantity",
                    "args": { "itemId": "ghost", "delta": 1.0 }, "requestId": "r7" }"#
                .to_string()),
            message_envelope("I couldn't find that item."),
        ]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("add one to the ghost item").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(last_assistant_content(&assistant), "I couldn't find that item.");
    }

    #[tokio::test]
    async fn test_follow_up_guard_failure_falls_back_to_generic_message() {
        let client = ScriptedClient::new(vec![
            Ok(r#"{ "type": "toolCall", "tool": "generateGroceryList",
                    "args": { "daysAhead": 7 }, "requestId": "r8" }"#
                .to_string()),
            // Both follow-up attempts are undecodable.
            Ok("prose".to_string()),
            Ok("more prose".to_string()),
        ]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));

        assistant.send_message("make a grocery list").await.unwrap();

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert!(last_assistant_content(&assistant).contains("generateGroceryList"));
    }

    #[tokio::test]
    async fn test_confirm_without_pending_call_is_an_error() {
        let client = ScriptedClient::new(vec![]);
        let mut assistant = assistant_with(client, MemInventory::with_items(vec![]));
        assert_eq!(
            assistant.confirm_pending().await.unwrap_err(),
            AssistantError::NothingPending
        );
        assert_eq!(
            assistant.cancel_pending().unwrap_err(),
            AssistantError::NothingPending
        );
    }
}

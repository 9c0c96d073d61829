//! MCP tool handlers for the contact book.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Each tool maps to one action of the contact list: querying the view, the
//! per-contact buttons, the add/edit/new-group dialogs and the theme switch.

use crate::domain::ContactId;
use crate::error::StoreError;
use crate::models::{Field, FieldErrors, Filter};
use crate::services::{
    ContactService, ContactServiceImpl, DialogService, DialogServiceImpl, GroupService,
    GroupServiceImpl, NewContactParams, SharedSession, ViewService, ViewServiceImpl,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookServer {
    contact_service: Arc<dyn ContactService>,
    dialog_service: Arc<dyn DialogService>,
    group_service: Arc<dyn GroupService>,
    view_service: Arc<dyn ViewService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactBookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory contact book - list, search and filter contacts, add or edit them through validated forms, star favourites and organise contacts into groups.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetSearchParams {
    /// Case-insensitive text matched against name, email and phone; empty clears it
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetFilterParams {
    /// One of "all", "favourites" or "group"
    filter: String,
    /// Group name, required when filter is "group"
    #[serde(default)]
    group: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactToolParams {
    name: String,
    /// Country code, 1-3 digits (defaults to the configured code)
    #[serde(default)]
    phone_cc: Option<String>,
    /// Local number, 10 digits
    phone_local: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    group: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetDraftFieldParams {
    /// One of name, phone_cc, phone_local, email, notes, group
    field: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GroupNameParams {
    name: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Pretty JSON body for a successful tool call.
fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

/// Body reported when a form fails validation.
pub(crate) fn validation_body(errors: &FieldErrors) -> serde_json::Value {
    serde_json::json!({
        "saved": false,
        "errors": errors,
    })
}

/// Validation failures are tool-level errors carrying the field map; everything
/// else becomes a protocol error.
fn store_error(e: StoreError) -> Result<CallToolResult, McpError> {
    match e {
        StoreError::Validation(errors) => {
            tracing::debug!("Validation failed: {}", errors);
            let body =
                serde_json::to_string_pretty(&validation_body(&errors)).map_err(to_mcp_error)?;
            Ok(CallToolResult::error(vec![Content::text(body)]))
        }
        other => Err(invalid_params(other)),
    }
}

// Tool router implementation
#[tool_router]
impl ContactBookServer {
    /// Create a new contact book server over a shared session.
    pub fn new(session: SharedSession) -> Self {
        Self {
            contact_service: Arc::new(ContactServiceImpl::new(session.clone()))
                as Arc<dyn ContactService>,
            dialog_service: Arc::new(DialogServiceImpl::new(session.clone()))
                as Arc<dyn DialogService>,
            group_service: Arc::new(GroupServiceImpl::new(session.clone()))
                as Arc<dyn GroupService>,
            view_service: Arc::new(ViewServiceImpl::new(session)) as Arc<dyn ViewService>,
            tool_router: Self::tool_router(),
        }
    }

    /// List the contacts visible under the current filter and search.
    #[tool(
        description = "List the contacts visible under the current filter and search text, together with the groups, active filter, search text, theme and any open dialog."
    )]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.contact_service.list_contacts().await;
        json_result(&snapshot)
    }

    /// Retrieve one contact by ID.
    #[tool(description = "Retrieve one contact by ID, including whether it is expanded")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.contact_id);
        match self.contact_service.get_contact(id).await {
            Ok(view) => json_result(&view),
            Err(e) => store_error(e),
        }
    }

    /// Set the search text and return the resulting list.
    #[tool(
        description = "Set the search text. Contacts whose name, email or phone contain it (case-insensitive) stay visible; an empty query clears the search. Returns the updated list."
    )]
    async fn set_search(
        &self,
        params: Parameters<SetSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.view_service.set_search(params.0.query).await;
        json_result(&self.contact_service.list_contacts().await)
    }

    /// Select which contacts are listed.
    #[tool(
        description = "Select which contacts are listed: \"all\", \"favourites\", or \"group\" with a group name. Search narrows the filtered list further. Returns the updated list."
    )]
    async fn set_filter(
        &self,
        params: Parameters<SetFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let filter =
            Filter::from_parts(&params.filter, params.group.as_deref()).map_err(invalid_params)?;
        self.view_service.set_filter(filter).await;
        json_result(&self.contact_service.list_contacts().await)
    }

    /// Add a contact in a single call.
    #[tool(
        description = "Add a contact in one call. Requires a name and a 10 digit local phone number; the country code is 1-3 digits; email is optional but must contain @. A new group name is added to the group list. Returns field errors if validation fails."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: add_contact called");

        let result = self
            .contact_service
            .add_contact(NewContactParams {
                name: params.name,
                phone_cc: params.phone_cc,
                phone_local: params.phone_local,
                email: params.email,
                notes: params.notes,
                group: params.group,
            })
            .await;

        match result {
            Ok(view) => json_result(&serde_json::json!({ "saved": true, "contact": view })),
            Err(e) => store_error(e),
        }
    }

    /// Delete a contact.
    #[tool(description = "Delete a contact by ID. Deleting an unknown ID does nothing.")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.contact_id);
        let deleted = self.contact_service.delete_contact(id).await;
        json_result(&serde_json::json!({ "contact_id": id, "deleted": deleted }))
    }

    /// Star or unstar a contact.
    #[tool(description = "Star or unstar a contact as a favourite")]
    async fn toggle_favourite(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.contact_id);
        let favourite = self.contact_service.toggle_favourite(id).await;
        json_result(&serde_json::json!({
            "contact_id": id,
            "found": favourite.is_some(),
            "favourite": favourite,
        }))
    }

    /// Expand or collapse a contact's details.
    #[tool(
        description = "Expand a contact's details, collapsing any other expanded contact. Toggling the expanded contact collapses it."
    )]
    async fn toggle_expand(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.contact_id);
        let expanded_id = self.contact_service.toggle_expand(id).await;
        json_result(&serde_json::json!({ "expanded_id": expanded_id }))
    }

    /// Open the add-contact dialog.
    #[tool(
        description = "Open the add-contact dialog with an empty draft, replacing any open dialog. Fill it with set_draft_field and commit with save_dialog."
    )]
    async fn open_add_dialog(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.dialog_service.open_add().await)
    }

    /// Open the edit dialog for a contact.
    #[tool(
        description = "Open the edit dialog for a contact, with its phone split into country code and local number"
    )]
    async fn open_edit_dialog(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.contact_id);
        match self.dialog_service.open_edit(id).await {
            Ok(dialog) => json_result(&dialog),
            Err(e) => store_error(e),
        }
    }

    /// Set one field of the open add/edit dialog.
    #[tool(
        description = "Set one field of the open add/edit dialog: name, phone_cc, phone_local, email, notes or group. Phone fields keep digits only. Returns the dialog with current field errors."
    )]
    async fn set_draft_field(
        &self,
        params: Parameters<SetDraftFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let field = params.field.parse::<Field>().map_err(invalid_params)?;
        match self.dialog_service.set_draft_field(field, params.value).await {
            Ok(dialog) => json_result(&dialog),
            Err(e) => store_error(e),
        }
    }

    /// Save the open dialog.
    #[tool(
        description = "Validate and commit the open dialog. On validation errors nothing is saved and the dialog stays open."
    )]
    async fn save_dialog(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: save_dialog called");
        match self.dialog_service.save().await {
            Ok(outcome) => json_result(&serde_json::json!({ "saved": true, "result": outcome })),
            Err(e) => store_error(e),
        }
    }

    /// Close the open dialog without saving.
    #[tool(description = "Close the open dialog, discarding its draft")]
    async fn cancel_dialog(&self) -> Result<CallToolResult, McpError> {
        let was_open = self.dialog_service.cancel().await;
        json_result(&serde_json::json!({ "cancelled": was_open }))
    }

    /// List group names.
    #[tool(description = "List all group names in the order they were created")]
    async fn list_groups(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.group_service.list_groups().await)
    }

    /// Open the new-group dialog.
    #[tool(
        description = "Open the new-group dialog. Set the name with set_group_name and commit with save_dialog."
    )]
    async fn open_group_dialog(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.dialog_service.open_group().await)
    }

    /// Set the name in the new-group dialog.
    #[tool(description = "Set the name typed into the open new-group dialog")]
    async fn set_group_name(
        &self,
        params: Parameters<GroupNameParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.dialog_service.set_group_name(params.0.name).await {
            Ok(dialog) => json_result(&dialog),
            Err(e) => store_error(e),
        }
    }

    /// Add a group directly.
    #[tool(
        description = "Add a group directly. Blank names and names already in the list are ignored."
    )]
    async fn add_group(
        &self,
        params: Parameters<GroupNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let name = params.0.name;
        let added = self.group_service.add_group(&name).await;
        json_result(&serde_json::json!({
            "name": name.trim(),
            "added": added,
            "groups": self.group_service.list_groups().await,
        }))
    }

    /// Switch between light and dark theme.
    #[tool(description = "Switch between light and dark theme")]
    async fn toggle_theme(&self) -> Result<CallToolResult, McpError> {
        let theme = self.view_service.toggle_theme().await;
        json_result(&serde_json::json!({ "theme": theme }))
    }
}

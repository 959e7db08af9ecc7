//! Shell actions as named tools
//!
//! Each user-facing action (load, back, home, set home, open link) is a
//! [`Tool`] with typed parameters. Hosts register the tools once in a
//! [`ToolRegistry`] and dispatch UI events to them by name with JSON
//! parameters, so the same actions can be wired to buttons, key bindings or a
//! command line.

pub mod back;
pub mod home;
pub mod load;
pub mod open_link;
pub mod set_home;

pub use back::BackTool;
pub use home::HomeTool;
pub use load::LoadTool;
pub use open_link::OpenLinkTool;
pub use set_home::SetHomeTool;

use crate::{error::{Result, ShellError},
            shell::BrowserShell};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;

/// State a tool operates on
pub struct ToolContext<'a> {
    pub shell: &'a mut BrowserShell,
}

impl<'a> ToolContext<'a> {
    pub fn new(shell: &'a mut BrowserShell) -> Self {
        Self { shell }
    }
}

/// Outcome of a tool execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success_with(data: Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

/// A named shell action with typed parameters
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;

    /// JSON schema describing [`Tool::Params`]
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_default()
    }
}

/// Object-safe view of a [`Tool`] used by the registry
trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn parameters_schema(&self) -> Value;
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn parameters_schema(&self) -> Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        // Parameterless tools may be invoked with `null`
        let params = if params.is_null() { Value::Object(Default::default()) } else { params };

        let typed = serde_json::from_value(params)
            .map_err(|e| ShellError::InvalidArgument(format!("Invalid parameters for '{}': {}", Tool::name(self), e)))?;

        self.execute_typed(typed, context)
    }
}

/// Tools addressable by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every shell action registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(LoadTool);
        registry.register(BackTool);
        registry.register(HomeTool);
        registry.register(SetHomeTool);
        registry.register(OpenLinkTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(Tool::name(&tool).to_string(), Box::new(tool));
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Parameter schema of a registered tool
    pub fn schema(&self, name: &str) -> Option<Value> {
        self.tools.get(name).map(|tool| tool.parameters_schema())
    }

    /// Execute a tool by name
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self.tools.get(name).ok_or_else(|| ShellError::ToolNotFound(name.to_string()))?;

        log::debug!("Executing tool {}", name);
        tool.execute(params, context)
    }
}

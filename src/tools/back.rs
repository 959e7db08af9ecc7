use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The back tool takes no parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BackParams {}

/// Tool for stepping back one page
#[derive(Default)]
pub struct BackTool;

impl Tool for BackTool {
    type Params = BackParams;

    fn name(&self) -> &str {
        "back"
    }

    fn execute_typed(&self, _params: BackParams, context: &mut ToolContext) -> Result<ToolResult> {
        let moved = context.shell.go_back()?;

        Ok(ToolResult::success_with(serde_json::json!({
            "moved": moved,
            "url": context.shell.address(),
        })))
    }
}

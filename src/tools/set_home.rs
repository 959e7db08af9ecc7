use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetHomeParams {}

/// Tool for saving the current page as the home page
#[derive(Default)]
pub struct SetHomeTool;

impl Tool for SetHomeTool {
    type Params = SetHomeParams;

    fn name(&self) -> &str {
        "set_home"
    }

    fn execute_typed(&self, _params: SetHomeParams, context: &mut ToolContext) -> Result<ToolResult> {
        match context.shell.set_home()? {
            Some(url) => Ok(ToolResult::success_with(serde_json::json!({
                "home_url": url,
            }))),
            None => Ok(ToolResult::failure("No page is displayed")),
        }
    }
}

use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HomeParams {}

/// Tool for (re)loading the home page, used at startup
#[derive(Default)]
pub struct HomeTool;

impl Tool for HomeTool {
    type Params = HomeParams;

    fn name(&self) -> &str {
        "home"
    }

    fn execute_typed(&self, _params: HomeParams, context: &mut ToolContext) -> Result<ToolResult> {
        let target = context.shell.start()?;

        Ok(ToolResult::success_with(serde_json::json!({
            "url": target,
        })))
    }
}

use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the load tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoadParams {
    /// Address-bar text: a URL, a host name or search terms
    pub input: String,
}

/// Tool for loading whatever was typed into the address bar
#[derive(Default)]
pub struct LoadTool;

impl Tool for LoadTool {
    type Params = LoadParams;

    fn name(&self) -> &str {
        "load"
    }

    fn execute_typed(&self, params: LoadParams, context: &mut ToolContext) -> Result<ToolResult> {
        let target = context.shell.load(&params.input)?;

        Ok(ToolResult::success_with(serde_json::json!({
            "input": params.input,
            "loaded": target.is_some(),
            "url": target,
        })))
    }
}

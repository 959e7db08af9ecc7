use crate::error::Result;
use crate::handoff::HandoffOutcome;
use crate::shell::LinkDisposition;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the open_link tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OpenLinkParams {
    /// Link target exactly as the page requested it
    pub url: String,
}

/// Tool for following a link from the page, handing non-web schemes to the OS
#[derive(Default)]
pub struct OpenLinkTool;

impl Tool for OpenLinkTool {
    type Params = OpenLinkParams;

    fn name(&self) -> &str {
        "open_link"
    }

    fn execute_typed(&self, params: OpenLinkParams, context: &mut ToolContext) -> Result<ToolResult> {
        match context.shell.open_link(&params.url)? {
            LinkDisposition::Navigated(target) => Ok(ToolResult::success_with(serde_json::json!({
                "url": target,
                "handled_by": "navigator",
            }))),
            LinkDisposition::HandedOff(HandoffOutcome::Handled) => Ok(ToolResult::success_with(serde_json::json!({
                "url": params.url,
                "handled_by": "system",
            }))),
            LinkDisposition::HandedOff(outcome) => {
                Ok(ToolResult::failure(format!("Error handling link: {} ({})", params.url, outcome)))
            }
        }
    }
}

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::service::RequestContext;
use rmcp::RoleServer;

use crate::clients::vocus::VocusApi;
use crate::domain::SiteLinks;
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::hot_contents::HotContentsAdapter;
use crate::tools::search::{SearchAdapter, SearchArgs};

/// MCP handler exposing the Vocus tools. Cheap to clone; holds only the
/// shared read-only client and link templates.
#[derive(Clone)]
pub struct VocusSvc {
    hot: HotContentsAdapter,
    search: SearchAdapter,
}

impl VocusSvc {
    pub fn new(api: Arc<dyn VocusApi>, links: SiteLinks) -> Self {
        Self {
            hot: HotContentsAdapter::new(api.clone(), links.clone()),
            search: SearchAdapter::new(api, links),
        }
    }

    pub fn hot_adapter(&self) -> &HotContentsAdapter {
        &self.hot
    }

    pub fn search_adapter(&self) -> &SearchAdapter {
        &self.search
    }
}

impl ServerHandler for VocusSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Vocus content tools: get_hot_contents for the trending feed, search_contents to search by title.".into(),
            ),
            ..Default::default()
        }
    }
}

#[rmcp::tool_router]
impl VocusSvc {
    #[rmcp::tool(
        name = "get_hot_contents",
        description = "search Vocus hot contents with structured output"
    )]
    async fn get_hot_contents(
        &self,
        ctx: RequestContext<RoleServer>,
    ) -> Result<rmcp::Json<serde_json::Value>, rmcp::ErrorData> {
        let envelope = self.hot.run(&ctx.ct).await;
        Ok(rmcp::Json(envelope.to_json()))
    }

    #[rmcp::tool(
        name = "search_contents",
        description = "search Vocus contents by title with structured output"
    )]
    async fn search_contents(
        &self,
        params: Parameters<SearchArgs>,
        ctx: RequestContext<RoleServer>,
    ) -> Result<rmcp::Json<serde_json::Value>, rmcp::ErrorData> {
        tracing::debug!(params = ?params.0, "search_contents invoked");
        let envelope = self.search.run(&params.0, &ctx.ct).await;
        Ok(rmcp::Json(envelope.to_json()))
    }
}

pub type VocusRouter = ToolRouter<VocusSvc>;

impl VocusSvc {
    pub fn router() -> VocusRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::StubApi;

    #[test]
    fn router_lists_both_tools() {
        let names: Vec<String> = VocusSvc::router()
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert!(names.iter().any(|n| n == "get_hot_contents"), "got {names:?}");
        assert!(names.iter().any(|n| n == "search_contents"), "got {names:?}");
    }

    #[test]
    fn search_contents_declares_title_schema() {
        let tools = VocusSvc::router().list_all();
        let search = tools
            .iter()
            .find(|t| t.name == "search_contents")
            .expect("search_contents listed");
        assert_eq!(
            search.description.as_deref(),
            Some("search Vocus contents by title with structured output")
        );
        let schema = serde_json::Value::Object(search.input_schema.as_ref().clone());
        assert_eq!(schema["properties"]["title"]["type"], "string");
        assert_eq!(schema["required"], serde_json::json!(["title"]));
    }

    #[test]
    fn advertises_tools_capability() {
        let svc = VocusSvc::new(Arc::new(StubApi::with_hot(Ok(vec![]))), SiteLinks::default());
        let info = svc.get_info();
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_handler_trait_impl() {
        let svc = VocusSvc::new(Arc::new(StubApi::with_hot(Ok(vec![]))), SiteLinks::default());
        fn assert_server_handler<T: ServerHandler + Clone>(_handler: T) {}
        assert_server_handler(svc);
    }
}

use crate::types::ToolName;
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Uniform contract for one external knowledge source.
///
/// `invoke` is infallible: implementations catch their own
/// transport and parse errors and return a tagged error string instead,
/// so one failing source can never take down the rest of a plan.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Which registry slot this tool fills.
    fn name(&self) -> ToolName;
    /// Run the tool, always yielding displayable text.
    async fn invoke(&self, query: &str) -> String;
}

/// Tool lookup keyed by [`ToolName`].
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry holding every tool in the closed enumeration.
    pub fn with_default_tools(search_config: SearchConfig) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(crate::tools::search::OpenDeepSearchTool::new(
            search_config,
        )));
        registry.register(Arc::new(crate::tools::wikipedia::WikipediaTool::new()));
        registry.register(Arc::new(crate::tools::arxiv::ArxivTool::new()));
        registry.register(Arc::new(crate::tools::document::PdfParseTool::new()));
        registry.register(Arc::new(crate::tools::document::WebFetchTool::new()));

        registry
    }

    /// Register a tool under its own name, replacing any previous one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    /// The tool registered under `name`, if any.
    pub fn get(&self, name: ToolName) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name).cloned()
    }

    /// Whether `name` has a registered tool.
    pub fn has_tool(&self, name: ToolName) -> bool {
        self.tools.contains_key(&name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

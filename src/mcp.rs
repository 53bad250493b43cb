use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::page_range::PageRanges;
use crate::pdftk::Pdftk;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page ranges in pdftk syntax (e.g., '1-5,10,15-end')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfMergeRequest {
    #[schemars(description = "PDF files to merge, in order")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfBurstRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "printf-style output pattern (default: 'pg_%04d.pdf')")]
    #[serde(default = "default_burst_pattern")]
    pub output_pattern: String,
}

fn default_burst_pattern() -> String {
    "pg_%04d.pdf".to_string()
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    pdftk: Arc<Pdftk>,
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new(pdftk: Arc<Pdftk>) -> Self {
        Self {
            pdftk,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Count the pages of a PDF")]
    async fn pdf_page_count(
        &self,
        Parameters(PathRequest { path }): Parameters<PathRequest>,
    ) -> String {
        match self.pdftk.page_count(&path).await {
            Ok(page_count) => to_json(&PageCountResult { path, page_count }),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Copy page ranges of a PDF into a new file. Use pdftk range syntax like '1-5,10,15-end'.")]
    async fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let ranges = PageRanges::parse(&req.pages);
        match self.pdftk.split(&req.path, &ranges, &req.output).await {
            Ok(()) => to_json(&SplitResult {
                output_path: req.output,
                ranges: ranges.as_slice().to_vec(),
            }),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Concatenate several PDFs, in the given order, into one file")]
    async fn pdf_merge(&self, Parameters(req): Parameters<PdfMergeRequest>) -> String {
        match self.pdftk.merge(req.inputs.as_slice(), &req.output).await {
            Ok(()) => to_json(&MergeResult {
                output_path: req.output,
                input_count: req.inputs.len(),
            }),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Write every page of a PDF to its own file")]
    async fn pdf_burst(&self, Parameters(req): Parameters<PdfBurstRequest>) -> String {
        match self.pdftk.burst(&req.path, &req.output_pattern).await {
            Ok(()) => to_json(&BurstResult {
                path: req.path,
                output_pattern: req.output_pattern,
            }),
            Err(e) => format!("Error: {}", e),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {}", e))
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCountResult {
    pub path: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitResult {
    pub output_path: String,
    pub ranges: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MergeResult {
    pub output_path: String,
    pub input_count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BurstResult {
    pub path: String,
    pub output_pattern: String,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF manipulation through pdftk. Use pdf_page_count to count pages, pdf_split \
                 to copy page ranges into a new file, pdf_merge to concatenate files in order, \
                 and pdf_burst to write one file per page."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server(pdftk: Arc<Pdftk>) -> Result<()> {
    let server = PdfServer::new(pdftk);
    tracing::info!(mode = ?server.pdftk.mode(), "starting MCP server on stdio");

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}

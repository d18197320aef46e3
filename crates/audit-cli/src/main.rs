//! Audit CLI — command-line client for the document compliance audit service.
//!
//! Set AUDIT_API_URL (or API_URL) to point at the service; defaults to
//! http://localhost:5000.

use anyhow::Context;
use audit_api_client::ApiClient;
use audit_cli::init_tracing;
use audit_core::models::{AuditReport, DocType};
use audit_core::report::ReportView;
use audit_core::workflow::{SubmissionState, SubmissionWorkflow};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "audit", about = "Document compliance audit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a document for a compliance audit
    Audit {
        /// Path to the document (.pdf, .doc, .docx, .txt)
        file: std::path::PathBuf,
        /// Document type: contract, agreement, policy, or other
        #[arg(long, default_value = "contract")]
        doc_type: DocType,
        /// Print the raw report as JSON instead of the rendered view
        #[arg(long)]
        json: bool,
    },
    /// Submit several documents in one batch
    Batch {
        /// Paths to the documents
        files: Vec<std::path::PathBuf>,
        /// Document type applied to the whole batch
        #[arg(long, default_value = "contract")]
        doc_type: DocType,
    },
    /// Check that the audit service is up
    Health,
    /// Service statistics (supported formats, size limit)
    Stats,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn print_report(report: &AuditReport) {
    let view = ReportView::from_report(report);
    println!("Audit Results");
    println!("  Document: {}", view.document_name);
    println!("  Audited:  {}", view.audited_at);
    println!(
        "  Score:    {} ({})",
        view.compliance_score, view.tier_label
    );
    println!();
    println!("Issues Found ({})", view.issue_count);
    for issue in &view.issues {
        println!("  - {}", issue);
    }
    println!();
    println!("Passed Checks ({})", view.passed_count);
    for check in &view.passed_checks {
        println!("  - {}", check);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env().context("Failed to create API client")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            file,
            doc_type,
            json,
        } => {
            let document = ApiClient::read_document(&file)?;

            let mut workflow = SubmissionWorkflow::new(client);
            workflow.set_doc_type(doc_type);
            workflow.select_document(
                document.name().to_string(),
                document.content_type().to_string(),
                document.bytes().clone(),
            )?;

            match workflow.submit().await {
                SubmissionState::Succeeded(report) => {
                    if json {
                        print_json(report)?;
                    } else {
                        print_report(report);
                    }
                }
                SubmissionState::Failed { message, .. } => {
                    anyhow::bail!("{}", message);
                }
                other => anyhow::bail!("submission did not complete: {:?}", other),
            }
        }
        Commands::Batch { files, doc_type } => {
            if files.is_empty() {
                anyhow::bail!("No files provided");
            }
            let mut documents = Vec::with_capacity(files.len());
            for file in &files {
                let document = ApiClient::read_document(file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                documents.push(document);
            }
            let response = client.run_batch_audit(&documents, doc_type).await?;
            print_json(&response)?;
        }
        Commands::Health => {
            let response = client.health().await?;
            print_json(&response)?;
        }
        Commands::Stats => {
            let response = client.stats().await?;
            print_json(&response)?;
        }
    }

    Ok(())
}

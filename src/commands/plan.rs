//! Plan command handler - run the sweep policies over a workspace snapshot

use crate::cli::{OutputFormat, PlanArgs, PolicyArg};
use crate::commands::{banner, to_json, CommandContext};
use crate::error::{Result, TabSweepError};
use crate::paths::resolve_path_or_cwd;
use crate::snapshot::{SnapshotHost, WorkspaceSnapshot};
use crate::sweep::{SweepPlan, SweepPolicy, SweepReport, SweepSession};

/// Run the plan command
pub fn run_plan(args: &PlanArgs, ctx: &CommandContext) -> Result<String> {
    let mut config = ctx.load_config()?;
    if let Some(count) = args.lru_count {
        config.lru.count = count;
    }
    if args.close_modified {
        config.close_modified = true;
    }

    let snapshot_path = resolve_path_or_cwd(&args.snapshot)?;
    let snapshot = WorkspaceSnapshot::load_from(&snapshot_path)?;
    tracing::debug!(
        "Loaded snapshot {}: {} projects, {} documents, {} shows",
        snapshot_path.display(),
        snapshot.projects.len(),
        snapshot.documents.len(),
        snapshot.shows.len()
    );

    let mut host = SnapshotHost::new(snapshot);
    let mut session = SweepSession::new(config);
    host.replay_shows(&mut session);

    let policies = selected_policies(args.policy);

    if args.apply {
        let mut reports = Vec::with_capacity(policies.len());
        for policy in policies {
            let report = match policy {
                SweepPolicy::External => session.close_external(&mut host),
                SweepPolicy::Lru => session.close_least_recently_used(&mut host),
            };
            reports.push(report);
        }
        render_reports(&reports, host.documents().len(), ctx)
    } else {
        let mut plans = Vec::with_capacity(policies.len());
        for policy in policies {
            let plan = match policy {
                SweepPolicy::External => session.plan_external(&host),
                SweepPolicy::Lru => session.plan_least_recently_used(&host),
            };
            plans.push(plan);
        }
        render_plans(&plans, ctx)
    }
}

fn selected_policies(arg: PolicyArg) -> Vec<SweepPolicy> {
    match arg {
        PolicyArg::External => vec![SweepPolicy::External],
        PolicyArg::Lru => vec![SweepPolicy::Lru],
        PolicyArg::All => vec![SweepPolicy::External, SweepPolicy::Lru],
    }
}

fn render_plans(plans: &[SweepPlan], ctx: &CommandContext) -> Result<String> {
    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "_type": "sweep_plan",
                "plans": serialize(plans)?,
            });
            to_json(&value)
        }
        OutputFormat::Text => {
            let mut output = banner("TABSWEEP PLAN");
            for plan in plans {
                output.push_str(&format!("[{}]\n", plan.policy));
                if plan.is_empty() {
                    output.push_str("  nothing to close\n\n");
                    continue;
                }
                for document in &plan.to_close {
                    output.push_str(&format!("  close    {}\n", document.path));
                }
                for document in &plan.skipped_modified {
                    output.push_str(&format!("  keep     {} (unsaved changes)\n", document.path));
                }
                for id in &plan.stale {
                    output.push_str(&format!("  stale    {}\n", id));
                }
                output.push('\n');
            }
            Ok(output)
        }
    }
}

fn render_reports(reports: &[SweepReport], remaining: usize, ctx: &CommandContext) -> Result<String> {
    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "_type": "sweep_report",
                "reports": serialize(reports)?,
                "remaining_documents": remaining,
            });
            to_json(&value)
        }
        OutputFormat::Text => {
            let mut output = banner("TABSWEEP APPLY");
            for report in reports {
                output.push_str(&format!("[{}]\n", report.policy));
                for entry in &report.closed {
                    output.push_str(&format!("  closed   {}\n", entry.path));
                }
                for entry in &report.skipped_modified {
                    output.push_str(&format!("  kept     {} (unsaved changes)\n", entry.path));
                }
                for failure in &report.failed {
                    output.push_str(&format!("  failed   {}: {}\n", failure.path, failure.message));
                }
                for id in &report.stale {
                    output.push_str(&format!("  stale    {}\n", id));
                }
                output.push('\n');
            }
            output.push_str(&format!("remaining_documents: {}\n", remaining));
            Ok(output)
        }
    }
}

fn serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| TabSweepError::OutputError {
        message: format!("JSON serialization failed: {}", e),
    })
}

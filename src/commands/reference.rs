//! `ref` and `list`: print dependency references.

use crate::cli::{ListArgs, RefArgs};
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::metafile::Metafile;
use crate::naming::{DependencyRef, dependency_ref};
use crate::plan::{Plan, plan};

pub(super) fn cmd_ref(args: RefArgs) -> Result<()> {
    let keys: Vec<&str> = args.keys.iter().map(String::as_str).collect();
    println!("{}", dependency_ref(args.category, &keys)?);
    Ok(())
}

pub(super) fn cmd_list(args: ListArgs) -> Result<()> {
    let config = GeneratorConfig::load_or_default(args.config.as_ref())?;
    let metafile = Metafile::load(&args.metafile)?;
    let plan = plan(&metafile, &config)?;

    print!("{}", render_list(&plan, args.json)?);
    Ok(())
}

/// References to every planned job, in file then identifier order.
fn references(plan: &Plan) -> Vec<DependencyRef> {
    let mut references = Vec::with_capacity(plan.job_count());
    for document in plan.documents() {
        for (id, _) in document.jobs() {
            references.push(DependencyRef {
                file: document.file(),
                id: id.clone(),
            });
        }
    }
    references
}

fn render_list(plan: &Plan, json: bool) -> Result<String> {
    let references = references(plan);

    if json {
        let mut out = serde_json::to_string_pretty(&references)
            .map_err(|e| GenError::OutputError(format!("failed to render JSON: {}", e)))?;
        out.push('\n');
        return Ok(out);
    }

    Ok(references.iter().map(|r| format!("{}\n", r)).collect())
}

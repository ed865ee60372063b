//! `generate`: plan every job and write (or print) the documents.

use crate::cli::GenerateArgs;
use crate::config::GeneratorConfig;
use crate::document::RenderedDocument;
use crate::error::Result;
use crate::metafile::Metafile;
use crate::plan::{Plan, plan};
use std::path::{Path, PathBuf};
use tracing::info;

pub(super) fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let plan = load_plan(&args)?;

    if args.dry_run {
        print!("{}", render_dry_run(&plan)?);
        return Ok(());
    }

    let written = write_plan(&plan, &args.root)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    println!(
        "Generated {} job(s) in {} file(s).",
        plan.job_count(),
        written.len()
    );

    Ok(())
}

fn load_plan(args: &GenerateArgs) -> Result<Plan> {
    let config = GeneratorConfig::load_or_default(args.config.as_ref())?;
    let metafile = Metafile::load(&args.metafile)?;
    info!(
        metafile = %args.metafile.display(),
        editors = metafile.editors.len(),
        platforms = metafile.platforms.len(),
        packages = metafile.packages.len(),
        templates = metafile.templates.len(),
        "loaded metafile"
    );
    plan(&metafile, &config)
}

/// Every document is rendered before the first one is written.
fn write_plan(plan: &Plan, root: &Path) -> Result<Vec<PathBuf>> {
    let rendered = render_plan(plan, root)?;
    for document in &rendered {
        document.write()?;
    }
    Ok(rendered.into_iter().map(|r| r.path).collect())
}

fn render_plan(plan: &Plan, root: &Path) -> Result<Vec<RenderedDocument>> {
    plan.documents()
        .iter()
        .map(|document| document.render(root))
        .collect()
}

/// Every document, each preceded by a `# {file}` banner line.
fn render_dry_run(plan: &Plan) -> Result<String> {
    let mut out = String::new();
    for document in plan.documents() {
        out.push_str(&format!("# {}\n", document.file().path()));
        out.push_str(&document.to_yaml()?);
        out.push('\n');
    }
    Ok(out)
}

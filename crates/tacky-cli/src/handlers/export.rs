use crate::cli::{ExportArgs, ImportArgs};
use crate::context::CliContext;
use crate::output;
use tacky_domain::{BoardExporter, BoardImporter};

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let board = ctx.board(&args.board)?;
    match args.output {
        Some(path) => {
            BoardExporter::export_to_file(board, &path)?;
            output::output_success(serde_json::json!({
                "board": board.id,
                "path": path.display().to_string(),
            }));
        }
        None => println!("{}", BoardExporter::export_to_json(board)?),
    }
    Ok(())
}

/// Replaces the lists of an existing board with those of an exported file.
pub async fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let current = ctx.board(&args.board)?;
    let board = BoardImporter::import_from_file(current, &args.path)?;
    ctx.commit(board.clone())?;
    output::output_success(&board);
    Ok(())
}

use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use tacky_domain::BoardId;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { name, wallpaper } => {
            let board = ctx.workspace.create_board(name, wallpaper).clone();
            ctx.save()?;
            output::output_success(&board);
        }
        BoardAction::List => {
            output::output_list(ctx.workspace.boards().to_vec());
        }
        BoardAction::Get { id } => match ctx.board(&id) {
            Ok(board) => output::output_success(board),
            Err(e) => output::output_error(&e.to_string()),
        },
        BoardAction::Update {
            id,
            name,
            wallpaper,
        } => {
            let mut board = match ctx.board(&id) {
                Ok(board) => board.clone(),
                Err(e) => output::output_error(&e.to_string()),
            };
            if let Some(name) = name {
                board = board.rename(name);
            }
            if let Some(wallpaper) = wallpaper {
                board = board.set_wallpaper(wallpaper);
            }
            ctx.commit(board.clone())?;
            output::output_success(&board);
        }
        BoardAction::Delete { id } => {
            if !ctx.workspace.delete_board(&BoardId::from(id.as_str())) {
                output::output_error(&format!("Board not found: {}", id));
            }
            ctx.save()?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
    }
    Ok(())
}

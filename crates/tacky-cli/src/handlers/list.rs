use super::rejected;
use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;
use tacky_domain::{Board, ListId};

fn current(ctx: &CliContext, board_id: &str) -> Board {
    match ctx.board(board_id) {
        Ok(board) => board.clone(),
        Err(e) => output::output_error(&e.to_string()),
    }
}

pub async fn handle(ctx: &mut CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Add { board, title } => {
            let next = current(ctx, &board).add_list(title);
            let list = next.lists.last().cloned();
            ctx.commit(next)?;
            output::output_success(list);
        }
        ListAction::Rename { board, id, title } => {
            let list_id = ListId::from(id);
            let next = current(ctx, &board)
                .try_rename_list(&list_id, title)
                .map_err(rejected)?;
            let list = next.list(&list_id).cloned();
            ctx.commit(next)?;
            output::output_success(list);
        }
        ListAction::Delete { board, id } => {
            let list_id = ListId::from(id);
            let board = current(ctx, &board);
            if board.list(&list_id).is_none() {
                output::output_error(&format!("List not found: {}", list_id));
            }
            ctx.commit(board.delete_list(&list_id))?;
            output::output_success(serde_json::json!({ "deleted": list_id }));
        }
        ListAction::Move { board, from, to } => {
            let next = current(ctx, &board)
                .try_move_list(from, to)
                .map_err(rejected)?;
            let order: Vec<ListId> = next.lists.iter().map(|l| l.id.clone()).collect();
            ctx.commit(next)?;
            output::output_list(order);
        }
    }
    Ok(())
}

use super::rejected;
use crate::cli::{CardAction, CardFields, CardMoveArgs};
use crate::context::CliContext;
use crate::output;
use tacky_domain::{Board, Card, CardId, ListId};

fn current(ctx: &CliContext, board_id: &str) -> Board {
    match ctx.board(board_id) {
        Ok(board) => board.clone(),
        Err(e) => output::output_error(&e.to_string()),
    }
}

fn find_card(board: &Board, list_id: &ListId, card_id: &CardId) -> Option<Card> {
    board.list(list_id)?.card(card_id).cloned()
}

fn apply_fields(mut card: Card, fields: CardFields) -> Card {
    if let Some(title) = fields.title {
        card.title = title;
    }
    if let Some(description) = fields.description {
        card.description = description;
    }
    if let Some(due) = fields.due {
        card.due = due;
    }
    if let Some(labels) = fields.labels {
        card.labels = labels.into_iter().filter(|l| !l.is_empty()).collect();
    }
    card
}

pub async fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Add {
            board,
            list,
            fields,
        } => {
            let list_id = ListId::from(list);
            let (next, card_id) = current(ctx, &board)
                .try_add_card(&list_id)
                .map_err(rejected)?;
            let card = match find_card(&next, &list_id, &card_id) {
                Some(card) => apply_fields(card, fields),
                None => output::output_error(&format!("Card not found: {}", card_id)),
            };
            let next = next.try_update_card(&list_id, &card).map_err(rejected)?;
            ctx.commit(next)?;
            output::output_success(&card);
        }
        CardAction::Update {
            board,
            list,
            id,
            fields,
        } => {
            let list_id = ListId::from(list);
            let card_id = CardId::from(id);
            let board = current(ctx, &board);
            let card = match find_card(&board, &list_id, &card_id) {
                Some(card) => apply_fields(card, fields),
                None => output::output_error(&format!("Card not found: {}", card_id)),
            };
            let next = board.try_update_card(&list_id, &card).map_err(rejected)?;
            ctx.commit(next)?;
            output::output_success(&card);
        }
        CardAction::Delete { board, list, id } => {
            let list_id = ListId::from(list);
            let card_id = CardId::from(id);
            let board = current(ctx, &board);
            if find_card(&board, &list_id, &card_id).is_none() {
                output::output_error(&format!("Card not found: {}", card_id));
            }
            ctx.commit(board.delete_card(&list_id, &card_id))?;
            output::output_success(serde_json::json!({ "deleted": card_id }));
        }
        CardAction::Move(args) => handle_move(ctx, args)?,
    }
    Ok(())
}

fn handle_move(ctx: &mut CliContext, args: CardMoveArgs) -> anyhow::Result<()> {
    let from_list = ListId::from(args.from_list);
    let to_list = ListId::from(args.to_list);
    let next = current(ctx, &args.board)
        .try_move_card(&from_list, args.from_index, &to_list, args.to_index)
        .map_err(rejected)?;
    let cards = next
        .list(&to_list)
        .map(|l| l.cards.clone())
        .unwrap_or_default();
    ctx.commit(next)?;
    output::output_list(cards);
    Ok(())
}

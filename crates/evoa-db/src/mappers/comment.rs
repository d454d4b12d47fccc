//! Comment model -> entity mapper

use evoa_core::entities::ReelComment;

use crate::models::CommentModel;

impl From<CommentModel> for ReelComment {
    fn from(model: CommentModel) -> Self {
        ReelComment {
            id: model.id,
            reel_id: model.reel_id,
            user_id: model.user_id,
            content: model.content,
            parent_comment_id: model.parent_comment_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

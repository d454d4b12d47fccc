//! Reel model -> entity mapper

use evoa_core::entities::Reel;

use crate::models::ReelModel;

impl From<ReelModel> for Reel {
    fn from(model: ReelModel) -> Self {
        Reel {
            id: model.id,
            startup_id: model.startup_id,
            title: model.title,
            description: model.description,
            video_url: model.video_url,
            thumbnail_url: model.thumbnail_url,
            duration: model.duration,
            // Counters never surface negative
            view_count: model.view_count.max(0),
            like_count: model.like_count.max(0),
            comment_count: model.comment_count.max(0),
            share_count: model.share_count.max(0),
            hashtags: model.hashtags,
            is_featured: model.is_featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

//! Startup model -> entity mapper

use evoa_core::entities::Startup;

use crate::models::StartupModel;

impl From<StartupModel> for Startup {
    fn from(model: StartupModel) -> Self {
        Startup {
            id: model.id,
            founder_id: model.founder_id,
            name: model.name,
            tagline: model.tagline,
            description: model.description,
            industry: model.industry,
            stage: model.stage,
            website: model.website,
            logo_url: model.logo_url,
            follower_count: model.follower_count.max(0),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

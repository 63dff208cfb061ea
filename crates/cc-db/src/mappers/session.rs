//! Session model -> record

use cc_core::traits::Session;
use cc_core::RecordId;

use crate::models::SessionModel;

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            id: model.id,
            user_id: RecordId::new(model.user_id),
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}

use thiserror::Error;

use crate::profile::ProfileId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile not found: {id}")]
    NotFound { id: ProfileId },

    #[error("profile already exists: {id}")]
    AlreadyExists { id: ProfileId },
}

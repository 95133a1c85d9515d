use std::{ops::Deref, sync::Arc};
use uuid::Uuid;

///
/// Caller of the request.
///
/// Fields are kept behind an Arc, so cloning
/// into request extensions stays cheap.
///
#[derive(Debug, Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

#[derive(Debug)]
pub struct InnerUser {
    pub id: Uuid,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(id: Uuid, roles: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, roles }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

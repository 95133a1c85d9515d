#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

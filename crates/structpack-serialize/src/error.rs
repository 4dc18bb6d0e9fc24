use structpack_meta::{MetaError, TypeId};
use thiserror::Error;

/// Fatal traversal failures.
///
/// Any stage returning one of these aborts the current document; no partial
/// result is guaranteed afterwards. Type disagreements on bytes- and
/// container-shaped fields are not errors; those events are dropped
/// silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SerializeError {
    #[error("cannot parse `{text}` as {target:?} for field `{field}`")]
    Parse {
        field: String,
        target: TypeId,
        text: String,
    },
    #[error(transparent)]
    Meta(#[from] MetaError),
}

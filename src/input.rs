//! Comment body resolution

use crate::error::Result;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Use `explicit` if given, otherwise read `reader` to end-of-stream.
///
/// The stream content is returned unmodified, trailing newline included.
pub async fn resolve_comment<R>(explicit: Option<String>, mut reader: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    if let Some(body) = explicit {
        return Ok(body);
    }

    let mut body = String::new();
    reader.read_to_string(&mut body).await?;
    Ok(body)
}

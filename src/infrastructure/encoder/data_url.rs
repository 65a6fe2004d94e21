use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio::io::{AsyncRead, AsyncReadExt};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Builds a `data:<mime>;base64,<payload>` string from raw image bytes.
///
/// The MIME type is sniffed from the bytes; `mime_hint` (e.g. the
/// multipart field's declared content type) is used when sniffing fails.
/// No size limit is enforced: records store their images inline, which is
/// a known scalability ceiling of this design rather than a bug.
pub fn encode_data_url(mime_hint: Option<&str>, bytes: &[u8]) -> String {
    let mime = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .or(mime_hint)
        .unwrap_or(FALLBACK_MIME);

    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:") && value.contains(";base64,")
}

/// Outcome of a generation-keyed read. A read that finished after a newer
/// one started is `Superseded`; its result is dropped here rather than
/// handed back, so a late completion can never overwrite a newer
/// selection.
#[derive(Debug, PartialEq)]
pub enum EncodeOutcome {
    Encoded(String),
    Superseded,
}

/// Asynchronous, cancelable file-to-data-URL conversion.
///
/// Each call to [`read_to_data_url`](ImageEncoder::read_to_data_url)
/// bumps a generation counter before suspending on the read. When the
/// read completes, the result only wins if no newer read has started in
/// the meantime.
#[derive(Default)]
pub struct ImageEncoder {
    generation: AtomicU64,
}

impl ImageEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read_to_data_url<R>(
        &self,
        mime_hint: Option<&str>,
        mut reader: R,
    ) -> std::io::Result<EncodeOutcome>
    where
        R: AsyncRead + Unpin,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Ok(EncodeOutcome::Superseded);
        }

        Ok(EncodeOutcome::Encoded(encode_data_url(mime_hint, &bytes)))
    }
}

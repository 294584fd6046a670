use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::error::ClipboardError;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// The OS clipboard.
///
/// The handle is kept alive for the lifetime of the app: on X11 the copied
/// text is only served while its owner exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))?;

            if guard.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                *guard = Some(clipboard);
            }

            match guard.as_mut() {
                Some(clipboard) => clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::Write(e.to_string())),
                None => Err(ClipboardError::Unavailable("no clipboard".into())),
            }
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
    }
}

use super::HostPlatform;
use crate::{Error, Result};
use receiptgen_types::UserId;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};

type CloseHook = Box<dyn Fn() + Send + Sync>;

#[derive(Debug, Deserialize)]
struct InitDataUser {
    id: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeParams {
    #[serde(default)]
    bg_color: Option<String>,
}

/// Host built from Telegram-style launch data.
///
/// `init_data` is the URL-encoded string the chat client passes to the mini
/// app (its `user` field is a JSON object with an `id`); `theme_params` is the
/// JSON theme object (`bg_color`, ...).
pub struct InitDataHost {
    user_id: Option<UserId>,
    theme_background: Option<String>,
    close_hook: Option<CloseHook>,
    ready: AtomicBool,
    expanded: AtomicBool,
    closed: AtomicBool,
}

impl InitDataHost {
    pub fn parse(init_data: &str, theme_params: Option<&str>) -> Result<Self> {
        let user_id = parse_user(init_data)?;
        let theme_background = match theme_params {
            Some(raw) if !raw.trim().is_empty() => {
                let params: ThemeParams = serde_json::from_str(raw)
                    .map_err(|e| Error::InitData(format!("theme params: {}", e)))?;
                params.bg_color
            }
            _ => None,
        };

        Ok(Self {
            user_id,
            theme_background,
            close_hook: None,
            ready: AtomicBool::new(false),
            expanded: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        })
    }

    /// Called when the mini app asks to be closed
    pub fn with_close_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.close_hook = Some(Box::new(hook));
        self
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

fn parse_user(init_data: &str) -> Result<Option<UserId>> {
    let query = init_data.trim().trim_start_matches('?');
    let Some((_, raw_user)) =
        url::form_urlencoded::parse(query.as_bytes()).find(|(key, _)| key == "user")
    else {
        return Ok(None);
    };

    let user: InitDataUser = serde_json::from_str(&raw_user)
        .map_err(|e| Error::InitData(format!("user: {}", e)))?;
    Ok(Some(UserId::Numeric(user.id)))
}

impl HostPlatform for InitDataHost {
    fn ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
        tracing::debug!("host: ready");
    }

    fn expand(&self) {
        self.expanded.store(true, Ordering::SeqCst);
        tracing::debug!("host: expand");
    }

    fn theme_background(&self) -> Option<String> {
        self.theme_background.clone()
    }

    fn authenticated_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        tracing::info!("host: close requested");
        if let Some(hook) = &self.close_hook {
            hook();
        }
    }
}

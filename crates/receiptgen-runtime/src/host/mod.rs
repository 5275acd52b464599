//! Host platform capability and identity resolution.
//!
//! The mini app can run embedded in a chat host that supplies the user id,
//! a theme and view lifecycle controls, or standalone with only the launch
//! query. Running without a host is a supported mode, not a failure.

mod init_data;

pub use init_data::InitDataHost;

use receiptgen_types::{HostIdentity, UserId};
use std::sync::Arc;

/// Background applied when the host exposes no theme colour
pub const DEFAULT_THEME_BACKGROUND: &str = "#ffffff";

/// Query parameter carrying the fallback user id
pub const USER_ID_PARAM: &str = "user_id";

/// Lifecycle and context surface of the embedding chat host
pub trait HostPlatform: Send + Sync {
    /// Signals that the view finished loading
    fn ready(&self);

    /// Asks the host to give the view its full height
    fn expand(&self);

    /// Theme background colour (`#rrggbb`)
    fn theme_background(&self) -> Option<String>;

    /// Id of the user authenticated by the host
    fn authenticated_user_id(&self) -> Option<UserId>;

    /// Asks the host to close the view
    fn close(&self);
}

/// Resolves [`HostIdentity`] once at startup
pub struct HostContextAdapter {
    host: Option<Arc<dyn HostPlatform>>,
}

impl HostContextAdapter {
    pub fn new(host: Option<Arc<dyn HostPlatform>>) -> Self {
        Self { host }
    }

    pub fn host(&self) -> Option<&Arc<dyn HostPlatform>> {
        self.host.as_ref()
    }

    /// Reads the fallback id from `launch_query`, then performs the host
    /// handshake; a host-authenticated id overrides the query id.
    pub fn resolve(&self, launch_query: Option<&str>) -> HostIdentity {
        let query_id = launch_query.and_then(user_id_from_query);

        let Some(host) = &self.host else {
            tracing::debug!(
                has_query_id = query_id.is_some(),
                "no host platform, using launch query"
            );
            return HostIdentity {
                user_id: query_id,
                theme_background: None,
            };
        };

        host.ready();
        host.expand();

        let theme_background = host
            .theme_background()
            .unwrap_or_else(|| DEFAULT_THEME_BACKGROUND.to_string());

        let user_id = match host.authenticated_user_id() {
            Some(id) => {
                if query_id.as_ref().is_some_and(|q| q != &id) {
                    tracing::debug!("host user id overrides launch query id");
                }
                Some(id)
            }
            None => query_id,
        };

        HostIdentity {
            user_id,
            theme_background: Some(theme_background),
        }
    }
}

/// Extracts `user_id` from a full launch URL or a bare query string
pub fn user_id_from_query(launch: &str) -> Option<UserId> {
    let launch = launch.trim();
    let value = match url::Url::parse(launch) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == USER_ID_PARAM)
            .map(|(_, value)| value.into_owned()),
        Err(_) => {
            let query = launch.trim_start_matches('?');
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == USER_ID_PARAM)
                .map(|(_, value)| value.into_owned())
        }
    }?;

    UserId::from_query(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeHost {
        user_id: Option<UserId>,
        theme: Option<String>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl HostPlatform for FakeHost {
        fn ready(&self) {
            self.calls.lock().unwrap().push("ready");
        }

        fn expand(&self) {
            self.calls.lock().unwrap().push("expand");
        }

        fn theme_background(&self) -> Option<String> {
            self.theme.clone()
        }

        fn authenticated_user_id(&self) -> Option<UserId> {
            self.user_id.clone()
        }

        fn close(&self) {
            self.calls.lock().unwrap().push("close");
        }
    }

    #[test]
    fn test_query_id_from_full_url() {
        assert_eq!(
            user_id_from_query("https://mini.app/index?user_id=12345&x=1"),
            Some(UserId::Text("12345".to_string()))
        );
    }

    #[test]
    fn test_query_id_from_bare_query() {
        assert_eq!(
            user_id_from_query("?foo=bar&user_id=99"),
            Some(UserId::Text("99".to_string()))
        );
        assert_eq!(
            user_id_from_query("user_id=abc%20def"),
            Some(UserId::Text("abc def".to_string()))
        );
    }

    #[test]
    fn test_missing_or_blank_query_id() {
        assert_eq!(user_id_from_query("https://mini.app/index"), None);
        assert_eq!(user_id_from_query("user_id="), None);
        assert_eq!(user_id_from_query(""), None);
    }

    #[test]
    fn test_resolve_without_host_uses_query() {
        let adapter = HostContextAdapter::new(None);
        let identity = adapter.resolve(Some("user_id=5"));
        assert_eq!(identity.user_id, Some(UserId::Text("5".to_string())));
        assert_eq!(identity.theme_background, None);
    }

    #[test]
    fn test_resolve_without_host_or_query_is_not_an_error() {
        let identity = HostContextAdapter::new(None).resolve(None);
        assert_eq!(identity, HostIdentity::default());
    }

    #[test]
    fn test_host_id_overrides_query_id() {
        let host = Arc::new(FakeHost {
            user_id: Some(UserId::Numeric(777)),
            theme: Some("#17212b".to_string()),
            ..Default::default()
        });
        let adapter = HostContextAdapter::new(Some(host.clone()));

        let identity = adapter.resolve(Some("user_id=5"));
        assert_eq!(identity.user_id, Some(UserId::Numeric(777)));
        assert_eq!(identity.theme_background.as_deref(), Some("#17212b"));
        assert_eq!(*host.calls.lock().unwrap(), vec!["ready", "expand"]);
    }

    #[test]
    fn test_host_without_user_falls_back_to_query() {
        let host = Arc::new(FakeHost::default());
        let adapter = HostContextAdapter::new(Some(host));

        let identity = adapter.resolve(Some("user_id=5"));
        assert_eq!(identity.user_id, Some(UserId::Text("5".to_string())));
        assert_eq!(
            identity.theme_background.as_deref(),
            Some(DEFAULT_THEME_BACKGROUND)
        );
    }
}

use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Name of the optional global the server template can set before the wasm
/// module loads, e.g. `window.CUSTOMER_APP_CONFIG = { toast_delay_ms: 5000 }`.
pub(crate) const CONFIG_GLOBAL: &str = "CUSTOMER_APP_CONFIG";

/// Marker replaced with the customer name in the delete prompt.
pub(crate) const NAME_PLACEHOLDER: &str = "{name}";

/// User-facing strings. Defaults are the zh-CN texts the pages ship with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub delete_confirm: String,
    pub invalid_phone: String,
    pub invalid_email: String,
    pub copied: String,
    pub copy_failed: String,
    pub loading: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            delete_confirm: "确定要删除顾客\"{name}\"吗？此操作不可撤销。".to_string(),
            invalid_phone: "请输入正确的手机号格式（以1开头的11位数字）".to_string(),
            invalid_email: "请输入正确的邮箱格式".to_string(),
            copied: "内容已复制到剪贴板".to_string(),
            copy_failed: "复制失败，请手动复制".to_string(),
            loading: "加载中...".to_string(),
        }
    }
}

impl Messages {
    pub fn delete_prompt(&self, customer_name: &str) -> String {
        self.delete_confirm.replace(NAME_PLACEHOLDER, customer_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Collection path the delete endpoint hangs off: `{customers_path}/{id}/delete`.
    pub customers_path: String,
    pub toast_delay_ms: u32,
    pub search_debounce_ms: u32,
    /// One of `trace`, `debug`, `info`, `warn`, `error`. Unset means `debug`
    /// for debug builds and `info` otherwise.
    pub log_level: Option<String>,
    pub messages: Messages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            customers_path: "/customers".to_string(),
            toast_delay_ms: 3000,
            search_debounce_ms: 300,
            log_level: None,
            messages: Messages::default(),
        }
    }
}

thread_local! {
    static CURRENT: std::cell::OnceCell<Rc<PageConfig>> = const { std::cell::OnceCell::new() };
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `window.CUSTOMER_APP_CONFIG`. A missing global yields the
    /// defaults; a malformed one is an error.
    pub fn from_window() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let Some(raw) = window.get(CONFIG_GLOBAL) else {
            return Ok(Self::default());
        };
        if raw.is_undefined() || raw.is_null() || !raw.is_object() {
            return Ok(Self::default());
        }

        let json = String::from(js_sys::JSON::stringify(&raw)?);
        Self::from_json(&json)
    }

    /// Makes `config` the page config unless one was already loaded; returns
    /// whichever is in effect.
    pub fn set_current(config: PageConfig) -> Rc<PageConfig> {
        CURRENT.with(|cell| cell.get_or_init(|| Rc::new(config)).clone())
    }

    /// The config for this page, loaded on first use.
    pub fn current() -> Rc<PageConfig> {
        CURRENT.with(|cell| {
            cell.get_or_init(|| match Self::from_window() {
                Ok(cfg) => Rc::new(cfg),
                Err(e) => {
                    tracing::warn!("falling back to default page config: {e}");
                    Rc::new(Self::default())
                }
            })
            .clone()
        })
    }

    pub fn delete_action(&self, customer_id: &str) -> String {
        format!(
            "{}/{}/delete",
            self.customers_path.trim_end_matches('/'),
            urlencoding::encode(customer_id)
        )
    }

    pub fn max_log_level(&self) -> tracing::Level {
        let fallback = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        self.log_level
            .as_deref()
            .and_then(|s| s.trim().parse::<tracing::Level>().ok())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = PageConfig::from_json(r#"{"toast_delay_ms": 5000}"#).expect("should parse");
        assert_eq!(cfg.toast_delay_ms, 5000);
        assert_eq!(cfg.search_debounce_ms, 300);
        assert_eq!(cfg.customers_path, "/customers");
        assert_eq!(cfg.messages, Messages::default());
    }

    #[test]
    fn test_partial_messages_keep_defaults() {
        let cfg = PageConfig::from_json(r#"{"messages": {"copied": "Copied"}}"#)
            .expect("should parse");
        assert_eq!(cfg.messages.copied, "Copied");
        assert_eq!(cfg.messages.loading, Messages::default().loading);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = PageConfig::from_json(r#"{"toast_delay_ms": "soon"}"#);
        assert!(matches!(err, Err(PageError::Config(_))));
    }

    #[test]
    fn test_delete_action_default_path() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.delete_action("42"), "/customers/42/delete");
    }

    #[test]
    fn test_delete_action_encodes_id_and_trims_slash() {
        let cfg = PageConfig {
            customers_path: "/admin/customers/".to_string(),
            ..PageConfig::default()
        };
        assert_eq!(cfg.delete_action("a/b"), "/admin/customers/a%2Fb/delete");
    }

    #[test]
    fn test_delete_prompt_names_customer() {
        let m = Messages {
            delete_confirm: "Delete \"{name}\"?".to_string(),
            ..Messages::default()
        };
        assert_eq!(m.delete_prompt("Alice"), "Delete \"Alice\"?");
        assert!(Messages::default().delete_prompt("Alice").contains("\"Alice\""));
    }

    #[test]
    fn test_log_level_parsing() {
        let cfg = PageConfig {
            log_level: Some("warn".to_string()),
            ..PageConfig::default()
        };
        assert_eq!(cfg.max_log_level(), tracing::Level::WARN);

        let cfg = PageConfig {
            log_level: Some("loud".to_string()),
            ..PageConfig::default()
        };
        let expected = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        assert_eq!(cfg.max_log_level(), expected);
        assert_eq!(PageConfig::default().max_log_level(), expected);
    }
}

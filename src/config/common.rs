use serde::{Deserialize, Serialize};

/// Settings shared by every account. Only a subset of these fields is
/// exposed in the editor; the rest must survive a load/save cycle
/// untouched, which is why reconcile always starts from a clone of the
/// persisted section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    pub check_update_on_start: bool,
    pub auto_update_on_start: bool,
    pub force_use_portable_chrome: bool,
    pub run_in_headless_mode: bool,
    pub try_auto_bind_new_activity: bool,
    pub majieluo_send_card_target_qq: String,
    pub auto_send_card_target_qqs: Vec<String>,
    pub log_level: String,
    pub http_timeout: i64,
    pub login: LoginConfig,
    pub retry: RetryConfig,
    pub xinyue: XinYueConfig,
    pub fixed_teams: Vec<FixedTeamConfig>,
    // Not shown in the editor, only edited by hand in config.toml.
    pub check_update_on_end: bool,
    pub enable_multiprocessing: bool,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            check_update_on_start: true,
            auto_update_on_start: false,
            force_use_portable_chrome: false,
            run_in_headless_mode: true,
            try_auto_bind_new_activity: true,
            majieluo_send_card_target_qq: String::new(),
            auto_send_card_target_qqs: Vec::new(),
            log_level: "info".to_string(),
            http_timeout: 10,
            login: LoginConfig::default(),
            retry: RetryConfig::default(),
            xinyue: XinYueConfig::default(),
            fixed_teams: vec![FixedTeamConfig::default(), FixedTeamConfig::default()],
            check_update_on_end: false,
            enable_multiprocessing: false,
            extra: toml::Table::new(),
        }
    }
}

pub const LOG_LEVELS: [&str; 5] = ["debug", "info", "warning", "error", "critical"];

/// Timeouts and retry counts for the automated login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub max_retry_count: i64,
    pub retry_wait_time: i64,
    pub open_url_wait_time: i64,
    pub load_page_timeout: i64,
    pub load_login_iframe_timeout: i64,
    pub login_timeout: i64,
    pub login_finished_timeout: i64,
    pub auto_resolve_captcha: bool,
    pub move_captcha_delta_width_rate: f64,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            max_retry_count: 3,
            retry_wait_time: 5,
            open_url_wait_time: 3,
            load_page_timeout: 60,
            load_login_iframe_timeout: 8,
            login_timeout: 600,
            login_finished_timeout: 600,
            auto_resolve_captcha: true,
            move_captcha_delta_width_rate: 0.2,
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub request_wait_time: i64,
    pub max_retry_count: i64,
    pub retry_wait_time: i64,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            request_wait_time: 1,
            max_retry_count: 5,
            retry_wait_time: 5,
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XinYueConfig {
    /// Earliest hour of day (0-23) at which xinyue tasks are submitted.
    pub submit_task_after: i64,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for XinYueConfig {
    fn default() -> Self {
        Self {
            submit_task_after: 0,
            extra: toml::Table::new(),
        }
    }
}

/// A fixed xinyue battleground team. The id is purely a local label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedTeamConfig {
    pub enable: bool,
    pub id: String,
    pub members: Vec<String>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for FixedTeamConfig {
    fn default() -> Self {
        Self {
            enable: false,
            id: String::new(),
            members: Vec::new(),
            extra: toml::Table::new(),
        }
    }
}

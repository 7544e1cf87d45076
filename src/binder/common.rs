use super::reconcile_by_position;
use crate::config::common::{
    CommonConfig, FixedTeamConfig, LoginConfig, RetryConfig, XinYueConfig, LOG_LEVELS,
};
use crate::widget::{
    codec::{list_to_str, str_to_list, validate_numeric_list},
    Checkbox, ComboBox, DoubleSpinBox, LineEdit, SpinBox,
};

const SPIN_MAX: i64 = 99999;

/// Widget state for the common tab.
#[derive(Debug)]
pub struct CommonBinding {
    pub check_update_on_start: Checkbox,
    pub auto_update_on_start: Checkbox,
    pub force_use_portable_chrome: Checkbox,
    pub run_in_headless_mode: Checkbox,
    pub try_auto_bind_new_activity: Checkbox,
    pub majieluo_send_card_target_qq: LineEdit,
    pub auto_send_card_target_qqs: LineEdit,
    pub log_level: ComboBox,
    pub http_timeout: SpinBox,
    pub login: LoginBinding,
    pub retry: RetryBinding,
    pub xinyue: XinYueBinding,
    pub fixed_teams: Vec<FixedTeamBinding>,
}

impl CommonBinding {
    pub fn project(cfg: &CommonConfig) -> Self {
        Self {
            check_update_on_start: Checkbox::new(cfg.check_update_on_start),
            auto_update_on_start: Checkbox::new(cfg.auto_update_on_start),
            force_use_portable_chrome: Checkbox::new(cfg.force_use_portable_chrome),
            run_in_headless_mode: Checkbox::new(cfg.run_in_headless_mode),
            try_auto_bind_new_activity: Checkbox::new(cfg.try_auto_bind_new_activity),
            majieluo_send_card_target_qq: LineEdit::new(
                &cfg.majieluo_send_card_target_qq,
                "QQ number",
            ),
            auto_send_card_target_qqs: LineEdit::new(
                &list_to_str(&cfg.auto_send_card_target_qqs),
                "comma-separated QQ numbers, e.g. 123, 456, 789",
            )
            .with_validator(validate_numeric_list),
            log_level: ComboBox::new(
                &cfg.log_level,
                LOG_LEVELS.iter().map(|l| l.to_string()).collect(),
            ),
            http_timeout: SpinBox::new(cfg.http_timeout, 0, SPIN_MAX),
            login: LoginBinding::project(&cfg.login),
            retry: RetryBinding::project(&cfg.retry),
            xinyue: XinYueBinding::project(&cfg.xinyue),
            fixed_teams: cfg.fixed_teams.iter().map(FixedTeamBinding::project).collect(),
        }
    }

    pub fn reconcile(&self, base: &CommonConfig) -> CommonConfig {
        let mut cfg = base.clone();

        cfg.check_update_on_start = self.check_update_on_start.is_checked();
        cfg.auto_update_on_start = self.auto_update_on_start.is_checked();
        cfg.force_use_portable_chrome = self.force_use_portable_chrome.is_checked();
        cfg.run_in_headless_mode = self.run_in_headless_mode.is_checked();
        cfg.try_auto_bind_new_activity = self.try_auto_bind_new_activity.is_checked();
        cfg.majieluo_send_card_target_qq = self.majieluo_send_card_target_qq.text().to_string();
        // An invalid list keeps the persisted value; the error stays visible
        // at the field and the rest of the form saves normally.
        if self.auto_send_card_target_qqs.validate().is_ok() {
            cfg.auto_send_card_target_qqs = str_to_list(self.auto_send_card_target_qqs.text());
        }
        cfg.log_level = self.log_level.current().to_string();
        cfg.http_timeout = self.http_timeout.value();

        cfg.login = self.login.reconcile(&base.login);
        cfg.retry = self.retry.reconcile(&base.retry);
        cfg.xinyue = self.xinyue.reconcile(&base.xinyue);
        cfg.fixed_teams =
            reconcile_by_position(&self.fixed_teams, &base.fixed_teams, FixedTeamBinding::reconcile);

        cfg
    }
}

#[derive(Debug)]
pub struct LoginBinding {
    pub max_retry_count: SpinBox,
    pub retry_wait_time: SpinBox,
    pub open_url_wait_time: SpinBox,
    pub load_page_timeout: SpinBox,
    pub load_login_iframe_timeout: SpinBox,
    pub login_timeout: SpinBox,
    pub login_finished_timeout: SpinBox,
    pub auto_resolve_captcha: Checkbox,
    pub move_captcha_delta_width_rate: DoubleSpinBox,
}

impl LoginBinding {
    pub fn project(cfg: &LoginConfig) -> Self {
        Self {
            max_retry_count: SpinBox::new(cfg.max_retry_count, 0, SPIN_MAX),
            retry_wait_time: SpinBox::new(cfg.retry_wait_time, 0, SPIN_MAX),
            open_url_wait_time: SpinBox::new(cfg.open_url_wait_time, 0, SPIN_MAX),
            load_page_timeout: SpinBox::new(cfg.load_page_timeout, 0, SPIN_MAX),
            load_login_iframe_timeout: SpinBox::new(cfg.load_login_iframe_timeout, 0, SPIN_MAX),
            login_timeout: SpinBox::new(cfg.login_timeout, 0, SPIN_MAX),
            login_finished_timeout: SpinBox::new(cfg.login_finished_timeout, 0, SPIN_MAX),
            auto_resolve_captcha: Checkbox::new(cfg.auto_resolve_captcha),
            move_captcha_delta_width_rate: DoubleSpinBox::new(
                cfg.move_captcha_delta_width_rate,
                0.0,
                1.0,
                0.01,
            ),
        }
    }

    pub fn reconcile(&self, base: &LoginConfig) -> LoginConfig {
        let mut cfg = base.clone();

        cfg.max_retry_count = self.max_retry_count.value();
        cfg.retry_wait_time = self.retry_wait_time.value();
        cfg.open_url_wait_time = self.open_url_wait_time.value();
        cfg.load_page_timeout = self.load_page_timeout.value();
        cfg.load_login_iframe_timeout = self.load_login_iframe_timeout.value();
        cfg.login_timeout = self.login_timeout.value();
        cfg.login_finished_timeout = self.login_finished_timeout.value();
        cfg.auto_resolve_captcha = self.auto_resolve_captcha.is_checked();
        cfg.move_captcha_delta_width_rate = self.move_captcha_delta_width_rate.value();

        cfg
    }
}

#[derive(Debug)]
pub struct RetryBinding {
    pub request_wait_time: SpinBox,
    pub max_retry_count: SpinBox,
    pub retry_wait_time: SpinBox,
}

impl RetryBinding {
    pub fn project(cfg: &RetryConfig) -> Self {
        Self {
            request_wait_time: SpinBox::new(cfg.request_wait_time, 0, SPIN_MAX),
            max_retry_count: SpinBox::new(cfg.max_retry_count, 0, SPIN_MAX),
            retry_wait_time: SpinBox::new(cfg.retry_wait_time, 0, SPIN_MAX),
        }
    }

    pub fn reconcile(&self, base: &RetryConfig) -> RetryConfig {
        let mut cfg = base.clone();

        cfg.request_wait_time = self.request_wait_time.value();
        cfg.max_retry_count = self.max_retry_count.value();
        cfg.retry_wait_time = self.retry_wait_time.value();

        cfg
    }
}

#[derive(Debug)]
pub struct XinYueBinding {
    /// Hour of day, edited as a choice of "0".."23".
    pub submit_task_after: ComboBox,
}

impl XinYueBinding {
    pub fn project(cfg: &XinYueConfig) -> Self {
        Self {
            submit_task_after: ComboBox::new(
                &cfg.submit_task_after.to_string(),
                (0..24).map(|hour| hour.to_string()).collect(),
            ),
        }
    }

    pub fn reconcile(&self, base: &XinYueConfig) -> XinYueConfig {
        let mut cfg = base.clone();

        cfg.submit_task_after = self.submit_task_after.current().parse().unwrap_or(0);

        cfg
    }
}

#[derive(Debug)]
pub struct FixedTeamBinding {
    pub enable: Checkbox,
    pub id: LineEdit,
    pub members: LineEdit,
}

impl FixedTeamBinding {
    pub fn project(cfg: &FixedTeamConfig) -> Self {
        Self {
            enable: Checkbox::new(cfg.enable),
            id: LineEdit::new(&cfg.id, "team id, only used locally"),
            members: LineEdit::new(
                &list_to_str(&cfg.members),
                "exactly three members, all present in the account list",
            )
            .with_validator(validate_numeric_list),
        }
    }

    pub fn reconcile(&self, base: &FixedTeamConfig) -> FixedTeamConfig {
        let mut cfg = base.clone();

        cfg.enable = self.enable.is_checked();
        cfg.id = self.id.text().to_string();
        if self.members.validate().is_ok() {
            cfg.members = str_to_list(self.members.text());
        }

        cfg
    }
}

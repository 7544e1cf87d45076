use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-account configuration. Repeated under the document root; order is
/// the only identity used at save time, the name is just an operator-facing
/// label for the add/remove prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub enable: bool,
    pub name: String,
    pub login_mode: String,
    pub cannot_bind_dnf: bool,
    pub account_info: AccountInfoConfig,
    pub function_switches: FunctionSwitchesConfig,
    pub mobile_game_role_info: MobileGameRoleInfoConfig,
    pub exchange_items: Vec<ExchangeItemConfig>,
    pub ark_lottery: ArkLotteryConfig,
    pub vip_mentor: VipMentorConfig,
    pub dnf_helper_info: DnfHelperInfoConfig,
    pub hello_voice: HelloVoiceInfoConfig,
    pub firecrackers: FirecrackersConfig,
    pub drift_send_qq_list: Vec<String>,
    pub spring_fudai_receiver_qq_list: Vec<String>,
    pub enable_firecrackers_invite_friend: bool,
    pub enable_majieluo_invite_friend: bool,
    pub dnf_bbs_formhash: String,
    pub dnf_bbs_cookie: String,
    /// Signing token attached at runtime by the helper. Session-only,
    /// never persisted.
    #[serde(skip)]
    pub djc_sign: Option<String>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

pub const LOGIN_MODE_BY_HAND: &str = "by_hand";
pub const LOGIN_MODE_QR: &str = "qr_login";
pub const LOGIN_MODE_AUTO: &str = "auto_login";

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            enable: true,
            name: String::new(),
            login_mode: LOGIN_MODE_QR.to_string(),
            cannot_bind_dnf: false,
            account_info: AccountInfoConfig::default(),
            function_switches: FunctionSwitchesConfig::default(),
            mobile_game_role_info: MobileGameRoleInfoConfig::default(),
            exchange_items: default_exchange_items(),
            ark_lottery: ArkLotteryConfig::default(),
            vip_mentor: VipMentorConfig::default(),
            dnf_helper_info: DnfHelperInfoConfig::default(),
            hello_voice: HelloVoiceInfoConfig::default(),
            firecrackers: FirecrackersConfig::default(),
            drift_send_qq_list: Vec::new(),
            spring_fudai_receiver_qq_list: Vec::new(),
            enable_firecrackers_invite_friend: false,
            enable_majieluo_invite_friend: false,
            dnf_bbs_formhash: String::new(),
            dnf_bbs_cookie: String::new(),
            djc_sign: None,
            extra: toml::Table::new(),
        }
    }
}

fn default_exchange_items() -> Vec<ExchangeItemConfig> {
    vec![
        ExchangeItemConfig::new("111", "Premium Outfit Voucher"),
        ExchangeItemConfig::new("753", "Equipment Upgrade Box"),
        ExchangeItemConfig::new("755", "Fatigue Recovery Potion"),
    ]
}

/// Credentials for the password auto-login mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfoConfig {
    pub account: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// One switch per supported activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionSwitchesConfig {
    pub disable_most_activities: bool,

    // Activities that only need the plain skey.
    pub get_djc: bool,
    pub make_wish: bool,
    pub get_xinyue: bool,
    pub get_credit_xinyue_gift: bool,
    pub get_heizuan_gift: bool,
    pub get_dnf_shanguang: bool,
    pub get_qq_video: bool,
    pub get_youfei: bool,
    pub get_dnf_helper_chronicle: bool,
    pub get_dnf_helper: bool,
    pub get_hello_voice: bool,
    pub get_dnf_welfare: bool,
    pub get_majieluo: bool,
    pub get_dnf_bbs_signin: bool,
    pub get_dnf_spring: bool,
    pub get_wegame_spring: bool,
    pub get_spring_fudai: bool,
    pub get_spring_collection: bool,
    pub get_firecrackers: bool,

    // Activities that need the QQ-space pskey.
    pub get_ark_lottery: bool,
    pub get_vip_mentor: bool,

    // Activities that need the safety-guard pskey.
    pub get_guanjia: bool,

    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for FunctionSwitchesConfig {
    fn default() -> Self {
        Self {
            disable_most_activities: false,
            get_djc: true,
            make_wish: true,
            get_xinyue: true,
            get_credit_xinyue_gift: true,
            get_heizuan_gift: true,
            get_dnf_shanguang: true,
            get_qq_video: true,
            get_youfei: true,
            get_dnf_helper_chronicle: true,
            get_dnf_helper: true,
            get_hello_voice: true,
            get_dnf_welfare: true,
            get_majieluo: true,
            get_dnf_bbs_signin: true,
            get_dnf_spring: true,
            get_wegame_spring: true,
            get_spring_fudai: true,
            get_spring_collection: true,
            get_firecrackers: true,
            get_ark_lottery: true,
            get_vip_mentor: true,
            get_guanjia: true,
            extra: toml::Table::new(),
        }
    }
}

/// Which mobile game counts for the gift-master task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileGameRoleInfoConfig {
    pub game_name: String,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for MobileGameRoleInfoConfig {
    fn default() -> Self {
        Self {
            game_name: "Any".to_string(),
            extra: toml::Table::new(),
        }
    }
}

/// One djc mall exchange entry. Only the count is editable; id and name
/// identify the goods and are kept as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeItemConfig {
    pub id: String,
    pub name: String,
    pub count: i64,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ExchangeItemConfig {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            count: 0,
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArkLotteryConfig {
    pub lucky_dnf_server_id: String,
    pub lucky_dnf_role_id: String,
    pub need_take_awards: bool,
    /// Keyed by act id so the choice does not leak across reruns of the
    /// card activity. The editor binds only the entry for the current act.
    pub act_id_to_cost_all_cards_and_do_lottery: BTreeMap<String, bool>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VipMentorConfig {
    pub take_index: i64,
    pub guanhuai_dnf_server_id: String,
    pub guanhuai_dnf_role_id: String,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for VipMentorConfig {
    fn default() -> Self {
        Self {
            take_index: 1,
            guanhuai_dnf_server_id: String::new(),
            guanhuai_dnf_role_id: String::new(),
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnfHelperInfoConfig {
    pub user_id: String,
    pub nick_name: String,
    pub token: String,
    pub chronicle_lottery: bool,
    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloVoiceInfoConfig {
    pub hello_id: String,
    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirecrackersConfig {
    pub enable_lottery: bool,
    #[serde(flatten)]
    pub extra: toml::Table,
}

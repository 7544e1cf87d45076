use super::reconcile_by_position;
use crate::config::account::{
    AccountConfig, AccountInfoConfig, ArkLotteryConfig, DnfHelperInfoConfig, ExchangeItemConfig,
    FirecrackersConfig, FunctionSwitchesConfig, HelloVoiceInfoConfig, MobileGameRoleInfoConfig,
    VipMentorConfig, LOGIN_MODE_AUTO, LOGIN_MODE_BY_HAND, LOGIN_MODE_QR,
};
use crate::game_info::{dnf_server_bidict, mobile_game_choices, ARK_LOTTERY_ACT_ID};
use crate::widget::{
    codec::{list_to_str, str_to_list, validate_numeric_list},
    BiDict, Checkbox, ComboBox, LineEdit, SpinBox,
};

/// Login mode token <-> label mapping. Persisted documents may carry an
/// unknown token, which displays as the QR mode.
pub fn login_mode_bidict() -> BiDict {
    BiDict::new(
        &[
            (LOGIN_MODE_BY_HAND, "Manual login"),
            (LOGIN_MODE_QR, "QR code / avatar login"),
            (LOGIN_MODE_AUTO, "Password auto login"),
        ],
        "QR code / avatar login",
    )
}

/// Widget state for one account tab.
#[derive(Debug)]
pub struct AccountBinding {
    pub enable: Checkbox,
    pub name: LineEdit,
    pub cannot_bind_dnf: Checkbox,
    pub login_mode: ComboBox,
    pub account_info: AccountInfoBinding,
    pub mobile_game_role_info: MobileGameRoleInfoBinding,
    pub exchange_items: Vec<ExchangeItemBinding>,
    pub ark_lottery: ArkLotteryBinding,
    pub vip_mentor: VipMentorBinding,
    pub dnf_helper_info: DnfHelperInfoBinding,
    pub hello_voice: HelloVoiceInfoBinding,
    pub firecrackers: FirecrackersBinding,
    pub drift_send_qq_list: LineEdit,
    pub spring_fudai_receiver_qq_list: LineEdit,
    pub enable_firecrackers_invite_friend: Checkbox,
    pub enable_majieluo_invite_friend: Checkbox,
    pub dnf_bbs_formhash: LineEdit,
    pub dnf_bbs_cookie: LineEdit,
    pub function_switches: FunctionSwitchesBinding,
}

impl AccountBinding {
    pub fn project(cfg: &AccountConfig) -> Self {
        let modes = login_mode_bidict();

        Self {
            enable: Checkbox::new(cfg.enable),
            name: LineEdit::new(&cfg.name, "account label, must be unique"),
            cannot_bind_dnf: Checkbox::new(cfg.cannot_bind_dnf),
            login_mode: ComboBox::new(modes.to_display(&cfg.login_mode), modes.labels()),
            account_info: AccountInfoBinding::project(&cfg.account_info),
            mobile_game_role_info: MobileGameRoleInfoBinding::project(&cfg.mobile_game_role_info),
            exchange_items: cfg.exchange_items.iter().map(ExchangeItemBinding::project).collect(),
            ark_lottery: ArkLotteryBinding::project(&cfg.ark_lottery),
            vip_mentor: VipMentorBinding::project(&cfg.vip_mentor),
            dnf_helper_info: DnfHelperInfoBinding::project(&cfg.dnf_helper_info),
            hello_voice: HelloVoiceInfoBinding::project(&cfg.hello_voice),
            firecrackers: FirecrackersBinding::project(&cfg.firecrackers),
            drift_send_qq_list: LineEdit::new(
                &list_to_str(&cfg.drift_send_qq_list),
                "comma-separated QQ numbers, e.g. 123, 456, 789",
            )
            .with_validator(validate_numeric_list),
            spring_fudai_receiver_qq_list: LineEdit::new(
                &list_to_str(&cfg.spring_fudai_receiver_qq_list),
                "comma-separated QQ numbers, e.g. 123, 456, 789",
            )
            .with_validator(validate_numeric_list),
            enable_firecrackers_invite_friend: Checkbox::new(cfg.enable_firecrackers_invite_friend),
            enable_majieluo_invite_friend: Checkbox::new(cfg.enable_majieluo_invite_friend),
            dnf_bbs_formhash: LineEdit::new(&cfg.dnf_bbs_formhash, "e.g. 8df1d678"),
            dnf_bbs_cookie: LineEdit::new(&cfg.dnf_bbs_cookie, "full forum request cookie"),
            function_switches: FunctionSwitchesBinding::project(&cfg.function_switches),
        }
    }

    /// The operator-facing identity used by the add/remove commands.
    pub fn display_name(&self) -> &str {
        self.name.text()
    }

    /// Whether the credential fields apply for the currently chosen mode.
    pub fn uses_password_login(&self) -> bool {
        let modes = login_mode_bidict();
        modes.to_token(self.login_mode.current()).ok() == Some(LOGIN_MODE_AUTO)
    }

    pub fn reconcile(&self, base: &AccountConfig) -> AccountConfig {
        let mut cfg = base.clone();

        cfg.enable = self.enable.is_checked();
        cfg.name = self.name.text().to_string();
        let modes = login_mode_bidict();
        if let Ok(mode) = modes.to_token(self.login_mode.current()) {
            cfg.login_mode = mode.to_string();
        }
        cfg.cannot_bind_dnf = self.cannot_bind_dnf.is_checked();

        if self.drift_send_qq_list.validate().is_ok() {
            cfg.drift_send_qq_list = str_to_list(self.drift_send_qq_list.text());
        }
        if self.spring_fudai_receiver_qq_list.validate().is_ok() {
            cfg.spring_fudai_receiver_qq_list =
                str_to_list(self.spring_fudai_receiver_qq_list.text());
        }
        cfg.enable_firecrackers_invite_friend = self.enable_firecrackers_invite_friend.is_checked();
        cfg.enable_majieluo_invite_friend = self.enable_majieluo_invite_friend.is_checked();
        cfg.dnf_bbs_formhash = self.dnf_bbs_formhash.text().to_string();
        cfg.dnf_bbs_cookie = self.dnf_bbs_cookie.text().to_string();

        cfg.account_info = self.account_info.reconcile(&base.account_info);
        cfg.function_switches = self.function_switches.reconcile(&base.function_switches);
        cfg.mobile_game_role_info = self.mobile_game_role_info.reconcile(&base.mobile_game_role_info);
        cfg.exchange_items = reconcile_by_position(
            &self.exchange_items,
            &base.exchange_items,
            ExchangeItemBinding::reconcile,
        );
        cfg.ark_lottery = self.ark_lottery.reconcile(&base.ark_lottery);
        cfg.vip_mentor = self.vip_mentor.reconcile(&base.vip_mentor);
        cfg.dnf_helper_info = self.dnf_helper_info.reconcile(&base.dnf_helper_info);
        cfg.hello_voice = self.hello_voice.reconcile(&base.hello_voice);
        cfg.firecrackers = self.firecrackers.reconcile(&base.firecrackers);

        // Attached at runtime by the helper, must never reach the document.
        cfg.djc_sign = None;

        cfg
    }
}

#[derive(Debug)]
pub struct AccountInfoBinding {
    pub account: LineEdit,
    pub password: LineEdit,
    /// Render-side toggle for the hold-to-show-password button.
    pub reveal_password: bool,
}

impl AccountInfoBinding {
    pub fn project(cfg: &AccountInfoConfig) -> Self {
        Self {
            account: LineEdit::new(&cfg.account, "QQ account"),
            password: LineEdit::new(
                &cfg.password,
                "understand how auto login uses these credentials before filling this in",
            ),
            reveal_password: false,
        }
    }

    pub fn reconcile(&self, base: &AccountInfoConfig) -> AccountInfoConfig {
        let mut cfg = base.clone();

        cfg.account = self.account.text().to_string();
        cfg.password = self.password.text().to_string();

        cfg
    }
}

#[derive(Debug)]
pub struct FunctionSwitchesBinding {
    pub disable_most_activities: Checkbox,
    pub get_djc: Checkbox,
    pub make_wish: Checkbox,
    pub get_xinyue: Checkbox,
    pub get_credit_xinyue_gift: Checkbox,
    pub get_heizuan_gift: Checkbox,
    pub get_dnf_shanguang: Checkbox,
    pub get_qq_video: Checkbox,
    pub get_youfei: Checkbox,
    pub get_dnf_helper_chronicle: Checkbox,
    pub get_dnf_helper: Checkbox,
    pub get_hello_voice: Checkbox,
    pub get_dnf_welfare: Checkbox,
    pub get_majieluo: Checkbox,
    pub get_dnf_bbs_signin: Checkbox,
    pub get_dnf_spring: Checkbox,
    pub get_wegame_spring: Checkbox,
    pub get_spring_fudai: Checkbox,
    pub get_spring_collection: Checkbox,
    pub get_firecrackers: Checkbox,
    pub get_ark_lottery: Checkbox,
    pub get_vip_mentor: Checkbox,
    pub get_guanjia: Checkbox,
}

impl FunctionSwitchesBinding {
    pub fn project(cfg: &FunctionSwitchesConfig) -> Self {
        Self {
            disable_most_activities: Checkbox::new(cfg.disable_most_activities),
            get_djc: Checkbox::new(cfg.get_djc),
            make_wish: Checkbox::new(cfg.make_wish),
            get_xinyue: Checkbox::new(cfg.get_xinyue),
            get_credit_xinyue_gift: Checkbox::new(cfg.get_credit_xinyue_gift),
            get_heizuan_gift: Checkbox::new(cfg.get_heizuan_gift),
            get_dnf_shanguang: Checkbox::new(cfg.get_dnf_shanguang),
            get_qq_video: Checkbox::new(cfg.get_qq_video),
            get_youfei: Checkbox::new(cfg.get_youfei),
            get_dnf_helper_chronicle: Checkbox::new(cfg.get_dnf_helper_chronicle),
            get_dnf_helper: Checkbox::new(cfg.get_dnf_helper),
            get_hello_voice: Checkbox::new(cfg.get_hello_voice),
            get_dnf_welfare: Checkbox::new(cfg.get_dnf_welfare),
            get_majieluo: Checkbox::new(cfg.get_majieluo),
            get_dnf_bbs_signin: Checkbox::new(cfg.get_dnf_bbs_signin),
            get_dnf_spring: Checkbox::new(cfg.get_dnf_spring),
            get_wegame_spring: Checkbox::new(cfg.get_wegame_spring),
            get_spring_fudai: Checkbox::new(cfg.get_spring_fudai),
            get_spring_collection: Checkbox::new(cfg.get_spring_collection),
            get_firecrackers: Checkbox::new(cfg.get_firecrackers),
            get_ark_lottery: Checkbox::new(cfg.get_ark_lottery),
            get_vip_mentor: Checkbox::new(cfg.get_vip_mentor),
            get_guanjia: Checkbox::new(cfg.get_guanjia),
        }
    }

    pub fn reconcile(&self, base: &FunctionSwitchesConfig) -> FunctionSwitchesConfig {
        let mut cfg = base.clone();

        cfg.disable_most_activities = self.disable_most_activities.is_checked();
        cfg.get_djc = self.get_djc.is_checked();
        cfg.make_wish = self.make_wish.is_checked();
        cfg.get_xinyue = self.get_xinyue.is_checked();
        cfg.get_credit_xinyue_gift = self.get_credit_xinyue_gift.is_checked();
        cfg.get_heizuan_gift = self.get_heizuan_gift.is_checked();
        cfg.get_dnf_shanguang = self.get_dnf_shanguang.is_checked();
        cfg.get_qq_video = self.get_qq_video.is_checked();
        cfg.get_youfei = self.get_youfei.is_checked();
        cfg.get_dnf_helper_chronicle = self.get_dnf_helper_chronicle.is_checked();
        cfg.get_dnf_helper = self.get_dnf_helper.is_checked();
        cfg.get_hello_voice = self.get_hello_voice.is_checked();
        cfg.get_dnf_welfare = self.get_dnf_welfare.is_checked();
        cfg.get_majieluo = self.get_majieluo.is_checked();
        cfg.get_dnf_bbs_signin = self.get_dnf_bbs_signin.is_checked();
        cfg.get_dnf_spring = self.get_dnf_spring.is_checked();
        cfg.get_wegame_spring = self.get_wegame_spring.is_checked();
        cfg.get_spring_fudai = self.get_spring_fudai.is_checked();
        cfg.get_spring_collection = self.get_spring_collection.is_checked();
        cfg.get_firecrackers = self.get_firecrackers.is_checked();
        cfg.get_ark_lottery = self.get_ark_lottery.is_checked();
        cfg.get_vip_mentor = self.get_vip_mentor.is_checked();
        cfg.get_guanjia = self.get_guanjia.is_checked();

        cfg
    }
}

#[derive(Debug)]
pub struct MobileGameRoleInfoBinding {
    pub game_name: ComboBox,
}

impl MobileGameRoleInfoBinding {
    pub fn project(cfg: &MobileGameRoleInfoConfig) -> Self {
        Self {
            game_name: ComboBox::new(&cfg.game_name, mobile_game_choices()),
        }
    }

    pub fn reconcile(&self, base: &MobileGameRoleInfoConfig) -> MobileGameRoleInfoConfig {
        let mut cfg = base.clone();

        cfg.game_name = self.game_name.current().to_string();

        cfg
    }
}

#[derive(Debug)]
pub struct ExchangeItemBinding {
    /// Goods name, shown as the row label. Not editable.
    pub name: String,
    pub count: SpinBox,
}

impl ExchangeItemBinding {
    pub fn project(cfg: &ExchangeItemConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            count: SpinBox::new(cfg.count, 0, 10),
        }
    }

    pub fn reconcile(&self, base: &ExchangeItemConfig) -> ExchangeItemConfig {
        let mut cfg = base.clone();

        cfg.count = self.count.value();

        cfg
    }
}

#[derive(Debug)]
pub struct ArkLotteryBinding {
    pub lucky_dnf_server: ComboBox,
    pub lucky_dnf_role_id: LineEdit,
    pub need_take_awards: Checkbox,
    pub cost_all_cards_and_do_lottery: Checkbox,
}

impl ArkLotteryBinding {
    pub fn project(cfg: &ArkLotteryConfig) -> Self {
        let servers = dnf_server_bidict();
        let cost_all_cards = cfg
            .act_id_to_cost_all_cards_and_do_lottery
            .get(ARK_LOTTERY_ACT_ID)
            .copied()
            .unwrap_or(false);

        Self {
            lucky_dnf_server: ComboBox::new(
                servers.to_display(&cfg.lucky_dnf_server_id),
                servers.labels(),
            ),
            lucky_dnf_role_id: LineEdit::new(
                &cfg.lucky_dnf_role_id,
                "role id, e.g. 1282822; leave empty to have it printed during the run",
            ),
            need_take_awards: Checkbox::new(cfg.need_take_awards),
            cost_all_cards_and_do_lottery: Checkbox::new(cost_all_cards),
        }
    }

    pub fn reconcile(&self, base: &ArkLotteryConfig) -> ArkLotteryConfig {
        let mut cfg = base.clone();

        let servers = dnf_server_bidict();
        if let Ok(server_id) = servers.to_token(self.lucky_dnf_server.current()) {
            cfg.lucky_dnf_server_id = server_id.to_string();
        }
        cfg.lucky_dnf_role_id = self.lucky_dnf_role_id.text().to_string();
        cfg.need_take_awards = self.need_take_awards.is_checked();
        cfg.act_id_to_cost_all_cards_and_do_lottery.insert(
            ARK_LOTTERY_ACT_ID.to_string(),
            self.cost_all_cards_and_do_lottery.is_checked(),
        );

        cfg
    }
}

#[derive(Debug)]
pub struct VipMentorBinding {
    pub take_index: SpinBox,
    pub guanhuai_dnf_server: ComboBox,
    pub guanhuai_dnf_role_id: LineEdit,
}

impl VipMentorBinding {
    pub fn project(cfg: &VipMentorConfig) -> Self {
        let servers = dnf_server_bidict();

        Self {
            take_index: SpinBox::new(cfg.take_index, 1, 3),
            guanhuai_dnf_server: ComboBox::new(
                servers.to_display(&cfg.guanhuai_dnf_server_id),
                servers.labels(),
            ),
            guanhuai_dnf_role_id: LineEdit::new(
                &cfg.guanhuai_dnf_role_id,
                "role id, e.g. 1282822; leave empty to have it printed during the run",
            ),
        }
    }

    pub fn reconcile(&self, base: &VipMentorConfig) -> VipMentorConfig {
        let mut cfg = base.clone();

        cfg.take_index = self.take_index.value();
        let servers = dnf_server_bidict();
        if let Ok(server_id) = servers.to_token(self.guanhuai_dnf_server.current()) {
            cfg.guanhuai_dnf_server_id = server_id.to_string();
        }
        cfg.guanhuai_dnf_role_id = self.guanhuai_dnf_role_id.text().to_string();

        cfg
    }
}

#[derive(Debug)]
pub struct DnfHelperInfoBinding {
    pub user_id: LineEdit,
    pub nick_name: LineEdit,
    pub token: LineEdit,
    pub chronicle_lottery: Checkbox,
}

impl DnfHelperInfoBinding {
    pub fn project(cfg: &DnfHelperInfoConfig) -> Self {
        Self {
            user_id: LineEdit::new(&cfg.user_id, "dnf helper -> mine -> edit -> community id"),
            nick_name: LineEdit::new(&cfg.nick_name, "dnf helper -> mine -> edit -> nickname"),
            token: LineEdit::new(
                &cfg.token,
                "e.g. sSfsEtDH, the token parameter of a shared activity link",
            ),
            chronicle_lottery: Checkbox::new(cfg.chronicle_lottery),
        }
    }

    pub fn reconcile(&self, base: &DnfHelperInfoConfig) -> DnfHelperInfoConfig {
        let mut cfg = base.clone();

        cfg.user_id = self.user_id.text().to_string();
        cfg.nick_name = self.nick_name.text().to_string();
        cfg.token = self.token.text().to_string();
        cfg.chronicle_lottery = self.chronicle_lottery.is_checked();

        cfg
    }
}

#[derive(Debug)]
pub struct HelloVoiceInfoBinding {
    pub hello_id: LineEdit,
}

impl HelloVoiceInfoBinding {
    pub fn project(cfg: &HelloVoiceInfoConfig) -> Self {
        Self {
            hello_id: LineEdit::new(&cfg.hello_id, "hello voice -> mine -> the id under the nickname"),
        }
    }

    pub fn reconcile(&self, base: &HelloVoiceInfoConfig) -> HelloVoiceInfoConfig {
        let mut cfg = base.clone();

        cfg.hello_id = self.hello_id.text().to_string();

        cfg
    }
}

#[derive(Debug)]
pub struct FirecrackersBinding {
    pub enable_lottery: Checkbox,
}

impl FirecrackersBinding {
    pub fn project(cfg: &FirecrackersConfig) -> Self {
        Self {
            enable_lottery: Checkbox::new(cfg.enable_lottery),
        }
    }

    pub fn reconcile(&self, base: &FirecrackersConfig) -> FirecrackersConfig {
        let mut cfg = base.clone();

        cfg.enable_lottery = self.enable_lottery.is_checked();

        cfg
    }
}

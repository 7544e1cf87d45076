pub mod account;
pub mod common;
pub mod manager;

pub use account::{
    AccountConfig, AccountInfoConfig, ArkLotteryConfig, DnfHelperInfoConfig, ExchangeItemConfig,
    FirecrackersConfig, FunctionSwitchesConfig, HelloVoiceInfoConfig, MobileGameRoleInfoConfig,
    VipMentorConfig,
};
pub use common::{CommonConfig, FixedTeamConfig, LoginConfig, RetryConfig, XinYueConfig};
pub use manager::{ConfigDocument, ConfigStore, TomlStore};

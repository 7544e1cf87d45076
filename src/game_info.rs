//! Static registries the selection controls draw from: DNF server list,
//! supported mobile games, and the act id of the currently running card
//! lottery. These change with helper releases, not with user edits.

use crate::widget::BiDict;

/// Act id of the card lottery currently being run. ArkLottery stores its
/// per-act choice keyed by this id.
pub const ARK_LOTTERY_ACT_ID: &str = "act_2021_spring";

const DNF_SERVERS: [(&str, &str); 9] = [
    ("", "Not selected"),
    ("1", "Guangdong 1"),
    ("2", "Guangdong 2"),
    ("3", "Shanghai 1"),
    ("4", "Shanghai 2"),
    ("5", "Beijing 1"),
    ("6", "Beijing 2"),
    ("7", "Jiangsu 1"),
    ("8", "Cross-region"),
];

/// Server id <-> display name mapping. Unknown ids (a server removed from
/// the table) display as "Not selected" rather than failing projection.
pub fn dnf_server_bidict() -> BiDict {
    BiDict::new(&DNF_SERVERS, "Not selected")
}

const MOBILE_GAMES: [&str; 5] = [
    "Arena of Valor",
    "CrossFire Mobile",
    "Naruto Mobile",
    "Peacekeeper Elite",
    "QQ Speed Mobile",
];

/// Choices for the gift-master task game selector. "None" skips the task,
/// "Any" accepts whichever game the account already plays.
pub fn mobile_game_choices() -> Vec<String> {
    let mut choices = vec!["None".to_string(), "Any".to_string()];
    choices.extend(MOBILE_GAMES.iter().map(|name| name.to_string()));
    choices
}

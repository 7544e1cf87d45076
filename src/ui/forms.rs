//! Form rendering: one row helper per control kind, one function per
//! section binding. The helpers only move state between the controls and
//! egui widgets; all decoding happens in the binders at save time.

use crate::binder::account::AccountBinding;
use crate::binder::common::CommonBinding;
use crate::widget::{Checkbox, ComboBox, DoubleSpinBox, LineEdit, SpinBox};

pub fn checkbox_row(ui: &mut egui::Ui, label: &str, checkbox: &mut Checkbox) {
    ui.checkbox(&mut checkbox.checked, label);
}

pub fn spin_row(ui: &mut egui::Ui, label: &str, spin: &mut SpinBox) {
    let (min, max) = (spin.min, spin.max);
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(spin.value_mut()).range(min..=max));
    });
    spin.clamp_in_range();
}

pub fn double_spin_row(ui: &mut egui::Ui, label: &str, spin: &mut DoubleSpinBox) {
    let (min, max, step) = (spin.min, spin.max, spin.step);
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(spin.value_mut()).range(min..=max).speed(step));
    });
    spin.clamp_in_range();
}

pub fn combo_row(ui: &mut egui::Ui, id_salt: &str, label: &str, combo: &mut ComboBox) {
    ui.horizontal(|ui| {
        ui.label(label);
        let choices = combo.choices.clone();
        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(combo.current().to_string())
            .show_ui(ui, |ui| {
                for choice in choices {
                    ui.selectable_value(combo.current_mut(), choice.clone(), choice);
                }
            });
    });
}

pub fn text_row(ui: &mut egui::Ui, label: &str, edit: &mut LineEdit) {
    ui.horizontal(|ui| {
        ui.label(label);
        let hint = edit.placeholder.clone();
        ui.add(egui::TextEdit::singleline(&mut edit.text).hint_text(hint));
    });
    if let Err(e) = edit.validate() {
        ui.colored_label(egui::Color32::RED, e.to_string());
    }
}

fn password_row(ui: &mut egui::Ui, label: &str, edit: &mut LineEdit, reveal: &mut bool) {
    ui.horizontal(|ui| {
        ui.label(label);
        let hint = edit.placeholder.clone();
        ui.add(egui::TextEdit::singleline(&mut edit.text).hint_text(hint).password(!*reveal));
        ui.toggle_value(reveal, "show");
    });
}

pub fn common_form(ui: &mut egui::Ui, binding: &mut CommonBinding) {
    checkbox_row(ui, "Check for updates on start", &mut binding.check_update_on_start);
    checkbox_row(ui, "Auto update on start (DLC required)", &mut binding.auto_update_on_start);
    checkbox_row(ui, "Force the portable chrome build", &mut binding.force_use_portable_chrome);
    checkbox_row(ui, "Hide the browser during auto login", &mut binding.run_in_headless_mode);
    checkbox_row(ui, "Try to bind new activities automatically", &mut binding.try_auto_bind_new_activity);
    text_row(ui, "Majieluo card gift target QQ", &mut binding.majieluo_send_card_target_qq);
    text_row(ui, "Auto card gift target QQ list", &mut binding.auto_send_card_target_qqs);

    ui.collapsing("Xinyue", |ui| {
        combo_row(
            ui,
            "xinyue_submit_after",
            "Earliest hour for xinyue tasks",
            &mut binding.xinyue.submit_task_after,
        );
    });

    for (idx, team) in binding.fixed_teams.iter_mut().enumerate() {
        ui.collapsing(format!("Xinyue fixed team {}", idx + 1), |ui| {
            checkbox_row(ui, "Enable", &mut team.enable);
            text_row(ui, "Team id", &mut team.id);
            text_row(ui, "Members", &mut team.members);
        });
    }

    ui.separator();
    combo_row(ui, "log_level", "Log level", &mut binding.log_level);
    spin_row(ui, "HTTP timeout (seconds)", &mut binding.http_timeout);

    ui.collapsing("Login timeouts (seconds)", |ui| {
        spin_row(ui, "Retry count", &mut binding.login.max_retry_count);
        spin_row(ui, "Retry interval", &mut binding.login.retry_wait_time);
        spin_row(ui, "Wait after opening the page", &mut binding.login.open_url_wait_time);
        spin_row(ui, "Page load timeout", &mut binding.login.load_page_timeout);
        spin_row(ui, "Login iframe timeout", &mut binding.login.load_login_iframe_timeout);
        spin_row(ui, "Login timeout", &mut binding.login.login_timeout);
        spin_row(ui, "Login completion timeout", &mut binding.login.login_finished_timeout);
        checkbox_row(ui, "Auto resolve slider captcha", &mut binding.login.auto_resolve_captcha);
        double_spin_row(
            ui,
            "Captcha slide step (slider widths)",
            &mut binding.login.move_captcha_delta_width_rate,
        );
    });

    ui.collapsing("Request retry", |ui| {
        spin_row(ui, "Request interval", &mut binding.retry.request_wait_time);
        spin_row(ui, "Max retry count", &mut binding.retry.max_retry_count);
        spin_row(ui, "Retry interval", &mut binding.retry.retry_wait_time);
    });
}

pub fn account_form(ui: &mut egui::Ui, idx: usize, binding: &mut AccountBinding) {
    checkbox_row(ui, "Enable this account", &mut binding.enable);
    text_row(ui, "Account name", &mut binding.name);
    checkbox_row(ui, "Cannot bind dnf in djc", &mut binding.cannot_bind_dnf);
    combo_row(
        ui,
        &format!("login_mode_{idx}"),
        "Login mode",
        &mut binding.login_mode,
    );

    // Credentials only matter for the password auto-login mode.
    let uses_password = binding.uses_password_login();
    ui.collapsing("Auto login credentials", |ui| {
        ui.add_enabled_ui(uses_password, |ui| {
            text_row(ui, "QQ account", &mut binding.account_info.account);
            password_row(
                ui,
                "QQ password",
                &mut binding.account_info.password,
                &mut binding.account_info.reveal_password,
            );
        });
    });

    ui.collapsing("Gift-master mobile game", |ui| {
        combo_row(
            ui,
            &format!("mobile_game_{idx}"),
            "Game",
            &mut binding.mobile_game_role_info.game_name,
        );
    });

    ui.collapsing("Djc exchange items", |ui| {
        for item in &mut binding.exchange_items {
            let label = format!("{} (0 = skip)", item.name);
            spin_row(ui, &label, &mut item.count);
        }
    });

    ui.collapsing("Card lottery", |ui| {
        combo_row(
            ui,
            &format!("ark_server_{idx}"),
            "Lucky role server",
            &mut binding.ark_lottery.lucky_dnf_server,
        );
        text_row(ui, "Lucky role id", &mut binding.ark_lottery.lucky_dnf_role_id);
        checkbox_row(ui, "Take the gift packs", &mut binding.ark_lottery.need_take_awards);
        checkbox_row(
            ui,
            "Spend all cards on the lottery",
            &mut binding.ark_lottery.cost_all_cards_and_do_lottery,
        );
    });

    ui.collapsing("Vip mentor", |ui| {
        spin_row(ui, "Gift index to take", &mut binding.vip_mentor.take_index);
        combo_row(
            ui,
            &format!("vip_server_{idx}"),
            "Care gift role server",
            &mut binding.vip_mentor.guanhuai_dnf_server,
        );
        text_row(ui, "Care gift role id", &mut binding.vip_mentor.guanhuai_dnf_role_id);
    });

    ui.collapsing("Dnf helper info", |ui| {
        text_row(ui, "Community id", &mut binding.dnf_helper_info.user_id);
        text_row(ui, "Nickname", &mut binding.dnf_helper_info.nick_name);
        text_row(ui, "Login token", &mut binding.dnf_helper_info.token);
        checkbox_row(ui, "Chronicle lottery", &mut binding.dnf_helper_info.chronicle_lottery);
    });

    ui.collapsing("Hello voice", |ui| {
        text_row(ui, "Hello voice user id", &mut binding.hello_voice.hello_id);
    });

    ui.collapsing("Firecrackers", |ui| {
        checkbox_row(ui, "Enable the lottery", &mut binding.firecrackers.enable_lottery);
    });

    ui.separator();
    text_row(ui, "Drift bottle daily invite list", &mut binding.drift_send_qq_list);
    text_row(ui, "Spring fudai receiver list", &mut binding.spring_fudai_receiver_qq_list);
    checkbox_row(
        ui,
        "Firecrackers: try to invite friends",
        &mut binding.enable_firecrackers_invite_friend,
    );
    checkbox_row(
        ui,
        "Majieluo: try to gift heizuan to friends",
        &mut binding.enable_majieluo_invite_friend,
    );
    text_row(ui, "Dnf forum sign-in formhash", &mut binding.dnf_bbs_formhash);
    text_row(ui, "Dnf forum cookie", &mut binding.dnf_bbs_cookie);

    ui.collapsing("Activity switches", |ui| {
        let switches = &mut binding.function_switches;
        checkbox_row(ui, "Disable most activities", &mut switches.disable_most_activities);

        ui.separator();
        ui.label("Plain skey");
        checkbox_row(ui, "Djc rewards", &mut switches.get_djc);
        checkbox_row(ui, "Djc wish", &mut switches.make_wish);
        checkbox_row(ui, "Xinyue privilege zone", &mut switches.get_xinyue);
        checkbox_row(ui, "Tencent game credit gifts", &mut switches.get_credit_xinyue_gift);
        checkbox_row(ui, "Monthly heizuan gift", &mut switches.get_heizuan_gift);
        checkbox_row(ui, "Dnf shanguang cup", &mut switches.get_dnf_shanguang);
        checkbox_row(ui, "QQ video activity", &mut switches.get_qq_video);
        checkbox_row(ui, "QQ video - youfei", &mut switches.get_youfei);
        checkbox_row(ui, "Dnf helper chronicle", &mut switches.get_dnf_helper_chronicle);
        checkbox_row(ui, "Dnf helper activities", &mut switches.get_dnf_helper);
        checkbox_row(ui, "Hello voice rewards", &mut switches.get_hello_voice);
        checkbox_row(ui, "Dnf welfare center", &mut switches.get_dnf_welfare);
        checkbox_row(ui, "Majieluo's plan", &mut switches.get_majieluo);
        checkbox_row(ui, "Dnf forum sign-in", &mut switches.get_dnf_bbs_signin);
        checkbox_row(ui, "Dnf spring treasure hunt", &mut switches.get_dnf_spring);
        checkbox_row(ui, "Wegame spring gifts", &mut switches.get_wegame_spring);
        checkbox_row(ui, "Spring fudai battle", &mut switches.get_spring_fudai);
        checkbox_row(ui, "Spring welfare collection", &mut switches.get_spring_collection);
        checkbox_row(ui, "Firecrackers", &mut switches.get_firecrackers);

        ui.separator();
        ui.label("QQ-space pskey");
        checkbox_row(ui, "Card lottery", &mut switches.get_ark_lottery);
        checkbox_row(ui, "Vip mentor care", &mut switches.get_vip_mentor);

        ui.separator();
        ui.label("Safety-guard pskey");
        checkbox_row(ui, "Guanjia rewards", &mut switches.get_guanjia);
    });
}

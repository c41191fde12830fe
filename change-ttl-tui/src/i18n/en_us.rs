//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpTexts, HintTexts, KeyNames, ModalTexts, PanelTexts,
    StatusBarTexts, SuccessModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Change TTL",
        quit: "Quit",
        close: "Close",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows: "←→/↑↓",
            page: "PgUp/PgDn",
            home_end: "Home/End",
            digits: "0-9",
            backspace: "Backspace",
            refresh: "Alt+r",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_focus: "Switch focus",
            adjust: "Adjust",
            adjust_ten: "±10",
            min_max: "Min/Max",
            type_value: "Type value",
            delete: "Delete",
            submit: "Set",
            refresh: "Refresh",
            help: "Help",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    panel: PanelTexts {
        title: "Change TTL",
        current_ipv4: "Current IPv4 TTL",
        current_ipv6: "Current IPv6 TTL",
        new_ttl: "New TTL",
        range: "1-255",
        unset_hint_slider: "Use ←→ to pick a value",
        unset_hint_text: "Type a number",
        set_button: "Set New TTL",
        applying: "Applying...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        success: SuccessModalTexts {
            title: "Success",
            message: "TTL value has been updated successfully.",
            ok: "OK",
        },
    },

    status_bar: StatusBarTexts {
        refreshing: "Refreshing...",
        applying: "Applying new TTL...",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        panel_shortcuts: "Panel shortcuts",
        close_hint: "Press Esc to close the help",
    },
};

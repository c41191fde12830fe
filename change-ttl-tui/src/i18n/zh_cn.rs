//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HelpTexts, HintTexts, KeyNames, ModalTexts, PanelTexts,
    StatusBarTexts, SuccessModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "修改 TTL",
        quit: "退出",
        close: "关闭",
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
            switch_focus: "切换焦点",
            adjust: "调整",
            adjust_ten: "±10",
            min_max: "最小/最大",
            type_value: "输入数值",
            delete: "删除",
            submit: "设置",
            refresh: "刷新",
            help: "帮助",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    panel: PanelTexts {
        title: "修改 TTL",
        current_ipv4: "当前 IPv4 TTL",
        current_ipv6: "当前 IPv6 TTL",
        new_ttl: "新 TTL",
        range: "1-255",
        unset_hint_slider: "使用 ←→ 选择数值",
        unset_hint_text: "请输入数字",
        set_button: "设置新 TTL",
        applying: "正在应用...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        success: SuccessModalTexts {
            title: "成功",
            message: "TTL 已成功更新。",
            ok: "确定",
        },
    },

    status_bar: StatusBarTexts {
        refreshing: "正在刷新...",
        applying: "正在应用新的 TTL...",
    },

    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        panel_shortcuts: "面板快捷键",
        close_hint: "按 Esc 关闭帮助",
    },
};

//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：确认弹窗的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 校验失败和后端错误的文本来自核心库，不在此翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// TTL 面板文本
    pub panel: PanelTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows: &'static str,   // "←→/↑↓"
    pub page: &'static str,     // "PgUp/PgDn"
    pub home_end: &'static str, // "Home/End"
    pub digits: &'static str,   // "0-9"
    pub backspace: &'static str,
    pub refresh: &'static str, // "Alt+r"
    pub help: &'static str,    // "?"
    pub quit: &'static str,    // "Alt+q"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_focus: &'static str,
    pub adjust: &'static str,
    pub adjust_ten: &'static str,
    pub min_max: &'static str,
    pub type_value: &'static str,
    pub delete: &'static str,
    pub submit: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// TTL 面板文本
pub struct PanelTexts {
    pub title: &'static str,
    pub current_ipv4: &'static str,
    pub current_ipv6: &'static str,
    pub new_ttl: &'static str,
    pub range: &'static str,
    pub unset_hint_slider: &'static str,
    pub unset_hint_text: &'static str,
    pub set_button: &'static str,
    pub applying: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    /// 成功确认弹窗
    pub success: SuccessModalTexts,
}

pub struct SuccessModalTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub ok: &'static str,
}

// ============================================================================
// 状态栏 / 帮助
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub refreshing: &'static str,
    pub applying: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub panel_shortcuts: &'static str,
    pub close_hint: &'static str,
}

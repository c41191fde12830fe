//! 焦点状态定义

/// 面板内可获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// TTL 输入控件（滑块或文本框）
    #[default]
    Input,
    /// "Set New TTL" 按钮
    SubmitButton,
}

impl FocusField {
    /// 切换到另一个控件
    pub fn toggle(&self) -> Self {
        match self {
            FocusField::Input => FocusField::SubmitButton,
            FocusField::SubmitButton => FocusField::Input,
        }
    }

    /// 是否是输入控件
    pub fn is_input(&self) -> bool {
        matches!(self, FocusField::Input)
    }

    /// 是否是提交按钮
    pub fn is_button(&self) -> bool {
        matches!(self, FocusField::SubmitButton)
    }
}

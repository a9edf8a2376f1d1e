//! # 清洗策略参数
//!
//! 各子命令共用的策略开关，均可通过环境变量配置。
//!
//! ## 依赖关系
//! - 被 `cli/clean.rs`, `cli/check.rs`, `cli/rename.rs` 通过 `flatten` 使用
//! - 构造 `models/policy.rs` 的 `RenamePolicy`

use crate::error::Result;
use crate::models::RenamePolicy;

use clap::Args;

/// 清洗策略参数
#[derive(Args, Debug, Clone)]
pub struct PolicyArgs {
    /// Keep whitespace instead of replacing it
    #[arg(long, env = "TIDYNAME_KEEP_SPACES", default_value_t = false)]
    pub keep_spaces: bool,

    /// Keep special characters such as !@#$%^&*()
    #[arg(long, env = "TIDYNAME_KEEP_SPECIAL", default_value_t = false)]
    pub keep_special: bool,

    /// Keep characters outside printable ASCII
    #[arg(long, env = "TIDYNAME_KEEP_UNICODE", default_value_t = false)]
    pub keep_unicode: bool,

    /// Convert names to lowercase
    #[arg(long, env = "TIDYNAME_LOWERCASE", default_value_t = false)]
    pub lowercase: bool,

    /// Replacement token (empty string deletes instead of replacing)
    #[arg(long, env = "TIDYNAME_TOKEN", default_value = "_", allow_hyphen_values = true)]
    pub token: String,

    /// Treat the extension dot like any other special character
    #[arg(long, env = "TIDYNAME_NO_KEEP_EXTENSION", default_value_t = false)]
    pub no_keep_extension: bool,
}

impl PolicyArgs {
    /// 构造清洗策略
    pub fn to_policy(&self) -> Result<RenamePolicy> {
        RenamePolicy::default()
            .with_replace_spaces(!self.keep_spaces)
            .with_replace_special_chars(!self.keep_special)
            .with_replace_unicode(!self.keep_unicode)
            .with_lowercase(self.lowercase)
            .with_keep_extension(!self.no_keep_extension)
            .with_replacement_token(&self.token)
    }
}

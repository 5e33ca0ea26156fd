// ── Top-level views ──

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::CoreError;

/// One of the mutually exclusive top-level screens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Events,
    CreateEvent,
    Statistics,
}

impl View {
    /// Parse a view name, failing with [`CoreError::UnknownView`].
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::from_str(name.trim()).map_err(|_| CoreError::UnknownView {
            name: name.to_owned(),
        })
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "ダッシュボード",
            Self::Events => "イベント一覧",
            Self::CreateEvent => "イベント作成",
            Self::Statistics => "統計",
        }
    }
}

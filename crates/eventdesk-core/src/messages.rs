//! User-facing strings.

use std::fmt::Display;

pub const EVENT_CREATED: &str = "イベントが正常に作成されました。";
pub const EVENT_UPDATED: &str = "イベントが正常に更新されました。";
pub const EVENT_DELETED: &str = "イベントが正常に削除されました。";
pub const PARTICIPANT_REGISTERED: &str = "参加者が正常に登録されました。";
pub const PARTICIPANT_REMOVED: &str = "参加者が正常に削除されました。";

pub const CONFIRM_DELETE_EVENT: &str = "このイベントを削除しますか？";
pub const CONFIRM_REMOVE_PARTICIPANT: &str = "この参加者を削除しますか？";

pub const NO_EVENTS: &str = "イベントが見つかりません。";
pub const NO_PARTICIPANTS: &str = "参加者はいません。";

pub const FORM_TITLE_CREATE: &str = "新規イベント作成";
pub const FORM_TITLE_EDIT: &str = "イベント編集";

/// The generic failure toast.
pub fn error_toast(err: &impl Display) -> String {
    format!("エラーが発生しました: {err}")
}

//! 検索TUIの Model / Msg / update
//!
//! - `Model`: 画面状態（入力・パネル・結果・お知らせ）
//! - `Msg`: 画面へのメッセージ
//! - `update`: メッセージに応じた状態更新（端末非依存で同期実行）

use crate::catalog::Catalog;
use crate::search::{self, Query};
use crate::view::{build_items, ResultItem};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

/// お知らせの表示時間（Tick数、1 Tick = 250ms）
pub const NOTICE_TICKS: u32 = 16;

// ============================================================================
// PanelState（結果パネルの状態）
// ============================================================================

/// 結果パネルの表示状態
///
/// この2状態しか存在しない。マッチングは同期なのでロード中状態はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

// ============================================================================
// NoticeState（自己消滅するお知らせ）
// ============================================================================

/// 一定時間で消えるお知らせ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub message: String,
    pub ticks_left: u32,
}

impl NoticeState {
    /// レビューページ準備中のお知らせ
    pub fn coming_soon(name: &str) -> Self {
        Self {
            message: format!("{} review is coming soon!", name),
            ticks_left: NOTICE_TICKS,
        }
    }
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 検索TUIの画面状態
pub struct Model {
    /// 検索入力欄のテキスト
    pub input: String,
    /// 入力欄にフォーカスしているか
    pub input_focused: bool,
    /// 結果パネルの状態
    pub panel: PanelState,
    /// 表示中の結果（パネル Hidden 時は空）
    pub items: Vec<ResultItem>,
    /// 最後に検索した正規化済み検索語（0件表示用）
    pub term: String,
    /// 結果リストの選択状態
    pub list_state: ListState,
    /// 表示中のお知らせ
    pub notice: Option<NoticeState>,
    /// カタログ読み込みエラー（Some なら検索無効モード）
    pub load_error: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
    /// activation された商品ID（終了後に呼び出し側が処理）
    pub activated: Option<String>,
}

impl Model {
    /// 新しいモデルを作成（入力欄フォーカス済み、パネルは Hidden）
    pub fn new(load_error: Option<String>) -> Self {
        Self {
            input: String::new(),
            input_focused: true,
            panel: PanelState::Hidden,
            items: Vec::new(),
            term: String::new(),
            list_state: ListState::default(),
            notice: None,
            load_error,
            should_quit: false,
            activated: None,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        // 検索無効モードでは終了のみ受け付ける
        if self.load_error.is_some() {
            return match key {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                _ => None,
            };
        }

        if self.input_focused {
            // 入力欄フォーカス中のキー処理
            match key {
                KeyCode::Esc => Some(Msg::Dismiss),
                KeyCode::Enter => Some(Msg::Submit),
                KeyCode::Down if self.panel == PanelState::Visible && !self.items.is_empty() => {
                    Some(Msg::UnfocusInput)
                }
                KeyCode::Backspace => Some(Msg::InputBackspace),
                KeyCode::Char(c) => Some(Msg::InputChar(c)),
                _ => None,
            }
        } else {
            // リストフォーカス時のキー処理
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Esc => {
                    if self.panel == PanelState::Visible {
                        Some(Msg::Dismiss)
                    } else {
                        Some(Msg::Quit)
                    }
                }
                // 検索ボタン相当: 空なら入力欄へ、入力済みなら再検索
                KeyCode::Char('s') => {
                    if self.input.trim().is_empty() {
                        Some(Msg::FocusInput)
                    } else {
                        Some(Msg::Submit)
                    }
                }
                KeyCode::Char('/') | KeyCode::Char('i') => Some(Msg::FocusInput),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectNext),
                KeyCode::Enter => Some(Msg::Activate),
                _ => None,
            }
        }
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// 画面へのメッセージ
pub enum Msg {
    /// 終了
    Quit,
    /// 入力欄への文字入力
    InputChar(char),
    /// 入力欄の文字削除
    InputBackspace,
    /// 入力欄へフォーカス移動
    FocusInput,
    /// 入力欄からリストへフォーカス移動
    UnfocusInput,
    /// パネルを閉じる（ウィジェット外操作相当）
    Dismiss,
    /// 検索の明示的な再実行（Enter / 検索ボタン相当）
    Submit,
    /// 選択を上へ
    SelectPrev,
    /// 選択を下へ
    SelectNext,
    /// 選択中の結果を開く
    Activate,
    /// お知らせカウントダウン
    Tick,
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, catalog: &Catalog) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::InputChar(c) => {
            model.input.push(c);
            refresh(model, catalog);
        }
        Msg::InputBackspace => {
            model.input.pop();
            refresh(model, catalog);
        }
        Msg::FocusInput => {
            model.input_focused = true;
            // フォーカス時、現在値がゲートを満たすなら即検索
            if Query::parse(&model.input).is_some() {
                refresh(model, catalog);
            }
        }
        Msg::UnfocusInput => {
            model.input_focused = false;
        }
        Msg::Dismiss => {
            model.panel = PanelState::Hidden;
            model.input_focused = false;
            model.items.clear();
            model.list_state.select(None);
        }
        Msg::Submit => {
            refresh(model, catalog);
        }
        Msg::SelectPrev => {
            if !model.items.is_empty() {
                let current = model.list_state.selected().unwrap_or(0);
                model.list_state.select(Some(current.saturating_sub(1)));
            }
        }
        Msg::SelectNext => {
            if !model.items.is_empty() {
                let current = model.list_state.selected().unwrap_or(0);
                let next = (current + 1).min(model.items.len() - 1);
                model.list_state.select(Some(next));
            }
        }
        Msg::Activate => {
            if let Some(item) = model
                .list_state
                .selected()
                .and_then(|idx| model.items.get(idx))
            {
                if item.coming_soon {
                    // 準備中: 遷移せずお知らせのみ
                    model.notice = Some(NoticeState::coming_soon(&item.name));
                } else {
                    model.activated = Some(item.id.clone());
                    model.should_quit = true;
                }
            }
        }
        Msg::Tick => {
            if let Some(notice) = &mut model.notice {
                notice.ticks_left = notice.ticks_left.saturating_sub(1);
                if notice.ticks_left == 0 {
                    model.notice = None;
                }
            }
        }
    }
}

/// 入力値から検索をやり直し、パネル状態を更新する
///
/// ゲート未満なら Hidden、それ以外は Visible（0件でも Visible のまま
/// 「見つからない」表示に切り替える）。Visible 中の再検索は内容の
/// 置き換えのみで状態遷移は起きない。
fn refresh(model: &mut Model, catalog: &Catalog) {
    match Query::parse(&model.input) {
        None => {
            model.panel = PanelState::Hidden;
            model.items.clear();
            model.term.clear();
            model.list_state.select(None);
        }
        Some(query) => {
            let matches = search::search(catalog, &query);
            model.items = build_items(&matches, query.as_str());
            model.term = query.as_str().to_string();
            model.panel = PanelState::Visible;
            model
                .list_state
                .select(if model.items.is_empty() { None } else { Some(0) });
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

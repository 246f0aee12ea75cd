//! 対話的な検索TUI
//!
//! 検索入力欄と結果パネルを持つ画面。パネルは Hidden / Visible の
//! 2状態のみで、キーストロークごとに同期的に再検索・再描画する。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update（画面ロジック、端末非依存）
//! - `render`: 画面描画

pub mod app;
mod render;

use crate::catalog::Catalog;
use app::{update, Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;

/// お知らせ消滅カウント用の刻み
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// TUI を実行
///
/// 結果エントリが activation された場合はその商品IDを返す。
pub fn run(catalog: &Catalog, load_error: Option<String>) -> io::Result<Option<String>> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(load_error);

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| render::draw(f, &mut model))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        update(&mut model, msg, catalog);
                    }
                }
            }
        } else {
            update(&mut model, Msg::Tick, catalog);
        }
    }

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(model.activated)
}

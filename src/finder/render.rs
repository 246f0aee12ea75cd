//! 検索TUIの描画

use super::app::{Model, PanelState};
use crate::view::item::icon_glyph;
use crate::view::{ResultItem, Segment};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// 0件表示で提示する検索例
const SUGGESTED_TERMS: &str = "moringa, supplements, health";

/// 画面を描画
pub(super) fn draw(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索入力欄
            Constraint::Min(1),    // 結果パネル
            Constraint::Length(1), // お知らせ
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    render_input(f, model, chunks[0]);
    render_panel(f, model, chunks[1]);
    render_notice(f, model, chunks[2]);
    render_help(f, model, chunks[3]);
}

/// 検索入力欄
fn render_input(f: &mut Frame, model: &Model, area: Rect) {
    let border_style = if model.input_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(model.input.as_str()).block(
        Block::default()
            .title(" Search reviews ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

/// 結果パネル（Hidden / Visible）
fn render_panel(f: &mut Frame, model: &mut Model, area: Rect) {
    if let Some(error) = &model.load_error {
        // 検索無効モード: エラーを表示して入力は受け付けない
        let content = Paragraph::new(format!("\n  Search is unavailable: {}", error))
            .block(Block::default().title(" Results ").borders(Borders::ALL))
            .style(Style::default().fg(Color::Red));
        f.render_widget(content, area);
        return;
    }

    match model.panel {
        PanelState::Hidden => {
            let content = Paragraph::new("\n  Type at least 2 characters to search reviews")
                .block(Block::default().title(" Results ").borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(content, area);
        }
        PanelState::Visible if model.items.is_empty() => {
            let text = format!(
                "\n  No reviews found\n  We couldn't find any reviews for \"{}\"\n  Try searching for: {}",
                model.term, SUGGESTED_TERMS
            );
            let content = Paragraph::new(text)
                .block(Block::default().title(" Results (0) ").borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(content, area);
        }
        PanelState::Visible => {
            let items: Vec<ListItem> = model.items.iter().map(result_list_item).collect();
            let title = format!(" Results ({}) ", model.items.len());
            let list = List::new(items)
                .block(Block::default().title(title).borders(Borders::ALL))
                .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Green))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, area, &mut model.list_state);
        }
    }
}

/// 1件分の結果表示（名前・説明・評価の3行）
fn result_list_item(item: &ResultItem) -> ListItem<'static> {
    let mut name_spans = vec![Span::raw(format!("{} ", icon_glyph(&item.icon)))];
    name_spans.extend(segment_spans(&item.name_segments, Style::default()));

    let mut description_spans = vec![Span::raw("   ")];
    description_spans.extend(segment_spans(
        &item.description_segments,
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = vec![Line::from(name_spans), Line::from(description_spans)];

    match (&item.stars, item.rating) {
        (Some(stars), Some(rating)) => {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(stars.glyphs(), Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {}/5", rating)),
            ]));
        }
        _ => {
            if item.coming_soon {
                lines.push(Line::from(Span::styled(
                    "   coming soon",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }

    ListItem::new(Text::from(lines))
}

/// ハイライト区間をスタイル付きスパンへ変換
fn segment_spans(segments: &[Segment], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|s| {
            if s.highlighted {
                Span::styled(
                    s.text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(s.text.clone(), base)
            }
        })
        .collect()
}

/// お知らせ行
fn render_notice(f: &mut Frame, model: &Model, area: Rect) {
    if let Some(notice) = &model.notice {
        let line = Paragraph::new(format!(" • {}", notice.message))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(line, area);
    }
}

/// ヘルプ行
fn render_help(f: &mut Frame, model: &Model, area: Rect) {
    let text = if model.input_focused {
        " Enter: search · ↓: results · Esc: hide · type to search"
    } else {
        " /: search box · s: search · ↑/↓: move · Enter: open · Esc: hide · q: quit"
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

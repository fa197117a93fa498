//! Rendering functions for the carousel UI.
//!
//! Pure functions over ratatui `Frame`s; terminal lifecycle lives in
//! `tui`. Exactly one slide card is drawn at a time, horizontally offset
//! while a transition is in flight, with an indicator row marking the
//! single active slide.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::announcer::Announcer;
use super::status_bar::StatusBar;
use crate::carousel::{Carousel, SlideAnimation};

/// Rows reserved under the stage: indicator row and announcement row.
const FOOTER_ROWS: u16 = 2;

/// The slide stage: everything above the indicator, announcement, and
/// (optional) status rows. Hover and swipe bounds use the same rect.
pub fn stage_rect(area: Rect, status_visible: bool) -> Rect {
    let reserved = FOOTER_ROWS + u16::from(status_visible);
    Rect {
        height: area.height.saturating_sub(reserved),
        ..area
    }
}

/// Where the active card sits within the stage, given the transition
/// animation. The card slides into place from the direction of travel.
fn card_rect(stage: Rect, animation: Option<SlideAnimation>) -> Rect {
    match animation {
        None => stage,
        Some(anim) => {
            let shift = ((1.0 - anim.progress) * stage.width as f32) as u16;
            let shift = shift.min(stage.width);
            let width = stage.width - shift;
            if anim.forward {
                Rect {
                    x: stage.x + shift,
                    width,
                    ..stage
                }
            } else {
                Rect { width, ..stage }
            }
        }
    }
}

/// One character per slide, the active one filled.
fn indicator_line(len: usize, active: usize) -> String {
    let mut out = String::new();
    for i in 0..len {
        if i > 0 {
            out.push(' ');
        }
        out.push(if i == active { '●' } else { '○' });
    }
    out
}

/// Render a complete frame with all layers.
pub fn render_app(
    frame: &mut ratatui::Frame,
    carousel: Option<&Carousel>,
    status_bar: &StatusBar,
    announcer: &Announcer,
    now: Instant,
) {
    let area = frame.area();

    let Some(carousel) = carousel else {
        render_empty(frame, area);
        return;
    };

    let stage = stage_rect(area, status_bar.visible);
    render_slide(frame, carousel, stage, now);
    render_indicators(frame, carousel, area, status_bar.visible);
    render_announcement(frame, announcer, area, status_bar.visible, now);
    if status_bar.visible {
        render_status_bar(frame, status_bar, carousel, area);
    }
}

/// Placeholder when the deck had no slides and the carousel abstained.
fn render_empty(frame: &mut ratatui::Frame, area: Rect) {
    let text = Paragraph::new("No slides to show.\n\nPress q to quit.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the active slide card, offset while transitioning.
fn render_slide(frame: &mut ratatui::Frame, carousel: &Carousel, stage: Rect, now: Instant) {
    let card = card_rect(stage, carousel.animation(now));
    if card.width < 2 || card.height < 2 {
        return;
    }

    let Some(slide) = carousel.deck().get(carousel.index()) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", slide.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![Line::raw(""), Line::raw(slide.summary.clone())];
    if !slide.tags.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            slide.tags.join(" · "),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(link) = &slide.link {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            link.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

/// Indicator row: exactly one filled marker.
fn render_indicators(
    frame: &mut ratatui::Frame,
    carousel: &Carousel,
    area: Rect,
    status_visible: bool,
) {
    let y_from_bottom = FOOTER_ROWS + u16::from(status_visible);
    if area.height < y_from_bottom {
        return;
    }
    let row = Rect {
        x: area.x,
        y: area.y + area.height - y_from_bottom,
        width: area.width,
        height: 1,
    };
    let text = indicator_line(carousel.len(), carousel.index());
    let indicators = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(indicators, row);
}

/// The announcement (live-region) line.
fn render_announcement(
    frame: &mut ratatui::Frame,
    announcer: &Announcer,
    area: Rect,
    status_visible: bool,
    now: Instant,
) {
    let Some(message) = announcer.current(now) else {
        return;
    };
    let y_from_bottom = 1 + u16::from(status_visible);
    if area.height < y_from_bottom {
        return;
    }
    let row = Rect {
        x: area.x,
        y: area.y + area.height - y_from_bottom,
        width: area.width,
        height: 1,
    };
    let line = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC));
    frame.render_widget(line, row);
}

/// Bottom status line, inverted colors.
fn render_status_bar(
    frame: &mut ratatui::Frame,
    status_bar: &StatusBar,
    carousel: &Carousel,
    area: Rect,
) {
    let row = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let text = status_bar.format(carousel);
    let paragraph =
        Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(paragraph, row);
}

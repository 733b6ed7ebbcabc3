//! Rendering - navigation bar, page bodies, status line, menu overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::catalog::{Tool, all_tools, profile};
use crate::view::{NAV_ITEMS, Page, category_strip, filter_by_category, partition_featured};

use super::layout::{self, compose_status_text};
use super::state::TuiState;

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

/// Draw one full frame from the current state.
pub fn draw_ui(f: &mut Frame, state: &TuiState) {
    let grid = layout::compute_layout(f.size());

    draw_nav(f, grid.nav, state);

    let body_lines = match state.page {
        Page::Home => home_lines(grid.body.width),
        Page::Tools => tools_lines(state, grid.body.width),
    };
    draw_body(f, grid.body, state, body_lines);

    draw_status(f, grid.status, state);

    if state.menu.is_open() {
        draw_menu_overlay(f, grid.body, state);
    }
}

/// Top bar: brand, nav links with the active page highlighted, menu hint.
fn draw_nav(f: &mut Frame, area: Rect, state: &TuiState) {
    let mut spans = vec![
        Span::styled(
            " Portfolio ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for item in NAV_ITEMS {
        let style = if item.page == state.page {
            Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!(" {} ", item.name), style));
    }
    spans.push(Span::styled(
        if state.menu.is_open() { "  [Tab: close menu]" } else { "  [Tab: menu]" },
        Style::default().fg(DIM),
    ));

    let nav = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(DIM)));
    f.render_widget(nav, area);
}

/// Scrollable page body with scroll indicators in a borderless title line.
fn draw_body(f: &mut Frame, area: Rect, state: &TuiState, lines: Vec<Line<'static>>) {
    let total_lines = lines.len();
    let visible_lines = area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);

    // Clamp at render time: state keeps a saturating offset, the frame
    // decides how far it can actually go.
    let actual_scroll = state.scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((actual_scroll as u16, 0));
    f.render_widget(paragraph, area);

    // Scroll arrows in the top-right corner of the body.
    if total_lines > visible_lines && area.width >= 4 && area.height > 0 {
        let up = if layout::can_scroll_up(actual_scroll) { "\u{25b2}" } else { " " };
        let down = if layout::can_scroll_down(total_lines, visible_lines, actual_scroll) {
            "\u{25bc}"
        } else {
            " "
        };
        let corner = Rect::new(area.right().saturating_sub(3), area.y, 2, 1);
        f.render_widget(
            Paragraph::new(Span::styled(format!("{up}{down}"), Style::default().fg(DIM))),
            corner,
        );
    }
}

fn draw_status(f: &mut Frame, area: Rect, state: &TuiState) {
    let visible = state.visible_tools().len();
    let text = compose_status_text(area.width, state.page, state.selected_category(), visible);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(text, Style::default().fg(DIM)),
    ]));
    f.render_widget(status, area);
}

/// Collapsible menu, drawn over the body's top-right corner while open.
fn draw_menu_overlay(f: &mut Frame, body: Rect, state: &TuiState) {
    let height = (NAV_ITEMS.len() as u16 + 2).min(body.height);
    let width = 22u16.min(body.width);
    if height < 3 || width < 10 {
        return;
    }
    let area = Rect::new(body.right().saturating_sub(width), body.y, width, height);

    let mut lines = Vec::new();
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let marker = if item.page == state.page { "\u{2022}" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", index + 1), Style::default().fg(ACCENT)),
            Span::raw(format!("{marker} {}", item.name)),
        ]));
    }

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        area,
    );
}

/// Home page: hero, skills, highlighted work, contact.
fn home_lines(width: u16) -> Vec<Line<'static>> {
    let content_width = content_width(width);
    let mut lines = vec![Line::from("")];

    lines.push(Line::from(vec![
        Span::raw("  Hi, I'm "),
        Span::styled(
            profile::PROFILE.name,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", profile::PROFILE.tagline),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    push_wrapped(&mut lines, profile::PROFILE.summary, content_width, Style::default());
    lines.push(Line::from(""));

    push_heading(&mut lines, "Technical Expertise");
    for skill in profile::SKILLS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", skill.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", skill.description), Style::default().fg(DIM)),
        ]));
    }
    lines.push(Line::from(""));

    push_heading(&mut lines, "Featured Projects");
    for highlight in profile::HIGHLIGHTS {
        let star = if highlight.featured { "\u{2605} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("  {star}"), Style::default().fg(Color::Yellow)),
            Span::styled(
                highlight.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::raw(format!("    {}", highlight.description))));
        lines.push(Line::from(Span::styled(
            format!("    {}", highlight.technologies.join(" \u{00b7} ")),
            Style::default().fg(DIM),
        )));
        lines.push(Line::from(""));
    }

    push_heading(&mut lines, profile::PROFILE.contact_heading);
    push_wrapped(&mut lines, profile::PROFILE.contact_pitch, content_width, Style::default());
    lines.push(Line::from(""));
    for (label, value) in [
        ("GitHub", profile::PROFILE.github),
        ("LinkedIn", profile::PROFILE.linkedin),
        ("Email", profile::PROFILE.email),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}: "), Style::default().fg(DIM)),
            Span::raw(value),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press 't' to browse all tools and projects.",
        Style::default().fg(DIM),
    )));
    lines
}

/// Tools page: header, category strip, featured and remaining cards.
fn tools_lines(state: &TuiState, width: u16) -> Vec<Line<'static>> {
    let content_width = content_width(width);
    let mut lines = vec![Line::from("")];

    lines.push(Line::from(Span::styled(
        "  My Tools & Projects",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    push_wrapped(
        &mut lines,
        "A collection of technical tools, libraries, and applications I've built to solve real-world problems and explore new technologies.",
        content_width,
        Style::default().fg(DIM),
    );
    lines.push(Line::from(""));

    // Category strip with the active filter highlighted.
    let mut strip = vec![Span::raw("  ")];
    for (index, label) in category_strip().iter().enumerate() {
        let style = if index == state.category_index {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(DIM)
        };
        strip.push(Span::styled(format!(" {label} "), style));
        strip.push(Span::raw(" "));
    }
    lines.push(Line::from(strip));
    lines.push(Line::from(""));

    let filtered = filter_by_category(all_tools(), state.selected_category());
    let (featured, other) = partition_featured(&filtered);

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No projects in this category.",
            Style::default().fg(DIM),
        )));
        return lines;
    }

    // Card index runs over the same flattened order the cursor uses.
    let mut card_index = 0;
    if !featured.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  \u{2605} ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Featured Projects",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        for tool in &featured {
            push_tool_card(&mut lines, tool, state, card_index, content_width);
            card_index += 1;
        }
    }
    if !other.is_empty() {
        lines.push(Line::from(Span::styled(
            "  All Projects",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for tool in &other {
            push_tool_card(&mut lines, tool, state, card_index, content_width);
            card_index += 1;
        }
    }
    lines
}

fn push_tool_card(
    lines: &mut Vec<Line<'static>>,
    tool: &Tool,
    state: &TuiState,
    card_index: usize,
    content_width: usize,
) {
    let focused = state.cursor == card_index;
    let expanded = state.expanded.is_expanded(tool.id);

    let marker = if focused { "\u{25b6} " } else { "  " };
    let title_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(ACCENT)),
        Span::styled(tool.title, title_style),
        Span::styled(
            format!("  [{}]", tool.category.label()),
            Style::default().fg(DIM),
        ),
    ]));

    let body = if expanded { tool.long_description } else { tool.description };
    push_wrapped(lines, body, content_width, Style::default());

    lines.push(Line::from(Span::styled(
        format!("    {}", tool.technologies.join(" \u{00b7} ")),
        Style::default().fg(DIM),
    )));

    let mut link_spans = vec![
        Span::styled("    Code: ", Style::default().fg(DIM)),
        Span::raw(tool.github_url),
    ];
    if let Some(live_url) = tool.live_url {
        link_spans.push(Span::styled("  Live Demo: ", Style::default().fg(DIM)));
        link_spans.push(Span::raw(live_url));
    }
    lines.push(Line::from(link_spans));

    if focused {
        let hint = if expanded { "Enter: Show Less" } else { "Enter: Read More" };
        lines.push(Line::from(Span::styled(
            format!("    {hint}"),
            Style::default().fg(ACCENT),
        )));
    }
    lines.push(Line::from(""));
}

fn push_heading(lines: &mut Vec<Line<'static>>, text: &'static str) {
    lines.push(Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for wrapped in textwrap::wrap(text, width) {
        lines.push(Line::from(Span::styled(
            format!("    {wrapped}"),
            style,
        )));
    }
}

fn content_width(width: u16) -> usize {
    (width as usize).saturating_sub(8).max(20)
}
